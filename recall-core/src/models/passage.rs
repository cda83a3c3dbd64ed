use serde::{Deserialize, Serialize};

/// A candidate text returned by a content provider, before embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    /// Raw candidate text.
    pub text: String,
    /// Provenance label (URL, host name, fixture name).
    pub source: String,
}

impl Passage {
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}
