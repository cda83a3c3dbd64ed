use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A retrieved passage with its embedding, as held by the document cache.
///
/// A document's embedding is computed once at construction and never
/// recomputed. Relevance is query-relative and therefore NOT part of the
/// document — ranking produces [`ScoredDocument`] records instead, so one
/// query's scoring can never mutate another's view of the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// UUID v4 identifier.
    pub id: String,
    /// Raw passage text.
    pub content: String,
    /// Provenance label (URL, host name, fixture name).
    pub source: String,
    /// Fixed-dimension embedding. All-zero is valid and means "no tokens".
    pub embedding: Vec<f32>,
    /// blake3 hash of `content`, used as the embedding-cache key.
    pub content_hash: String,
    /// When this document was constructed.
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Build a document from a passage and its precomputed embedding.
    pub fn new(content: impl Into<String>, embedding: Vec<f32>, source: impl Into<String>) -> Self {
        let content = content.into();
        let content_hash = Self::compute_content_hash(&content);
        Self {
            id: Uuid::new_v4().to_string(),
            content,
            source: source.into(),
            embedding,
            content_hash,
            created_at: Utc::now(),
        }
    }

    /// blake3 hex digest of raw passage text.
    pub fn compute_content_hash(content: &str) -> String {
        blake3::hash(content.as_bytes()).to_hex().to_string()
    }

    /// Structural comparison: same text, source, and embedding.
    ///
    /// Distinct from `PartialEq`, which only compares IDs.
    pub fn content_eq(&self, other: &Self) -> bool {
        self.content_hash == other.content_hash
            && self.source == other.source
            && self.embedding == other.embedding
    }
}

/// Identity equality: two documents are equal if they share an ID.
/// For structural comparison use [`Document::content_eq`].
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Ephemeral ranking record: a document paired with its relevance to one
/// specific query. Produced fresh per query and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    /// Cosine similarity to the query embedding, in [-1, 1].
    pub score: f32,
}
