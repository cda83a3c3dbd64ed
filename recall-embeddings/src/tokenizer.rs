//! Word-level tokenization.
//!
//! Lowercases, then segments on UAX #29 word boundaries. Pure: the same
//! text always yields the same token sequence, so callers may re-tokenize
//! freely.

use unicode_segmentation::UnicodeSegmentation;

/// Split text into lowercased word tokens.
///
/// Punctuation and whitespace never produce tokens; empty or
/// whitespace-only input yields an empty Vec, which is a valid outcome,
/// not an error.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    lowered.unicode_words().map(str::to_owned).collect()
}
