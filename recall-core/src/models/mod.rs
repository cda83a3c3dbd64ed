//! Data model: documents, ranking records, and provider passages.

mod document;
mod passage;

pub use document::{Document, ScoredDocument};
pub use passage::Passage;

/// Ranked retrieval output: at most K entries, sorted by descending score,
/// ties keeping input order.
pub type RankedResult = Vec<ScoredDocument>;
