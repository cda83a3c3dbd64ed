//! Ranking: stable descending sort plus top-K truncation.

pub mod similarity;

use recall_core::models::{RankedResult, ScoredDocument};

pub use similarity::cosine;

/// Sort by descending score and keep the first `top_k` entries.
///
/// `sort_by` is stable, so equal scores keep their input order — the
/// tie-break the cache and the fixture scenarios depend on.
pub fn rank(mut scored: Vec<ScoredDocument>, top_k: usize) -> RankedResult {
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(top_k);
    scored
}
