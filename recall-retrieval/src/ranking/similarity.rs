//! Cosine similarity between embedding vectors.

use tracing::warn;

/// Cosine similarity in `[-1, 1]`, accumulated in f64.
///
/// Two recovered edge cases, both scored as "no relevance":
/// - Length mismatch returns 0.0. All vectors share one dimension by
///   construction, so a mismatch is a data-model violation upstream; it
///   is logged rather than raised.
/// - A zero-magnitude side returns 0.0 — an empty-token embedding is
///   relevant to nothing, including itself.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        warn!(
            left = a.len(),
            right = b.len(),
            "cosine over mismatched dimensions; scoring as 0"
        );
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    ((dot / (norm_a.sqrt() * norm_b.sqrt())) as f32).clamp(-1.0, 1.0)
}
