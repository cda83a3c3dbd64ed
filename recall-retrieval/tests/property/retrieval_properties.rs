//! Property tests for the scoring and ranking algebra.

use proptest::collection::vec;
use proptest::prelude::*;

use recall_core::models::ScoredDocument;
use recall_core::Document;
use recall_retrieval::ranking::{self, cosine};

/// Two f32 vectors of one shared length.
fn vector_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..48).prop_flat_map(|n| (vec(-1.0f32..1.0, n), vec(-1.0f32..1.0, n)))
}

fn norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

proptest! {
    /// similarity(a, b) == similarity(b, a).
    #[test]
    fn cosine_is_symmetric((a, b) in vector_pair()) {
        prop_assert_eq!(cosine(&a, &b), cosine(&b, &a));
    }

    /// similarity stays inside [-1, 1].
    #[test]
    fn cosine_is_bounded((a, b) in vector_pair()) {
        let sim = cosine(&a, &b);
        prop_assert!((-1.0..=1.0).contains(&sim));
    }

    /// similarity(a, a) ≈ 1 for non-degenerate a.
    #[test]
    fn cosine_self_is_one(a in vec(-1.0f32..1.0, 1..48)) {
        prop_assume!(norm(&a) > 1e-3);
        let sim = cosine(&a, &a);
        prop_assert!((sim - 1.0).abs() < 1e-5, "got {sim}");
    }

    /// The zero vector is relevant to nothing.
    #[test]
    fn cosine_zero_vector_scores_zero(a in vec(-1.0f32..1.0, 1..48)) {
        let zero = vec![0.0; a.len()];
        prop_assert_eq!(cosine(&a, &zero), 0.0);
    }

    /// Mismatched lengths are incomparable, never an error.
    #[test]
    fn cosine_mismatch_scores_zero(
        a in vec(-1.0f32..1.0, 1..24),
        b in vec(-1.0f32..1.0, 25..48),
    ) {
        prop_assert_eq!(cosine(&a, &b), 0.0);
    }

    /// rank() output is non-increasing and at most top_k long.
    #[test]
    fn rank_sorted_and_bounded(
        scores in vec(-1.0f32..1.0, 0..32),
        top_k in 0usize..40,
    ) {
        let input: Vec<ScoredDocument> = scores
            .iter()
            .map(|&score| ScoredDocument {
                document: Document::new("p", vec![0.0; 4], "prop"),
                score,
            })
            .collect();
        let n = input.len();

        let ranked = ranking::rank(input, top_k);
        prop_assert_eq!(ranked.len(), top_k.min(n));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// Equal scores keep input order (stability).
    #[test]
    fn rank_ties_are_stable(n in 1usize..16) {
        let input: Vec<ScoredDocument> = (0..n)
            .map(|i| ScoredDocument {
                document: Document::new(format!("doc-{i}"), vec![0.0; 4], "prop"),
                score: 0.5,
            })
            .collect();

        let ranked = ranking::rank(input, n);
        for (i, entry) in ranked.iter().enumerate() {
            prop_assert_eq!(&entry.document.content, &format!("doc-{i}"));
        }
    }
}
