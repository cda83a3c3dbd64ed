use proptest::prelude::*;
use recall_core::{Document, Passage, ScoredDocument};

#[test]
fn scored_document_wraps_without_touching_the_document() {
    let doc = Document::new("content", vec![0.1, 0.2], "src");
    let original_embedding = doc.embedding.clone();
    let scored = ScoredDocument {
        document: doc,
        score: 0.87,
    };
    assert_eq!(scored.document.embedding, original_embedding);
    assert!((scored.score - 0.87).abs() < f32::EPSILON);
}

#[test]
fn passage_constructor_accepts_str_and_string() {
    let a = Passage::new("text", "src".to_string());
    let b = Passage::new("text".to_string(), "src");
    assert_eq!(a, b);
}

proptest! {
    /// The content hash is a pure function of the text.
    #[test]
    fn content_hash_deterministic(content in ".*") {
        let a = Document::compute_content_hash(&content);
        let b = Document::compute_content_hash(&content);
        prop_assert_eq!(a, b);
    }

    /// JSON round-trip preserves the embedding bit-for-bit for any finite
    /// f32 coordinates.
    #[test]
    fn serde_round_trip_any_embedding(
        content in ".{0,64}",
        embedding in proptest::collection::vec(-1.0f32..1.0, 0..16),
    ) {
        let doc = Document::new(content, embedding.clone(), "prop");
        let json = serde_json::to_string(&doc).unwrap();
        let back: Document = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back.embedding, embedding);
    }
}
