//! File-backed persistence tests: reopen the database and verify the
//! cache contents — embeddings included — survive byte-for-byte, and
//! that a restored cache ranks exactly like the original.

use recall_core::config::RecallConfig;
use recall_core::traits::{IDocumentStore, IRetriever};
use recall_retrieval::providers::FixtureProvider;
use recall_retrieval::RetrievalEngine;
use recall_storage::SqliteDocumentStore;

#[test]
fn reopened_store_preserves_embeddings_bit_for_bit() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("recall.db");

    let engine = RetrievalEngine::new(&RecallConfig::default());
    engine
        .retrieve("What is Swift?", &FixtureProvider::reference_set())
        .unwrap();
    let saved = engine.cache().snapshot();

    {
        let store = SqliteDocumentStore::open(&db_path).unwrap();
        store.save(&saved).unwrap();
    }

    let store = SqliteDocumentStore::open(&db_path).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.len(), saved.len());
    for (a, b) in loaded.iter().zip(saved.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.embedding, b.embedding, "bit-for-bit embedding");
        assert_eq!(a.content_hash, b.content_hash);
    }
}

#[test]
fn restored_cache_reproduces_rankings() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("recall.db");

    let original = RetrievalEngine::new(&RecallConfig::default());
    original
        .retrieve("What is Swift?", &FixtureProvider::reference_set())
        .unwrap();
    let query = original.embeddings().embed_text("swift programming").unwrap();
    let expected: Vec<(String, f32)> = original
        .retrieve_from_cache(&query, 5)
        .into_iter()
        .map(|s| (s.document.id, s.score))
        .collect();

    {
        let store = SqliteDocumentStore::open(&db_path).unwrap();
        store.save(&original.cache().snapshot()).unwrap();
    }

    let restored = RetrievalEngine::new(&RecallConfig::default());
    let store = SqliteDocumentStore::open(&db_path).unwrap();
    restored.restore(store.load().unwrap());

    let actual: Vec<(String, f32)> = restored
        .retrieve_from_cache(&query, 5)
        .into_iter()
        .map(|s| (s.document.id, s.score))
        .collect();

    assert_eq!(actual, expected, "identical documents, scores, and order");
}

#[test]
fn saving_a_snapshot_twice_is_idempotent() {
    let store = SqliteDocumentStore::open_in_memory().unwrap();

    let engine = RetrievalEngine::new(&RecallConfig::default());
    engine
        .retrieve("What is Swift?", &FixtureProvider::reference_set())
        .unwrap();
    let snapshot = engine.cache().snapshot();

    store.save(&snapshot).unwrap();
    store.save(&snapshot).unwrap();

    assert_eq!(store.load().unwrap().len(), snapshot.len(), "upsert by id");
}
