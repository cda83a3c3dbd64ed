//! # recall-embeddings
//!
//! Deterministic embedding generation for the Recall pipeline: Unicode
//! tokenization, feature-hash embedding, and a content-hash memo-cache.
//! The provider is a stand-in for a learned model — content-derived, not
//! semantic — but its determinism across processes is load-bearing for
//! cache correctness and is tested as such.

pub mod cache;
pub mod engine;
pub mod provider;
pub mod tokenizer;

pub use engine::EmbeddingEngine;
pub use provider::HashedProvider;
