//! Feature-hash embedding provider.
//!
//! Maps token sequences into a fixed-dimension dense vector without any
//! model weights: each token's stable 64-bit hash seeds one additive pass
//! over the accumulator, and the result is the arithmetic mean across
//! tokens. Collisions are expected and acceptable — this stands in for a
//! learned embedding, it is not a content fingerprint.

use recall_core::constants::HASH_RANGE;
use recall_core::errors::RecallResult;
use recall_core::traits::IEmbeddingProvider;

use crate::tokenizer;

/// Deterministic hashed embedding provider.
///
/// The token hash is FNV-1a over the token's UTF-8 bytes. FNV-1a is fixed
/// by constants, so identical text yields an identical vector across
/// calls, processes, and platforms — which is what makes cached and
/// persisted embeddings comparable. (`std::hash` types are seeded per
/// process and must not be substituted here.)
pub struct HashedProvider {
    dimensions: usize,
}

impl HashedProvider {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    /// FNV-1a 64-bit over raw bytes.
    fn hash_token(token: &str) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in token.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        h
    }

    /// Accumulate one token's contribution into every dimension:
    /// `((hash + i) mod HASH_RANGE)` scaled into `[0, 1)`.
    fn accumulate(acc: &mut [f32], hash: u64) {
        for (i, slot) in acc.iter_mut().enumerate() {
            let bucket = hash.wrapping_add(i as u64) % HASH_RANGE;
            *slot += bucket as f32 / HASH_RANGE as f32;
        }
    }

    fn embed_text(&self, text: &str) -> Vec<f32> {
        let tokens = tokenizer::tokenize(text);
        let mut acc = vec![0.0f32; self.dimensions];

        for token in &tokens {
            Self::accumulate(&mut acc, Self::hash_token(token));
        }

        // Mean across tokens; zero tokens leaves the valid all-zero vector.
        if !tokens.is_empty() {
            let inv = 1.0 / tokens.len() as f32;
            for v in &mut acc {
                *v *= inv;
            }
        }

        acc
    }
}

impl IEmbeddingProvider for HashedProvider {
    fn embed(&self, text: &str) -> RecallResult<Vec<f32>> {
        Ok(self.embed_text(text))
    }

    fn embed_batch(&self, texts: &[String]) -> RecallResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.embed_text(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "feature-hash"
    }
}
