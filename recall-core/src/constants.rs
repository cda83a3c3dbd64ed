/// Recall system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Modulus applied to per-dimension token hashes before scaling into [0, 1).
///
/// Any fixed modulus works; 2^32 keeps the scaled values well inside f32
/// precision. Changing this invalidates every stored embedding.
pub const HASH_RANGE: u64 = 1 << 32;

/// Maximum number of passages accepted from a single provider call.
/// Anything past this is dropped before embedding.
pub const MAX_PROVIDER_CANDIDATES: usize = 64;
