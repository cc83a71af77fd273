//! Record-scoped randomness.
//!
//! Every factory call owns its own generator: a seeded call builds a
//! `ChaCha8Rng` from the seed and is byte-for-byte reproducible across runs
//! and processes, an unseeded call draws from OS entropy. There is no
//! process-wide draw source, so interleaved calls with different seeds
//! cannot contaminate each other.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the draw source for a single record.
pub fn record_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Derive a stable per-record seed from a run seed, an entity label, and a
/// record index. FNV-1a over the label, then a golden-ratio mix of the
/// index, so neighbouring indexes land far apart.
pub fn derive_seed(run_seed: u64, label: &str, index: u64) -> u64 {
    let mut hash = run_seed ^ 0xcbf29ce484222325;
    for byte in label.as_bytes() {
        hash ^= *byte as u64;
        hash = hash.wrapping_mul(0x100000001b3);
    }
    hash ^= index.wrapping_mul(0x9e3779b97f4a7c15);
    hash.wrapping_mul(0x100000001b3)
}
