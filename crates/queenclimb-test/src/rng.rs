//! Seeded random sources.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Returns a ChaCha8 generator seeded with `seed`.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
