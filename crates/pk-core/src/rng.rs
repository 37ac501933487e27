//! Deterministic simulation RNG.
//!
//! There is no process-wide generator.  One `SimRng` is created from the
//! configured seed and handed (by value) to whichever process draws random
//! numbers, which in the street scenario is the vehicle generator.  The same seed
//! always produces the same arrival spacing and goods draws.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by exactly one process at a time.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Inclusive integer draw from a `[min, max]` pair as stored in config.
    #[inline]
    pub fn between(&mut self, bounds: [u64; 2]) -> u64 {
        self.0.gen_range(bounds[0]..=bounds[1])
    }
}

impl std::fmt::Debug for SimRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SimRng(..)")
    }
}
