//! Uniform random draws behind a narrow capability interface
//!
//! The generator only ever asks for a float in `[0, 1)` or an integer in a
//! half-open range, so tests can substitute a scripted sequence.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform random values
pub trait RandomSource {
    /// Uniform float in `[0, 1)`
    fn uniform(&mut self) -> f64;

    /// Uniform integer in `[lo, hi)`, or `lo` when the range is empty
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }

    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        (**self).uniform_int(lo, hi)
    }
}

/// Seeded random selector for reproducible draws
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Create a deterministic random source
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a random source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw a raw 32-bit value, used to seed companion generators
    pub fn next_seed(&mut self) -> u32 {
        self.rng.random()
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }
}
