//! Coherent noise sampling for galaxy intensity

use ::noise::{NoiseFn, Perlin};

/// Source of 2-D coherent noise, nominally in `[-1, 1]`
pub trait NoiseSource {
    /// Sample the noise field at `(x, y)`
    fn noise_2d(&self, x: f64, y: f64) -> f64;
}

/// Perlin gradient noise
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    /// Create a Perlin field from a seed
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self {
            perlin: Perlin::default(),
        }
    }
}

impl NoiseSource for PerlinNoise {
    fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y])
    }
}
