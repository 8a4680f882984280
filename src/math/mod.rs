//! Randomness and coherent-noise capabilities consumed by the generator

/// Coherent 2-D noise sources
pub mod noise;
/// Uniform random number sources
pub mod random;

pub use self::noise::{NoiseSource, PerlinNoise};
pub use self::random::{RandomSource, SeededRandom};
