//! Starfield generation by stamping randomly placed galaxies
//!
//! Each galaxy draws a position, a small radius and a noise-derived grey
//! intensity. A limited budget of galaxies is promoted to full brightness and
//! enlarged. Galaxies are stamped in placement order and later ones overwrite
//! earlier ones.

use crate::generation::stamp::stamp_disk;
use crate::io::configuration::{
    BRIGHT_CHANCE_THRESHOLD, BRIGHT_INTENSITY, BRIGHT_RADIUS_FACTOR, DEFAULT_BRIGHT,
    DEFAULT_GALAXIES, DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_RADIUS_EXCLUSIVE, MIN_RADIUS,
    NOISE_AMPLITUDE, NOISE_OFFSET, NOISE_SCALE,
};
use crate::math::{NoiseSource, PerlinNoise, RandomSource, SeededRandom};
use image::RgbImage;

/// Canvas dimensions and galaxy counts for a single run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Number of galaxies to place
    pub num_galaxies: usize,
    /// Maximum number of galaxies forced to full brightness
    pub num_bright: usize,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_galaxies: DEFAULT_GALAXIES,
            num_bright: DEFAULT_BRIGHT,
        }
    }
}

/// Placement record of a single stamped galaxy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Galaxy {
    /// Centre column
    pub x: i64,
    /// Centre row
    pub y: i64,
    /// Disk radius after any brightness enlargement
    pub radius: i64,
    /// Grey level written to every covered pixel
    pub intensity: u8,
    /// Whether the galaxy consumed the bright budget
    pub bright: bool,
}

/// Generated canvas together with the placements that produced it
#[derive(Debug, Clone)]
pub struct Background {
    /// Rendered RGB canvas
    pub canvas: RgbImage,
    /// Galaxies in placement order
    pub galaxies: Vec<Galaxy>,
}

impl Background {
    /// Number of galaxies promoted to full brightness
    pub fn bright_count(&self) -> usize {
        self.galaxies.iter().filter(|galaxy| galaxy.bright).count()
    }
}

/// Map a noise sample onto the 8-bit intensity range
///
/// The lower clamp bound is unreachable for samples in `[-1, 1]`.
pub fn noise_intensity(sample: f64) -> u8 {
    sample
        .mul_add(NOISE_AMPLITUDE, NOISE_OFFSET)
        .clamp(0.0, 255.0) as u8
}

/// Galaxy stamper parameterized over its random and noise capabilities
pub struct BackgroundGenerator<R, N> {
    config: BackgroundConfig,
    random: R,
    noise: N,
}

impl BackgroundGenerator<SeededRandom, PerlinNoise> {
    /// Create a generator backed by `StdRng` and Perlin noise
    ///
    /// With `Some(seed)` the output is reproducible; the Perlin field is seeded
    /// from the same stream. With `None` both come from OS entropy.
    pub fn seeded(config: BackgroundConfig, seed: Option<u64>) -> Self {
        let mut random = seed.map_or_else(SeededRandom::from_entropy, SeededRandom::new);
        let noise = PerlinNoise::new(random.next_seed());
        Self::new(config, random, noise)
    }
}

impl<R: RandomSource, N: NoiseSource> BackgroundGenerator<R, N> {
    /// Create a generator from explicit capabilities
    pub const fn new(config: BackgroundConfig, random: R, noise: N) -> Self {
        Self {
            config,
            random,
            noise,
        }
    }

    /// Configuration this generator renders
    pub const fn config(&self) -> &BackgroundConfig {
        &self.config
    }

    /// Render the background
    pub fn generate(&mut self) -> Background {
        self.generate_with(|_| {})
    }

    /// Render the background, reporting each galaxy after it is stamped
    pub fn generate_with(&mut self, mut on_galaxy: impl FnMut(&Galaxy)) -> Background {
        let BackgroundConfig {
            width,
            height,
            num_galaxies,
            num_bright,
        } = self.config;
        let mut canvas = RgbImage::new(width, height);

        // Nothing can be placed on an empty canvas
        if width == 0 || height == 0 {
            return Background {
                canvas,
                galaxies: Vec::new(),
            };
        }

        let mut galaxies = Vec::with_capacity(num_galaxies);
        let mut remaining_bright = num_bright;

        for _ in 0..num_galaxies {
            let galaxy = self.place_galaxy(&mut remaining_bright);
            stamp_disk(
                &mut canvas,
                galaxy.x,
                galaxy.y,
                galaxy.radius,
                galaxy.intensity,
            );
            on_galaxy(&galaxy);
            galaxies.push(galaxy);
        }

        Background { canvas, galaxies }
    }

    fn place_galaxy(&mut self, remaining_bright: &mut usize) -> Galaxy {
        let x = self.random.uniform_int(0, i64::from(self.config.width));
        let y = self.random.uniform_int(0, i64::from(self.config.height));
        let mut radius = self.random.uniform_int(MIN_RADIUS, MAX_RADIUS_EXCLUSIVE);

        let sample = self
            .noise
            .noise_2d(x as f64 / NOISE_SCALE, y as f64 / NOISE_SCALE);
        let mut intensity = noise_intensity(sample);

        // Drawn for every galaxy so the stream does not depend on the budget
        let chance = self.random.uniform();
        let bright = chance >= BRIGHT_CHANCE_THRESHOLD && *remaining_bright > 0;
        if bright {
            intensity = BRIGHT_INTENSITY;
            radius = (radius as f64 * BRIGHT_RADIUS_FACTOR) as i64;
            *remaining_bright -= 1;
        }

        Galaxy {
            x,
            y,
            radius,
            intensity,
            bright,
        }
    }
}

/// Render a starfield with `StdRng` and Perlin noise
pub fn generate(
    width: u32,
    height: u32,
    num_galaxies: usize,
    num_bright: usize,
    seed: Option<u64>,
) -> RgbImage {
    let config = BackgroundConfig {
        width,
        height,
        num_galaxies,
        num_bright,
    };
    BackgroundGenerator::seeded(config, seed).generate().canvas
}
