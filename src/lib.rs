//! Procedural starfield backgrounds and fixed-size image tiling
//!
//! The background generator stamps randomly placed greyscale galaxies onto a
//! black canvas, with a limited budget promoted to full brightness. The tile
//! splitter cuts a source image into a row-major grid of square tiles and
//! writes each one as a PNG.

#![forbid(unsafe_code)]

/// Galaxy placement and canvas stamping
pub mod generation;
/// Input/output operations, command-line interfaces and error handling
pub mod io;
/// Random and coherent-noise capabilities
pub mod math;
/// Tile grid geometry and naming
pub mod spatial;

pub use io::error::{Result, SpacetilesError};
