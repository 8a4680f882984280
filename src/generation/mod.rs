//! Procedural starfield background generation
//!
//! This module contains:
//! - Galaxy placement and the generation loop
//! - Clipped disk stamping onto the canvas

/// Galaxy placement and background generation
pub mod background;
/// Filled-disk rasterization with per-pixel clipping
pub mod stamp;

pub use background::{Background, BackgroundConfig, BackgroundGenerator, Galaxy, generate};
