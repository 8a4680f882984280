//! Spatial partitioning of source images into tiles
//!
//! This module contains:
//! - Row-major tile grid computation with edge clipping
//! - Deterministic tile file naming

/// Tile bounds and naming
pub mod tiles;

pub use tiles::{TileBounds, tile_count, tile_file_name, tile_grid};
