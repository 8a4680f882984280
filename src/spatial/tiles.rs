//! Tile grid geometry for splitting images into fixed-size blocks
//!
//! Tiles are laid out in row-major order from `(0, 0)`. The last column and
//! row are clipped at the source edge and are never padded, so the bounds
//! cover the source exactly once.

use crate::io::configuration::TILE_EXTENSION;
use crate::io::error::{Result, invalid_parameter};

/// Clipped bounding box of one tile in source pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileBounds {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width after clipping to the source
    pub width: u32,
    /// Height after clipping to the source
    pub height: u32,
}

impl TileBounds {
    /// Number of pixels covered
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check whether the pixel `(px, py)` lies inside this tile
    pub const fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px - self.x < self.width && py >= self.y && py - self.y < self.height
    }
}

/// Compute tile bounds in row-major order
///
/// # Errors
///
/// Returns an error if `tile_size` is zero
pub fn tile_grid(width: u32, height: u32, tile_size: u32) -> Result<Vec<TileBounds>> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"must be at least 1 pixel",
        ));
    }

    let mut bounds = Vec::with_capacity(tile_count(width, height, tile_size));
    for y in (0..height).step_by(tile_size as usize) {
        let tile_height = tile_size.min(height - y);
        for x in (0..width).step_by(tile_size as usize) {
            bounds.push(TileBounds {
                x,
                y,
                width: tile_size.min(width - x),
                height: tile_height,
            });
        }
    }

    Ok(bounds)
}

/// Number of tiles covering a `width × height` source
///
/// Returns zero for a zero `tile_size`.
pub const fn tile_count(width: u32, height: u32, tile_size: u32) -> usize {
    if tile_size == 0 {
        return 0;
    }
    width.div_ceil(tile_size) as usize * height.div_ceil(tile_size) as usize
}

/// File name for the tile at offset `(x, y)` of the source named `stem`
pub fn tile_file_name(stem: &str, x: u32, y: u32) -> String {
    format!("{stem}_{x}_{y}.{TILE_EXTENSION}")
}
