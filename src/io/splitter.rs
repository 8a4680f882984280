//! Cuts a source image into fixed-size tiles and writes one PNG per tile

use crate::io::configuration::TILE_SIZE;
use crate::io::error::{Result, invalid_path};
use crate::io::image::{ensure_directory, load_image, write_png};
use crate::spatial::tiles::{tile_file_name, tile_grid};
use image::DynamicImage;
use std::path::{Path, PathBuf};

/// Splits images into a row-major grid of square tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSplitter {
    tile_size: u32,
}

impl Default for TileSplitter {
    fn default() -> Self {
        Self::new(TILE_SIZE)
    }
}

impl TileSplitter {
    /// Create a splitter producing `tile_size × tile_size` tiles
    pub const fn new(tile_size: u32) -> Self {
        Self { tile_size }
    }

    /// Nominal tile edge length
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Load `source` and write its tiles into `output_dir`
    ///
    /// The output directory is created, including missing ancestors, before
    /// the source is opened. Returns the written paths in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - The source image is missing or cannot be decoded
    /// - The source path has no usable file stem
    /// - A tile cannot be written
    pub fn split(&self, source: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
        self.split_with(source, output_dir, |_| {}, |_| {})
    }

    /// Like [`split`](Self::split), reporting the tile count once known and
    /// each tile after it is saved
    ///
    /// # Errors
    ///
    /// Same as [`split`](Self::split)
    pub fn split_with(
        &self,
        source: &Path,
        output_dir: &Path,
        on_start: impl FnOnce(usize),
        on_tile: impl FnMut(&Path),
    ) -> Result<Vec<PathBuf>> {
        ensure_directory(output_dir)?;
        let image = load_image(source)?;
        // Non-UTF-8 names are kept with replacement characters
        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy())
            .ok_or_else(|| invalid_path(source, &"Source path has no file name"))?;

        self.split_image_with(&image, &stem, output_dir, on_start, on_tile)
    }

    /// Write the tiles of an already decoded image into `output_dir`
    ///
    /// `output_dir` must already exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero or a tile cannot be written
    pub fn split_image(
        &self,
        image: &DynamicImage,
        stem: &str,
        output_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        self.split_image_with(image, stem, output_dir, |_| {}, |_| {})
    }

    /// Like [`split_image`](Self::split_image), reporting the tile count and
    /// each tile after it is saved
    ///
    /// # Errors
    ///
    /// Same as [`split_image`](Self::split_image)
    pub fn split_image_with(
        &self,
        image: &DynamicImage,
        stem: &str,
        output_dir: &Path,
        on_start: impl FnOnce(usize),
        mut on_tile: impl FnMut(&Path),
    ) -> Result<Vec<PathBuf>> {
        let grid = tile_grid(image.width(), image.height(), self.tile_size)?;
        on_start(grid.len());

        let mut written = Vec::with_capacity(grid.len());
        for bounds in &grid {
            let tile = image.crop_imm(bounds.x, bounds.y, bounds.width, bounds.height);
            let path = output_dir.join(tile_file_name(stem, bounds.x, bounds.y));
            write_png(&tile, &path)?;
            on_tile(&path);
            written.push(path);
        }

        Ok(written)
    }
}

/// Split `source` into 128×128 tiles under `output_dir`
///
/// # Errors
///
/// Same as [`TileSplitter::split`]
pub fn split(source: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    TileSplitter::default().split(source, output_dir)
}
