//! Image loading and PNG export with path-aware errors

use crate::io::error::{Result, SpacetilesError};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Open and decode the image at `path`
///
/// # Errors
///
/// Returns an error if the file is missing or cannot be decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| SpacetilesError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save `image` as PNG, creating the parent directory when needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    ensure_directory(path.parent().unwrap_or_else(|| Path::new("")))?;
    write_png(image, path)
}

/// Save `image` as PNG into a directory that already exists
///
/// # Errors
///
/// Returns an error if the image cannot be encoded or written
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| SpacetilesError::ImageExport {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Create `dir` and any missing ancestors
///
/// An empty path refers to the working directory and is left alone.
///
/// # Errors
///
/// Returns an error if the directory cannot be created
pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    std::fs::create_dir_all(dir).map_err(|e| SpacetilesError::FileSystem {
        path: dir.to_path_buf(),
        operation: "create directory",
        source: e,
    })
}
