//! I/O helpers bridging image files and [`PixelGrid`], plus JSON reports.
//!
//! - `load_grayscale`: read a PNG/JPEG into an 8-bit grid.
//! - `save_grayscale`: write a grid back to a grayscale image file.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Decoding and encoding are delegated to the `image` crate. The filters
//! themselves never touch the filesystem; these helpers exist for the demo
//! binaries and for collaborators that move grids across a storage boundary.
use super::pixel::PixelGrid;
use image::{ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit grayscale, and validate the shape.
pub fn load_grayscale(path: &Path) -> Result<PixelGrid, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    PixelGrid::from_raw(width, height, img.into_raw())
        .map_err(|e| format!("Failed to read grid from {}: {e}", path.display()))
}

/// Save a grid as a grayscale image (format inferred from the extension).
pub fn save_grayscale(grid: &PixelGrid, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let buffer: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(
        grid.width() as u32,
        grid.height() as u32,
        grid.as_slice().to_vec(),
    )
    .ok_or_else(|| "Failed to create image buffer".to_string())?;
    buffer
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
