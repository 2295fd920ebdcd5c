//! I/O helpers used by the command-line tools.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. into a `ColorImage` in `[0, 1]`.
//! - `save_field_png`: write a scalar field (e.g. the Laplacian diagonal) as a
//!   grayscale PNG, min-max normalized.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! The library core never calls these; decoding and normalization belong to
//! callers.
use super::{ColorImage, ImageF64};
use image::{GrayImage, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk, convert to 8-bit RGB and normalize to `[0, 1]`.
pub fn load_rgb_image(path: &Path) -> Result<ColorImage, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgb8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img
        .into_raw()
        .into_iter()
        .map(|v| v as f64 / 255.0)
        .collect();
    ColorImage::from_raw(width, height, 3, data).map_err(|e| e.to_string())
}

/// Save a scalar field to a grayscale PNG after min-max normalization.
pub fn save_field_png(field: &ImageF64, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let (lo, hi) = field
        .data
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = if hi > lo { hi - lo } else { 1.0 };
    let mut out = GrayImage::new(field.w as u32, field.h as u32);
    for y in 0..field.h {
        for x in 0..field.w {
            let v = ((field.get(x, y) - lo) / span * 255.0).clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path)
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
