//! I/O helpers for RGBA images.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into an owned RGBA buffer.
//! - `save_rgba_png`: write an `ImageRgba8` to a PNG with best compression.
//!
//! Decoding and encoding are the external collaborators of the fitter; the
//! core never touches the filesystem itself.
use super::ImageRgba8;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

/// Load an image from disk and convert to 8-bit RGBA.
///
/// Sources without an alpha channel come back fully opaque (A = 255).
pub fn load_rgba_image(path: &Path) -> Result<ImageRgba8, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    ImageRgba8::from_raw(width, height, img.into_raw())
        .ok_or_else(|| format!("Decoded buffer size mismatch for {}", path.display()))
}

/// Save an RGBA buffer to a PNG, using the encoder's best compression level.
pub fn save_rgba_png(image: &ImageRgba8, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let file =
        File::create(path).map_err(|e| format!("Failed to create {}: {e}", path.display()))?;
    let encoder = PngEncoder::new_with_quality(
        BufWriter::new(file),
        CompressionType::Best,
        FilterType::Adaptive,
    );
    encoder
        .write_image(
            &image.to_raw_bytes(),
            image.w as u32,
            image.h as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
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
