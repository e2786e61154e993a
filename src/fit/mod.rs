//! Square fitting: contain/cover transforms onto fixed-size squares.
//!
//! Purpose
//! - Turn an arbitrary-sized RGBA image into an exactly `size × size` icon
//!   while preserving aspect ratio.
//!
//! Design
//! - `Mode::Contain` scales the whole image to fit inside the square
//!   (Lanczos-3) and centers it on a transparent canvas via overwrite, not
//!   alpha blending.
//! - `Mode::Cover` scales the image so the square is fully covered, then
//!   center-crops the overflow.
//! - The transform is a pure function: stateless, never mutates its input,
//!   and always returns a freshly owned buffer. Repeated calls on the same
//!   input are byte-identical.
//! - Unknown mode names normalize to `Contain` (with a warning) rather than
//!   erroring; zero-area sources and zero target sizes are the only failure
//!   cases.
pub mod layout;
mod resample;

use crate::image::{ImageRgba8, ImageView, ImageViewMut};
use log::{debug, warn};
use std::fmt;

/// How to fit a source image into the target square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// Keep the whole image, pad to square with transparency.
    #[default]
    Contain,
    /// Fill the square, crop the overflow.
    Cover,
}

impl Mode {
    /// Resolve a mode name.
    ///
    /// Only the exact strings `"contain"` and `"cover"` are recognized;
    /// anything else (including case variants) falls back to `Contain` and
    /// logs a warning.
    pub fn from_name(name: &str) -> Mode {
        match name {
            "contain" => Mode::Contain,
            "cover" => Mode::Cover,
            other => {
                warn!("unknown fit mode {other:?}, falling back to contain");
                Mode::Contain
            }
        }
    }
}

/// Invalid-input conditions. The fitter has no other failure modes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitError {
    /// Source width or height is zero.
    ZeroSourceDimension,
    /// Requested target edge length is zero.
    ZeroTargetSize,
}

impl fmt::Display for FitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitError::ZeroSourceDimension => write!(f, "source image has a zero dimension"),
            FitError::ZeroTargetSize => write!(f, "target size must be at least 1"),
        }
    }
}

impl std::error::Error for FitError {}

/// Fit `image` into a `size × size` square under `mode`.
///
/// Total for all well-formed inputs: any source with both dimensions >= 1
/// and any `size >= 1` produces a square of exactly that size. The result
/// is freshly owned and never aliases the input buffer.
pub fn fit(image: &ImageRgba8, size: usize, mode: Mode) -> Result<ImageRgba8, FitError> {
    if image.w == 0 || image.h == 0 {
        return Err(FitError::ZeroSourceDimension);
    }
    if size == 0 {
        return Err(FitError::ZeroTargetSize);
    }

    let out = match mode {
        Mode::Contain => {
            let lay = layout::contain(image.w, image.h, size);
            debug!(
                "contain {}x{} -> {}x{} pasted at ({}, {}) on {size} canvas",
                image.w, image.h, lay.scaled_w, lay.scaled_h, lay.paste_x, lay.paste_y
            );
            let scaled = resample::resample(image, lay.scaled_w, lay.scaled_h);
            paste_centered(&scaled, size, lay.paste_x, lay.paste_y)
        }
        Mode::Cover => {
            let lay = layout::cover(image.w, image.h, size);
            debug!(
                "cover {}x{} -> {}x{} cropped at ({}, {}) to {size}",
                image.w, image.h, lay.scaled_w, lay.scaled_h, lay.crop_x, lay.crop_y
            );
            let scaled = resample::resample(image, lay.scaled_w, lay.scaled_h);
            crop_window(&scaled, size, lay.crop_x, lay.crop_y)
        }
    };
    Ok(out)
}

/// Overwrite-paste `scaled` onto a fresh transparent `size × size` canvas.
fn paste_centered(scaled: &ImageRgba8, size: usize, x: usize, y: usize) -> ImageRgba8 {
    let mut canvas = ImageRgba8::new(size, size);
    for (dy, src_row) in scaled.rows().enumerate() {
        let dst_row = canvas.row_mut(y + dy);
        dst_row[x..x + scaled.w].copy_from_slice(src_row);
    }
    canvas
}

/// Copy the `size × size` window at (`left`, `top`) into a fresh buffer.
fn crop_window(scaled: &ImageRgba8, size: usize, left: usize, top: usize) -> ImageRgba8 {
    let mut out = ImageRgba8::new(size, size);
    for dy in 0..size {
        let src_row = scaled.row(top + dy);
        out.row_mut(dy).copy_from_slice(&src_row[left..left + size]);
    }
    out
}
