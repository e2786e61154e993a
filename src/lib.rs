#![doc = include_str!("../README.md")]

pub mod config;
pub mod fit;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry point: the square fitter and its types.
pub use crate::fit::{fit, FitError, Mode};
pub use crate::image::ImageRgba8;

/// Small prelude for quick experiments.
///
/// ```
/// use square_icons::prelude::*;
///
/// let src = ImageRgba8::new(300, 100);
/// let icon = fit(&src, 128, Mode::Contain).unwrap();
/// assert_eq!((icon.w, icon.h), (128, 128));
/// ```
pub mod prelude {
    pub use crate::image::{ImageRgba8, Rgba8};
    pub use crate::{fit, FitError, Mode};
}
