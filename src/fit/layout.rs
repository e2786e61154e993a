//! Pure integer geometry for square fitting.
//!
//! All scaled dimensions use exact integer floor division and the driving
//! axis is assigned the target size directly, so no floating-point dimension
//! math exists anywhere and results are identical across platforms.
//!
//! - Contain: the larger source axis maps to `size`, the other floors to
//!   `d * size / larger` (clamped to 1 px). Both scaled axes fit within the
//!   square and at least one equals `size`.
//! - Cover: the smaller source axis maps to `size`, the other floors to
//!   `d * size / smaller` (always `>= size`). The crop window is centered
//!   with floor division, leaving the extra odd pixel on the right/bottom.

/// Scaled dimensions and canvas paste offset for contain mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainLayout {
    pub scaled_w: usize,
    pub scaled_h: usize,
    /// Left edge of the scaled image on the canvas.
    pub paste_x: usize,
    /// Top edge of the scaled image on the canvas.
    pub paste_y: usize,
}

/// Scaled dimensions and crop origin for cover mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoverLayout {
    pub scaled_w: usize,
    pub scaled_h: usize,
    /// Left edge of the `size × size` crop window.
    pub crop_x: usize,
    /// Top edge of the `size × size` crop window.
    pub crop_y: usize,
}

/// Scale-to-fit layout: the whole image inside the square, centered.
///
/// Callers must reject zero dimensions before calling.
pub fn contain(w: usize, h: usize, size: usize) -> ContainLayout {
    debug_assert!(w > 0 && h > 0 && size > 0);
    let (scaled_w, scaled_h) = if w >= h {
        (size, (h * size / w).max(1))
    } else {
        ((w * size / h).max(1), size)
    };
    ContainLayout {
        scaled_w,
        scaled_h,
        paste_x: (size - scaled_w) / 2,
        paste_y: (size - scaled_h) / 2,
    }
}

/// Scale-to-fill layout: the square fully covered, overflow center-cropped.
///
/// Callers must reject zero dimensions before calling.
pub fn cover(w: usize, h: usize, size: usize) -> CoverLayout {
    debug_assert!(w > 0 && h > 0 && size > 0);
    let (scaled_w, scaled_h) = if w <= h {
        (size, h * size / w)
    } else {
        (w * size / h, size)
    };
    CoverLayout {
        scaled_w,
        scaled_h,
        crop_x: (scaled_w - size) / 2,
        crop_y: (scaled_h - size) / 2,
    }
}
