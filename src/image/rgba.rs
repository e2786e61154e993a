//! Owned RGBA image in row-major layout (stride == width).
//!
//! The pixel type is `[u8; 4]` (R, G, B, A), top-left origin. Provides row
//! access and checked conversions to/from flat byte buffers.

/// One RGBA pixel: `[r, g, b, a]`.
pub type Rgba8 = [u8; 4];

/// Fully transparent black, the canvas fill for contain padding.
pub const TRANSPARENT: Rgba8 = [0, 0, 0, 0];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRgba8 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order, `data.len() == w * h`
    pub data: Vec<Rgba8>,
}

impl ImageRgba8 {
    /// Construct a fully transparent canvas of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![TRANSPARENT; w * h],
        }
    }

    /// Build from a flat byte buffer (4 bytes per pixel, row-major).
    ///
    /// Returns `None` when `bytes.len() != w * h * 4`.
    pub fn from_raw(w: usize, h: usize, bytes: Vec<u8>) -> Option<Self> {
        if bytes.len() != w * h * 4 {
            return None;
        }
        let data = bytes
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
            .collect();
        Some(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Copy out as a flat byte buffer (4 bytes per pixel, row-major).
    pub fn to_raw_bytes(&self) -> Vec<u8> {
        self.data.iter().flatten().copied().collect()
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Rgba8 {
        self.data[self.idx(x, y)]
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, px: Rgba8) {
        let i = self.idx(x, y);
        self.data[i] = px;
    }

    /// Iterate over mutable rows.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Rgba8]> {
        self.data.chunks_mut(self.stride)
    }
}

impl crate::image::traits::ImageView for ImageRgba8 {
    type Pixel = Rgba8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[Rgba8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Rgba8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageRgba8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [Rgba8] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}
