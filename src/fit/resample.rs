//! Separable Lanczos-3 resampler for RGBA images.
//!
//! Two 1D passes: horizontal into an f32 intermediate, then vertical into
//! the final 8-bit image. Tap tables are precomputed per output coordinate
//! with border replication folded in, so the inner loops stay contiguous.
//! When downscaling, the kernel is stretched by the scale factor so the
//! footprint covers the full source span (standard anti-aliasing behavior).
//! Channels are filtered independently (straight, non-premultiplied alpha).
use crate::image::{ImageRgba8, ImageView, ImageViewMut};

const LOBES: f32 = 3.0;

/// Resample `src` to exactly `nw × nh` pixels.
///
/// Identity dimensions short-circuit to an owned copy, so the output never
/// aliases the input.
pub(crate) fn resample(src: &ImageRgba8, nw: usize, nh: usize) -> ImageRgba8 {
    debug_assert!(src.w > 0 && src.h > 0 && nw > 0 && nh > 0);
    if nw == src.w && nh == src.h {
        return src.clone();
    }

    let horiz = axis_taps(src.w, nw);
    let vert = axis_taps(src.h, nh);

    // Horizontal pass: (w × h) -> (nw × h), f32 per channel.
    let mut mid = vec![[0.0f32; 4]; nw * src.h];
    for (y, src_row) in src.rows().enumerate() {
        let mid_row = &mut mid[y * nw..(y + 1) * nw];
        for (dst_px, taps) in mid_row.iter_mut().zip(&horiz) {
            let mut acc = [0.0f32; 4];
            for (k, &weight) in taps.weights.iter().enumerate() {
                let px = src_row[taps.start + k];
                for c in 0..4 {
                    acc[c] += weight * px[c] as f32;
                }
            }
            *dst_px = acc;
        }
    }

    // Vertical pass: (nw × h) -> (nw × nh), rounded back to u8.
    let mut out = ImageRgba8::new(nw, nh);
    for y in 0..nh {
        let taps = &vert[y];
        let out_row = out.row_mut(y);
        for (x, dst_px) in out_row.iter_mut().enumerate() {
            let mut acc = [0.0f32; 4];
            for (k, &weight) in taps.weights.iter().enumerate() {
                let px = mid[(taps.start + k) * nw + x];
                for c in 0..4 {
                    acc[c] += weight * px[c];
                }
            }
            *dst_px = [
                quantize(acc[0]),
                quantize(acc[1]),
                quantize(acc[2]),
                quantize(acc[3]),
            ];
        }
    }
    out
}

/// Normalized filter taps for one output coordinate along one axis.
///
/// `weights[k]` applies to source index `start + k`; taps that would fall
/// outside the image have been folded onto the border entries.
struct TapSet {
    start: usize,
    weights: Vec<f32>,
}

fn axis_taps(src_len: usize, dst_len: usize) -> Vec<TapSet> {
    let scale = src_len as f32 / dst_len as f32;
    let filter_scale = scale.max(1.0);
    let radius = LOBES * filter_scale;

    let mut taps = Vec::with_capacity(dst_len);
    for i in 0..dst_len {
        // Center of output pixel i in source coordinates.
        let center = (i as f32 + 0.5) * scale - 0.5;
        let lo = (center - radius).floor() as isize;
        let hi = (center + radius).ceil() as isize;
        let lo_c = clamp_index(lo, src_len);
        let hi_c = clamp_index(hi, src_len);

        let mut weights = vec![0.0f32; hi_c - lo_c + 1];
        let mut sum = 0.0f32;
        for sx in lo..=hi {
            let weight = lanczos3((sx as f32 - center) / filter_scale);
            let idx = clamp_index(sx, src_len);
            weights[idx - lo_c] += weight;
            sum += weight;
        }
        if sum != 0.0 {
            for w in &mut weights {
                *w /= sum;
            }
        }
        taps.push(TapSet {
            start: lo_c,
            weights,
        });
    }
    taps
}

/// Lanczos windowed sinc with 3 lobes, zero outside |x| >= 3.
fn lanczos3(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }
    if x.abs() >= LOBES {
        return 0.0;
    }
    let px = std::f32::consts::PI * x;
    LOBES * px.sin() * (px / LOBES).sin() / (px * px)
}

fn quantize(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
