//! BGRA → 8-bit luma.
//!
//! Uses fixed-point BT.601 weights in Q14: `0.299 R + 0.587 G + 0.114 B`
//! with round-half-up. The three weights sum to exactly `1 << 14`, so a gray
//! input pixel `(v, v, v)` maps back to `v`. Alpha is ignored.
use crate::image::{BgraImage, GrayImageU8, ImageViewMut, BGRA_CHANNELS};

const LUMA_SHIFT: u32 = 14;
const LUMA_R: u32 = 4899;
const LUMA_G: u32 = 9617;
const LUMA_B: u32 = 1868;
const LUMA_ROUND: u32 = 1 << (LUMA_SHIFT - 1);

#[inline]
pub fn luma(b: u8, g: u8, r: u8) -> u8 {
    let acc = u32::from(r) * LUMA_R + u32::from(g) * LUMA_G + u32::from(b) * LUMA_B + LUMA_ROUND;
    // Max is 255 * 2^14 + 2^13, which shifts down to 255.
    (acc >> LUMA_SHIFT) as u8
}

/// Convert a color view into a freshly allocated gray buffer of the same size.
pub fn bgra_to_gray(src: &BgraImage<'_>) -> GrayImageU8 {
    let mut out = GrayImageU8::new(src.width(), src.height());
    for y in 0..src.height() {
        let src_row = src.row(y);
        let dst_row = out.row_mut(y);
        for (dst, px) in dst_row.iter_mut().zip(src_row.chunks_exact(BGRA_CHANNELS)) {
            *dst = luma(px[0], px[1], px[2]);
        }
    }
    out
}
