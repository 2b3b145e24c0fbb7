//! Fixed-cutoff binarization: `255` where `value > cutoff`, otherwise `0`.
//!
//! The cutoff is compared as a plain integer, so values outside `[0, 255]`
//! saturate the result (negative → all 255, `>= 255` → all 0).
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};

pub const BINARY_MAX: u8 = 255;

fn binary_lut(cutoff: i32) -> [u8; 256] {
    let mut lut = [0u8; 256];
    for (v, slot) in lut.iter_mut().enumerate() {
        if (v as i32) > cutoff {
            *slot = BINARY_MAX;
        }
    }
    lut
}

/// Binarize `src` into a new buffer of identical dimensions.
pub fn threshold_binary(src: &ImageU8<'_>, cutoff: i32) -> GrayImageU8 {
    let lut = binary_lut(cutoff);
    let mut out = GrayImageU8::new(src.w, src.h);
    for (y, src_row) in src.rows().enumerate() {
        for (dst, &v) in out.row_mut(y).iter_mut().zip(src_row) {
            *dst = lut[usize::from(v)];
        }
    }
    out
}
