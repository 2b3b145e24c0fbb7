//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Holds gradient components and magnitudes. Values keep the units of the
//! 8-bit source (no normalization), so edge thresholds are expressed on the
//! same scale as the raw kernel response.
use super::{ImageU8, ImageView};

#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }

    /// Widen an 8-bit view to f32 without rescaling.
    pub fn from_u8(src: &ImageU8<'_>) -> Self {
        let mut out = Self::new(src.w, src.h);
        for (y, src_row) in src.rows().enumerate() {
            let start = y * out.stride;
            let dst = &mut out.data[start..start + out.w];
            for (d, &s) in dst.iter_mut().zip(src_row) {
                *d = f32::from(s);
            }
        }
        out
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the pixel value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the pixel value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
}

impl crate::image::traits::ImageView for ImageF32 {
    type Pixel = f32;

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
    fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f32]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

impl crate::image::traits::ImageViewMut for ImageF32 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::ImageF32;
    use crate::image::ImageU8;

    #[test]
    fn from_u8_keeps_raw_scale_and_honors_stride() {
        // 2x2 view over a 3-wide buffer; the padding column must be skipped.
        let data = [10u8, 20, 99, 30, 255, 99];
        let view = ImageU8 {
            w: 2,
            h: 2,
            stride: 3,
            data: &data,
        };
        let img = ImageF32::from_u8(&view);
        assert_eq!(img.data, vec![10.0, 20.0, 30.0, 255.0]);
    }
}
