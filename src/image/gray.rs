//! Owned 8-bit single-channel buffer.
//!
//! Every pipeline stage writes a fresh `GrayImageU8` so later stages never
//! alias the caller's input.
use super::{ImageU8, ImageView, ImageViewMut};
use crate::error::EdgeError;

/// Owned 8-bit grayscale buffer with stride and borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Zero-filled buffer of `width × height` pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            stride: width,
            data: vec![0; width * height],
        }
    }

    /// Wrap raw row-major bytes; the length must be exactly `width × height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EdgeError> {
        let expected = super::buffer_len(width, height, 1)?;
        if data.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            stride: width,
            data,
        })
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.stride + x] = v;
    }

    /// Contiguous pixel bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Number of pixels that are not zero.
    pub fn count_nonzero(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.stride,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        Some(&self.data)
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::GrayImageU8;
    use crate::error::EdgeError;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let err = GrayImageU8::from_vec(3, 2, vec![0; 5]).unwrap_err();
        assert_eq!(
            err,
            EdgeError::SizeMismatch {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn from_vec_faults_on_overflowing_geometry() {
        let res = GrayImageU8::from_vec(usize::MAX, usize::MAX, Vec::new());
        assert!(matches!(res, Err(EdgeError::ProcessingFault(_))));
    }

    #[test]
    fn count_nonzero_counts_marked_pixels() {
        let img = GrayImageU8::from_vec(2, 2, vec![0, 255, 7, 0]).unwrap();
        assert_eq!(img.count_nonzero(), 2);
        assert_eq!(img.get(0, 1), 7);
    }
}
