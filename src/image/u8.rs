//! Borrowed single-channel 8-bit view with explicit row stride.
use crate::error::EdgeError;

#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view; `data` must hold exactly `w × h` bytes.
    pub fn new(data: &'a [u8], w: usize, h: usize) -> Result<Self, EdgeError> {
        let expected = super::buffer_len(w, h, 1)?;
        if data.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

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
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.w).then_some(&self.data[..self.w * self.h])
    }
}

#[cfg(test)]
mod tests {
    use super::ImageU8;
    use crate::error::EdgeError;
    use crate::image::ImageView;

    #[test]
    fn new_validates_length_and_exposes_rows() {
        assert!(ImageU8::new(&[0u8; 5], 2, 3).is_err());
        let data = [1u8, 2, 3, 4, 5, 6];
        let view = ImageU8::new(&data, 3, 2).unwrap();
        let rows: Vec<&[u8]> = view.rows().collect();
        assert_eq!(rows, vec![&[1u8, 2, 3][..], &[4, 5, 6][..]]);
        assert_eq!(view.as_slice(), Some(&data[..]));
        assert_eq!(view.get(1, 1), 5);
    }

    #[test]
    fn overflowing_geometry_is_a_fault() {
        let res = ImageU8::new(&[], usize::MAX, 2);
        assert!(matches!(res, Err(EdgeError::ProcessingFault(_))));
    }
}
