//! Borrowed 4-channel color view in blue, green, red, alpha byte order.
//!
//! The view never owns pixels. `crop` narrows it to a resolved [`Region`]
//! by re-slicing and keeping the parent's byte stride, so cropping is free
//! and cannot read outside the caller's buffer.
use crate::error::EdgeError;
use crate::types::{Region, RoiRect};

/// Bytes per BGRA pixel.
pub const BGRA_CHANNELS: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct BgraImage<'a> {
    w: usize,
    h: usize,
    stride: usize, // bytes between rows
    data: &'a [u8],
}

impl<'a> BgraImage<'a> {
    /// Wrap a tightly packed `width × height × 4` buffer.
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, EdgeError> {
        let expected = super::buffer_len(width, height, BGRA_CHANNELS)?;
        if data.len() != expected {
            return Err(EdgeError::SizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            w: width,
            h: height,
            stride: width * BGRA_CHANNELS,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.w
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Interleaved bytes of row `y` (`width × 4` long).
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w * BGRA_CHANNELS]
    }

    /// `[b, g, r, a]` at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * BGRA_CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Sub-view over `region`, which must lie inside this view.
    pub fn crop(&self, region: Region) -> Result<BgraImage<'a>, EdgeError> {
        let fits = region.width > 0
            && region.height > 0
            && region
                .x
                .checked_add(region.width)
                .is_some_and(|x1| x1 <= self.w)
            && region
                .y
                .checked_add(region.height)
                .is_some_and(|y1| y1 <= self.h);
        if !fits {
            return Err(EdgeError::InvalidRegion {
                requested: RoiRect::from(region),
                image_width: self.w,
                image_height: self.h,
            });
        }
        let start = region.y * self.stride + region.x * BGRA_CHANNELS;
        let end = (region.y + region.height - 1) * self.stride
            + (region.x + region.width) * BGRA_CHANNELS;
        Ok(BgraImage {
            w: region.width,
            h: region.height,
            stride: self.stride,
            data: &self.data[start..end],
        })
    }
}
