use crate::image::GrayImageU8;
use serde::{Deserialize, Serialize};

/// Rectangle requested by the caller, in pixel coordinates with the origin
/// at the top-left corner. May extend past the image or start at negative
/// coordinates; see [`crate::roi::resolve_roi`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl RoiRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whole-image rectangle.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, saturate_i32(width), saturate_i32(height))
    }
}

/// Clamped region that lies fully inside the image and has positive extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

impl From<Region> for RoiRect {
    fn from(r: Region) -> Self {
        RoiRect::new(
            saturate_i32(r.x),
            saturate_i32(r.y),
            saturate_i32(r.width),
            saturate_i32(r.height),
        )
    }
}

fn saturate_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Binary edge mask (0 or 255 per pixel) sized to the resolved region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMask {
    /// Where the mask sits in the source image.
    pub region: Region,
    pub image: GrayImageU8,
}

impl EdgeMask {
    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    /// Mask value at (x, y) relative to the region origin.
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.image.get(x, y)
    }

    pub fn data(&self) -> &[u8] {
        self.image.data()
    }

    pub fn edge_count(&self) -> usize {
        self.image.count_nonzero()
    }
}
