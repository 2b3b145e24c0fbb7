//! Region-of-interest resolution.
//!
//! The requested rectangle is intersected with `[0, W) × [0, H)`. Any result
//! without positive width and height, including a rectangle that only
//! touches the image edge, is rejected with [`EdgeError::InvalidRegion`].
//! Arithmetic runs in `i64` so `x + width` cannot overflow for extreme
//! requests.
use crate::error::EdgeError;
use crate::types::{Region, RoiRect};

pub fn resolve_roi(
    image_width: usize,
    image_height: usize,
    roi: RoiRect,
) -> Result<Region, EdgeError> {
    let (x0, x1) = clamp_span(roi.x, roi.width, image_width);
    let (y0, y1) = clamp_span(roi.y, roi.height, image_height);
    if x1 <= x0 || y1 <= y0 {
        log::debug!(
            "resolve_roi: {:?} misses {}x{} image",
            roi,
            image_width,
            image_height
        );
        return Err(EdgeError::InvalidRegion {
            requested: roi,
            image_width,
            image_height,
        });
    }
    // Both spans lie in [0, extent], which already fits in usize.
    Ok(Region {
        x: x0 as usize,
        y: y0 as usize,
        width: (x1 - x0) as usize,
        height: (y1 - y0) as usize,
    })
}

/// Clamp `[start, start + len)` to `[0, extent)`; the span may come back empty.
fn clamp_span(start: i32, len: i32, extent: usize) -> (i64, i64) {
    let extent = i64::try_from(extent).unwrap_or(i64::MAX);
    let lo = i64::from(start);
    let hi = lo + i64::from(len);
    (lo.clamp(0, extent), hi.clamp(0, extent))
}
