//! Flat entry point with integer status codes.
//!
//! Hosts that marshal raw buffers (for example across a C ABI) get the
//! flat argument list and a status instead of a `Result`:
//! [`STATUS_OK`](crate::error::STATUS_OK),
//! [`STATUS_INVALID_REGION`](crate::error::STATUS_INVALID_REGION) or
//! [`STATUS_PROCESSING_FAULT`](crate::error::STATUS_PROCESSING_FAULT).
//! The output buffer must hold at least `w' × h'` bytes, where `w' × h'` is
//! the clamped ROI; its content is unspecified unless the status is OK.
use crate::detector::{EdgeParams, RoiEdgeDetector};
use crate::error::{EdgeError, STATUS_OK};
use crate::image::BgraImage;
use crate::types::{Region, RoiRect};
use log::warn;
use serde::{Deserialize, Serialize};

/// Scalar arguments of one call.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CannyCall {
    pub width: i32,
    pub height: i32,
    /// First hysteresis threshold; the pair is ordered internally.
    pub threshold1: f64,
    pub threshold2: f64,
    pub grayscale_threshold: i32,
    pub roi: RoiRect,
}

pub fn process_image_canny(input: &[u8], output: &mut [u8], call: &CannyCall) -> i32 {
    match try_process_image_canny(input, output, call) {
        Ok(_) => STATUS_OK,
        Err(err) => {
            warn!("process_image_canny: {err}");
            err.status_code()
        }
    }
}

/// Same as [`process_image_canny`] but keeps the error and the clamped region.
pub fn try_process_image_canny(
    input: &[u8],
    output: &mut [u8],
    call: &CannyCall,
) -> Result<Region, EdgeError> {
    let width = dimension("width", call.width)?;
    let height = dimension("height", call.height)?;
    let image = BgraImage::new(input, width, height)?;
    let params = EdgeParams::new(call.threshold1, call.threshold2, call.grayscale_threshold);
    RoiEdgeDetector::new(params).detect_into(&image, call.roi, output)
}

fn dimension(name: &str, v: i32) -> Result<usize, EdgeError> {
    usize::try_from(v)
        .map_err(|_| EdgeError::ProcessingFault(format!("image {name} {v} is negative")))
}
