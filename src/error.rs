//! Error taxonomy of the pipeline and its mapping onto integer status codes.

use crate::types::RoiRect;
use thiserror::Error;

/// Call completed and the output buffer holds the mask.
pub const STATUS_OK: i32 = 0;
/// Anything that went wrong after the region was accepted.
pub const STATUS_PROCESSING_FAULT: i32 = -1;
/// The requested rectangle does not overlap the image.
pub const STATUS_INVALID_REGION: i32 = -2;

/// Errors are terminal for a call; the output content is unspecified after
/// any of them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EdgeError {
    /// The clamped region of interest has zero or negative extent.
    #[error("region {requested:?} has no overlap with the {image_width}x{image_height} image")]
    InvalidRegion {
        requested: RoiRect,
        image_width: usize,
        image_height: usize,
    },

    /// A buffer length disagrees with the declared geometry.
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Unexpected failure during conversion or edge detection.
    #[error("processing fault: {0}")]
    ProcessingFault(String),
}

impl EdgeError {
    /// Integer status reported across flat call boundaries.
    pub fn status_code(&self) -> i32 {
        match self {
            Self::InvalidRegion { .. } => STATUS_INVALID_REGION,
            Self::SizeMismatch { .. } | Self::ProcessingFault(_) => STATUS_PROCESSING_FAULT,
        }
    }
}
