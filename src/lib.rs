#![doc = include_str!("../README.md")]

// Public modules (stable surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;
pub mod status;
pub mod types;

// Pipeline stages, usable on their own.
pub mod color;
pub mod edges;
pub mod roi;
pub mod threshold;

// Tool support.
pub mod config;
pub mod io;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{EdgeParams, RoiEdgeDetector};
pub use crate::error::EdgeError;
pub use crate::image::BgraImage;
pub use crate::types::{EdgeMask, Region, RoiRect};

pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use roi_edges::prelude::*;
///
/// let frame = vec![0u8; 10 * 10 * 4];
/// let image = BgraImage::new(&frame, 10, 10).unwrap();
/// let err = RoiEdgeDetector::default()
///     .detect(&image, RoiRect::new(15, 15, 5, 5))
///     .unwrap_err();
/// assert!(matches!(err, EdgeError::InvalidRegion { .. }));
/// ```
pub mod prelude {
    pub use crate::image::BgraImage;
    pub use crate::{EdgeError, EdgeMask, EdgeParams, RoiEdgeDetector, RoiRect};
}
