//! Diagnostics data model returned next to the edge mask.
//!
//! `DetectionReport` is what [`RoiEdgeDetector::detect_with_diagnostics`]
//! returns: the mask itself plus a serializable `PipelineTrace` describing
//! the region, parameters, stage timings and edge statistics.
//!
//! [`RoiEdgeDetector::detect_with_diagnostics`]: crate::RoiEdgeDetector::detect_with_diagnostics

pub mod pipeline;
pub mod timing;

pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace};
pub use timing::{StageTiming, TimingBreakdown};
