use crate::detector::EdgeParams;
use crate::diagnostics::TimingBreakdown;
use crate::edges::EdgeStats;
use crate::types::{EdgeMask, Region, RoiRect};
use serde::Serialize;

/// Result produced by [`RoiEdgeDetector::detect_with_diagnostics`](crate::RoiEdgeDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    #[serde(skip)]
    pub mask: EdgeMask,
    pub trace: PipelineTrace,
}

/// End-to-end trace describing one pipeline call.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub requested_roi: RoiRect,
    pub region: Region,
    pub params: EdgeParams,
    pub timings: TimingBreakdown,
    pub edges: EdgeStats,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}
