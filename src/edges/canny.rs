//! Canny edge detector on an 8-bit single-channel image.
//!
//! gradients → non-maximum suppression → hysteresis. Thresholds are in raw
//! kernel units: a full 0→255 step gives a Sobel magnitude of 1020.
use crate::edges::grad::{image_gradients, GradientKernel, GradientNorm};
use crate::edges::hysteresis::hysteresis;
use crate::edges::nms::non_max_suppression;
use crate::error::EdgeError;
use crate::image::{GrayImageU8, ImageF32, ImageU8};
use serde::Serialize;
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CannyParams {
    pub low: f64,
    pub high: f64,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl CannyParams {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            kernel: GradientKernel::default(),
            norm: GradientNorm::default(),
        }
    }
}

/// Pixel counts collected while classifying edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStats {
    pub strong: usize,
    pub weak: usize,
    pub promoted: usize,
    pub edge_pixels: usize,
}

pub struct CannyResult {
    pub edges: GrayImageU8,
    pub stats: EdgeStats,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub hysteresis_ms: f64,
}

pub fn canny(src: &ImageU8<'_>, params: &CannyParams) -> Result<CannyResult, EdgeError> {
    if !params.low.is_finite() || !params.high.is_finite() {
        return Err(EdgeError::ProcessingFault(format!(
            "edge thresholds must be finite (low={}, high={})",
            params.low, params.high
        )));
    }

    let gradient_start = Instant::now();
    let grad = image_gradients(&ImageF32::from_u8(src), params.kernel, params.norm);
    if grad.mag.data.iter().any(|m| !m.is_finite()) {
        return Err(EdgeError::ProcessingFault(
            "gradient magnitude is not finite".to_string(),
        ));
    }
    let gradient_ms = gradient_start.elapsed().as_secs_f64() * 1000.0;

    let nms_start = Instant::now();
    let nms = non_max_suppression(&grad);
    let nms_ms = nms_start.elapsed().as_secs_f64() * 1000.0;

    let hysteresis_start = Instant::now();
    let out = hysteresis(&nms, params.low, params.high);
    let hysteresis_ms = hysteresis_start.elapsed().as_secs_f64() * 1000.0;

    let stats = EdgeStats {
        strong: out.strong,
        weak: out.weak,
        promoted: out.promoted,
        edge_pixels: out.strong + out.promoted,
    };
    Ok(CannyResult {
        edges: out.mask,
        stats,
        gradient_ms,
        nms_ms,
        hysteresis_ms,
    })
}
