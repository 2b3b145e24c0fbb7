//! Parameters for the ROI edge pipeline.
//!
//! Defaults match a typical call on 8-bit frames: cutoff at mid-gray, Canny
//! thresholds 50/150 with Sobel gradients and Euclidean magnitude.

use crate::edges::{CannyParams, GradientKernel, GradientNorm};
use crate::error::EdgeError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Lower hysteresis threshold (weak edges).
    pub low_threshold: f64,
    /// Upper hysteresis threshold (strong edges). Swapped with
    /// `low_threshold` when smaller.
    pub high_threshold: f64,
    /// Gray levels strictly above this become 255, the rest 0.
    pub gray_cutoff: i32,
    pub kernel: GradientKernel,
    pub norm: GradientNorm,
}

impl Default for EdgeParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
            gray_cutoff: 128,
            kernel: GradientKernel::Sobel,
            norm: GradientNorm::L2,
        }
    }
}

impl EdgeParams {
    pub fn new(low_threshold: f64, high_threshold: f64, gray_cutoff: i32) -> Self {
        Self {
            low_threshold,
            high_threshold,
            gray_cutoff,
            ..Self::default()
        }
    }

    /// Edge-stage parameters; thresholds must be finite.
    pub fn canny_params(&self) -> Result<CannyParams, EdgeError> {
        Ok(CannyParams {
            low: finite_threshold(self.low_threshold)?,
            high: finite_threshold(self.high_threshold)?,
            kernel: self.kernel,
            norm: self.norm,
        })
    }
}

fn finite_threshold(v: f64) -> Result<f64, EdgeError> {
    if !v.is_finite() {
        return Err(EdgeError::ProcessingFault(format!(
            "edge threshold {v} is not finite"
        )));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::EdgeParams;
    use crate::edges::{GradientKernel, GradientNorm};
    use crate::error::EdgeError;

    #[test]
    fn partial_json_fills_defaults() {
        let p: EdgeParams =
            serde_json::from_str(r#"{ "gray_cutoff": 40, "kernel": "scharr" }"#).unwrap();
        assert_eq!(p.gray_cutoff, 40);
        assert_eq!(p.kernel, GradientKernel::Scharr);
        assert_eq!(p.norm, GradientNorm::L2);
        assert_eq!(p.low_threshold, 50.0);
        assert_eq!(p.high_threshold, 150.0);
    }

    #[test]
    fn canny_params_reject_non_finite_and_keep_exact_values() {
        let bad = EdgeParams::new(f64::NAN, 10.0, 0);
        assert!(matches!(
            bad.canny_params(),
            Err(EdgeError::ProcessingFault(_))
        ));
        let bad = EdgeParams::new(1.0, f64::INFINITY, 0);
        assert!(bad.canny_params().is_err());
        let huge = EdgeParams::new(1.0, 1e300, 0).canny_params().unwrap();
        assert_eq!(huge.high, 1e300);
        let fine = EdgeParams::new(1020.00001, 150.0, 0).canny_params().unwrap();
        assert_eq!(fine.low, 1020.00001);
    }
}
