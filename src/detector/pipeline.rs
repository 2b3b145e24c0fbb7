use super::params::EdgeParams;
use crate::color::bgra_to_gray;
use crate::diagnostics::{DetectionReport, InputDescriptor, PipelineTrace, TimingBreakdown};
use crate::edges::{canny, CannyParams};
use crate::error::EdgeError;
use crate::image::BgraImage;
use crate::roi::resolve_roi;
use crate::threshold::threshold_binary;
use crate::types::{EdgeMask, Region, RoiRect};
use log::debug;
use std::time::Instant;

/// Stateless detector; every call is a pure function of its inputs.
#[derive(Clone, Debug, Default)]
pub struct RoiEdgeDetector {
    params: EdgeParams,
}

impl RoiEdgeDetector {
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Edge mask of the clamped `roi`.
    pub fn detect(&self, image: &BgraImage<'_>, roi: RoiRect) -> Result<EdgeMask, EdgeError> {
        self.detect_with_diagnostics(image, roi)
            .map(|report| report.mask)
    }

    /// Write the mask for `roi` into the first `w' × h'` bytes of `out` and
    /// return the clamped region. `out` is checked before any work is done and
    /// bytes past the mask are left untouched.
    pub fn detect_into(
        &self,
        image: &BgraImage<'_>,
        roi: RoiRect,
        out: &mut [u8],
    ) -> Result<Region, EdgeError> {
        let canny_params = self.params.canny_params()?;
        let region = resolve_roi(image.width(), image.height(), roi)?;
        if out.len() < region.area() {
            return Err(EdgeError::SizeMismatch {
                expected: region.area(),
                actual: out.len(),
            });
        }
        let report = self.run_region(
            image,
            roi,
            region,
            &canny_params,
            TimingBreakdown::default(),
            Instant::now(),
        )?;
        out[..region.area()].copy_from_slice(report.mask.data());
        Ok(region)
    }

    /// Run the pipeline and keep a per-stage trace alongside the mask.
    pub fn detect_with_diagnostics(
        &self,
        image: &BgraImage<'_>,
        roi: RoiRect,
    ) -> Result<DetectionReport, EdgeError> {
        let total_start = Instant::now();
        let canny_params = self.params.canny_params()?;
        let mut timings = TimingBreakdown::default();

        let stage = Instant::now();
        let region = resolve_roi(image.width(), image.height(), roi)?;
        timings.push("roi", elapsed_ms(stage));
        self.run_region(image, roi, region, &canny_params, timings, total_start)
    }

    /// Stages after ROI resolution; `region` must already be clamped to `image`.
    fn run_region(
        &self,
        image: &BgraImage<'_>,
        roi: RoiRect,
        region: Region,
        canny_params: &CannyParams,
        mut timings: TimingBreakdown,
        total_start: Instant,
    ) -> Result<DetectionReport, EdgeError> {
        let view = image.crop(region)?;
        debug!(
            "RoiEdgeDetector: {:?} on {}x{} resolved to {:?}",
            roi,
            image.width(),
            image.height(),
            region
        );

        let stage = Instant::now();
        let gray = bgra_to_gray(&view);
        timings.push("grayscale", elapsed_ms(stage));

        let stage = Instant::now();
        let binary = threshold_binary(&gray.as_view(), self.params.gray_cutoff);
        timings.push("threshold", elapsed_ms(stage));

        let result = canny(&binary.as_view(), canny_params)?;
        timings.push("gradient", result.gradient_ms);
        timings.push("nms", result.nms_ms);
        timings.push("hysteresis", result.hysteresis_ms);
        timings.total_ms = elapsed_ms(total_start);

        debug!(
            "RoiEdgeDetector: {} edge pixels ({} strong, {} promoted of {} weak) in {:.3} ms",
            result.stats.edge_pixels,
            result.stats.strong,
            result.stats.promoted,
            result.stats.weak,
            timings.total_ms
        );

        let trace = PipelineTrace {
            input: InputDescriptor {
                width: image.width(),
                height: image.height(),
            },
            requested_roi: roi,
            region,
            params: self.params,
            timings,
            edges: result.stats,
        };
        Ok(DetectionReport {
            mask: EdgeMask {
                region,
                image: result.edges,
            },
            trace,
        })
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
