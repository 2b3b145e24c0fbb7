use crate::detector::EdgeParams;
use crate::image::synthetic::{checkerboard_bgra, uniform_bgra, vertical_step_bgra};
use crate::io::read_raw_bgra;
use crate::types::RoiRect;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// ```json
/// {
///   "input": { "kind": "raw", "path": "frame.bgra", "width": 640, "height": 480 },
///   "roi": { "x": 100, "y": 80, "width": 200, "height": 120 },
///   "edge": { "low_threshold": 50.0, "high_threshold": 150.0, "gray_cutoff": 128 },
///   "output": { "mask_raw": "out/mask.gray", "report_json": "out/report.json" }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: InputSource,
    /// Missing means the whole frame.
    #[serde(default)]
    pub roi: Option<RoiRect>,
    #[serde(default)]
    pub edge: EdgeParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputSource {
    /// Tightly packed BGRA bytes, `width × height × 4` long.
    Raw {
        path: PathBuf,
        width: usize,
        height: usize,
    },
    Synthetic {
        width: usize,
        height: usize,
        #[serde(default)]
        pattern: SyntheticPattern,
    },
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyntheticPattern {
    Uniform { level: u8 },
    Checkerboard { cell: usize },
    VerticalStep { edge_x: usize },
}

impl Default for SyntheticPattern {
    fn default() -> Self {
        Self::Checkerboard { cell: 16 }
    }
}

impl InputSource {
    /// Frame bytes with their width and height.
    pub fn load(&self) -> Result<(Vec<u8>, usize, usize), String> {
        match self {
            Self::Raw {
                path,
                width,
                height,
            } => Ok((read_raw_bgra(path, *width, *height)?, *width, *height)),
            Self::Synthetic {
                width,
                height,
                pattern,
            } => {
                let (w, h) = (*width, *height);
                let data = match *pattern {
                    SyntheticPattern::Uniform { level } => uniform_bgra(w, h, [level, level, level, 255]),
                    SyntheticPattern::Checkerboard { cell } => checkerboard_bgra(w, h, cell),
                    SyntheticPattern::VerticalStep { edge_x } => vertical_step_bgra(w, h, edge_x),
                };
                Ok((data, w, h))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    /// Raw mask bytes (one per pixel of the clamped ROI).
    #[serde(default)]
    pub mask_raw: Option<PathBuf>,
    pub report_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::{EdgeToolConfig, InputSource, SyntheticPattern};
    use crate::types::RoiRect;

    #[test]
    fn synthetic_config_parses_with_defaults() {
        let cfg: EdgeToolConfig = serde_json::from_str(
            r#"{
                "input": { "kind": "synthetic", "width": 32, "height": 24 },
                "output": { "report_json": "report.json" }
            }"#,
        )
        .unwrap();
        assert!(cfg.roi.is_none());
        assert!(cfg.output.mask_raw.is_none());
        assert_eq!(cfg.edge.gray_cutoff, 128);
        match &cfg.input {
            InputSource::Synthetic { pattern, .. } => {
                assert_eq!(*pattern, SyntheticPattern::Checkerboard { cell: 16 })
            }
            other => panic!("unexpected input {other:?}"),
        }
        let (data, w, h) = cfg.input.load().unwrap();
        assert_eq!((data.len(), w, h), (32 * 24 * 4, 32, 24));
    }

    #[test]
    fn full_config_parses() {
        let cfg: EdgeToolConfig = serde_json::from_str(
            r#"{
                "input": { "kind": "synthetic", "width": 20, "height": 10,
                           "pattern": { "type": "vertical_step", "edge_x": 7 } },
                "roi": { "x": -2, "y": 1, "width": 12, "height": 50 },
                "edge": { "low_threshold": 10.0, "high_threshold": 30.0, "norm": "l1" },
                "output": { "mask_raw": "m.gray", "report_json": "r.json" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.roi, Some(RoiRect::new(-2, 1, 12, 50)));
        assert_eq!(cfg.edge.low_threshold, 10.0);
        assert_eq!(cfg.edge.gray_cutoff, 128);
    }

    #[test]
    fn missing_raw_file_is_reported() {
        let input = InputSource::Raw {
            path: "definitely/not/here.bgra".into(),
            width: 2,
            height: 2,
        };
        let err = input.load().unwrap_err();
        assert!(err.contains("not/here.bgra"));
    }
}
