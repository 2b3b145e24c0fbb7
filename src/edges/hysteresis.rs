//! Double-threshold classification with 8-connected edge tracking.
//!
//! Thresholds stay in `f64` and each `f32` magnitude is widened before the
//! comparison, so the bounds hold exactly for any real-valued threshold.
//!
//! Only pixels with positive suppressed magnitude take part:
//! - `m >= high` → strong (seed)
//! - `low <= m < high` → weak (candidate)
//!
//! Every strong pixel seeds a worklist flood fill that promotes weak pixels
//! reachable through other promoted pixels. The set of promoted pixels is
//! exactly the union of connected components that contain a strong pixel,
//! independent of the order in which the worklist is drained.
use crate::image::{GrayImageU8, ImageF32, ImageView};
use crate::threshold::BINARY_MAX;

const NONE: u8 = 0;
const WEAK: u8 = 1;
const STRONG: u8 = 2;

#[derive(Clone, Debug)]
pub struct HysteresisOutput {
    pub mask: GrayImageU8,
    pub strong: usize,
    pub weak: usize,
    /// Weak pixels that ended up connected to a strong pixel.
    pub promoted: usize,
}

/// Order `(low, high)` so that `low <= high`.
#[inline]
pub fn ordered_thresholds(low: f64, high: f64) -> (f64, f64) {
    if low > high {
        (high, low)
    } else {
        (low, high)
    }
}

pub fn hysteresis(nms: &ImageF32, low: f64, high: f64) -> HysteresisOutput {
    let (low, high) = ordered_thresholds(low, high);
    let w = nms.w;
    let h = nms.h;
    let mut class = vec![NONE; w * h];
    let mut mask = GrayImageU8::new(w, h);
    let mut stack = Vec::new();
    let mut weak = 0usize;

    for y in 0..h {
        for (x, &m) in nms.row(y).iter().enumerate() {
            let m = f64::from(m);
            if m <= 0.0 || m < low {
                continue;
            }
            let idx = y * w + x;
            if m >= high {
                class[idx] = STRONG;
                stack.push(idx);
            } else {
                class[idx] = WEAK;
                weak += 1;
            }
        }
    }
    let strong = stack.len();
    for &idx in &stack {
        mask.set(idx % w, idx / w, BINARY_MAX);
    }

    let mut promoted = 0usize;
    while let Some(idx) = stack.pop() {
        let x = idx % w;
        let y = idx / w;
        let y0 = y.saturating_sub(1);
        let y1 = (y + 1).min(h - 1);
        let x0 = x.saturating_sub(1);
        let x1 = (x + 1).min(w - 1);

        for ny in y0..=y1 {
            for nx in x0..=x1 {
                let nidx = ny * w + nx;
                if class[nidx] == WEAK {
                    // Reclassify on push so each pixel enters the worklist once.
                    class[nidx] = STRONG;
                    mask.set(nx, ny, BINARY_MAX);
                    stack.push(nidx);
                    promoted += 1;
                }
            }
        }
    }

    HysteresisOutput {
        mask,
        strong,
        weak,
        promoted,
    }
}
