//! Edge detection on binary or grayscale 8-bit images.
//!
//! - [`grad`]: 3×3 Sobel/Scharr gradients, magnitude, 4-bin direction.
//! - [`nms`]: thinning along the gradient direction.
//! - [`hysteresis`]: strong/weak classification and edge tracking.
//! - [`canny`]: the three stages composed, with timings and pixel counts.
//!
//! Borders: the outermost pixel frame has no full 3×3 neighborhood and is
//! treated as zero gradient, so it never carries an edge.

pub mod canny;
pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use canny::{canny, CannyParams, CannyResult, EdgeStats};
pub use grad::{image_gradients, sobel_gradients, Grad, GradientDirection, GradientKernel, GradientNorm};
pub use hysteresis::{hysteresis, HysteresisOutput};
pub use nms::non_max_suppression;
