//! ROI edge detector: crop → grayscale → binary threshold → Canny.
//!
//! Overview
//! - The requested rectangle is clamped to the image; an empty result stops
//!   the call with [`EdgeError::InvalidRegion`](crate::EdgeError).
//! - The clamped region is a borrowed view of the caller's BGRA buffer.
//!   Every later stage writes a fresh buffer, so the input is never touched.
//! - The mask has the clamped region's size, not the image's.
//!
//! Modules
//! - [`params`] – tunables shared by the library, the status entry point and
//!   the tool config.
//! - `pipeline` – the [`RoiEdgeDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::EdgeParams;
pub use pipeline::RoiEdgeDetector;
