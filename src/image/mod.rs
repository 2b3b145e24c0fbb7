//! Image buffers and views used by the pipeline.
//!
//! - [`BgraImage`]: borrowed 4-channel color view (blue, green, red, alpha)
//!   with byte stride, so a cropped region is a view and not a copy.
//! - [`ImageU8`]: borrowed single-channel view.
//! - [`GrayImageU8`]: owned single-channel buffer produced by the stages.
//! - [`ImageF32`]: owned float buffer for gradients and magnitudes.
pub mod bgra;
pub mod f32;
pub mod gray;
pub mod synthetic;
pub mod traits;
pub mod u8;

pub use self::bgra::{BgraImage, BGRA_CHANNELS};
pub use self::f32::ImageF32;
pub use self::gray::GrayImageU8;
pub use self::traits::{ImageView, ImageViewMut, Rows};
pub use self::u8::ImageU8;

use crate::error::EdgeError;

/// Element count of a packed `width × height × channels` buffer, or a
/// fault when the declared geometry does not fit in `usize`.
pub(crate) fn buffer_len(width: usize, height: usize, channels: usize) -> Result<usize, EdgeError> {
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| EdgeError::ProcessingFault(format!("image size {width}x{height} overflows")))
}
