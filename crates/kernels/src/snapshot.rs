//! PNG output of a shaded [`Frame`].
//!
//! Feature-gated behind `png` (default on) so embedders that only need the
//! byte buffer from [`crate::pixel`] do not pull in the `image` crate.

use std::path::Path;

use tint_core::KernelError;

use crate::pass::Frame;
use crate::pixel::frame_to_rgba;

/// Writes a frame as an RGBA PNG image.
///
/// Returns `KernelError::InvalidDimensions` if the frame dimensions overflow
/// `u32`, or `KernelError::Io` on write failure.
pub fn write_png(frame: &Frame, path: &Path) -> Result<(), KernelError> {
    let rgba = frame_to_rgba(frame);
    let w = u32::try_from(frame.width()).map_err(|_| KernelError::InvalidDimensions)?;
    let h = u32::try_from(frame.height()).map_err(|_| KernelError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| KernelError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| KernelError::Io(e.to_string()))?;
    log::debug!("wrote {}x{} PNG to {}", w, h, path.display());
    Ok(())
}
