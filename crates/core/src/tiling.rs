//! Wrapped array indexing for repeating bands.
//!
//! A continuous coordinate is cut into bands of equal thickness; each band
//! maps to an index into a color array, wrapping around so that the pattern
//! repeats with period `count * thickness` in both directions.

use crate::error::KernelError;

/// Index of the band containing `y`, wrapped into `[0, count)`.
///
/// Computes `raw = floor(y / thickness)` and normalizes it with
/// `((raw % count) + count) % count`, which keeps negative coordinates in
/// range.
///
/// # Errors
///
/// - `KernelError::NonPositiveCount` if `count <= 0`
/// - `KernelError::ZeroThickness` if `thickness == 0`
/// - `KernelError::NonFiniteCoordinate` if `y / thickness` is NaN or infinite
pub fn stripe_index(y: f64, thickness: f64, count: i64) -> Result<usize, KernelError> {
    if count <= 0 {
        return Err(KernelError::NonPositiveCount(count));
    }
    if thickness == 0.0 {
        return Err(KernelError::ZeroThickness);
    }
    let band = (y / thickness).floor();
    if !band.is_finite() {
        return Err(KernelError::NonFiniteCoordinate(band));
    }
    // Saturating cast; bands beyond i64 range still wrap into [0, count).
    // Widened so `+ count` cannot overflow for counts near i64::MAX.
    let raw = band as i64 as i128;
    let count = i128::from(count);
    let wrapped = ((raw % count) + count) % count;
    Ok(wrapped as usize)
}
