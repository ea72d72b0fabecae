//! Pixel coordinates and the view's bounding rectangle.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::KernelError;

/// Largest accepted grid side, the PNG format's `u32` limit.
pub const MAX_SIDE: usize = u32::MAX as usize;

/// Checks pixel grid dimensions and returns the pixel count.
///
/// Returns `KernelError::InvalidDimensions` if either side is zero or above
/// [`MAX_SIDE`], or if a `Vec<Color>` of `width * height` pixels could not be
/// allocated (more than `isize::MAX` bytes).
pub fn pixel_count(width: usize, height: usize) -> Result<usize, KernelError> {
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return Err(KernelError::InvalidDimensions);
    }
    let count = width
        .checked_mul(height)
        .ok_or(KernelError::InvalidDimensions)?;
    let bytes = count
        .checked_mul(std::mem::size_of::<Color>())
        .ok_or(KernelError::InvalidDimensions)?;
    if bytes > isize::MAX as usize {
        return Err(KernelError::InvalidDimensions);
    }
    Ok(count)
}

/// Position of a pixel in the view's local space.
///
/// x grows rightward, y grows along the view's vertical axis.
pub type PixelCoordinate = DVec2;

/// Extent of the view being shaded: origin plus size.
///
/// Region classification only reads `width` and `height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle anchored at the origin.
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Center of the rectangle's size, measured from the view origin.
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Smaller of width and height.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// True when both sides are strictly positive.
    pub fn has_area(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_count_of_small_grid() {
        assert_eq!(pixel_count(300, 200).unwrap(), 60_000);
        assert_eq!(pixel_count(1, 1).unwrap(), 1);
    }

    #[test]
    fn pixel_count_rejects_zero_sides() {
        assert_eq!(pixel_count(0, 5), Err(KernelError::InvalidDimensions));
        assert_eq!(pixel_count(5, 0), Err(KernelError::InvalidDimensions));
    }

    #[test]
    fn pixel_count_rejects_unallocatable_grids() {
        assert_eq!(
            pixel_count(1 << 31, 1 << 31),
            Err(KernelError::InvalidDimensions)
        );
        assert_eq!(pixel_count(usize::MAX, 2), Err(KernelError::InvalidDimensions));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn pixel_count_rejects_sides_beyond_png_limit() {
        assert_eq!(pixel_count(MAX_SIDE, 1).unwrap(), MAX_SIDE);
        assert_eq!(
            pixel_count(MAX_SIDE + 1, 1),
            Err(KernelError::InvalidDimensions)
        );
    }

    #[test]
    fn from_size_is_anchored_at_origin() {
        let r = BoundingRect::from_size(300.0, 200.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
        assert_eq!(r.width, 300.0);
        assert_eq!(r.height, 200.0);
    }

    #[test]
    fn center_ignores_origin() {
        let r = BoundingRect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(r.center(), DVec2::new(50.0, 25.0));
    }

    #[test]
    fn min_side_picks_shorter_edge() {
        assert_eq!(BoundingRect::from_size(100.0, 40.0).min_side(), 40.0);
        assert_eq!(BoundingRect::from_size(30.0, 40.0).min_side(), 30.0);
    }

    #[test]
    fn has_area_rejects_degenerate_rects() {
        assert!(BoundingRect::from_size(1.0, 1.0).has_area());
        assert!(!BoundingRect::from_size(0.0, 1.0).has_area());
        assert!(!BoundingRect::from_size(1.0, -1.0).has_area());
    }

    #[test]
    fn serde_round_trips_field_names() {
        let r = BoundingRect::new(1.0, 2.0, 3.0, 4.0);
        let v = serde_json::to_value(r).unwrap();
        assert_eq!(v["width"], 3.0);
        let back: BoundingRect = serde_json::from_value(v).unwrap();
        assert_eq!(back, r);
    }
}
