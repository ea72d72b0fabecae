//! Fixed-ratio color mixing.

use crate::color::Color;

/// Averages the RGB channels of `bottom` and `top` and forces alpha to 1.
///
/// Input alphas are ignored.
pub fn mix(bottom: Color, top: Color) -> Color {
    Color::opaque(
        (bottom.r + top.r) / 2.0,
        (bottom.g + top.g) / 2.0,
        (bottom.b + top.b) / 2.0,
    )
}
