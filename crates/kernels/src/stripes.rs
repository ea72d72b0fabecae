//! Horizontal bands cycling through a color array.

use tint_core::tiling::stripe_index;
use tint_core::{Color, Invocation, Kernel, KernelError, ParamKind, ParamSpec, Signature};

/// Selects `colors[stripe_index(y, thickness, colors.len())]`.
///
/// An empty array is a non-positive count and fails with a domain error.
fn stripes(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    let thickness = inv.float(0)?;
    let colors = inv.color_array(1)?;
    let index = stripe_index(inv.position.y, thickness, colors.count())?;
    colors
        .get(index)
        .ok_or(KernelError::NonPositiveCount(colors.count()))
}

pub const STRIPES: Kernel = Kernel::new(
    "stripes",
    "horizontal bands of equal thickness, repeating through the colors",
    Signature::new(
        false,
        &[
            ParamSpec::new("thickness", ParamKind::Float),
            ParamSpec::new("colors", ParamKind::ColorArray),
        ],
    ),
    stripes,
);
