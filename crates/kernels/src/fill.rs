//! Solid fills: four fixed colors, a parametrized fill, and a 50/50 blend.
//!
//! All of these ignore the position and the current color.

use tint_core::blend::mix;
use tint_core::{Color, Invocation, Kernel, KernelError, ParamKind, ParamSpec, Signature};

const NO_PARAMS: Signature = Signature::new(true, &[]);

fn red(_: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(Color::RED)
}

fn green(_: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(Color::GREEN)
}

fn blue(_: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(Color::BLUE)
}

fn orange(_: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(Color::ORANGE)
}

pub const FILL_RED: Kernel = Kernel::new("fill-red", "solid red", NO_PARAMS, red);
pub const FILL_GREEN: Kernel = Kernel::new("fill-green", "solid green", NO_PARAMS, green);
pub const FILL_BLUE: Kernel = Kernel::new("fill-blue", "solid blue", NO_PARAMS, blue);
pub const FILL_ORANGE: Kernel = Kernel::new("fill-orange", "solid orange", NO_PARAMS, orange);

/// Returns the bound `color` with its alpha forced to 1.
fn fill(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(inv.color(0)?.with_opaque_alpha())
}

/// Solid fill with the bound `color`; its alpha is replaced with 1 so the
/// output stays opaque like every other kernel's.
pub const FILL: Kernel = Kernel::new(
    "fill",
    "solid fill with a caller-chosen color",
    Signature::new(true, &[ParamSpec::new("color", ParamKind::Color)]),
    fill,
);

fn blend(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    Ok(mix(inv.color(0)?, inv.color(1)?))
}

pub const BLEND: Kernel = Kernel::new(
    "blend",
    "even mix of a bottom and a top color",
    Signature::new(
        true,
        &[
            ParamSpec::new("bottom", ParamKind::Color),
            ParamSpec::new("top", ParamKind::Color),
        ],
    ),
    blend,
);
