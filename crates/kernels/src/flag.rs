//! Flag patterns: fixed palettes selected by region within the view bounds.

use tint_core::region::{centered_circle, horizontal_thirds, vertical_thirds};
use tint_core::{Color, Invocation, Kernel, KernelError, ParamKind, ParamSpec, Signature};

const BOUNDS_ONLY: Signature =
    Signature::new(true, &[ParamSpec::new("bounds", ParamKind::Rect)]);

/// Green, white, orange columns, left to right.
pub fn vertical_tricolor_palette() -> [Color; 3] {
    [
        Color::from_channels(22, 155, 98),
        Color::from_channels(255, 255, 255),
        Color::from_channels(255, 136, 62),
    ]
}

/// Black, red, gold rows, top to bottom.
pub fn horizontal_tricolor_palette() -> [Color; 3] {
    [
        Color::from_channels(0, 0, 0),
        Color::from_channels(221, 0, 0),
        Color::from_channels(255, 206, 0),
    ]
}

/// `[disc, field]`: crimson disc on a white field.
pub fn disc_palette() -> [Color; 2] {
    [
        Color::from_channels(188, 0, 45),
        Color::from_channels(255, 255, 255),
    ]
}

fn vertical_tricolor(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    let bounds = inv.rect(0)?;
    Ok(vertical_tricolor_palette()[vertical_thirds(inv.position, &bounds).index()])
}

fn horizontal_tricolor(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    let bounds = inv.rect(0)?;
    Ok(horizontal_tricolor_palette()[horizontal_thirds(inv.position, &bounds).index()])
}

fn disc(inv: &Invocation<'_>) -> Result<Color, KernelError> {
    let bounds = inv.rect(0)?;
    Ok(disc_palette()[centered_circle(inv.position, &bounds).index()])
}

pub const FLAG_VERTICAL_TRICOLOR: Kernel = Kernel::new(
    "flag-vertical-tricolor",
    "three equal vertical bands",
    BOUNDS_ONLY,
    vertical_tricolor,
);

pub const FLAG_HORIZONTAL_TRICOLOR: Kernel = Kernel::new(
    "flag-horizontal-tricolor",
    "three equal horizontal bands",
    BOUNDS_ONLY,
    horizontal_tricolor,
);

pub const FLAG_DISC: Kernel = Kernel::new(
    "flag-disc",
    "centered disc on a plain field",
    BOUNDS_ONLY,
    disc,
);
