//! Reproducible description of a shading pass.
//!
//! A [`Recipe`] captures everything needed to re-render an image: kernel
//! name, pixel dimensions, parameter JSON, and the view's current color.

use crate::color::Color;
use crate::error::KernelError;
use crate::geometry::{pixel_count, BoundingRect};
use serde::{Deserialize, Serialize};

/// Reproducible description of one shading pass.
///
/// Two identical recipes evaluated by the same kernel catalog produce
/// bit-identical frames.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub kernel: String,
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub params: serde_json::Value,
    #[serde(default = "default_current")]
    pub current: Color,
}

fn default_current() -> Color {
    Color::TRANSPARENT
}

impl Recipe {
    /// Creates a recipe with no parameters and a transparent current color.
    pub fn new(kernel: &str, width: usize, height: usize) -> Self {
        Self {
            kernel: kernel.to_string(),
            width,
            height,
            params: serde_json::Value::Null,
            current: default_current(),
        }
    }

    /// Validates that the recipe's pixel grid is non-empty and small enough
    /// to allocate; see [`pixel_count`].
    pub fn validate(&self) -> Result<(), KernelError> {
        pixel_count(self.width, self.height)?;
        Ok(())
    }

    /// Bounds of the rendered view, anchored at the origin.
    pub fn bounds(&self) -> BoundingRect {
        BoundingRect::from_size(self.width as f64, self.height as f64)
    }
}
