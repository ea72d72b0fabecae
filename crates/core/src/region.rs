//! Geometric region classification within a view's bounds.
//!
//! Boundary policy: comparisons are strict `<`, so a pixel lying exactly on
//! a third line belongs to the higher-indexed region, and a pixel exactly on
//! the circle belongs to `Disc::Outside`. Zero-area bounds never panic but
//! the resulting region is unspecified.

use crate::geometry::{BoundingRect, PixelCoordinate};
use serde::{Deserialize, Serialize};

/// Fraction of the shorter side used as the circle radius.
pub const DISC_RADIUS_FRACTION: f64 = 0.3;

/// One of three equal spans along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Third {
    First,
    Second,
    Third,
}

impl Third {
    /// Zero-based index: 0, 1 or 2.
    pub fn index(self) -> usize {
        match self {
            Third::First => 0,
            Third::Second => 1,
            Third::Third => 2,
        }
    }
}

/// Inside or outside the centered circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Inside,
    Outside,
}

impl Disc {
    /// 0 for `Inside`, 1 for `Outside`.
    pub fn index(self) -> usize {
        match self {
            Disc::Inside => 0,
            Disc::Outside => 1,
        }
    }
}

/// Classifies along a span of `extent` split into three equal parts.
fn third_of(coord: f64, extent: f64) -> Third {
    if coord < extent / 3.0 {
        Third::First
    } else if coord < 2.0 * extent / 3.0 {
        Third::Second
    } else {
        Third::Third
    }
}

/// Splits `bounds.width` into three columns and returns the one holding `position.x`.
pub fn vertical_thirds(position: PixelCoordinate, bounds: &BoundingRect) -> Third {
    third_of(position.x, bounds.width)
}

/// Splits `bounds.height` into three rows and returns the one holding `position.y`.
pub fn horizontal_thirds(position: PixelCoordinate, bounds: &BoundingRect) -> Third {
    third_of(position.y, bounds.height)
}

/// Tests `position` against a circle centered in the bounds with radius
/// `0.3 * min(width, height)`.
pub fn centered_circle(position: PixelCoordinate, bounds: &BoundingRect) -> Disc {
    let radius = DISC_RADIUS_FRACTION * bounds.min_side();
    if position.distance(bounds.center()) < radius {
        Disc::Inside
    } else {
        Disc::Outside
    }
}

/// A named region pattern, for callers that select the classifier at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionPattern {
    VerticalThirds,
    HorizontalThirds,
    CenteredCircle,
}

impl RegionPattern {
    /// Number of distinct regions this pattern produces.
    pub fn region_count(self) -> usize {
        match self {
            RegionPattern::VerticalThirds | RegionPattern::HorizontalThirds => 3,
            RegionPattern::CenteredCircle => 2,
        }
    }

    /// Region index in `[0, region_count())` for `position`.
    pub fn classify(self, position: PixelCoordinate, bounds: &BoundingRect) -> usize {
        match self {
            RegionPattern::VerticalThirds => vertical_thirds(position, bounds).index(),
            RegionPattern::HorizontalThirds => horizontal_thirds(position, bounds).index(),
            RegionPattern::CenteredCircle => centered_circle(position, bounds).index(),
        }
    }
}
