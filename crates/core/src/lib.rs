#![deny(unsafe_code)]
//! Core types for tint, a library of per-pixel color kernels.
//!
//! Provides the normalized [`Color`], [`BoundingRect`], band indexing
//! ([`tiling::stripe_index`]), region classification ([`region`]), fixed-ratio
//! blending ([`blend::mix`]), typed kernel parameters, the [`Kernel`] type and
//! the [`KernelRegistry`].

pub mod blend;
pub mod color;
pub mod error;
pub mod geometry;
pub mod kernel;
pub mod params;
pub mod recipe;
pub mod region;
pub mod registry;
pub mod tiling;

pub use color::Color;
pub use error::{ErrorClass, KernelError};
pub use geometry::{pixel_count, BoundingRect, PixelCoordinate};
pub use kernel::{BoundKernel, Invocation, Kernel, KernelFn, ParamSpec, Signature};
pub use params::{ColorArray, ParamKind, ParamValue, ParameterList};
pub use recipe::Recipe;
pub use region::{Disc, RegionPattern, Third};
pub use registry::KernelRegistry;
