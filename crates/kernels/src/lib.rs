#![deny(unsafe_code)]
//! Kernel catalog and CPU shading for tint.
//!
//! This crate sits between `tint-core` (which defines kernels, parameters and
//! the registry) and the hosts that run them (the CLI, embedders). It owns the
//! concrete kernels, the process-wide built-in registry, and a reference
//! shading pass that evaluates a kernel over a pixel grid.

pub mod fill;
pub mod flag;
pub mod pass;
pub mod pixel;
pub mod stripes;

#[cfg(feature = "png")]
pub mod snapshot;

use std::sync::OnceLock;

use tint_core::{Kernel, KernelError, KernelRegistry, ParameterList, Recipe};

pub use pass::{DomainErrorPolicy, Frame, ShadingPass};

/// Every built-in kernel.
pub const KERNELS: &[Kernel] = &[
    fill::FILL_RED,
    fill::FILL_GREEN,
    fill::FILL_BLUE,
    fill::FILL_ORANGE,
    fill::FILL,
    fill::BLEND,
    stripes::STRIPES,
    flag::FLAG_VERTICAL_TRICOLOR,
    flag::FLAG_HORIZONTAL_TRICOLOR,
    flag::FLAG_DISC,
];

/// Builds a fresh registry holding every kernel in [`KERNELS`].
pub fn builtin_registry() -> Result<KernelRegistry, KernelError> {
    let mut registry = KernelRegistry::new();
    for kernel in KERNELS {
        registry.register(*kernel)?;
    }
    log::debug!("built-in registry holds {} kernels", registry.len());
    Ok(registry)
}

/// The process-wide built-in registry, created on first use and read-only
/// afterwards.
pub fn registry() -> &'static KernelRegistry {
    static REGISTRY: OnceLock<KernelRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| builtin_registry().expect("built-in kernel names are unique"))
}

/// Binds and shades a [`Recipe`] with the built-in registry.
///
/// Configuration errors (invalid dimensions, unknown kernel, bad parameters)
/// are reported before any pixel is evaluated.
pub fn render(recipe: &Recipe, policy: DomainErrorPolicy) -> Result<Frame, KernelError> {
    render_with(registry(), recipe, policy, None)
}

/// Like [`render`], with an explicit registry and optional worker count.
pub fn render_with(
    registry: &KernelRegistry,
    recipe: &Recipe,
    policy: DomainErrorPolicy,
    threads: Option<usize>,
) -> Result<Frame, KernelError> {
    recipe.validate()?;
    let kernel = registry.lookup(&recipe.kernel)?;
    let params = ParameterList::from_json(
        kernel.name(),
        kernel.signature(),
        &recipe.params,
        recipe.bounds(),
    )?;
    ShadingPass::new(kernel.bind(params)?, recipe.width, recipe.height)?
        .with_current(recipe.current)
        .with_policy(policy)
        .with_threads(threads)
        .run()
}
