//! CPU shading pass: evaluates a bound kernel once per pixel of a grid.
//!
//! Pixel `(col, row)` is evaluated at its center `(col + 0.5, row + 0.5)`.
//! Rows are shaded in parallel; every evaluation sees the same bound
//! parameters and current color, and nothing is mutated between them.

use glam::DVec2;
use rayon::prelude::*;
use tint_core::{pixel_count, BoundKernel, BoundingRect, Color, KernelError};

/// What a pass does when a pixel evaluation fails with a domain error.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DomainErrorPolicy {
    /// Abandon the pass and return the first error in row-major order.
    #[default]
    Fail,
    /// Write this color for the failing pixel and keep going.
    Substitute(Color),
}

/// A `width * height` grid of shaded colors in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major pixel colors.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Color at `(col, row)`, or `None` outside the frame.
    pub fn get(&self, col: usize, row: usize) -> Option<Color> {
        if col >= self.width || row >= self.height {
            return None;
        }
        self.pixels.get(row * self.width + col).copied()
    }
}

/// One evaluation of a bound kernel over a pixel grid.
#[derive(Debug, Clone)]
pub struct ShadingPass<'k> {
    kernel: BoundKernel<'k>,
    width: usize,
    height: usize,
    current: Color,
    policy: DomainErrorPolicy,
    threads: Option<usize>,
}

impl<'k> ShadingPass<'k> {
    /// Creates a pass over a `width * height` grid.
    ///
    /// Returns `KernelError::InvalidDimensions` if either dimension is zero
    /// or the frame would be too large to allocate.
    pub fn new(kernel: BoundKernel<'k>, width: usize, height: usize) -> Result<Self, KernelError> {
        pixel_count(width, height)?;
        Ok(Self {
            kernel,
            width,
            height,
            current: Color::TRANSPARENT,
            policy: DomainErrorPolicy::default(),
            threads: None,
        })
    }

    /// Sets the view's current color passed to every evaluation.
    pub fn with_current(mut self, current: Color) -> Self {
        self.current = current;
        self
    }

    pub fn with_policy(mut self, policy: DomainErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Runs on a dedicated pool of `threads` workers instead of the global pool.
    ///
    /// `Some(0)` is rejected by [`ShadingPass::run`].
    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    /// Bounds of the shaded view, anchored at the origin.
    pub fn bounds(&self) -> BoundingRect {
        BoundingRect::from_size(self.width as f64, self.height as f64)
    }

    /// Evaluates a single pixel without applying the error policy.
    pub fn shade_pixel(&self, col: usize, row: usize) -> Result<Color, KernelError> {
        let position = DVec2::new(col as f64 + 0.5, row as f64 + 0.5);
        self.kernel.evaluate(position, self.current)
    }

    /// Shades one row into `out`, returning how many pixels were substituted.
    fn shade_row(&self, row: usize, out: &mut [Color]) -> Result<usize, KernelError> {
        let mut substituted = 0;
        for (col, slot) in out.iter_mut().enumerate() {
            *slot = match (self.shade_pixel(col, row), self.policy) {
                (Ok(color), _) => color,
                (Err(e), DomainErrorPolicy::Substitute(fallback)) if e.is_domain() => {
                    substituted += 1;
                    fallback
                }
                (Err(e), _) => return Err(e),
            };
        }
        Ok(substituted)
    }

    /// Shades every pixel and returns the frame.
    ///
    /// With [`DomainErrorPolicy::Fail`] the first failing pixel in row-major
    /// order aborts the pass. With [`DomainErrorPolicy::Substitute`] only the
    /// failing pixels receive the fallback color.
    pub fn run(&self) -> Result<Frame, KernelError> {
        log::debug!(
            "shading {}x{} with kernel '{}'",
            self.width,
            self.height,
            self.kernel.kernel().name()
        );
        let mut pixels = vec![Color::TRANSPARENT; self.width * self.height];
        let shade_all = |pixels: &mut Vec<Color>| {
            pixels
                .par_chunks_mut(self.width)
                .enumerate()
                .map(|(row, out)| self.shade_row(row, out))
                .collect::<Vec<_>>()
        };
        let rows = match self.threads {
            Some(n) => build_thread_pool(n)?.install(|| shade_all(&mut pixels)),
            None => shade_all(&mut pixels),
        };

        let mut substituted = 0;
        for row in rows {
            substituted += row?;
        }
        if substituted > 0 {
            log::warn!(
                "kernel '{}': substituted fallback color for {substituted} pixel(s)",
                self.kernel.kernel().name()
            );
        }

        Ok(Frame {
            width: self.width,
            height: self.height,
            pixels,
        })
    }
}

fn build_thread_pool(threads: usize) -> Result<rayon::ThreadPool, KernelError> {
    if threads == 0 {
        return Err(KernelError::ThreadPool(
            "thread count must be >= 1 when set".into(),
        ));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| KernelError::ThreadPool(e.to_string()))
}
