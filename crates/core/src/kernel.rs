//! The kernel type: a named pure function with a declared signature.
//!
//! A kernel maps one pixel coordinate (plus the view's current color and its
//! bound parameters) to an opaque [`Color`]. Kernels hold no state; the same
//! inputs always yield the same output, so evaluations can run in any order
//! and on any thread.

use serde_json::{json, Value};

use crate::color::Color;
use crate::error::KernelError;
use crate::geometry::{BoundingRect, PixelCoordinate};
use crate::params::{ColorArray, ParamKind, ParamValue, ParameterList};

/// A named formal parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
}

impl ParamSpec {
    pub const fn new(name: &'static str, kind: ParamKind) -> Self {
        Self { name, kind }
    }
}

/// Declared parameter signature of a kernel.
///
/// `current_color` marks the stitchable form, where the second argument after
/// the position is the view's existing color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    current_color: bool,
    params: &'static [ParamSpec],
}

impl Signature {
    pub const fn new(current_color: bool, params: &'static [ParamSpec]) -> Self {
        Self {
            current_color,
            params,
        }
    }

    /// Whether the kernel receives the view's current color.
    pub fn takes_current_color(&self) -> bool {
        self.current_color
    }

    /// Formal parameters after position and current color, in order.
    pub fn params(&self) -> &'static [ParamSpec] {
        self.params
    }

    /// Checks that `params` matches this signature exactly.
    ///
    /// Returns `KernelError::ArityMismatch` on a count mismatch, or
    /// `KernelError::ParamTypeMismatch` naming the first parameter whose kind
    /// differs.
    pub fn check(&self, kernel: &str, params: &ParameterList) -> Result<(), KernelError> {
        if params.len() != self.params.len() {
            return Err(KernelError::ArityMismatch {
                kernel: kernel.to_string(),
                expected: self.params.len(),
                got: params.len(),
            });
        }
        for (spec, value) in self.params.iter().zip(params.iter()) {
            if spec.kind != value.kind() {
                return Err(KernelError::ParamTypeMismatch {
                    kernel: kernel.to_string(),
                    name: spec.name.to_string(),
                    expected: spec.kind.to_string(),
                    got: value.kind().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Human-readable form, e.g. `(position, current, thickness: float)`.
    pub fn describe(&self) -> String {
        let mut parts = vec!["position".to_string()];
        if self.current_color {
            parts.push("current".to_string());
        }
        parts.extend(
            self.params
                .iter()
                .map(|p| format!("{}: {}", p.name, p.kind)),
        );
        format!("({})", parts.join(", "))
    }

    /// JSON description of the signature.
    pub fn to_json(&self) -> Value {
        json!({
            "current_color": self.current_color,
            "params": self
                .params
                .iter()
                .map(|p| json!({"name": p.name, "type": p.kind.as_str()}))
                .collect::<Vec<_>>(),
        })
    }
}

/// Everything a kernel sees for one pixel.
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    kernel: &'static str,
    pub position: PixelCoordinate,
    pub current: Color,
    params: &'a ParameterList,
}

impl<'a> Invocation<'a> {
    fn param(&self, index: usize) -> Result<&'a ParamValue, KernelError> {
        self.params
            .get(index)
            .ok_or_else(|| KernelError::ArityMismatch {
                kernel: self.kernel.to_string(),
                expected: index + 1,
                got: self.params.len(),
            })
    }

    fn wrong_kind(&self, index: usize, expected: ParamKind, got: &ParamValue) -> KernelError {
        KernelError::ParamTypeMismatch {
            kernel: self.kernel.to_string(),
            name: format!("#{index}"),
            expected: expected.to_string(),
            got: got.kind().to_string(),
        }
    }

    /// Float parameter at `index`.
    pub fn float(&self, index: usize) -> Result<f64, KernelError> {
        match self.param(index)? {
            ParamValue::Float(v) => Ok(*v),
            other => Err(self.wrong_kind(index, ParamKind::Float, other)),
        }
    }

    /// Color parameter at `index`.
    pub fn color(&self, index: usize) -> Result<Color, KernelError> {
        match self.param(index)? {
            ParamValue::Color(c) => Ok(*c),
            other => Err(self.wrong_kind(index, ParamKind::Color, other)),
        }
    }

    /// Color array parameter at `index`, borrowed from the bound list.
    pub fn color_array(&self, index: usize) -> Result<&'a ColorArray, KernelError> {
        match self.param(index)? {
            ParamValue::ColorArray(a) => Ok(a),
            other => Err(self.wrong_kind(index, ParamKind::ColorArray, other)),
        }
    }

    /// Rect parameter at `index`.
    pub fn rect(&self, index: usize) -> Result<BoundingRect, KernelError> {
        match self.param(index)? {
            ParamValue::Rect(r) => Ok(*r),
            other => Err(self.wrong_kind(index, ParamKind::Rect, other)),
        }
    }
}

/// Evaluation function of a kernel.
pub type KernelFn = fn(&Invocation<'_>) -> Result<Color, KernelError>;

/// A named pure per-pixel color function.
#[derive(Clone, Copy)]
pub struct Kernel {
    name: &'static str,
    description: &'static str,
    signature: Signature,
    eval: KernelFn,
}

impl Kernel {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        signature: Signature,
        eval: KernelFn,
    ) -> Self {
        Self {
            name,
            description,
            signature,
            eval,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Validates `params` against the signature and binds them.
    ///
    /// This is the only place signature mismatches are reported; evaluating
    /// a [`BoundKernel`] never fails with a configuration error.
    pub fn bind(&self, params: ParameterList) -> Result<BoundKernel<'_>, KernelError> {
        self.signature.check(self.name, &params)?;
        log::debug!(
            "bound kernel '{}' with {} parameter(s)",
            self.name,
            params.len()
        );
        Ok(BoundKernel {
            kernel: self,
            params,
        })
    }
}

impl std::fmt::Debug for Kernel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Kernel")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A kernel together with parameters that passed the signature check.
#[derive(Debug, Clone)]
pub struct BoundKernel<'k> {
    kernel: &'k Kernel,
    params: ParameterList,
}

impl<'k> BoundKernel<'k> {
    pub fn kernel(&self) -> &'k Kernel {
        self.kernel
    }

    pub fn params(&self) -> &ParameterList {
        &self.params
    }

    /// Evaluates the kernel for one pixel.
    ///
    /// `current` is ignored by kernels whose signature does not take it.
    /// Errors are domain errors from the kernel's arithmetic.
    pub fn evaluate(&self, position: PixelCoordinate, current: Color) -> Result<Color, KernelError> {
        let invocation = Invocation {
            kernel: self.kernel.name,
            position,
            current,
            params: &self.params,
        };
        (self.kernel.eval)(&invocation)
    }
}
