//! Error types for the tint core.
//!
//! Errors fall into two classes. Configuration errors (unknown kernel,
//! signature mismatch, bad parameter values) are detected once, when a kernel
//! is bound, before any pixel is evaluated. Domain errors (zero divisor,
//! empty color array) are detected per invocation.

use thiserror::Error;

/// Coarse classification of a [`KernelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Detected while binding; fatal to the shading pass.
    Configuration,
    /// Detected while evaluating a single pixel.
    Domain,
    /// Snapshot output failed.
    Io,
}

/// Errors produced by kernel lookup, binding, and evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KernelError {
    /// No kernel with this name is registered.
    #[error("kernel not found: {0}")]
    KernelNotFound(String),

    /// A kernel with this name was already registered.
    #[error("duplicate kernel name: {0}")]
    DuplicateKernel(String),

    /// The number of bound parameters differs from the kernel's signature.
    #[error("kernel '{kernel}' expects {expected} parameters, got {got}")]
    ArityMismatch {
        kernel: String,
        expected: usize,
        got: usize,
    },

    /// A bound parameter has the wrong kind.
    #[error("parameter '{name}' of kernel '{kernel}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        kernel: String,
        name: String,
        expected: String,
        got: String,
    },

    /// A parameter named by the signature was not supplied.
    #[error("kernel '{kernel}' is missing parameter '{name}'")]
    MissingParam { kernel: String, name: String },

    /// A supplied parameter is not part of the signature.
    #[error("kernel '{kernel}' has no parameter named '{name}'")]
    UnknownParam { kernel: String, name: String },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// Width or height was zero, or the pixel count overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A tile thickness of zero was used as a divisor.
    #[error("stripe thickness must be non-zero")]
    ZeroThickness,

    /// A color array length (stripe count) was zero or negative.
    #[error("stripe count must be positive, got {0}")]
    NonPositiveCount(i64),

    /// A coordinate divided by the tile thickness was NaN or infinite.
    #[error("non-finite tile coordinate: {0}")]
    NonFiniteCoordinate(f64),

    /// The worker pool for a shading pass could not be created.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(String),

    /// Writing an output image failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl KernelError {
    /// Returns the class of this error.
    pub fn class(&self) -> ErrorClass {
        match self {
            KernelError::ZeroThickness
            | KernelError::NonPositiveCount(_)
            | KernelError::NonFiniteCoordinate(_) => ErrorClass::Domain,
            KernelError::Io(_) => ErrorClass::Io,
            _ => ErrorClass::Configuration,
        }
    }

    /// True for errors raised per pixel by kernel arithmetic.
    pub fn is_domain(&self) -> bool {
        self.class() == ErrorClass::Domain
    }

    /// True for errors raised before evaluation begins.
    pub fn is_configuration(&self) -> bool {
        self.class() == ErrorClass::Configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_not_found_includes_name() {
        let err = KernelError::KernelNotFound("sparkle".into());
        let msg = format!("{err}");
        assert!(msg.contains("sparkle"), "missing name in: {msg}");
    }

    #[test]
    fn arity_mismatch_includes_counts() {
        let err = KernelError::ArityMismatch {
            kernel: "blend".into(),
            expected: 2,
            got: 5,
        };
        let msg = format!("{err}");
        assert!(msg.contains("blend"), "missing kernel in: {msg}");
        assert!(msg.contains('2'), "missing expected in: {msg}");
        assert!(msg.contains('5'), "missing got in: {msg}");
    }

    #[test]
    fn param_type_mismatch_includes_all_fields() {
        let err = KernelError::ParamTypeMismatch {
            kernel: "stripes".into(),
            name: "thickness".into(),
            expected: "float".into(),
            got: "color".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("stripes"), "missing kernel in: {msg}");
        assert!(msg.contains("thickness"), "missing param in: {msg}");
        assert!(msg.contains("float"), "missing expected in: {msg}");
        assert!(msg.contains("color"), "missing got in: {msg}");
    }

    #[test]
    fn non_positive_count_includes_value() {
        let msg = format!("{}", KernelError::NonPositiveCount(-3));
        assert!(msg.contains("-3"), "missing count in: {msg}");
    }

    #[test]
    fn domain_errors_are_classified() {
        assert!(KernelError::ZeroThickness.is_domain());
        assert!(KernelError::NonPositiveCount(0).is_domain());
        assert!(KernelError::NonFiniteCoordinate(f64::NAN).is_domain());
        assert!(!KernelError::ZeroThickness.is_configuration());
    }

    #[test]
    fn configuration_errors_are_classified() {
        assert!(KernelError::KernelNotFound("x".into()).is_configuration());
        assert!(KernelError::DuplicateKernel("x".into()).is_configuration());
        assert!(KernelError::InvalidDimensions.is_configuration());
        assert!(KernelError::InvalidColor("x".into()).is_configuration());
        assert!(KernelError::ThreadPool("x".into()).is_configuration());
        assert_eq!(KernelError::Io("disk".into()).class(), ErrorClass::Io);
    }

    #[test]
    fn kernel_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KernelError>();
    }

    #[test]
    fn kernel_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<KernelError>();
    }
}
