//! CLI failures and their process exit codes.
//!
//! Kernel errors are split by [`ErrorClass`]: a configuration error means the
//! request was rejected before any pixel was shaded, a domain error means a
//! pixel evaluation failed mid-pass without a `--fallback` color.
//!
//! | code | meaning |
//! |------|---------|
//! | 0    | success |
//! | 2    | argument parse error (clap) |
//! | 10   | kernel configuration error (unknown kernel, bad params, bad size) |
//! | 11   | I/O error (recipe read, PNG write) |
//! | 12   | input error (bad color flag, bad JSON params or recipe) |
//! | 13   | serialization error |
//! | 14   | kernel domain error during shading |

use tint_core::{ErrorClass, KernelError};

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Configuration(KernelError),
    #[error("shading failed: {0}")]
    Domain(KernelError),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Input(String),
    #[error("cannot serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Configuration(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::Domain(_) => 14,
        }
    }
}

impl From<KernelError> for CliError {
    fn from(e: KernelError) -> Self {
        match e.class() {
            ErrorClass::Configuration => CliError::Configuration(e),
            ErrorClass::Domain => CliError::Domain(e),
            ErrorClass::Io => CliError::Io(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kernel_is_configuration() {
        let err = CliError::from(KernelError::KernelNotFound("plaid".into()));
        assert!(matches!(err, CliError::Configuration(_)));
        assert_eq!(err.exit_code(), 10);
        assert!(err.to_string().contains("plaid"));
    }

    #[test]
    fn binding_failures_are_configuration() {
        let errors = [
            KernelError::ArityMismatch {
                kernel: "blend".into(),
                expected: 2,
                got: 1,
            },
            KernelError::InvalidDimensions,
            KernelError::ThreadPool("zero workers".into()),
        ];
        for e in errors {
            assert_eq!(CliError::from(e).exit_code(), 10);
        }
    }

    #[test]
    fn per_pixel_failures_are_domain() {
        let errors = [
            KernelError::NonPositiveCount(0),
            KernelError::ZeroThickness,
            KernelError::NonFiniteCoordinate(f64::NAN),
        ];
        for e in errors {
            let err = CliError::from(e);
            assert!(matches!(err, CliError::Domain(_)));
            assert_eq!(err.exit_code(), 14);
        }
    }

    #[test]
    fn kernel_io_keeps_its_message() {
        let err = CliError::from(KernelError::Io("disk full".into()));
        assert_eq!(err.exit_code(), 11);
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn serde_json_errors_convert_with_question_mark() {
        fn parse() -> Result<serde_json::Value, CliError> {
            Ok(serde_json::from_str("{invalid")?)
        }
        let err = parse().unwrap_err();
        assert!(matches!(err, CliError::Serialization(_)));
        assert_eq!(err.exit_code(), 13);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            CliError::Configuration(KernelError::InvalidDimensions).exit_code(),
            CliError::Domain(KernelError::ZeroThickness).exit_code(),
            CliError::Io(String::new()).exit_code(),
            CliError::Input(String::new()).exit_code(),
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
