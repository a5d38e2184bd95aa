//! Error handling for the elliptic-curve primitives

use std::borrow::Cow;
use std::fmt;

use vecc_api::{Error as CoreError, Result as CoreResult};

/// The error type for elliptic-curve primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Malformed key or point encoding
    Encoding {
        /// What was being decoded
        context: &'static str,
        /// What was wrong with it
        details: &'static str,
    },

    /// A computation could not produce a usable result
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },

    /// The random source failed or never produced an acceptable value
    RandomGeneration {
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, details: &'static str) -> Self {
        Error::Encoding { context, details }
    }
}

/// Result type for elliptic-curve primitives
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            Error::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::Encoding { context, details } => {
                write!(f, "Invalid encoding of {}: {}", context, details)
            }
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            }
            Error::RandomGeneration { details } => {
                write!(f, "Random generation failed: {}", details)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => match name {
                Cow::Borrowed(context) => CoreError::InvalidParameter {
                    context,
                    message: reason.into_owned(),
                },
                Cow::Owned(name) => CoreError::InvalidParameter {
                    context: "parameter",
                    message: format!("{}: {}", name, reason),
                },
            },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Encoding { context, details } => CoreError::InvalidKey {
                context,
                message: details.to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
            Error::RandomGeneration { details } => CoreError::RandomGenerationError {
                context: "random",
                message: details.to_string(),
            },
        }
    }
}

/// Convert a primitives result to a core result with additional context
#[inline]
pub fn to_core_result<T>(r: Result<T>, ctx: &'static str) -> CoreResult<T> {
    r.map_err(|e| CoreError::from(e).with_context(ctx))
}

// Include the validation submodule
pub mod validate;
