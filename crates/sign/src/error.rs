//! Error types for the signature crate

use core::fmt;

/// Errors that can occur during signature operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid signature size
    InvalidSignatureSize { expected: usize, actual: usize },

    /// Invalid parameter
    InvalidParameter(String),

    /// Invalid key
    InvalidKey(String),

    /// Key belongs to a different curve than the scheme
    CurveMismatch {
        algorithm: &'static str,
        actual: &'static str,
    },

    /// Signature generation failed
    SignatureGeneration {
        algorithm: &'static str,
        details: String,
    },

    /// Verification failed
    Verification {
        algorithm: &'static str,
        details: String,
    },

    /// Deserialization error
    Deserialization(String),

    /// RNG error
    Rng(String),

    /// Internal error
    Internal(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSignatureSize { expected, actual } => {
                write!(
                    f,
                    "Invalid signature size: expected {}, got {}",
                    expected, actual
                )
            }
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid key: {}", msg),
            Error::CurveMismatch { algorithm, actual } => {
                write!(f, "{} cannot use a key on {}", algorithm, actual)
            }
            Error::SignatureGeneration { algorithm, details } => {
                write!(f, "{} signature generation failed: {}", algorithm, details)
            }
            Error::Verification { algorithm, details } => {
                write!(f, "{} verification failed: {}", algorithm, details)
            }
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            Error::Rng(msg) => write!(f, "RNG error: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// Convert from vecc_algorithms::error::Error
impl From<vecc_algorithms::error::Error> for Error {
    fn from(err: vecc_algorithms::error::Error) -> Self {
        use vecc_algorithms::error::Error as AlgoError;

        match err {
            AlgoError::Parameter { name, reason } => {
                Error::InvalidParameter(format!("{}: {}", name, reason))
            }
            AlgoError::Length {
                context,
                expected,
                actual,
            } => Error::Deserialization(format!(
                "{}: expected {} bytes, got {}",
                context, expected, actual
            )),
            AlgoError::Encoding { context, details } => {
                Error::InvalidKey(format!("{}: {}", context, details))
            }
            AlgoError::RandomGeneration { details } => Error::Rng(details.to_string()),
            AlgoError::Processing { operation, details } => {
                Error::Internal(format!("{}: {}", operation, details))
            }
        }
    }
}

// Convert to vecc_api::Error
impl From<Error> for vecc_api::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidSignatureSize { expected, actual } => vecc_api::Error::InvalidLength {
                context: "signature",
                expected,
                actual,
            },
            Error::InvalidParameter(msg) => vecc_api::Error::InvalidParameter {
                context: "sign",
                message: msg,
            },
            Error::InvalidKey(msg) => vecc_api::Error::InvalidKey {
                context: "sign",
                message: msg,
            },
            Error::CurveMismatch { algorithm, actual } => vecc_api::Error::InvalidKey {
                context: algorithm,
                message: format!("key is on {}", actual),
            },
            Error::SignatureGeneration { algorithm, details } => vecc_api::Error::Other {
                context: algorithm,
                message: format!("Signature generation failed: {}", details),
            },
            Error::Verification { algorithm, details } => vecc_api::Error::InvalidSignature {
                context: algorithm,
                message: details,
            },
            Error::Deserialization(s) => vecc_api::Error::SerializationError {
                context: "deserialization",
                message: s,
            },
            Error::Rng(s) => vecc_api::Error::RandomGenerationError {
                context: "rng",
                message: s,
            },
            Error::Internal(s) => vecc_api::Error::Other {
                context: "internal",
                message: s,
            },
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
