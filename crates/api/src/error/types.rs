//! Error type definitions for cryptographic operations

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid key error
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Invalid signature error
    InvalidSignature {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Serialization error
    SerializationError {
        context: &'static str,
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidKey { .. } => Self::InvalidKey {
                context,
                message: String::new(),
            },
            Self::InvalidSignature { .. } => Self::InvalidSignature {
                context,
                message: String::new(),
            },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { .. } => Self::InvalidParameter {
                context,
                message: String::new(),
            },
            Self::SerializationError { .. } => Self::SerializationError {
                context,
                message: String::new(),
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError {
                context,
                message: String::new(),
            },
            Self::Other { .. } => Self::Other {
                context,
                message: String::new(),
            },
        }
    }

    /// Add a message to an existing error
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidSignature { context, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { context, .. } => Self::InvalidParameter { context, message },
            Self::SerializationError { context, .. } => {
                Self::SerializationError { context, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidKey { context, message } => {
                write!(f, "Invalid key: {}", context)?;
                if !message.is_empty() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
            Self::InvalidSignature { context, message } => {
                write!(f, "Invalid signature: {}", context)?;
                if !message.is_empty() {
                    write!(f, ": {}", message)?;
                }
                Ok(())
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            }
            Self::SerializationError { context, message } => {
                write!(f, "Serialization error: {}: {}", context, message)
            }
            Self::RandomGenerationError { context, message } => {
                write!(f, "Random generation error: {}: {}", context, message)
            }
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            }
        }
    }
}
