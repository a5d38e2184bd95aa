//! Error handling for the vecc ecosystem

pub mod traits;
pub mod types;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Re-export error traits
pub use traits::ResultExt;

impl From<core::array::TryFromSliceError> for Error {
    fn from(_: core::array::TryFromSliceError) -> Self {
        Self::InvalidLength {
            context: "array conversion",
            expected: 0, // Unknown expected size
            actual: 0,   // Unknown actual size
        }
    }
}

impl std::error::Error for Error {}

// Specialized result types for different operations
pub type KeyResult<T> = Result<T>;
pub type SignatureResult<T> = Result<T>;
