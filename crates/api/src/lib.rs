//! Public API traits and types for the vecc library
//!
//! This crate provides the public API surface of the vecc workspace: the error
//! type shared by every crate and the trait definitions that the signature
//! schemes implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result, ResultExt};

// Re-export all traits from the traits module
pub use traits::{Signature, SignatureDerive};

// Re-export trait modules for direct access
pub use traits::signature;
