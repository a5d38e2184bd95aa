//! Shared functionality for the vecc library
//!
//! Containers for secret material that wipe themselves when dropped.

pub mod security;

pub use security::{EphemeralSecret, SecretVec, ZeroizeGuard};
