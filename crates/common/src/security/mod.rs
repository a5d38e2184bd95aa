//! Security primitives for handling secret material

pub mod secret;

pub use secret::{EphemeralSecret, SecretVec, ZeroizeGuard};
