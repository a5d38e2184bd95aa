//! Trait definitions implemented by the vecc schemes

pub mod signature;

pub use signature::{Signature, SignatureDerive};
