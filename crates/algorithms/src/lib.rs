//! Elliptic-curve engine with constant-time implementation
//!
//! This crate provides ECDSA and ECDH over the SEC 2 prime curves
//! secp160r1, secp192r1, secp224r1, secp256k1, secp256r1, secp384r1 and
//! secp521r1, with a focus on constant-time handling of secret scalars.
//!
//! # Layers
//!
//! - [`ec::vli`]: fixed-capacity big integers with per-curve working width
//! - [`ec::curve`]: curve descriptors with per-prime fast reduction
//! - [`ec::point`]: co-Z Montgomery ladder and Shamir double multiplication
//! - [`ecdsa`]: HMAC-DRBG nonces, blinded signing, Low-S, verification
//! - [`keys`]: scrambled private keys, public keys, tweaks and ECDH
//!
//! # Security Features
//!
//! - Private scalars are held XOR-masked with a per-curve-instance key
//! - Secret intermediates are zeroized before release
//! - Ladder steps select with constant-time swaps, never branches
//! - The inversion of the nonce is blinded with a random factor

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Process-wide random source
pub mod rng;

// Elliptic curve primitives
pub mod ec;
pub use ec::{AffinePoint, Curve, CurveId, CurveParams, Vli};

// Signatures
pub mod ecdsa;
pub use ecdsa::RawSignature;

// Keys
pub mod keys;
pub use keys::{PrivateKey, PublicKey, SharedSecret};
