//! ECDSA signature schemes
//!
//! This crate wraps the elliptic-curve engine of `vecc-algorithms` into
//! hash-then-sign schemes implementing the `vecc-api` signature traits, and
//! provides the DER and compact signature encodings.

pub mod ecdsa;
pub mod error;

pub use ecdsa::{
    DerSignature, EcdsaPublicKey, EcdsaSecp160r1, EcdsaSecp192r1, EcdsaSecp224r1,
    EcdsaSecp256k1, EcdsaSecp256r1, EcdsaSecp384r1, EcdsaSecp521r1, EcdsaSecretKey,
    EcdsaSignature,
};
