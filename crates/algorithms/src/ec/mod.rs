//! Elliptic curve primitives
//!
//! This module provides the arithmetic under ECDSA for the SEC 2 prime
//! curves secp160r1, secp192r1, secp224r1, secp256k1, secp256r1, secp384r1
//! and secp521r1. Integers are little-endian arrays of 32-bit words
//! ([`vli`]), every curve is described by a [`curve::Curve`] handle, and
//! points are multiplied with a co-Z Montgomery ladder ([`point`]).

pub mod curve;
pub mod point;
pub mod scalar;
pub mod vli;

pub use curve::{Curve, CurveId, CurveParams};
pub use point::AffinePoint;
pub use vli::{Vli, Word};
