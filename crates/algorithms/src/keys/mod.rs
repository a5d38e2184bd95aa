//! Private and public keys
//!
//! Keys are bound to the [`Curve`] instance they were created under. A
//! private scalar is held XOR-masked with that instance's scramble key and
//! is only unmasked into a zeroizing guard for the duration of a single
//! operation. Passing keys from two different curve instances to one
//! operation is a programming error and panics.

mod ecdh;
mod private;
mod public;

pub use ecdh::SharedSecret;
pub use private::PrivateKey;
pub use public::PublicKey;

use crate::ec::curve::Curve;
use crate::ec::vli::Vli;
use crate::error::{validate, Error, Result};

/// Parse a big-endian scalar in `[1, n-1]`, as used for private keys and tweaks
pub(crate) fn scalar_from_bytes(curve: &Curve, context: &'static str, bytes: &[u8]) -> Result<Vli> {
    validate::length(context, bytes.len(), curve.num_n_bytes())?;
    let scalar = Vli::from_be_bytes(bytes);
    if !curve.is_valid_scalar(&scalar) {
        return Err(Error::param(context, "scalar must be in [1, n-1]"));
    }
    Ok(scalar)
}

pub(crate) fn assert_same_curve(a: &Curve, b: &Curve) {
    assert!(a == b, "keys belong to different curve instances");
}
