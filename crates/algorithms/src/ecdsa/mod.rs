//! ECDSA over the supported curves
//!
//! Signing derives its nonce with an HMAC-DRBG keyed by the private scalar
//! ([`generate_deterministic_secret`]), multiplies the base point with the
//! constant-time ladder, blinds the inversion of `k` and normalizes `s` to
//! the lower half of the order. Verification uses Shamir's trick.
//!
//! Hashes are taken as already computed; [`bits2int`] maps them onto the
//! order the way RFC 6979 §2.3.2 describes.

mod nonce;
mod sign;
mod verify;

pub use nonce::{generate_deterministic_secret, MAX_GENERATE_ROUNDS};
pub use sign::{sign, sign_deterministic, sign_with_k, MAX_SIGN_ATTEMPTS};
pub use verify::verify;

use core::cmp::Ordering;

use crate::ec::curve::Curve;
use crate::ec::vli::Vli;

/// The `(r, s)` pair of an ECDSA signature, as integers
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSignature {
    /// x-coordinate of `k·G`, reduced mod `n`
    pub r: Vli,
    /// `(e + r·d) / k mod n`, at most `n / 2`
    pub s: Vli,
}

impl RawSignature {
    /// Build from the two integers
    pub fn new(r: Vli, s: Vli) -> Self {
        RawSignature { r, s }
    }

    /// Whether `s` is in the lower half of the order
    pub fn is_low_s(&self, curve: &Curve) -> bool {
        self.s.cmp_vartime(curve.half_n(), curve.num_words()) != Ordering::Greater
    }
}

/// Convert a message hash to an integer below `n`
///
/// Keeps the leftmost `ceil(bits(n) / 8)` bytes, shifts off any bits beyond
/// `bits(n)` and reduces once modulo `n`.
pub fn bits2int(curve: &Curve, hash: &[u8]) -> Vli {
    let w = curve.num_words();
    let len = hash.len().min(curve.num_n_bytes());
    let mut e = Vli::from_be_bytes(&hash[..len]);
    let bits = len * 8;
    if bits > curve.num_n_bits() {
        for _ in 0..bits - curve.num_n_bits() {
            e.rshift1(w);
        }
    }
    if e.cmp_vartime(curve.n(), w) != Ordering::Less {
        e = e.sub_borrow(curve.n(), w).0;
    }
    e
}
