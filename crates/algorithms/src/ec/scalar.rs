//! Scalar regularization for the ladder
//!
//! The ladder always walks `bits(n) + 1` bits with the top bit implicitly
//! set. Adding `n` (or `2n`) to the scalar does not change `k·P` and yields
//! such a value whatever the bit length of `k`, so the loop count reveals
//! nothing about the secret.

use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use crate::ec::curve::Curve;
use crate::ec::vli::Vli;

/// Both candidates `k + n` and `k + 2n`, and which one to use
///
/// The choice is set when `k + n` already has bit `bits(n)` set (or
/// overflowed the working width), in which case `k + n` is the regular form.
pub fn regularize_candidates(curve: &Curve, k: &Vli) -> (Vli, Vli, Choice) {
    let w = curve.num_words();
    let (k0, c0) = k.add_carry(curve.n(), w);
    let use_k0 = Choice::from(c0 as u8) | k0.bit(curve.num_n_bits());
    let (k1, _) = k0.add_carry(curve.n(), w);
    (k0, k1, use_k0)
}

/// `k + n` or `k + 2n`, whichever has exactly `bits(n) + 1` bits
pub fn regularize(curve: &Curve, k: &Vli) -> Vli {
    let (mut k0, mut k1, use_k0) = regularize_candidates(curve, k);
    let out = Vli::conditional_select(&k1, &k0, use_k0);
    k0.zeroize();
    k1.zeroize();
    out
}
