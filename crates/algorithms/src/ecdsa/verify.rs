//! Signature verification

use core::cmp::Ordering;

use super::{bits2int, RawSignature};
use crate::ec::point;
use crate::keys::PublicKey;

/// Check `signature` over `hash` against `key`
///
/// Any failure, malformed or merely wrong, is `false`.
pub fn verify(key: &PublicKey, hash: &[u8], signature: &RawSignature) -> bool {
    let curve = key.curve();
    let w = curve.num_words();
    let RawSignature { r, s } = signature;
    if !curve.is_valid_scalar(r) || !curve.is_valid_scalar(s) {
        return false;
    }

    let z = curve.order_inv(s);
    let e = bits2int(curve, hash);
    let u1 = curve.order_mult(&e, &z);
    let u2 = curve.order_mult(r, &z);

    let q = key.point();
    let sum = match point::double_scalar_mul(curve, &u1, &curve.generator(), &u2, Some(&q)) {
        Some(sum) => sum,
        None => return false,
    };

    let mut x = sum.x;
    if x.cmp_vartime(curve.n(), w) != Ordering::Less {
        x = x.sub_borrow(curve.n(), w).0;
    }
    x == *r
}
