//! Signature generation

use core::cmp::Ordering;

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use subtle::{Choice, ConditionallySelectable};
use vecc_common::{SecretVec, ZeroizeGuard};
use zeroize::Zeroize;

use super::{bits2int, generate_deterministic_secret, RawSignature};
use crate::ec::point;
use crate::ec::vli::Vli;
use crate::error::{Error, Result};
use crate::keys::PrivateKey;
use crate::rng;

/// Sequence numbers tried before signing gives up
pub const MAX_SIGN_ATTEMPTS: u32 = i32::MAX as u32;

/// Bytes of fresh randomness appended to the personalization when hedging
const HEDGE_BYTES: usize = 32;

/// Sign `hash` with the nonce `k`
///
/// Returns `Ok(None)` when this `k` cannot produce a signature (`r == 0`,
/// `s == 0` or `s` wider than a coordinate); the caller moves on to the next
/// nonce. A `k` outside `[1, n-1]` is an error.
pub fn sign_with_k(key: &PrivateKey, hash: &[u8], k: &Vli) -> Result<Option<RawSignature>> {
    let curve = key.curve();
    let w = curve.num_words();
    if !curve.is_valid_scalar(k) {
        return Err(Error::param("k", "nonce must be in [1, n-1]"));
    }

    let mut kg = point::mul_secret(curve, &curve.generator(), k)?;

    // 1/k computed as 1/(k·b)·b so the inversion never sees k itself
    let mut blind = rng::random_int(curve.n(), w)?;
    let mut blinded = curve.order_mult(k, &blind);
    let mut kinv = ZeroizeGuard::new(&mut blinded);
    *kinv = curve.order_inv(&kinv);
    *kinv = curve.order_mult(&kinv, &blind);
    blind.zeroize();

    let (reduced, borrow) = kg.x.sub_borrow(curve.n(), w);
    let r = Vli::conditional_select(&reduced, &kg.x, Choice::from(borrow as u8));
    kg.zeroize();
    if r.is_zero() {
        return Ok(None);
    }

    let e = bits2int(curve, hash);
    let d = key.scalar();
    let mut s = curve.order_mult(&r, &d);
    drop(d);
    s = curve.order_add(&e, &s);
    s = curve.order_mult(&s, &kinv);

    if s.is_zero() || s.num_bits() > 8 * curve.num_bytes() {
        return Ok(None);
    }
    if s.cmp_vartime(curve.half_n(), w) == Ordering::Greater {
        s = curve.n().sub_borrow(&s, w).0;
    }
    Ok(Some(RawSignature { r, s }))
}

fn sign_with_personalization<D>(
    key: &PrivateKey,
    hash: &[u8],
    personalization: &[u8],
) -> Result<RawSignature>
where
    D: Digest + BlockSizeUser + Clone,
{
    let curve = key.curve();
    let seed = key.to_bytes();
    for sequence in 0..MAX_SIGN_ATTEMPTS {
        let mut k =
            generate_deterministic_secret::<D>(curve, seed.as_slice(), personalization, sequence)?;
        let signed = sign_with_k(key, hash, &k);
        k.zeroize();
        if let Some(signature) = signed? {
            return Ok(signature);
        }
    }
    Err(Error::Processing {
        operation: "ECDSA signing",
        details: "no usable nonce within the attempt bound",
    })
}

/// Deterministic signature: the same key and hash always give the same `(r, s)`
///
/// The nonce comes from the HMAC-DRBG seeded with the private key and
/// personalized with the hash, walking sequence numbers from 0 until a
/// nonce yields a signature.
pub fn sign_deterministic<D>(key: &PrivateKey, hash: &[u8]) -> Result<RawSignature>
where
    D: Digest + BlockSizeUser + Clone,
{
    sign_with_personalization::<D>(key, hash, hash)
}

/// Hedged signature: deterministic derivation plus fresh randomness
///
/// The personalization is the hash followed by 32 random bytes, so two
/// calls give different signatures while a weak random source still cannot
/// repeat a nonce across different messages.
pub fn sign<D>(key: &PrivateKey, hash: &[u8]) -> Result<RawSignature>
where
    D: Digest + BlockSizeUser + Clone,
{
    let mut personalization = SecretVec::zeroed(hash.len() + HEDGE_BYTES);
    personalization.as_mut_slice()[..hash.len()].copy_from_slice(hash);
    rng::fill_random(&mut personalization.as_mut_slice()[hash.len()..])?;
    sign_with_personalization::<D>(key, hash, personalization.as_slice())
}
