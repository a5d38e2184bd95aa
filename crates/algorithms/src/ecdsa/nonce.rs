//! HMAC-DRBG derivation of secret scalars
//!
//! One primitive serves both ECDSA nonces and deterministic key
//! derivation. The instantiation folds the seed, the personalization string
//! and a 32-bit sequence number into the DRBG key in two rounds:
//!
//! ```text
//! K = 0x00 * hlen, V = 0x01 * hlen
//! K = HMAC_K(V || 0x00 || seed || 0x00 || personalization || seq_le)
//! V = HMAC_K(V)
//! K = HMAC_K(V || 0x01 || seed || 0x01 || personalization || seq_le)
//! V = HMAC_K(V)
//! ```
//!
//! and then emits `V = HMAC_K(V)` blocks. Each candidate is the first
//! `num_n_bytes` of output masked to the bit length of `n`, and the first
//! one in `[1, n-1]` is returned. The layout is fixed: changing it changes every derived key and
//! every deterministic signature.

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use hmac::{Mac, SimpleHmac};
use vecc_common::SecretVec;
use vecc_internal::endian::u32_to_le_bytes;
use zeroize::Zeroize;

use crate::ec::curve::Curve;
use crate::ec::vli::Vli;
use crate::error::{Error, Result};

/// Candidates drawn before the generator gives up
///
/// The worst acceptance rate among the supported curves is about 1/256, so
/// exhausting this bound means the hash is broken.
pub const MAX_GENERATE_ROUNDS: usize = 1 << 16;

fn hmac<D>(key: &[u8], parts: &[&[u8]]) -> Result<SecretVec>
where
    D: Digest + BlockSizeUser + Clone,
{
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key).map_err(|_| Error::Processing {
        operation: "HMAC",
        details: "invalid key length",
    })?;
    for part in parts {
        mac.update(part);
    }
    Ok(SecretVec::from_slice(&mac.finalize().into_bytes()))
}

/// Derive a scalar in `[1, n-1]` from a seed
///
/// Deterministic in all four inputs. Used with the private key as seed and
/// the message hash as personalization for ECDSA nonces, and with arbitrary
/// seeds for key derivation.
pub fn generate_deterministic_secret<D>(
    curve: &Curve,
    seed: &[u8],
    personalization: &[u8],
    sequence: u32,
) -> Result<Vli>
where
    D: Digest + BlockSizeUser + Clone,
{
    let hash_len = <D as Digest>::output_size();
    let sequence = u32_to_le_bytes(sequence);

    let mut k = SecretVec::zeroed(hash_len);
    let mut v = SecretVec::new(vec![0x01; hash_len]);
    for separator in [0x00u8, 0x01] {
        let sep = [separator];
        k = hmac::<D>(
            k.as_slice(),
            &[v.as_slice(), &sep, seed, &sep, personalization, &sequence],
        )?;
        v = hmac::<D>(k.as_slice(), &[v.as_slice()])?;
    }

    let len = curve.num_n_bytes();
    let mut t = SecretVec::zeroed(0);
    for _ in 0..MAX_GENERATE_ROUNDS {
        t.truncate(0);
        while t.len() < len {
            v = hmac::<D>(k.as_slice(), &[v.as_slice()])?;
            t.extend_from_slice(v.as_slice());
        }
        let mut candidate = Vli::from_be_bytes(&t.as_slice()[..len]);
        candidate.mask_bits(curve.num_n_bits());
        if curve.is_valid_scalar(&candidate) {
            return Ok(candidate);
        }
        candidate.zeroize();
    }

    Err(Error::Processing {
        operation: "deterministic secret generation",
        details: "no scalar in range",
    })
}
