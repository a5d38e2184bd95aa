//! Process-wide cryptographic random source
//!
//! A single ChaCha20 generator, seeded from the operating system on first
//! use and shared behind a mutex. It is the only global state in the crate.

use std::sync::Mutex;

use byteorder::{ByteOrder, LittleEndian};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use zeroize::Zeroize;

use crate::ec::vli::{Vli, Word};
use crate::error::{Error, Result};

static RNG: Mutex<Option<ChaCha20Rng>> = Mutex::new(None);

/// Attempts made before a random scalar draw is declared failed
pub const MAX_RANDOM_TRIES: usize = 64;

fn with_rng<T>(f: impl FnOnce(&mut ChaCha20Rng) -> Result<T>) -> Result<T> {
    let mut guard = RNG.lock().map_err(|_| Error::RandomGeneration {
        details: "random source lock poisoned",
    })?;
    if guard.is_none() {
        let seeded = ChaCha20Rng::from_rng(OsRng).map_err(|_| Error::RandomGeneration {
            details: "operating system entropy unavailable",
        })?;
        *guard = Some(seeded);
    }
    match guard.as_mut() {
        Some(rng) => f(rng),
        None => Err(Error::RandomGeneration {
            details: "random source not initialized",
        }),
    }
}

/// Fill `dest` with random bytes
pub fn fill_random(dest: &mut [u8]) -> Result<()> {
    with_rng(|rng| {
        rng.try_fill_bytes(dest).map_err(|_| Error::RandomGeneration {
            details: "random source failed",
        })
    })
}

/// A random 64-bit value
pub fn random_u64() -> Result<u64> {
    let mut bytes = [0u8; 8];
    fill_random(&mut bytes)?;
    Ok(LittleEndian::read_u64(&bytes))
}

/// A uniformly random integer in `[1, top)` from the process generator
pub fn random_int(top: &Vli, w: usize) -> Result<Vli> {
    with_rng(|rng| random_int_from(rng, top, w))
}

/// A uniformly random integer in `[1, top)` from a caller-supplied generator
///
/// Candidates are masked to the bit length of `top` and rejected until one
/// lands in range, at most [`MAX_RANDOM_TRIES`] times.
pub fn random_int_from<R: RngCore + ?Sized>(rng: &mut R, top: &Vli, w: usize) -> Result<Vli> {
    let num_bits = top.num_bits();
    let mut candidate = Vli::ZERO;
    for _ in 0..MAX_RANDOM_TRIES {
        let mut bytes = [0u8; 4];
        for word in candidate.0[..w].iter_mut() {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|_| Error::RandomGeneration {
                    details: "random source failed",
                })?;
            *word = LittleEndian::read_u32(&bytes) as Word;
        }
        bytes.zeroize();
        candidate.mask_bits(num_bits);
        if !candidate.is_zero() && bool::from(candidate.ct_lt(top, w)) {
            return Ok(candidate);
        }
    }
    candidate.zeroize();
    Err(Error::RandomGeneration {
        details: "no value in range after bounded attempts",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_int_in_range() {
        let top = Vli::from_words(&[0x0000_0100]);
        for _ in 0..100 {
            let v = random_int(&top, 1).unwrap();
            assert!(!v.is_zero());
            assert!(v.words()[0] < 0x100);
        }
    }

    #[test]
    fn test_exhaustion_is_an_error() {
        // only 0 lies below 1, and 0 is never accepted
        let err = random_int(&Vli::ONE, 1).unwrap_err();
        assert!(matches!(err, Error::RandomGeneration { .. }));
    }

    #[test]
    fn test_caller_rng_is_deterministic() {
        let top = Vli::from_words(&[u32::MAX, u32::MAX, 0x7FFF_FFFF]);
        let a = random_int_from(&mut ChaCha20Rng::seed_from_u64(9), &top, 3).unwrap();
        let b = random_int_from(&mut ChaCha20Rng::seed_from_u64(9), &top, 3).unwrap();
        assert_eq!(a, b);
        assert!(a.num_bits() <= 95);
    }

    #[test]
    fn test_fill_random_changes_buffer() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        fill_random(&mut a).unwrap();
        fill_random(&mut b).unwrap();
        assert_ne!(a, b);
        assert_ne!(random_u64().unwrap(), random_u64().unwrap());
    }
}
