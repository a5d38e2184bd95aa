use core::fmt;

use hmac::digest::core_api::BlockSizeUser;
use hmac::digest::Digest;
use rand::{CryptoRng, RngCore};
use vecc_common::{EphemeralSecret, SecretVec};
use zeroize::Zeroize;

use super::{assert_same_curve, scalar_from_bytes, PublicKey, SharedSecret};
use crate::ec::curve::Curve;
use crate::ec::point;
use crate::ec::vli::Vli;
use crate::ecdsa::generate_deterministic_secret;
use crate::error::{Error, Result};
use crate::rng;

/// An ECDSA private key
///
/// The scalar is stored masked with the curve instance's scramble key and
/// wiped on drop.
#[derive(Clone)]
pub struct PrivateKey {
    curve: Curve,
    pub(super) scrambled: Vli,
}

impl PrivateKey {
    /// Wrap a scalar, which must be in `[1, n-1]`
    pub fn from_scalar(curve: &Curve, scalar: &Vli) -> Result<Self> {
        if !curve.is_valid_scalar(scalar) {
            return Err(Error::param("private key", "scalar must be in [1, n-1]"));
        }
        Ok(PrivateKey {
            curve: *curve,
            scrambled: scalar.xor(curve.scramble_key()),
        })
    }

    /// Parse a big-endian scalar of `ceil(bits(n) / 8)` bytes
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let mut scalar = scalar_from_bytes(curve, "private key", bytes)?;
        let key = Self::from_scalar(curve, &scalar);
        scalar.zeroize();
        key
    }

    /// A fresh random key from the process generator
    pub fn generate(curve: &Curve) -> Result<Self> {
        let mut scalar = rng::random_int(curve.n(), curve.num_words())?;
        let key = Self::from_scalar(curve, &scalar);
        scalar.zeroize();
        key
    }

    /// A fresh random key from a caller-supplied generator
    pub fn generate_with_rng<R: RngCore + CryptoRng>(curve: &Curve, rng: &mut R) -> Result<Self> {
        let mut scalar = crate::rng::random_int_from(rng, curve.n(), curve.num_words())?;
        let key = Self::from_scalar(curve, &scalar);
        scalar.zeroize();
        key
    }

    /// Derive a key from a seed with the HMAC-DRBG
    ///
    /// Same inputs give the same key; different `sequence` values give
    /// independent keys from one seed.
    pub fn derive<D>(
        curve: &Curve,
        seed: &[u8],
        personalization: &[u8],
        sequence: u32,
    ) -> Result<Self>
    where
        D: Digest + BlockSizeUser + Clone,
    {
        let mut scalar =
            generate_deterministic_secret::<D>(curve, seed, personalization, sequence)?;
        let key = Self::from_scalar(curve, &scalar);
        scalar.zeroize();
        key
    }

    /// Curve instance this key belongs to
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The unmasked scalar, wiped when the guard drops
    pub fn scalar(&self) -> EphemeralSecret<Vli> {
        EphemeralSecret::new(self.scrambled.xor(self.curve.scramble_key()))
    }

    /// Big-endian encoding, `ceil(bits(n) / 8)` bytes
    pub fn to_bytes(&self) -> SecretVec {
        let mut out = SecretVec::zeroed(self.curve.num_n_bytes());
        self.scalar().to_be_bytes(out.as_mut_slice());
        out
    }

    /// Whether the scalar is in `[1, n-1]`
    pub fn is_valid(&self) -> bool {
        self.curve.is_valid_scalar(&self.scalar())
    }

    /// The matching public key, `d·G`
    pub fn public_key(&self) -> Result<PublicKey> {
        let point = point::compute_public_point(&self.curve, &self.scalar())?;
        Ok(PublicKey::from_point_unchecked(&self.curve, point))
    }

    /// `d ← d + t mod n`
    ///
    /// `tweak` is a big-endian scalar in `[1, n-1]`. A sum of zero leaves the
    /// key unchanged and is an error.
    pub fn tweak_add(&mut self, tweak: &[u8]) -> Result<()> {
        let mut t = scalar_from_bytes(&self.curve, "tweak", tweak)?;
        let d = self.scalar();
        let mut sum = self.curve.order_add(&d, &t);
        t.zeroize();
        let result = self.store(&sum);
        sum.zeroize();
        result
    }

    /// `d ← d · t mod n`
    pub fn tweak_mul(&mut self, tweak: &[u8]) -> Result<()> {
        let mut t = scalar_from_bytes(&self.curve, "tweak", tweak)?;
        let d = self.scalar();
        let mut product = self.curve.order_mult(&d, &t);
        t.zeroize();
        let result = self.store(&product);
        product.zeroize();
        result
    }

    /// Diffie-Hellman with a peer key on the same curve instance
    ///
    /// Returns the x-coordinate of `d·Q`; hash it before use as a key.
    pub fn ecdh(&self, peer: &PublicKey) -> Result<SharedSecret> {
        assert_same_curve(&self.curve, peer.curve());
        if !peer.is_valid() {
            return Err(Error::encoding("peer public key", "point is not on the curve"));
        }
        let mut shared = point::mul_secret(&self.curve, &peer.point(), &self.scalar())?;
        let secret = SharedSecret::from_coordinate(&self.curve, &shared.x);
        shared.zeroize();
        Ok(secret)
    }

    fn store(&mut self, scalar: &Vli) -> Result<()> {
        if !self.curve.is_valid_scalar(scalar) {
            return Err(Error::param("private key", "tweak gives a scalar outside [1, n-1]"));
        }
        self.scrambled = scalar.xor(self.curve.scramble_key());
        Ok(())
    }
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        self.scrambled.zeroize();
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && bool::from(self.scrambled.ct_equal(&other.scrambled))
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("curve", &self.curve.name())
            .field("scalar", &"[REDACTED]")
            .finish()
    }
}
