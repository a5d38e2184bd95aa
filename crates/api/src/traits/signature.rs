//! Digital signature traits for vecc
//!
//! This module defines the traits that every signature scheme implements.
//! The design does not require mutable access to secret keys: a secret key
//! is an opaque value that can only be created, used and dropped.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Core trait for digital signature algorithms
///
/// Secret keys are opaque types that cannot be directly manipulated as bytes.
/// Implementations hash the message themselves; callers hand over the raw
/// message and get back an encoded signature.
pub trait Signature {
    /// Public key type for this algorithm
    type PublicKey: Clone;

    /// Secret key type - must be zeroizable but not byte-accessible
    type SecretKey: Zeroize + Clone;

    /// Signature data type
    type SignatureData: Clone;

    /// Key pair type (typically a tuple of public and secret keys)
    type KeyPair;

    /// Returns the name of this signature algorithm
    fn name() -> &'static str;

    /// Generate a new key pair using the provided RNG
    ///
    /// Implementations must use the provided cryptographically secure RNG
    /// for drawing the secret scalar.
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<Self::KeyPair>;

    /// Extract the public key from a key pair
    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey;

    /// Extract the secret key from a key pair
    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey;

    /// Sign a message with the given secret key
    ///
    /// Must not leak information about the secret key through timing.
    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> Result<Self::SignatureData>;

    /// Verify a signature against a message and public key
    ///
    /// A malformed signature and a wrong signature are reported the same way.
    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> Result<()>;
}

/// Optional trait for signature algorithms that support key derivation
///
/// This trait is for algorithms that can derive keys from seed material
/// in a deterministic way.
pub trait SignatureDerive: Signature {
    /// Minimum seed size in bytes
    const MIN_SEED_SIZE: usize;

    /// Derive a key pair from seed material
    ///
    /// - The seed must have sufficient entropy
    /// - Same seed must always produce the same secret scalar
    ///
    /// # Errors
    ///
    /// Returns an error if the seed is too short
    fn derive_keypair(seed: &[u8]) -> Result<Self::KeyPair>;

    /// Derive the public key from a secret key
    ///
    /// # Errors
    ///
    /// Returns an error if the secret key is invalid
    fn derive_public_key(secret_key: &Self::SecretKey) -> Result<Self::PublicKey>;
}
