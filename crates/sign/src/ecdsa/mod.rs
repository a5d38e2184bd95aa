//! ECDSA signature schemes over the SEC 2 prime curves
//!
//! Each scheme pairs one curve with one SHA-2 hash and implements the
//! [`Signature`](vecc_api::Signature) and
//! [`SignatureDerive`](vecc_api::SignatureDerive) traits:
//!
//! | Scheme             | Curve      | Hash    |
//! |--------------------|------------|---------|
//! | [`EcdsaSecp160r1`] | secp160r1  | SHA-256 |
//! | [`EcdsaSecp192r1`] | secp192r1  | SHA-256 |
//! | [`EcdsaSecp224r1`] | secp224r1  | SHA-224 |
//! | [`EcdsaSecp256k1`] | secp256k1  | SHA-256 |
//! | [`EcdsaSecp256r1`] | secp256r1  | SHA-256 |
//! | [`EcdsaSecp384r1`] | secp384r1  | SHA-384 |
//! | [`EcdsaSecp521r1`] | secp521r1  | SHA-512 |
//!
//! Keys are bound to a process-wide curve instance per scheme, created on
//! first use. Trait signing is hedged (deterministic nonce derivation plus
//! fresh randomness); each scheme also offers a fully deterministic variant.
//! Signatures travel DER-encoded.

pub mod common;

pub use common::EcdsaSignature;

use std::sync::OnceLock;

use rand::{CryptoRng, RngCore};
use sha2::digest::core_api::BlockSizeUser;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};
use vecc_algorithms::ecdsa as engine;
use vecc_algorithms::error::to_core_result;
use vecc_algorithms::{Curve, CurveId, PrivateKey, PublicKey};
use vecc_api::{Result as ApiResult, ResultExt, Signature as SignatureTrait, SignatureDerive};
use vecc_common::SecretVec;
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// Public key of any ECDSA scheme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaPublicKey(PublicKey);

impl EcdsaPublicKey {
    /// Parse `x || y` on the given curve instance
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> ApiResult<Self> {
        to_core_result(PublicKey::from_bytes(curve, bytes), "ECDSA public key")
            .map(EcdsaPublicKey)
    }

    /// Parse the compressed form on the given curve instance
    pub fn from_compressed(curve: &Curve, bytes: &[u8]) -> ApiResult<Self> {
        to_core_result(PublicKey::decompress(curve, bytes), "ECDSA compressed public key")
            .map(EcdsaPublicKey)
    }

    /// `x || y`
    pub fn to_bytes(&self) -> Vec<u8> {
        self.0.to_bytes()
    }

    /// `0x02 | 0x03` followed by `x`
    pub fn to_compressed(&self) -> Vec<u8> {
        self.0.to_compressed()
    }

    /// The underlying key
    pub fn inner(&self) -> &PublicKey {
        &self.0
    }
}

impl From<PublicKey> for EcdsaPublicKey {
    fn from(key: PublicKey) -> Self {
        EcdsaPublicKey(key)
    }
}

/// Secret key of any ECDSA scheme
///
/// No byte access beyond an explicit, zeroizing export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcdsaSecretKey(PrivateKey);

impl EcdsaSecretKey {
    /// Parse a big-endian scalar on the given curve instance
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> ApiResult<Self> {
        to_core_result(PrivateKey::from_bytes(curve, bytes), "ECDSA secret key")
            .map(EcdsaSecretKey)
    }

    /// Export the scalar, wiped when dropped
    pub fn to_bytes(&self) -> SecretVec {
        self.0.to_bytes()
    }

    /// The underlying key
    pub fn inner(&self) -> &PrivateKey {
        &self.0
    }
}

impl From<PrivateKey> for EcdsaSecretKey {
    fn from(key: PrivateKey) -> Self {
        EcdsaSecretKey(key)
    }
}

impl Zeroize for EcdsaSecretKey {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}

/// DER-encoded signature
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DerSignature(pub Vec<u8>);

impl AsRef<[u8]> for DerSignature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/* ------------------------------------------------------------------------- */
/*                    Shared implementation behind the schemes               */
/* ------------------------------------------------------------------------- */

fn shared_curve(cell: &'static OnceLock<Curve>, id: CurveId) -> Result<Curve> {
    if let Some(curve) = cell.get() {
        return Ok(*curve);
    }
    let fresh = Curve::new(id)?;
    Ok(*cell.get_or_init(|| fresh))
}

fn check_curve(algorithm: &'static str, expected: &Curve, actual: &Curve) -> Result<()> {
    if expected != actual {
        return Err(Error::CurveMismatch {
            algorithm,
            actual: actual.name(),
        });
    }
    Ok(())
}

fn keypair_on<R: CryptoRng + RngCore>(
    curve: &Curve,
    rng: &mut R,
) -> Result<(EcdsaPublicKey, EcdsaSecretKey)> {
    let secret = PrivateKey::generate_with_rng(curve, rng)?;
    let public = secret.public_key()?;
    Ok((EcdsaPublicKey(public), EcdsaSecretKey(secret)))
}

fn derive_on<H>(
    algorithm: &'static str,
    curve: &Curve,
    seed: &[u8],
    min_seed: usize,
) -> Result<(EcdsaPublicKey, EcdsaSecretKey)>
where
    H: Digest + BlockSizeUser + Clone,
{
    if seed.len() < min_seed {
        return Err(Error::InvalidParameter(format!(
            "{} seed must be at least {} bytes, got {}",
            algorithm,
            min_seed,
            seed.len()
        )));
    }
    let secret = PrivateKey::derive::<H>(curve, seed, algorithm.as_bytes(), 0)?;
    let public = secret.public_key()?;
    Ok((EcdsaPublicKey(public), EcdsaSecretKey(secret)))
}

fn sign_on<H>(
    algorithm: &'static str,
    curve: &Curve,
    message: &[u8],
    secret_key: &EcdsaSecretKey,
    deterministic: bool,
) -> Result<EcdsaSignature>
where
    H: Digest + BlockSizeUser + Clone,
{
    check_curve(algorithm, curve, secret_key.0.curve())?;
    let hash = H::digest(message);
    let raw = if deterministic {
        engine::sign_deterministic::<H>(&secret_key.0, &hash)
    } else {
        engine::sign::<H>(&secret_key.0, &hash)
    }
    .map_err(|e| Error::SignatureGeneration {
        algorithm,
        details: e.to_string(),
    })?;
    Ok(EcdsaSignature::new(curve, raw))
}

fn verify_on<H>(
    algorithm: &'static str,
    curve: &Curve,
    message: &[u8],
    signature: &EcdsaSignature,
    public_key: &EcdsaPublicKey,
) -> Result<()>
where
    H: Digest,
{
    check_curve(algorithm, curve, public_key.0.curve())?;
    let hash = H::digest(message);
    if !engine::verify(&public_key.0, &hash, signature.raw()) {
        return Err(Error::Verification {
            algorithm,
            details: "signature does not match".into(),
        });
    }
    Ok(())
}

macro_rules! ecdsa_scheme {
    ($scheme:ident, $id:expr, $hash:ty, $name:literal, $doc:literal) => {
        #[doc = $doc]
        pub struct $scheme;

        impl $scheme {
            /// The curve instance shared by every key of this scheme
            pub fn curve() -> ApiResult<Curve> {
                static CURVE: OnceLock<Curve> = OnceLock::new();
                shared_curve(&CURVE, $id).with_context($name)
            }

            /// Sign with a nonce derived only from the key and the message
            pub fn sign_deterministic(
                message: &[u8],
                secret_key: &EcdsaSecretKey,
            ) -> ApiResult<DerSignature> {
                let curve = Self::curve()?;
                let signature = sign_on::<$hash>($name, &curve, message, secret_key, true)?;
                Ok(DerSignature(signature.to_der()))
            }

            /// Sign and return the signature object rather than its encoding
            pub fn sign_raw(
                message: &[u8],
                secret_key: &EcdsaSecretKey,
            ) -> ApiResult<EcdsaSignature> {
                let curve = Self::curve()?;
                Ok(sign_on::<$hash>($name, &curve, message, secret_key, false)?)
            }

            /// Verify a signature object, such as one parsed from compact form
            pub fn verify_raw(
                message: &[u8],
                signature: &EcdsaSignature,
                public_key: &EcdsaPublicKey,
            ) -> ApiResult<()> {
                let curve = Self::curve()?;
                Ok(verify_on::<$hash>($name, &curve, message, signature, public_key)?)
            }
        }

        impl SignatureTrait for $scheme {
            type PublicKey = EcdsaPublicKey;
            type SecretKey = EcdsaSecretKey;
            type SignatureData = DerSignature;
            type KeyPair = (Self::PublicKey, Self::SecretKey);

            fn name() -> &'static str {
                $name
            }

            fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
                let curve = Self::curve()?;
                Ok(keypair_on(&curve, rng)?)
            }

            fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
                keypair.0
            }

            fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
                keypair.1.clone()
            }

            fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
                let curve = Self::curve()?;
                let signature = sign_on::<$hash>($name, &curve, message, secret_key, false)?;
                Ok(DerSignature(signature.to_der()))
            }

            fn verify(
                message: &[u8],
                signature: &Self::SignatureData,
                public_key: &Self::PublicKey,
            ) -> ApiResult<()> {
                let curve = Self::curve()?;
                let parsed = EcdsaSignature::from_der(&curve, &signature.0).map_err(|e| {
                    Error::Verification {
                        algorithm: $name,
                        details: e.to_string(),
                    }
                })?;
                Ok(verify_on::<$hash>($name, &curve, message, &parsed, public_key)?)
            }
        }

        impl SignatureDerive for $scheme {
            const MIN_SEED_SIZE: usize = 32;

            fn derive_keypair(seed: &[u8]) -> ApiResult<Self::KeyPair> {
                let curve = Self::curve()?;
                Ok(derive_on::<$hash>($name, &curve, seed, Self::MIN_SEED_SIZE)?)
            }

            fn derive_public_key(secret_key: &Self::SecretKey) -> ApiResult<Self::PublicKey> {
                let curve = Self::curve()?;
                check_curve($name, &curve, secret_key.0.curve())?;
                Ok(EcdsaPublicKey(secret_key.0.public_key().map_err(Error::from)?))
            }
        }
    };
}

ecdsa_scheme!(
    EcdsaSecp160r1,
    CurveId::Secp160r1,
    Sha256,
    "ECDSA-secp160r1",
    "ECDSA over secp160r1 with SHA-256"
);
ecdsa_scheme!(
    EcdsaSecp192r1,
    CurveId::Secp192r1,
    Sha256,
    "ECDSA-secp192r1",
    "ECDSA over secp192r1 (NIST P-192) with SHA-256"
);
ecdsa_scheme!(
    EcdsaSecp224r1,
    CurveId::Secp224r1,
    Sha224,
    "ECDSA-secp224r1",
    "ECDSA over secp224r1 (NIST P-224) with SHA-224"
);
ecdsa_scheme!(
    EcdsaSecp256k1,
    CurveId::Secp256k1,
    Sha256,
    "ECDSA-secp256k1",
    "ECDSA over secp256k1 with SHA-256"
);
ecdsa_scheme!(
    EcdsaSecp256r1,
    CurveId::Secp256r1,
    Sha256,
    "ECDSA-secp256r1",
    "ECDSA over secp256r1 (NIST P-256) with SHA-256"
);
ecdsa_scheme!(
    EcdsaSecp384r1,
    CurveId::Secp384r1,
    Sha384,
    "ECDSA-secp384r1",
    "ECDSA over secp384r1 (NIST P-384) with SHA-384"
);
ecdsa_scheme!(
    EcdsaSecp521r1,
    CurveId::Secp521r1,
    Sha512,
    "ECDSA-secp521r1",
    "ECDSA over secp521r1 (NIST P-521) with SHA-512"
);
