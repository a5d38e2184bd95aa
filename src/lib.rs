//! # vecc
//!
//! Elliptic-curve cryptography over the SEC 2 prime curves: ECDSA signing
//! and verification, ECDH, deterministic key derivation and key tweaking.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vecc = "0.3"
//! ```
//!
//! ## Features
//!
//! - `sign` (default): hash-then-sign schemes implementing [`api::Signature`]
//! - `serde`: serialization of curve identifiers
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`vecc-algorithms`]: Big integers, curves, point arithmetic, ECDSA, keys
//! - [`vecc-sign`]: Per-curve ECDSA schemes and signature encodings
//! - [`vecc-params`]: Curve constants
//! - [`vecc-common`]: Zeroizing containers for secret material

// Core re-exports (always available)
pub use vecc_algorithms as algorithms;
pub use vecc_api as api;
pub use vecc_common as common;
pub use vecc_internal as internal;
pub use vecc_params as params;

// Re-export workspace dependencies that users might need
pub use rand;
pub use zeroize;

// Feature-gated re-exports
#[cfg(feature = "sign")]
pub use vecc_sign as sign;

/// Common imports for vecc users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Signature, SignatureDerive};

    // Re-export security types
    pub use crate::common::{EphemeralSecret, SecretVec, ZeroizeGuard};

    // Re-export the engine types
    pub use crate::algorithms::{
        AffinePoint, Curve, CurveId, PrivateKey, PublicKey, RawSignature, SharedSecret,
    };

    #[cfg(feature = "sign")]
    pub use crate::sign::{
        DerSignature, EcdsaPublicKey, EcdsaSecp160r1, EcdsaSecp192r1, EcdsaSecp224r1,
        EcdsaSecp256k1, EcdsaSecp256r1, EcdsaSecp384r1, EcdsaSecp521r1, EcdsaSecretKey,
        EcdsaSignature,
    };
}
