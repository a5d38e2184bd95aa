//! Known-answer vectors
//!
//! Signature vectors use the nonce derivation of `vecc-algorithms`, so they
//! pin the exact DRBG layout. Derivation vectors use the seed
//! `"vecc derivation seed"`, personalization `"child"` and sequence 0.

use vecc_algorithms::CurveId;

/// A deterministic signature over `message`
#[derive(Debug, Clone, Copy)]
pub struct SignatureVector {
    /// Curve the key lives on
    pub curve: CurveId,
    /// Private scalar, hex
    pub private_key: &'static str,
    /// Public key `x || y`, hex
    pub public_key: &'static str,
    /// Message, hashed with the scheme's digest before signing
    pub message: &'static [u8],
    /// Expected `r`, hex
    pub r: &'static str,
    /// Expected `s`, hex
    pub s: &'static str,
}

/// A key derived from a fixed seed
#[derive(Debug, Clone, Copy)]
pub struct DeriveVector {
    /// Curve the key lives on
    pub curve: CurveId,
    /// Expected scalar, hex, `num_n_bytes` long
    pub private_key: &'static str,
}

/// Seed shared by every [`DeriveVector`]
pub const DERIVE_SEED: &[u8] = b"vecc derivation seed";

/// Personalization shared by every [`DeriveVector`]
pub const DERIVE_PERSONALIZATION: &[u8] = b"child";

/// Deterministic ECDSA signatures, one per scheme digest
pub const SIGNATURE_VECTORS: &[SignatureVector] = &[
    SignatureVector {
        curve: CurveId::Secp256k1,
        private_key: "ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f",
        public_key: concat!(
            "779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd",
            "e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f"
        ),
        message: b"",
        r: "2e825ac38832cb40a33dbf47ca66e66623c67e000773fee08ac60a37ebedace1",
        s: "6fda4b04803a56894740df25a7ab1b010dba7168561c3e7104372b15cbcdbc31",
    },
    SignatureVector {
        curve: CurveId::Secp256r1,
        private_key: "c9afa9d845ba75166b5c215767b1d6934e50c3db36e89b127b8a622b120f6721",
        public_key: concat!(
            "60fed4ba255a9d31c961eb74c6356d68c049b8923b61fa6ce669622e60f29fb6",
            "7903fe1008b8bc99a41ae9e95628bc64f2f1b20c2d7e9f5177a3c294d4462299"
        ),
        message: b"sample",
        r: "25424eee5f56099e3b03840a88899db152786172caa17b1f8295bda31d33c012",
        s: "3daed7891b1113e9750999bfc1217a7065814226d2ba973535aa6a9501525cac",
    },
];

/// Keys derived with SHA-256
pub const DERIVE_VECTORS: &[DeriveVector] = &[
    DeriveVector {
        curve: CurveId::Secp160r1,
        private_key: "0070a2b36f8e927b407dad656ce2f9d038caaf04f3",
    },
    DeriveVector {
        curve: CurveId::Secp192r1,
        private_key: "dc70a2b36f8e927b407dad656ce2f9d038caaf04f3395d70",
    },
    DeriveVector {
        curve: CurveId::Secp256r1,
        private_key: "dc70a2b36f8e927b407dad656ce2f9d038caaf04f3395d70c02de72170ce5d8c",
    },
];

/// Decode a hex constant
pub fn unhex(s: &str) -> Vec<u8> {
    hex::decode(s).unwrap_or_else(|e| panic!("bad hex constant {}: {}", s, e))
}
