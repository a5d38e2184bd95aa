//! Integration tests for keys: encodings, derivation, tweaks and ECDH

use rand::rngs::OsRng;
use sha2::Sha256;
use vecc::prelude::*;
use vecc_tests::vectors::{unhex, DERIVE_PERSONALIZATION, DERIVE_SEED, DERIVE_VECTORS};

#[test]
fn test_derive_vectors() {
    for v in DERIVE_VECTORS {
        let curve = Curve::new(v.curve).unwrap();
        let key =
            PrivateKey::derive::<Sha256>(&curve, DERIVE_SEED, DERIVE_PERSONALIZATION, 0).unwrap();
        assert_eq!(hex::encode(key.to_bytes().as_slice()), v.private_key, "{}", v.curve);
    }
}

#[test]
fn test_derive_sequence_changes_key() {
    let curve = Curve::secp224r1().unwrap();
    let a = PrivateKey::derive::<Sha256>(&curve, DERIVE_SEED, b"child", 0).unwrap();
    let b = PrivateKey::derive::<Sha256>(&curve, DERIVE_SEED, b"child", 1).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_ecdh_all_curves() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let alice = PrivateKey::generate(&curve).unwrap();
        let bob = PrivateKey::generate(&curve).unwrap();

        let ab = alice.ecdh(&bob.public_key().unwrap()).unwrap();
        let ba = bob.ecdh(&alice.public_key().unwrap()).unwrap();
        assert_eq!(ab, ba, "{}", id);
        assert_eq!(ab.len(), curve.num_bytes());
    }
}

#[test]
fn test_public_key_encodings_all_curves() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let public = PrivateKey::generate(&curve).unwrap().public_key().unwrap();

        let bytes = public.to_bytes();
        assert_eq!(bytes.len(), 2 * curve.num_bytes());
        assert_eq!(PublicKey::from_bytes(&curve, &bytes).unwrap(), public);

        let compressed = public.to_compressed();
        assert_eq!(compressed.len(), curve.num_bytes() + 1);
        assert_eq!(PublicKey::decompress(&curve, &compressed).unwrap(), public);
    }
}

#[test]
fn test_tweaks_commute_with_public_key() {
    let curve = Curve::secp256k1().unwrap();
    let mut private = PrivateKey::generate(&curve).unwrap();
    let mut public = private.public_key().unwrap();
    let tweak = unhex("0000000000000000000000000000000000000000000000000000000000001234");

    private.tweak_add(&tweak).unwrap();
    public.tweak_add(&tweak).unwrap();
    assert_eq!(private.public_key().unwrap(), public);

    private.tweak_mul(&tweak).unwrap();
    public.tweak_mul(&tweak).unwrap();
    assert_eq!(private.public_key().unwrap(), public);
}

#[test]
fn test_scheme_keys_wrap_engine_keys() {
    let (pk, sk) = EcdsaSecp256r1::keypair(&mut OsRng).unwrap();
    assert_eq!(sk.inner().public_key().unwrap(), *pk.inner());
    assert_eq!(sk.to_bytes().len(), 32);
}

#[test]
fn test_invalid_public_keys_rejected() {
    let curve = Curve::secp384r1().unwrap();
    assert!(PublicKey::from_bytes(&curve, &[0u8; 96]).is_err());
    assert!(PublicKey::from_bytes(&curve, &[1u8; 95]).is_err());

    let mut compressed = PrivateKey::generate(&curve)
        .unwrap()
        .public_key()
        .unwrap()
        .to_compressed();
    compressed[0] = 0x04;
    assert!(PublicKey::decompress(&curve, &compressed).is_err());
}
