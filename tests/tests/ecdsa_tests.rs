//! Integration tests for the ECDSA schemes

use rand::rngs::OsRng;
use vecc::prelude::*;
use vecc_tests::vectors::{unhex, SIGNATURE_VECTORS};

fn check_vector<S>(curve: &Curve, index: usize)
where
    S: Signature<
            PublicKey = EcdsaPublicKey,
            SecretKey = EcdsaSecretKey,
            SignatureData = DerSignature,
        > + SignatureDerive,
{
    let v = &SIGNATURE_VECTORS[index];
    let sk = EcdsaSecretKey::from_bytes(curve, &unhex(v.private_key)).unwrap();
    let pk = S::derive_public_key(&sk).unwrap();
    assert_eq!(hex::encode(pk.to_bytes()), v.public_key);

    let mut expected = unhex(v.r);
    expected.extend_from_slice(&unhex(v.s));
    let signature = EcdsaSignature::from_compact(curve, &expected).unwrap();
    let der = DerSignature(signature.to_der());
    assert!(S::verify(v.message, &der, &pk).is_ok());
}

#[test]
fn test_secp256k1_known_answer() {
    let curve = EcdsaSecp256k1::curve().unwrap();
    check_vector::<EcdsaSecp256k1>(&curve, 0);

    let v = &SIGNATURE_VECTORS[0];
    let sk = EcdsaSecretKey::from_bytes(&curve, &unhex(v.private_key)).unwrap();
    let der = EcdsaSecp256k1::sign_deterministic(v.message, &sk).unwrap();
    let parsed = EcdsaSignature::from_der(&curve, der.as_ref()).unwrap();
    assert_eq!(hex::encode(parsed.r_bytes()), v.r);
    assert_eq!(hex::encode(parsed.s_bytes()), v.s);
}

#[test]
fn test_secp256r1_known_answer() {
    let curve = EcdsaSecp256r1::curve().unwrap();
    check_vector::<EcdsaSecp256r1>(&curve, 1);

    let v = &SIGNATURE_VECTORS[1];
    let sk = EcdsaSecretKey::from_bytes(&curve, &unhex(v.private_key)).unwrap();
    let der = EcdsaSecp256r1::sign_deterministic(v.message, &sk).unwrap();
    let parsed = EcdsaSignature::from_der(&curve, der.as_ref()).unwrap();
    assert_eq!(hex::encode(parsed.to_compact()), format!("{}{}", v.r, v.s));
}

#[test]
fn test_all_schemes_through_the_facade() {
    fn roundtrip<S: Signature>() {
        let pair = S::keypair(&mut OsRng).unwrap();
        let pk = S::public_key(&pair);
        let sk = S::secret_key(&pair);
        let message = b"Test message for ECDSA signature";
        let signature = S::sign(message, &sk).unwrap();
        assert!(S::verify(message, &signature, &pk).is_ok(), "{}", S::name());
        assert!(S::verify(b"Modified message", &signature, &pk).is_err(), "{}", S::name());
    }

    roundtrip::<EcdsaSecp160r1>();
    roundtrip::<EcdsaSecp192r1>();
    roundtrip::<EcdsaSecp224r1>();
    roundtrip::<EcdsaSecp256k1>();
    roundtrip::<EcdsaSecp256r1>();
    roundtrip::<EcdsaSecp384r1>();
    roundtrip::<EcdsaSecp521r1>();
}

#[test]
fn test_scheme_names() {
    assert_eq!(EcdsaSecp160r1::name(), "ECDSA-secp160r1");
    assert_eq!(EcdsaSecp256k1::name(), "ECDSA-secp256k1");
    assert_eq!(EcdsaSecp521r1::name(), "ECDSA-secp521r1");
}

#[test]
fn test_der_signature_sizes() {
    let (_, sk) = EcdsaSecp521r1::keypair(&mut OsRng).unwrap();
    let der = EcdsaSecp521r1::sign(b"size", &sk).unwrap();
    // two integers of at most 66 bytes need a long-form sequence length
    assert_eq!(der.0[0], 0x30);
    assert_eq!(der.0[1], 0x81);
    assert_eq!(der.0.len(), der.0[2] as usize + 3);

    let (_, sk) = EcdsaSecp160r1::keypair(&mut OsRng).unwrap();
    let der = EcdsaSecp160r1::sign(b"size", &sk).unwrap();
    assert_eq!(der.0[0], 0x30);
    assert_eq!(der.0.len(), der.0[1] as usize + 2);
    assert!(der.0.len() <= 2 + 2 * 23);
}

#[test]
fn test_engine_and_scheme_agree() {
    use sha2::{Digest, Sha384};
    use vecc::algorithms::ecdsa;

    let (pk, sk) = EcdsaSecp384r1::keypair(&mut OsRng).unwrap();
    let message = b"engine level";

    let hash = Sha384::digest(message);
    let raw = ecdsa::sign_deterministic::<Sha384>(sk.inner(), &hash).unwrap();
    let scheme = EcdsaSecp384r1::sign_deterministic(message, &sk).unwrap();

    let curve = EcdsaSecp384r1::curve().unwrap();
    assert_eq!(EcdsaSignature::new(&curve, raw).to_der(), scheme.0);
    assert!(ecdsa::verify(pk.inner(), &hash, &raw));
}
