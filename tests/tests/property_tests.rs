//! Property-based tests for signing, encodings and key arithmetic

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use vecc::algorithms::rng::random_int_from;
use vecc::prelude::*;

fn curve_id() -> impl Strategy<Value = CurveId> {
    prop::sample::select(CurveId::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn secp256k1_sign_verify(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 0..256)) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (pk, sk) = EcdsaSecp256k1::keypair(&mut rng).unwrap();
        let signature = EcdsaSecp256k1::sign(&message, &sk).unwrap();
        prop_assert!(EcdsaSecp256k1::verify(&message, &signature, &pk).is_ok());

        let mut other = message.clone();
        other.push(0x00);
        prop_assert!(EcdsaSecp256k1::verify(&other, &signature, &pk).is_err());
    }

    #[test]
    fn der_and_compact_agree(seed in any::<u64>(), message in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let (_, sk) = EcdsaSecp192r1::keypair(&mut rng).unwrap();
        let curve = EcdsaSecp192r1::curve().unwrap();

        let signature = EcdsaSecp192r1::sign_raw(&message, &sk).unwrap();
        let from_der = EcdsaSignature::from_der(&curve, &signature.to_der()).unwrap();
        let from_compact = EcdsaSignature::from_compact(&curve, &signature.to_compact()).unwrap();
        prop_assert_eq!(from_der, signature);
        prop_assert_eq!(from_compact, signature);
    }

    #[test]
    fn random_scalars_survive_der_and_compact(id in curve_id(), seed in any::<u64>()) {
        let curve = Curve::new(id).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let w = curve.num_words();
        let r = random_int_from(&mut rng, curve.n(), w).unwrap();
        let s = random_int_from(&mut rng, curve.n(), w).unwrap();
        let signature = EcdsaSignature::new(&curve, RawSignature::new(r, s));

        let compact = signature.to_compact();
        prop_assert_eq!(compact.len(), 2 * curve.num_n_bytes());
        prop_assert_eq!(EcdsaSignature::from_compact(&curve, &compact).unwrap(), signature);
        prop_assert_eq!(EcdsaSignature::from_der(&curve, &signature.to_der()).unwrap(), signature);
    }

    #[test]
    fn private_key_bytes_roundtrip(id in curve_id(), seed in any::<u64>()) {
        let curve = Curve::new(id).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let key = PrivateKey::generate_with_rng(&curve, &mut rng).unwrap();
        let bytes = key.to_bytes();
        prop_assert_eq!(bytes.len(), curve.num_n_bytes());
        prop_assert_eq!(PrivateKey::from_bytes(&curve, bytes.as_slice()).unwrap(), key);
    }

    #[test]
    fn compressed_keys_decompress(id in curve_id(), seed in any::<u64>()) {
        let curve = Curve::new(id).unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let public = PrivateKey::generate_with_rng(&curve, &mut rng).unwrap().public_key().unwrap();
        prop_assert_eq!(PublicKey::decompress(&curve, &public.to_compressed()).unwrap(), public);
    }

    #[test]
    fn derivation_is_deterministic(seed in prop::collection::vec(any::<u8>(), 32..64), sequence in any::<u32>()) {
        let curve = Curve::secp256r1().unwrap();
        let a = PrivateKey::derive::<Sha256>(&curve, &seed, b"prop", sequence).unwrap();
        let b = PrivateKey::derive::<Sha256>(&curve, &seed, b"prop", sequence).unwrap();
        prop_assert!(a.is_valid());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn ecdh_is_symmetric(seed in any::<u64>()) {
        let curve = Curve::secp160r1().unwrap();
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let a = PrivateKey::generate_with_rng(&curve, &mut rng).unwrap();
        let b = PrivateKey::generate_with_rng(&curve, &mut rng).unwrap();
        prop_assert_eq!(
            a.ecdh(&b.public_key().unwrap()).unwrap(),
            b.ecdh(&a.public_key().unwrap()).unwrap()
        );
    }
}
