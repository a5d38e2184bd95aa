use super::*;
use crate::ec::vli::Wide;

fn p_minus_1(curve: &Curve) -> Vli {
    curve.p().sub_borrow(&Vli::ONE, curve.num_words()).0
}

#[test]
fn test_parameter_sizes() {
    let expected = [
        (CurveId::Secp160r1, 6, 20, 161, 21),
        (CurveId::Secp192r1, 6, 24, 192, 24),
        (CurveId::Secp224r1, 7, 28, 224, 28),
        (CurveId::Secp256k1, 8, 32, 256, 32),
        (CurveId::Secp256r1, 8, 32, 256, 32),
        (CurveId::Secp384r1, 12, 48, 384, 48),
        (CurveId::Secp521r1, 17, 66, 521, 66),
    ];
    for (id, words, bytes, n_bits, n_bytes) in expected {
        let params = id.params();
        assert_eq!(params.num_words, words, "{}", id);
        assert_eq!(params.num_bytes, bytes, "{}", id);
        assert_eq!(params.num_n_bits, n_bits, "{}", id);
        assert_eq!(params.num_n_bytes, n_bytes, "{}", id);
        assert_eq!(params.id, id);
    }
}

#[test]
fn test_curve_names() {
    assert_eq!(CurveId::Secp256k1.name(), "secp256k1");
    assert_eq!(CurveId::Secp521r1.to_string(), "secp521r1");
    let curve = Curve::secp224r1().unwrap();
    assert_eq!(curve.name(), "secp224r1");
    assert_eq!(curve.id(), CurveId::Secp224r1);
}

#[test]
fn test_generator_on_curve() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let g = curve.generator();
        assert_eq!(curve.mod_square(&g.y), curve.x_side(&g.x), "{}", id);
    }
}

#[test]
fn test_half_n() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        let (twice, _) = curve.half_n().add_carry(curve.half_n(), w);
        // n is odd, so 2 * (n >> 1) + 1 == n
        assert_eq!(twice.add_carry(&Vli::ONE, w).0, *curve.n(), "{}", id);
    }
}

#[test]
fn test_fast_reduction_matches_generic() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        let p = curve.p();
        let max = p_minus_1(&curve);

        let mut inputs = vec![(max, max), (Vli::ONE, max), (Vli::ZERO, max)];
        for _ in 0..50 {
            let a = rng::random_int(p, w).unwrap();
            let b = rng::random_int(p, w).unwrap();
            inputs.push((a, b));
        }

        for (a, b) in inputs {
            let product = a.mul_wide(&b, w);
            let fast = curve.params().reduction.reduce(&product, p, w);
            let slow = Reduction::Generic.reduce(&product, p, w);
            assert_eq!(fast, slow, "{} reduction", id);
        }
    }
}

#[test]
fn test_reduction_of_full_width_value() {
    // every word set, wider than any reduced product
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        let mut all_ones = Vli::ZERO;
        for word in all_ones.0[..w].iter_mut() {
            *word = u32::MAX;
        }
        let product: Wide = all_ones.square_wide(w);
        let expected = product.mmod(curve.p(), w);
        if let Reduction::Solinas(_) = curve.params().reduction {
            let fast = curve.params().reduction.reduce(&product, curve.p(), w);
            assert_eq!(fast, expected, "{}", id);
        }
    }
}

#[test]
fn test_mod_inv_identity() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        for _ in 0..10 {
            let a = rng::random_int(curve.p(), w).unwrap();
            let inv = curve.mod_inv(&a);
            assert_eq!(curve.mod_mult(&a, &inv), Vli::ONE, "{} field inverse", id);

            let k = rng::random_int(curve.n(), w).unwrap();
            let kinv = curve.order_inv(&k);
            assert_eq!(curve.order_mult(&k, &kinv), Vli::ONE, "{} order inverse", id);
        }
        assert!(curve.mod_inv(&Vli::ZERO).is_zero());
    }
}

#[test]
fn test_mod_sqrt_of_squares() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        for _ in 0..5 {
            let a = rng::random_int(curve.p(), w).unwrap();
            let square = curve.mod_square(&a);
            let root = curve.mod_sqrt(&square);
            assert_eq!(curve.mod_square(&root), square, "{} sqrt", id);
        }
        // the generator's y is a root of its x side
        let g = curve.generator();
        let root = curve.mod_sqrt(&curve.x_side(&g.x));
        let neg = curve.mod_sub(&Vli::ZERO, &root);
        assert!(root == g.y || neg == g.y, "{} generator y", id);
    }
}

#[test]
fn test_order_arithmetic() {
    let curve = Curve::secp256k1().unwrap();
    let n_minus_1 = curve.n().sub_borrow(&Vli::ONE, curve.num_words()).0;
    assert!(curve.order_add(&n_minus_1, &Vli::ONE).is_zero());
    assert_eq!(curve.order_sub(&Vli::ZERO, &Vli::ONE), n_minus_1);
    // (n - 1)^2 = 1 mod n
    assert_eq!(curve.order_mult(&n_minus_1, &n_minus_1), Vli::ONE);
}

#[test]
fn test_scalar_range() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        assert!(!curve.is_valid_scalar(&Vli::ZERO));
        assert!(curve.is_valid_scalar(&Vli::ONE));
        assert!(!curve.is_valid_scalar(curve.n()));
        let n_minus_1 = curve.n().sub_borrow(&Vli::ONE, w).0;
        assert!(curve.is_valid_scalar(&n_minus_1));
    }
}

#[test]
fn test_instances_are_distinct() {
    let a = Curve::secp256r1().unwrap();
    let b = Curve::secp256r1().unwrap();
    assert_eq!(a, a);
    assert_ne!(a, b);
    assert_ne!(a.instance_id(), b.instance_id());
    assert_ne!(a.scramble_key(), b.scramble_key());
    let debug = format!("{:?}", a);
    assert!(debug.contains("secp256r1"));
}
