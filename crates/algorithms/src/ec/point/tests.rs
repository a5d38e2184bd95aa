use super::*;
use crate::ec::curve::CurveId;

fn from_hex(s: &str) -> Vli {
    Vli::from_be_bytes(&hex::decode(s).unwrap())
}

fn negate(curve: &Curve, point: &AffinePoint) -> AffinePoint {
    AffinePoint::new(point.x, curve.mod_sub(&Vli::ZERO, &point.y))
}

#[test]
fn test_infinity() {
    assert!(AffinePoint::INFINITY.is_infinity());
    assert!(AffinePoint::default().is_infinity());
    let curve = Curve::secp192r1().unwrap();
    assert!(!curve.generator().is_infinity());
    assert!(!is_valid(&curve, &AffinePoint::INFINITY));
}

#[test]
fn test_generator_is_valid() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        assert!(is_valid(&curve, &curve.generator()), "{}", id);
    }
}

#[test]
fn test_off_curve_point_rejected() {
    let curve = Curve::secp256r1().unwrap();
    let g = curve.generator();
    let bad = AffinePoint::new(g.x, curve.mod_add(&g.y, &Vli::ONE));
    assert!(!is_valid(&curve, &bad));
    // unreduced coordinate
    let big = AffinePoint::new(*curve.p(), g.y);
    assert!(!is_valid(&curve, &big));
}

#[test]
fn test_secp256r1_public_point() {
    let curve = Curve::secp256r1().unwrap();
    let d = from_hex("C9AFA9D845BA75166B5C215767B1D6934E50C3DB36E89B127B8A622B120F6721");
    let q = compute_public_point(&curve, &d).unwrap();
    assert_eq!(
        q.x,
        from_hex("60FED4BA255A9D31C961EB74C6356D68C049B8923B61FA6CE669622E60F29FB6")
    );
    assert_eq!(
        q.y,
        from_hex("7903FE1008B8BC99A41AE9E95628BC64F2F1B20C2D7E9F5177A3C294D4462299")
    );
}

#[test]
fn test_secp256k1_public_point() {
    let curve = Curve::secp256k1().unwrap();
    let d = from_hex("ebb2c082fd7727890a28ac82f6bdf97bad8de9f5d7c9028692de1a255cad3e0f");
    let q = compute_public_point(&curve, &d).unwrap();
    assert_eq!(
        q.x,
        from_hex("779dd197a5df977ed2cf6cb31d82d43328b790dc6b3b7d4437a427bd5847dfcd")
    );
    assert_eq!(
        q.y,
        from_hex("e94b724a555b6d017bb7607c3e3281daf5b1699d6ef4124975c9237b917d426f")
    );
}

#[test]
fn test_ladder_agrees_with_double_and_add() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let g = curve.generator();
        for _ in 0..3 {
            let k = rng::random_int(curve.n(), curve.num_words()).unwrap();
            let ladder = mul_secret(&curve, &g, &k).unwrap();
            let shamir = double_scalar_mul(&curve, &k, &g, &Vli::ZERO, None).unwrap();
            assert_eq!(ladder, shamir, "{}", id);
            assert!(is_valid(&curve, &ladder), "{}", id);
        }
    }
}

#[test]
fn test_ladder_ignores_initial_z() {
    let curve = Curve::secp384r1().unwrap();
    let g = curve.generator();
    let k = rng::random_int(curve.n(), curve.num_words()).unwrap();
    let regular = scalar::regularize(&curve, &k);
    let bits = curve.num_n_bits() + 1;
    let z = rng::random_int(curve.p(), curve.num_words()).unwrap();
    let a = point_mul(&curve, &g, &regular, None, bits);
    let b = point_mul(&curve, &g, &regular, Some(&z), bits);
    assert_eq!(a, b);
}

#[test]
fn test_edge_scalars() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        let g = curve.generator();
        let n_minus_1 = curve.n().sub_borrow(&Vli::ONE, w).0;
        let n_minus_2 = curve.n().sub_borrow(&Vli::from_word(2), w).0;

        assert_eq!(mul_secret(&curve, &g, &Vli::ONE).unwrap(), g, "{} 1G", id);
        assert_eq!(
            mul_secret(&curve, &g, &n_minus_1).unwrap(),
            negate(&curve, &g),
            "{} (n-1)G",
            id
        );

        let two_g = mul_secret(&curve, &g, &Vli::from_word(2)).unwrap();
        let (x, y, z) = double_jacobian(&curve, &g.x, &g.y, &Vli::ONE);
        let zi = curve.mod_inv(&z);
        let (dx, dy) = apply_z(&curve, &x, &y, &zi);
        assert_eq!(two_g, AffinePoint::new(dx, dy), "{} 2G", id);
        assert_eq!(
            mul_secret(&curve, &g, &n_minus_2).unwrap(),
            negate(&curve, &two_g),
            "{} (n-2)G",
            id
        );
    }
}

#[test]
fn test_order_times_generator_is_infinity() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let g = curve.generator();
        assert!(double_scalar_mul(&curve, curve.n(), &g, &Vli::ZERO, None).is_none(), "{}", id);
    }
}

#[test]
fn test_shamir_linear_combination() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let w = curve.num_words();
        let g = curve.generator();
        let d = rng::random_int(curve.n(), w).unwrap();
        let q = compute_public_point(&curve, &d).unwrap();
        let u1 = rng::random_int(curve.n(), w).unwrap();
        let u2 = rng::random_int(curve.n(), w).unwrap();

        // u1*G + u2*(d*G) == (u1 + u2*d)*G
        let combined = double_scalar_mul(&curve, &u1, &g, &u2, Some(&q)).unwrap();
        let k = curve.order_add(&u1, &curve.order_mult(&u2, &d));
        let expected = mul_secret(&curve, &g, &k).unwrap();
        assert_eq!(combined, expected, "{}", id);
    }
}

#[test]
fn test_shamir_with_equal_and_opposite_points() {
    let curve = Curve::secp224r1().unwrap();
    let g = curve.generator();
    let three = Vli::from_word(3);
    let five = Vli::from_word(5);

    // Q == P takes the doubling path for the table sum
    let sum = double_scalar_mul(&curve, &three, &g, &five, Some(&g)).unwrap();
    assert_eq!(sum, mul_secret(&curve, &g, &Vli::from_word(8)).unwrap());

    // Q == -P: the table sum is infinity
    let neg = negate(&curve, &g);
    let diff = double_scalar_mul(&curve, &five, &g, &three, Some(&neg)).unwrap();
    assert_eq!(diff, mul_secret(&curve, &g, &Vli::from_word(2)).unwrap());
    assert!(double_scalar_mul(&curve, &five, &g, &five, Some(&neg)).is_none());
}

// Check that Jacobian pairs all sit on the same (unknown) Z and map to the
// given affine points: X = x * Z^2 and Y = y * Z^3
fn assert_shared_z(curve: &Curve, pairs: &[((Vli, Vli), AffinePoint)]) {
    let ((x0, y0), p0) = pairs[0];
    let z2 = curve.mod_mult(&x0, &curve.mod_inv(&p0.x));
    let z3 = curve.mod_mult(&y0, &curve.mod_inv(&p0.y));
    assert_eq!(curve.mod_square(&z3), curve.mod_mult(&curve.mod_square(&z2), &z2));
    for ((x, y), point) in pairs {
        assert_eq!(curve.mod_mult(&point.x, &z2), *x);
        assert_eq!(curve.mod_mult(&point.y, &z3), *y);
    }
}

#[test]
fn test_co_z_addition() {
    for id in CurveId::ALL {
        let curve = Curve::new(id).unwrap();
        let g = curve.generator();
        let two_g = mul_secret(&curve, &g, &Vli::from_word(2)).unwrap();
        let three_g = mul_secret(&curve, &g, &Vli::from_word(3)).unwrap();

        let z = rng::random_int(curve.p(), curve.num_words()).unwrap();
        let (x2, y2, x1, y1) = xycz_initial_double(&curve, &g.x, &g.y, Some(&z));
        assert_shared_z(&curve, &[((x1, y1), g), ((x2, y2), two_g)]);

        let (px, py, sx, sy) = xycz_add(&curve, &x1, &y1, &x2, &y2);
        assert_shared_z(&curve, &[((sx, sy), three_g), ((px, py), g)]);

        let (dx, dy, sx, sy) = xycz_addc(&curve, &x1, &y1, &x2, &y2);
        assert_shared_z(&curve, &[((sx, sy), three_g), ((dx, dy), negate(&curve, &g))]);
    }
}
