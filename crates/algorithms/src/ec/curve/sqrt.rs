//! Square roots modulo the field prime

use super::Curve;
use crate::ec::vli::Vli;

/// `a^((p+1)/4) mod p`
pub(super) fn sqrt_exponent(curve: &Curve, a: &Vli) -> Vli {
    let w = curve.num_words();
    let (exponent, _) = curve.p().add_carry(&Vli::ONE, w);
    let mut result = Vli::ONE;
    let mut i = exponent.num_bits() - 1;
    while i > 1 {
        result = curve.mod_square(&result);
        if exponent.test_bit(i) {
            result = curve.mod_mult(&result, a);
        }
        i -= 1;
    }
    result
}

/* ---------------------------------------------------------------- */
/*  secp224r1                                                        */
/*                                                                  */
/*  p ≡ 1 (mod 4), so the root is found with the Lucas-style        */
/*  addition chain over triples (d, e, f) from the NIST modular     */
/*  square root note, routines 3.2.4 to 3.2.7.                      */
/* ---------------------------------------------------------------- */

#[derive(Clone, Copy)]
struct Triple {
    d: Vli,
    e: Vli,
    f: Vli,
}

// routine 3.2.4: one squaring step
fn rs(curve: &Curve, d0: &Vli, e0: &Vli, f0: &Vli) -> Triple {
    let t = curve.mod_square(d0);
    let mut e = curve.mod_mult(d0, e0);
    let d = curve.mod_add(&t, f0);
    e = curve.mod_add(&e, &e);
    let mut f = curve.mod_mult(&t, f0);
    f = curve.mod_add(&f, &f);
    f = curve.mod_add(&f, &f);
    Triple { d, e, f }
}

// routine 3.2.5: j squaring steps
fn rss(curve: &Curve, start: Triple, j: usize) -> Triple {
    let mut t = start;
    for _ in 0..j {
        t = rs(curve, &t.d, &t.e, &t.f);
    }
    t
}

// routine 3.2.6: combine two triples
fn rm(curve: &Curve, c: &Vli, d0: &Vli, e0: &Vli, d1: &Vli, e1: &Vli) -> Triple {
    let zero = Vli::ZERO;
    let mut t1 = curve.mod_mult(e0, e1);
    t1 = curve.mod_mult(&t1, c);
    t1 = curve.mod_sub(&zero, &t1);
    let mut t2 = curve.mod_mult(d0, d1);
    t2 = curve.mod_add(&t2, &t1);
    t1 = curve.mod_mult(d0, e1);
    let mut e = curve.mod_mult(d1, e0);
    e = curve.mod_add(&e, &t1);
    let mut f = curve.mod_square(&e);
    f = curve.mod_mult(&f, c);
    f = curve.mod_sub(&zero, &f);
    Triple { d: t2, e, f }
}

// routine 3.2.7: raise (r, 1, -c) through seven doubling rounds
fn rp(curve: &Curve, c: &Vli, r: &Vli) -> Triple {
    let mut cur = Triple {
        d: *r,
        e: Vli::ONE,
        f: curve.mod_sub(&Vli::ZERO, c),
    };
    let mut pow2i = 1;
    for _ in 0..7 {
        let stepped = rss(curve, cur, pow2i);
        cur = rm(curve, c, &stepped.d, &stepped.e, &cur.d, &cur.e);
        pow2i *= 2;
    }
    cur
}

pub(super) fn sqrt_secp224r1(curve: &Curve, a: &Vli) -> Vli {
    let start = rp(curve, a, a);
    let (mut d0, mut e0) = (start.d, start.e);
    let mut next = rs(curve, &d0, &e0, &start.f);
    for _ in 1..96 {
        d0 = next.d;
        e0 = next.e;
        next = rs(curve, &d0, &e0, &next.f);
        if next.d.is_zero() {
            break;
        }
    }
    let inv = curve.mod_inv(&e0);
    curve.mod_mult(&d0, &inv)
}
