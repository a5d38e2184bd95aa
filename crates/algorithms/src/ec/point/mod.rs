//! Point arithmetic on short Weierstrass curves
//!
//! Points are affine `(x, y)` pairs with `(0, 0)` standing for the point at
//! infinity; no supported curve has a finite point with both coordinates
//! zero. Internally the ladder works in Jacobian coordinates, and pairs of
//! points that share a `Z` coordinate (co-Z) let each ladder step skip the
//! `Z` bookkeeping entirely.
//!
//! Secret scalars only ever reach [`point_mul`], which selects between its
//! two working points with constant-time swaps. The Shamir double-scalar
//! routine is variable time and serves verification and public-key tweaks.

use subtle::{Choice, ConditionallySelectable};
use vecc_params::traditional::ecdsa::CoefficientA;
use zeroize::Zeroize;

use crate::ec::curve::Curve;
use crate::ec::scalar;
use crate::ec::vli::Vli;
use crate::error::{Error, Result};
use crate::rng;

/// An affine point, `(0, 0)` being the point at infinity
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Zeroize)]
pub struct AffinePoint {
    /// x-coordinate
    pub x: Vli,
    /// y-coordinate
    pub y: Vli,
}

impl AffinePoint {
    /// The point at infinity
    pub const INFINITY: AffinePoint = AffinePoint {
        x: Vli::ZERO,
        y: Vli::ZERO,
    };

    /// Build from coordinates
    pub fn new(x: Vli, y: Vli) -> Self {
        AffinePoint { x, y }
    }

    /// Whether this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        bool::from(self.x.ct_is_zero() & self.y.ct_is_zero())
    }
}

impl ConditionallySelectable for AffinePoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        AffinePoint {
            x: Vli::conditional_select(&a.x, &b.x, choice),
            y: Vli::conditional_select(&a.y, &b.y, choice),
        }
    }
}

/// Check that a point is finite, has reduced coordinates and lies on the curve
pub fn is_valid(curve: &Curve, point: &AffinePoint) -> bool {
    if point.is_infinity() {
        return false;
    }
    let w = curve.num_words();
    if !bool::from(point.x.ct_lt(curve.p(), w)) || !bool::from(point.y.ct_lt(curve.p(), w)) {
        return false;
    }
    let y2 = curve.mod_square(&point.y);
    let rhs = curve.x_side(&point.x);
    y2 == rhs
}

/* ---------------------------------------------------------------- */
/*  Jacobian and co-Z primitives                                     */
/* ---------------------------------------------------------------- */

/// Convert Jacobian `(X, Y)` with known `Z` to `(X/Z^2, Y/Z^3)`
///
/// `z` is usually an inverse already, so this multiplies rather than
/// divides.
pub fn apply_z(curve: &Curve, x: &Vli, y: &Vli, z: &Vli) -> (Vli, Vli) {
    let mut t = curve.mod_square(z);
    let x = curve.mod_mult(x, &t);
    t = curve.mod_mult(&t, z);
    let y = curve.mod_mult(y, &t);
    t.zeroize();
    (x, y)
}

// value / 2 mod p, without branching on the low bit
fn mod_halve(curve: &Curve, value: &Vli) -> Vli {
    let w = curve.num_words();
    let addend = Vli::conditional_select(&Vli::ZERO, curve.p(), value.bit(0));
    let (mut out, carry) = value.add_carry(&addend, w);
    out.rshift1_with_carry(carry, w);
    out
}

/// Jacobian point doubling, `(X, Y, Z) → 2·(X, Y, Z)`
///
/// Uses the `a = -3` formula for the NIST-style curves and the `a = 0`
/// formula for secp256k1.
pub fn double_jacobian(curve: &Curve, x1: &Vli, y1: &Vli, z1: &Vli) -> (Vli, Vli, Vli) {
    if z1.is_zero() {
        return (*x1, *y1, *z1);
    }
    match curve.params().a {
        CoefficientA::MinusThree => double_jacobian_a_minus_3(curve, x1, y1, z1),
        CoefficientA::Zero => double_jacobian_a_zero(curve, x1, y1, z1),
    }
}

fn double_jacobian_a_minus_3(curve: &Curve, x1: &Vli, y1: &Vli, z1: &Vli) -> (Vli, Vli, Vli) {
    let mut t4 = curve.mod_square(y1); // y1^2
    let mut t5 = curve.mod_mult(x1, &t4); // A = x1*y1^2
    t4 = curve.mod_square(&t4); // y1^4
    let y = curve.mod_mult(y1, z1); // z3 = y1*z1
    let mut z = curve.mod_square(z1); // z1^2

    let mut x = curve.mod_add(x1, &z); // x1 + z1^2
    z = curve.mod_add(&z, &z); // 2*z1^2
    z = curve.mod_sub(&x, &z); // x1 - z1^2
    x = curve.mod_mult(&x, &z); // x1^2 - z1^4

    z = curve.mod_add(&x, &x); // 2*(x1^2 - z1^4)
    x = curve.mod_add(&x, &z); // 3*(x1^2 - z1^4)
    x = mod_halve(curve, &x); // B = 3/2*(x1^2 - z1^4)

    z = curve.mod_square(&x); // B^2
    z = curve.mod_sub(&z, &t5); // B^2 - A
    z = curve.mod_sub(&z, &t5); // x3 = B^2 - 2A
    t5 = curve.mod_sub(&t5, &z); // A - x3
    x = curve.mod_mult(&x, &t5); // B*(A - x3)
    t4 = curve.mod_sub(&x, &t4); // y3 = B*(A - x3) - y1^4

    t5.zeroize();
    x.zeroize();
    (z, t4, y)
}

fn double_jacobian_a_zero(curve: &Curve, x1: &Vli, y1: &Vli, z1: &Vli) -> (Vli, Vli, Vli) {
    let mut t5 = curve.mod_square(y1); // y1^2
    let mut t4 = curve.mod_mult(x1, &t5); // A = x1*y1^2
    let mut x = curve.mod_square(x1); // x1^2
    t5 = curve.mod_square(&t5); // y1^4
    let z = curve.mod_mult(y1, z1); // z3 = y1*z1

    let mut y = curve.mod_add(&x, &x); // 2*x1^2
    y = curve.mod_add(&y, &x); // 3*x1^2
    y = mod_halve(curve, &y); // B = 3/2*x1^2

    x = curve.mod_square(&y); // B^2
    x = curve.mod_sub(&x, &t4); // B^2 - A
    x = curve.mod_sub(&x, &t4); // x3 = B^2 - 2A
    t4 = curve.mod_sub(&t4, &x); // A - x3
    y = curve.mod_mult(&y, &t4); // B*(A - x3)
    y = curve.mod_sub(&y, &t5); // y3 = B*(A - x3) - y1^4

    t4.zeroize();
    t5.zeroize();
    (x, y, z)
}

/// Compute `(2P, P)` sharing one `Z`, starting from `P` scaled by `initial_z`
///
/// Returns `(x1', y1', x2, y2)` where the first pair is `2P` and the second
/// is `P`.
pub fn xycz_initial_double(
    curve: &Curve,
    x1: &Vli,
    y1: &Vli,
    initial_z: Option<&Vli>,
) -> (Vli, Vli, Vli, Vli) {
    let z = initial_z.copied().unwrap_or(Vli::ONE);
    let (x, y) = apply_z(curve, x1, y1, &z);
    let (dx, dy, dz) = double_jacobian(curve, &x, &y, &z);
    let (px, py) = apply_z(curve, x1, y1, &dz);
    (dx, dy, px, py)
}

/// Co-Z addition
///
/// Input `P = (x1, y1)` and `Q = (x2, y2)` sharing a `Z`. Returns
/// `(x1', y1', x3, y3)` with `P' = P` and `P + Q = (x3, y3)` sharing a new
/// `Z' = Z·(x2 - x1)`.
pub fn xycz_add(curve: &Curve, x1: &Vli, y1: &Vli, x2: &Vli, y2: &Vli) -> (Vli, Vli, Vli, Vli) {
    let mut t5 = curve.mod_sub(x2, x1); // x2 - x1
    t5 = curve.mod_square(&t5); // A = (x2 - x1)^2
    let x1 = curve.mod_mult(x1, &t5); // B = x1*A
    let mut x2 = curve.mod_mult(x2, &t5); // C = x2*A
    let mut y2 = curve.mod_sub(y2, y1); // y2 - y1
    t5 = curve.mod_square(&y2); // D = (y2 - y1)^2

    t5 = curve.mod_sub(&t5, &x1); // D - B
    t5 = curve.mod_sub(&t5, &x2); // x3 = D - B - C
    x2 = curve.mod_sub(&x2, &x1); // C - B
    let y1 = curve.mod_mult(y1, &x2); // y1*(C - B)
    x2 = curve.mod_sub(&x1, &t5); // B - x3
    y2 = curve.mod_mult(&y2, &x2); // (y2 - y1)*(B - x3)
    y2 = curve.mod_sub(&y2, &y1); // y3

    (x1, y1, t5, y2)
}

/// Co-Z conjugate addition
///
/// Input `P = (x1, y1)` and `Q = (x2, y2)` sharing a `Z`. Returns
/// `(x1', y1', x2', y2')` with `P - Q` in the first pair and `P + Q` in the
/// second, sharing a new `Z`.
pub fn xycz_addc(curve: &Curve, x1: &Vli, y1: &Vli, x2: &Vli, y2: &Vli) -> (Vli, Vli, Vli, Vli) {
    let mut t5 = curve.mod_sub(x2, x1); // x2 - x1
    t5 = curve.mod_square(&t5); // A = (x2 - x1)^2
    let x1 = curve.mod_mult(x1, &t5); // B = x1*A
    let mut x2 = curve.mod_mult(x2, &t5); // C = x2*A
    t5 = curve.mod_add(y2, y1); // y2 + y1
    let mut y2 = curve.mod_sub(y2, y1); // y2 - y1

    let mut t6 = curve.mod_sub(&x2, &x1); // C - B
    let mut y1 = curve.mod_mult(y1, &t6); // E = y1*(C - B)
    t6 = curve.mod_add(&x1, &x2); // B + C
    x2 = curve.mod_square(&y2); // (y2 - y1)^2
    x2 = curve.mod_sub(&x2, &t6); // x3 = (y2 - y1)^2 - (B + C)

    let mut t7 = curve.mod_sub(&x1, &x2); // B - x3
    y2 = curve.mod_mult(&y2, &t7); // (y2 - y1)*(B - x3)
    y2 = curve.mod_sub(&y2, &y1); // y3 = (y2 - y1)*(B - x3) - E

    t7 = curve.mod_square(&t5); // F = (y2 + y1)^2
    t7 = curve.mod_sub(&t7, &t6); // x3' = F - (B + C)
    t6 = curve.mod_sub(&t7, &x1); // x3' - B
    t6 = curve.mod_mult(&t6, &t5); // (y2 + y1)*(x3' - B)
    y1 = curve.mod_sub(&t6, &y1); // y3' = (y2 + y1)*(x3' - B) - E

    t5.zeroize();
    t6.zeroize();
    (t7, y1, x2, y2)
}

/* ---------------------------------------------------------------- */
/*  Montgomery ladder                                                */
/* ---------------------------------------------------------------- */

#[derive(Clone, Copy, Zeroize)]
struct Coords {
    x: Vli,
    y: Vli,
}

impl ConditionallySelectable for Coords {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Coords {
            x: Vli::conditional_select(&a.x, &b.x, choice),
            y: Vli::conditional_select(&a.y, &b.y, choice),
        }
    }
}

fn addc_step(curve: &Curve, a: &mut Coords, b: &mut Coords) {
    let (x1, y1, x2, y2) = xycz_addc(curve, &a.x, &a.y, &b.x, &b.y);
    *a = Coords { x: x1, y: y1 };
    *b = Coords { x: x2, y: y2 };
}

fn add_step(curve: &Curve, a: &mut Coords, b: &mut Coords) {
    let (x1, y1, x2, y2) = xycz_add(curve, &a.x, &a.y, &b.x, &b.y);
    *a = Coords { x: x1, y: y1 };
    *b = Coords { x: x2, y: y2 };
}

/// Montgomery ladder over co-Z Jacobian coordinates
///
/// Walks bits `num_bits - 2` down to `0` of `scalar`, whose bit
/// `num_bits - 1` is taken to be set. The two working points are exchanged
/// with constant-time swaps keyed on each bit, and a single inversion
/// recovers affine coordinates at the end.
///
/// Scalars that make an intermediate addition degenerate come out as the
/// point at infinity; [`mul_secret`] handles those.
pub fn point_mul(
    curve: &Curve,
    point: &AffinePoint,
    scalar: &Vli,
    initial_z: Option<&Vli>,
    num_bits: usize,
) -> AffinePoint {
    let (x1, y1, x0, y0) = xycz_initial_double(curve, &point.x, &point.y, initial_z);
    let mut r1 = Coords { x: x1, y: y1 };
    let mut r0 = Coords { x: x0, y: y0 };

    for i in (1..num_bits - 1).rev() {
        let bit = scalar.bit(i);
        Coords::conditional_swap(&mut r0, &mut r1, bit);
        addc_step(curve, &mut r0, &mut r1);
        add_step(curve, &mut r1, &mut r0);
        Coords::conditional_swap(&mut r0, &mut r1, bit);
    }

    let bit = scalar.bit(0);
    Coords::conditional_swap(&mut r0, &mut r1, bit);
    addc_step(curve, &mut r0, &mut r1);
    Coords::conditional_swap(&mut r0, &mut r1, bit);

    //---- find the final 1/Z value
    let selected = Coords::conditional_select(&r0, &r1, bit);
    let mut z = curve.mod_sub(&r1.x, &r0.x); // X1 - X0
    z = curve.mod_mult(&z, &selected.y); // Yb * (X1 - X0)
    z = curve.mod_mult(&z, &point.x); // xP * Yb * (X1 - X0)
    z = curve.mod_inv(&z); // 1 / (xP * Yb * (X1 - X0))
    z = curve.mod_mult(&z, &point.y); // yP / (xP * Yb * (X1 - X0))
    z = curve.mod_mult(&z, &selected.x); // Xb * yP / (xP * Yb * (X1 - X0))

    Coords::conditional_swap(&mut r0, &mut r1, bit);
    add_step(curve, &mut r1, &mut r0);
    Coords::conditional_swap(&mut r0, &mut r1, bit);

    let (x, y) = apply_z(curve, &r0.x, &r0.y, &z);
    r0.zeroize();
    r1.zeroize();
    z.zeroize();
    AffinePoint { x, y }
}

/// `k · point` for a secret `k` in `[1, n-1]`
///
/// The scalar is regularized so the ladder always walks `bits(n) + 1` bits,
/// and the ladder starts from a random `Z`. The few scalars the ladder
/// cannot represent (`1`, `n-2`, `n-1`) are public by nature and go through
/// the double-and-add path instead.
pub fn mul_secret(curve: &Curve, point: &AffinePoint, k: &Vli) -> Result<AffinePoint> {
    let w = curve.num_words();
    let mut regularized = scalar::regularize(curve, k);
    let mut initial_z = rng::random_int(curve.p(), w)?;
    let result = point_mul(
        curve,
        point,
        &regularized,
        Some(&initial_z),
        curve.num_n_bits() + 1,
    );
    regularized.zeroize();
    initial_z.zeroize();

    if result.is_infinity() && !k.is_zero() {
        return double_scalar_mul(curve, k, point, &Vli::ZERO, None).ok_or(Error::Processing {
            operation: "scalar multiplication",
            details: "result is the point at infinity",
        });
    }
    Ok(result)
}

/// Public point for a private scalar, `d · G`
///
/// The point at infinity is a hard failure, never retried.
pub fn compute_public_point(curve: &Curve, private: &Vli) -> Result<AffinePoint> {
    let result = mul_secret(curve, &curve.generator(), private)?;
    if result.is_infinity() {
        return Err(Error::Processing {
            operation: "public key computation",
            details: "result is the point at infinity",
        });
    }
    Ok(result)
}

/* ---------------------------------------------------------------- */
/*  Shamir's trick                                                   */
/* ---------------------------------------------------------------- */

/// `u1·P + u2·Q` with one shared double-and-add pass
///
/// Variable time; for public scalars only. Returns `None` for the point at
/// infinity. `Q = None` stands for the point at infinity.
pub fn double_scalar_mul(
    curve: &Curve,
    u1: &Vli,
    p: &AffinePoint,
    u2: &Vli,
    q: Option<&AffinePoint>,
) -> Option<AffinePoint> {
    //---- sum = P + Q
    let sum = q.and_then(|q| {
        if q.x == p.x {
            if q.y == p.y {
                let (x, y, z) = double_jacobian(curve, &p.x, &p.y, &Vli::ONE);
                let zi = curve.mod_inv(&z);
                let (x, y) = apply_z(curve, &x, &y, &zi);
                Some(AffinePoint { x, y })
            } else {
                None
            }
        } else {
            let z = curve.mod_sub(&q.x, &p.x);
            let (_, _, sx, sy) = xycz_add(curve, &p.x, &p.y, &q.x, &q.y);
            let zi = curve.mod_inv(&z);
            let (x, y) = apply_z(curve, &sx, &sy, &zi);
            Some(AffinePoint { x, y })
        }
    });

    let table: [Option<AffinePoint>; 4] = [None, Some(*p), q.copied(), sum];
    let num_bits = u1.num_bits().max(u2.num_bits());

    let mut acc: Option<(Vli, Vli)> = None;
    let mut z = Vli::ONE;
    for i in (0..num_bits).rev() {
        if let Some((rx, ry)) = acc {
            let (dx, dy, dz) = double_jacobian(curve, &rx, &ry, &z);
            acc = Some((dx, dy));
            z = dz;
        }

        let index = (u1.test_bit(i) as usize) | ((u2.test_bit(i) as usize) << 1);
        let point = match table[index] {
            Some(point) => point,
            None => continue,
        };

        let (rx, ry) = match acc {
            Some(coords) => coords,
            None => {
                acc = Some((point.x, point.y));
                z = Vli::ONE;
                continue;
            }
        };

        let (tx, ty) = apply_z(curve, &point.x, &point.y, &z);
        let tz = curve.mod_sub(&rx, &tx);
        if tz.is_zero() {
            if ry == ty {
                let (dx, dy, dz) = double_jacobian(curve, &rx, &ry, &z);
                acc = Some((dx, dy));
                z = dz;
            } else {
                acc = None;
                z = Vli::ONE;
            }
            continue;
        }
        let (_, _, sx, sy) = xycz_add(curve, &tx, &ty, &rx, &ry);
        acc = Some((sx, sy));
        z = curve.mod_mult(&z, &tz);
    }

    let (rx, ry) = acc?;
    if z.is_zero() {
        return None;
    }
    let zi = curve.mod_inv(&z);
    let (x, y) = apply_z(curve, &rx, &ry, &zi);
    Some(AffinePoint { x, y })
}

#[cfg(test)]
mod tests;
