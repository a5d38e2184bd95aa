use core::fmt;

use super::{assert_same_curve, scalar_from_bytes};
use crate::ec::curve::Curve;
use crate::ec::point::{self, AffinePoint};
use crate::ec::vli::Vli;
use crate::error::{validate, Error, Result};

/// Prefix byte of a compressed point with even `y`
pub const COMPRESSED_EVEN: u8 = 0x02;
/// Prefix byte of a compressed point with odd `y`
pub const COMPRESSED_ODD: u8 = 0x03;

/// An ECDSA public key, a valid affine point on its curve
#[derive(Clone, Copy)]
pub struct PublicKey {
    curve: Curve,
    point: AffinePoint,
}

impl PublicKey {
    /// Wrap a point after checking it lies on the curve
    pub fn from_point(curve: &Curve, point: &AffinePoint) -> Result<Self> {
        if !point::is_valid(curve, point) {
            return Err(Error::encoding("public key", "point is not on the curve"));
        }
        Ok(Self::from_point_unchecked(curve, *point))
    }

    pub(crate) fn from_point_unchecked(curve: &Curve, point: AffinePoint) -> Self {
        PublicKey {
            curve: *curve,
            point,
        }
    }

    /// Parse `x || y`, each coordinate `num_bytes` big-endian
    pub fn from_bytes(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let len = curve.num_bytes();
        validate::length("public key", bytes.len(), 2 * len)?;
        let point = AffinePoint::new(
            Vli::from_be_bytes(&bytes[..len]),
            Vli::from_be_bytes(&bytes[len..]),
        );
        Self::from_point(curve, &point)
    }

    /// Parse a compressed point, `0x02 | 0x03` followed by `x`
    ///
    /// `y` is recovered with a square root of `x^3 + ax + b` and checked
    /// against the curve equation, so an `x` with no point on the curve is
    /// rejected.
    pub fn decompress(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let len = curve.num_bytes();
        validate::length("compressed public key", bytes.len(), len + 1)?;
        let odd = match bytes[0] {
            COMPRESSED_EVEN => false,
            COMPRESSED_ODD => true,
            _ => {
                return Err(Error::encoding(
                    "compressed public key",
                    "prefix must be 0x02 or 0x03",
                ))
            }
        };

        let x = Vli::from_be_bytes(&bytes[1..]);
        if x.cmp_vartime(curve.p(), curve.num_words()) != core::cmp::Ordering::Less {
            return Err(Error::encoding("compressed public key", "x is not reduced"));
        }
        let rhs = curve.x_side(&x);
        let mut y = curve.mod_sqrt(&rhs);
        if curve.mod_square(&y) != rhs {
            return Err(Error::encoding(
                "compressed public key",
                "x is not the abscissa of a curve point",
            ));
        }
        if y.test_bit(0) != odd {
            y = curve.mod_sub(&Vli::ZERO, &y);
        }
        Self::from_point(curve, &AffinePoint::new(x, y))
    }

    /// Curve instance this key belongs to
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The affine point
    pub fn point(&self) -> AffinePoint {
        self.point
    }

    /// `x || y`, `2 · num_bytes` bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        let len = self.curve.num_bytes();
        let mut out = vec![0u8; 2 * len];
        self.point.x.to_be_bytes(&mut out[..len]);
        self.point.y.to_be_bytes(&mut out[len..]);
        out
    }

    /// Compressed form, `num_bytes + 1` bytes
    pub fn to_compressed(&self) -> Vec<u8> {
        let len = self.curve.num_bytes();
        let mut out = vec![0u8; len + 1];
        out[0] = if self.point.y.test_bit(0) {
            COMPRESSED_ODD
        } else {
            COMPRESSED_EVEN
        };
        self.point.x.to_be_bytes(&mut out[1..]);
        out
    }

    /// Whether the point is finite, reduced and on the curve
    pub fn is_valid(&self) -> bool {
        point::is_valid(&self.curve, &self.point)
    }

    /// `Q ← Q + t·G`
    ///
    /// Matches [`PrivateKey::tweak_add`](super::PrivateKey::tweak_add) on the
    /// private side. A result at infinity leaves the key unchanged and is an
    /// error.
    pub fn tweak_add(&mut self, tweak: &[u8]) -> Result<()> {
        let t = scalar_from_bytes(&self.curve, "tweak", tweak)?;
        let sum = point::double_scalar_mul(
            &self.curve,
            &t,
            &self.curve.generator(),
            &Vli::ONE,
            Some(&self.point),
        )
        .ok_or(Error::Processing {
            operation: "public key tweak",
            details: "result is the point at infinity",
        })?;
        self.point = sum;
        Ok(())
    }

    /// `Q ← t·Q`
    pub fn tweak_mul(&mut self, tweak: &[u8]) -> Result<()> {
        let t = scalar_from_bytes(&self.curve, "tweak", tweak)?;
        self.point = point::mul_secret(&self.curve, &self.point, &t)?;
        Ok(())
    }

    /// Whether two keys hold the same point; both must share a curve instance
    pub fn same_point(&self, other: &PublicKey) -> bool {
        assert_same_curve(&self.curve, &other.curve);
        self.point == other.point
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.curve == other.curve && self.point == other.point
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("curve", &self.curve.name())
            .field("point", &self.point)
            .finish()
    }
}
