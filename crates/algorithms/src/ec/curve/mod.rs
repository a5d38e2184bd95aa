//! Curve descriptors
//!
//! A [`Curve`] is a small copyable handle: a reference to the static domain
//! parameters of one of the supported curves, plus a per-instance random
//! scramble key and instance id. Two handles for the same named curve made
//! at different times compare unequal, and keys created under one handle
//! cannot be used with another.
//!
//! The per-curve hot paths (reduction modulo `p`, the `x^3 + ax + b`
//! evaluation, Jacobian doubling and the square root) are selected through
//! the enums stored in [`CurveParams`], with generic fallbacks.

mod reduce;
mod sqrt;

pub use reduce::{Reduction, SolinasTerm};

use core::fmt;

use subtle::Choice;
use vecc_params::traditional::ecdsa::{self as tables, CoefficientA, WeierstrassParams};
use zeroize::Zeroize;

use crate::ec::point::AffinePoint;
use crate::ec::vli::{Vli, MAX_BYTES, MAX_WORDS};
use crate::error::Result;
use crate::rng;

/// Names of the supported curves
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveId {
    /// SEC 2 secp160r1
    Secp160r1,
    /// SEC 2 secp192r1 (NIST P-192)
    Secp192r1,
    /// SEC 2 secp224r1 (NIST P-224)
    Secp224r1,
    /// SEC 2 secp256k1
    Secp256k1,
    /// SEC 2 secp256r1 (NIST P-256)
    Secp256r1,
    /// SEC 2 secp384r1 (NIST P-384)
    Secp384r1,
    /// SEC 2 secp521r1 (NIST P-521)
    Secp521r1,
}

impl CurveId {
    /// Every supported curve, smallest first
    pub const ALL: [CurveId; 7] = [
        CurveId::Secp160r1,
        CurveId::Secp192r1,
        CurveId::Secp224r1,
        CurveId::Secp256k1,
        CurveId::Secp256r1,
        CurveId::Secp384r1,
        CurveId::Secp521r1,
    ];

    /// SEC 2 name
    pub fn name(self) -> &'static str {
        self.params().name
    }

    /// Static domain parameters
    pub fn params(self) -> &'static CurveParams {
        match self {
            CurveId::Secp160r1 => &SECP160R1,
            CurveId::Secp192r1 => &SECP192R1,
            CurveId::Secp224r1 => &SECP224R1,
            CurveId::Secp256k1 => &SECP256K1,
            CurveId::Secp256r1 => &SECP256R1,
            CurveId::Secp384r1 => &SECP384R1,
            CurveId::Secp521r1 => &SECP521R1,
        }
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How square roots modulo `p` are taken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqrtMethod {
    /// `a^((p+1)/4)`, for `p ≡ 3 (mod 4)`
    Exponent,
    /// The secp224r1 addition-chain algorithm (`p ≡ 1 (mod 4)`)
    Secp224r1,
}

/// Static domain parameters of one curve, in native words
#[derive(Debug)]
pub struct CurveParams {
    /// Curve name
    pub id: CurveId,
    /// SEC 2 name
    pub name: &'static str,
    /// Working width in words, `ceil(bits(n) / 32)`
    pub num_words: usize,
    /// Encoded size of a coordinate, `ceil(bits(p) / 8)`
    pub num_bytes: usize,
    /// Bit length of the order
    pub num_n_bits: usize,
    /// Encoded size of a scalar, `ceil(bits(n) / 8)`
    pub num_n_bytes: usize,
    /// Field prime
    pub p: Vli,
    /// Group order
    pub n: Vli,
    /// `n >> 1`, the Low-S threshold
    pub half_n: Vli,
    /// Coefficient b
    pub b: Vli,
    /// Coefficient a (−3 or 0)
    pub a: CoefficientA,
    /// Base point x-coordinate
    pub g_x: Vli,
    /// Base point y-coordinate
    pub g_y: Vli,
    /// Reduction modulo `p`
    pub reduction: Reduction,
    /// Square root modulo `p`
    pub sqrt: SqrtMethod,
}

impl CurveParams {
    const fn from_table<const F: usize, const N: usize>(
        id: CurveId,
        table: &WeierstrassParams<F, N>,
        reduction: Reduction,
        sqrt: SqrtMethod,
    ) -> Self {
        let p = Vli::from_be_slice(&table.p);
        let n = Vli::from_be_slice(&table.n);
        let num_p_bits = p.const_num_bits();
        let num_n_bits = n.const_num_bits();
        CurveParams {
            id,
            name: table.name,
            num_words: (num_n_bits + 31) / 32,
            num_bytes: (num_p_bits + 7) / 8,
            num_n_bits,
            num_n_bytes: (num_n_bits + 7) / 8,
            p,
            n,
            half_n: n.const_shr1(),
            b: Vli::from_be_slice(&table.b),
            a: table.a,
            g_x: Vli::from_be_slice(&table.g_x),
            g_y: Vli::from_be_slice(&table.g_y),
            reduction,
            sqrt,
        }
    }
}

static SECP160R1: CurveParams = CurveParams::from_table(
    CurveId::Secp160r1,
    &tables::SECP160R1,
    Reduction::PseudoMersenne {
        k: 160,
        omega: &reduce::SECP160R1_OMEGA,
    },
    SqrtMethod::Exponent,
);

static SECP192R1: CurveParams = CurveParams::from_table(
    CurveId::Secp192r1,
    &tables::SECP192R1,
    Reduction::Solinas(&reduce::P192_TERMS),
    SqrtMethod::Exponent,
);

static SECP224R1: CurveParams = CurveParams::from_table(
    CurveId::Secp224r1,
    &tables::SECP224R1,
    Reduction::Solinas(&reduce::P224_TERMS),
    SqrtMethod::Secp224r1,
);

static SECP256K1: CurveParams = CurveParams::from_table(
    CurveId::Secp256k1,
    &tables::SECP256K1,
    Reduction::PseudoMersenne {
        k: 256,
        omega: &reduce::SECP256K1_OMEGA,
    },
    SqrtMethod::Exponent,
);

static SECP256R1: CurveParams = CurveParams::from_table(
    CurveId::Secp256r1,
    &tables::SECP256R1,
    Reduction::Solinas(&reduce::P256_TERMS),
    SqrtMethod::Exponent,
);

static SECP384R1: CurveParams = CurveParams::from_table(
    CurveId::Secp384r1,
    &tables::SECP384R1,
    Reduction::Solinas(&reduce::P384_TERMS),
    SqrtMethod::Exponent,
);

static SECP521R1: CurveParams = CurveParams::from_table(
    CurveId::Secp521r1,
    &tables::SECP521R1,
    Reduction::PseudoMersenne {
        k: 521,
        omega: &reduce::SECP521R1_OMEGA,
    },
    SqrtMethod::Exponent,
);

/// A randomized instance of one of the supported curves
#[derive(Clone, Copy)]
pub struct Curve {
    params: &'static CurveParams,
    scramble_key: Vli,
    instance_id: u64,
}

impl Curve {
    /// Instantiate a curve, drawing a fresh scramble key and instance id
    pub fn new(id: CurveId) -> Result<Self> {
        let params = id.params();
        let len = params.num_words * 4;
        let mut bytes = [0u8; MAX_BYTES];
        rng::fill_random(&mut bytes[..len])?;
        let scramble_key = Vli::from_be_bytes(&bytes[..len]);
        bytes.zeroize();

        Ok(Curve {
            params,
            scramble_key,
            instance_id: rng::random_u64()?,
        })
    }

    /// A fresh secp160r1 instance
    pub fn secp160r1() -> Result<Self> {
        Self::new(CurveId::Secp160r1)
    }

    /// A fresh secp192r1 instance
    pub fn secp192r1() -> Result<Self> {
        Self::new(CurveId::Secp192r1)
    }

    /// A fresh secp224r1 instance
    pub fn secp224r1() -> Result<Self> {
        Self::new(CurveId::Secp224r1)
    }

    /// A fresh secp256k1 instance
    pub fn secp256k1() -> Result<Self> {
        Self::new(CurveId::Secp256k1)
    }

    /// A fresh secp256r1 instance
    pub fn secp256r1() -> Result<Self> {
        Self::new(CurveId::Secp256r1)
    }

    /// A fresh secp384r1 instance
    pub fn secp384r1() -> Result<Self> {
        Self::new(CurveId::Secp384r1)
    }

    /// A fresh secp521r1 instance
    pub fn secp521r1() -> Result<Self> {
        Self::new(CurveId::Secp521r1)
    }

    /* ---------------------------------------------------------------- */
    /*  Accessors                                                        */
    /* ---------------------------------------------------------------- */

    /// Which curve this is
    pub fn id(&self) -> CurveId {
        self.params.id
    }

    /// SEC 2 name
    pub fn name(&self) -> &'static str {
        self.params.name
    }

    /// Static domain parameters
    pub fn params(&self) -> &'static CurveParams {
        self.params
    }

    /// Random id of this instance
    pub fn instance_id(&self) -> u64 {
        self.instance_id
    }

    /// Working width in words
    pub fn num_words(&self) -> usize {
        self.params.num_words
    }

    /// Size of an encoded coordinate
    pub fn num_bytes(&self) -> usize {
        self.params.num_bytes
    }

    /// Bit length of the order
    pub fn num_n_bits(&self) -> usize {
        self.params.num_n_bits
    }

    /// Size of an encoded scalar
    pub fn num_n_bytes(&self) -> usize {
        self.params.num_n_bytes
    }

    /// Field prime
    pub fn p(&self) -> &Vli {
        &self.params.p
    }

    /// Group order
    pub fn n(&self) -> &Vli {
        &self.params.n
    }

    /// Half the group order
    pub fn half_n(&self) -> &Vli {
        &self.params.half_n
    }

    /// Base point
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::new(self.params.g_x, self.params.g_y)
    }

    pub(crate) fn scramble_key(&self) -> &Vli {
        &self.scramble_key
    }

    /// Constant-time check that `0 < k < n`
    pub fn is_valid_scalar(&self, k: &Vli) -> bool {
        let w = self.num_words();
        let in_range: Choice = !k.ct_is_zero() & k.ct_lt(&self.params.n, w);
        // words above the width must be clear as well
        let mut high = 0;
        for word in k.words()[w..MAX_WORDS].iter() {
            high |= *word;
        }
        bool::from(in_range) && high == 0
    }

    /* ---------------------------------------------------------------- */
    /*  Arithmetic modulo p                                              */
    /* ---------------------------------------------------------------- */

    /// `a * b mod p`
    pub fn mod_mult(&self, a: &Vli, b: &Vli) -> Vli {
        let w = self.num_words();
        let mut product = a.mul_wide(b, w);
        let out = self.params.reduction.reduce(&product, &self.params.p, w);
        product.zeroize();
        out
    }

    /// `a^2 mod p`
    pub fn mod_square(&self, a: &Vli) -> Vli {
        let w = self.num_words();
        let mut product = a.square_wide(w);
        let out = self.params.reduction.reduce(&product, &self.params.p, w);
        product.zeroize();
        out
    }

    /// `a + b mod p`
    pub fn mod_add(&self, a: &Vli, b: &Vli) -> Vli {
        a.mod_add(b, &self.params.p, self.num_words())
    }

    /// `a - b mod p`
    pub fn mod_sub(&self, a: &Vli, b: &Vli) -> Vli {
        a.mod_sub(b, &self.params.p, self.num_words())
    }

    /// `a^-1 mod p`, 0 for 0
    pub fn mod_inv(&self, a: &Vli) -> Vli {
        a.mod_inv(&self.params.p, self.num_words())
    }

    /// A square root of `a` modulo `p`
    ///
    /// The result is only meaningful when `a` is a quadratic residue; callers
    /// square it to check.
    pub fn mod_sqrt(&self, a: &Vli) -> Vli {
        match self.params.sqrt {
            SqrtMethod::Exponent => sqrt::sqrt_exponent(self, a),
            SqrtMethod::Secp224r1 => sqrt::sqrt_secp224r1(self, a),
        }
    }

    /// Right-hand side of the curve equation, `x^3 + a*x + b mod p`
    pub fn x_side(&self, x: &Vli) -> Vli {
        match self.params.a {
            CoefficientA::MinusThree => {
                let three = Vli::from_word(3);
                let mut r = self.mod_square(x);
                r = self.mod_sub(&r, &three);
                r = self.mod_mult(&r, x);
                self.mod_add(&r, &self.params.b)
            }
            CoefficientA::Zero => {
                let mut r = self.mod_square(x);
                r = self.mod_mult(&r, x);
                self.mod_add(&r, &self.params.b)
            }
        }
    }

    /* ---------------------------------------------------------------- */
    /*  Arithmetic modulo n                                              */
    /* ---------------------------------------------------------------- */

    /// `a * b mod n`
    pub fn order_mult(&self, a: &Vli, b: &Vli) -> Vli {
        a.mod_mult(b, &self.params.n, self.num_words())
    }

    /// `a + b mod n`
    pub fn order_add(&self, a: &Vli, b: &Vli) -> Vli {
        a.mod_add(b, &self.params.n, self.num_words())
    }

    /// `a - b mod n`
    pub fn order_sub(&self, a: &Vli, b: &Vli) -> Vli {
        a.mod_sub(b, &self.params.n, self.num_words())
    }

    /// `a^-1 mod n`, 0 for 0
    pub fn order_inv(&self, a: &Vli) -> Vli {
        a.mod_inv(&self.params.n, self.num_words())
    }
}

impl PartialEq for Curve {
    fn eq(&self, other: &Self) -> bool {
        self.instance_id == other.instance_id
    }
}

impl Eq for Curve {}

impl fmt::Debug for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("name", &self.params.name)
            .field("instance_id", &self.instance_id)
            .finish()
    }
}

#[cfg(test)]
mod tests;
