//! Fast reduction of double-width products modulo special primes
//!
//! Two families are covered:
//!
//! * Generalized Mersenne (Solinas) primes, P-192/224/256/384. The product
//!   is split into 32-bit words `c0..c(2w-1)` and the residue is a signed sum
//!   of `w`-word numbers whose words are picked from the product. Each curve
//!   ships that sum as a table of [`SolinasTerm`]s.
//! * Pseudo-Mersenne primes `p = 2^k - ω` with a small `ω` (secp160r1,
//!   secp256k1, secp521r1). The high part above bit `k` is folded back in as
//!   `hi · ω` until nothing is left above bit `k`.
//!
//! Both end with a conditional-subtraction loop, and anything else falls
//! back to the generic shift-and-subtract reduction.

use core::cmp::Ordering;

use crate::ec::vli::{Vli, Wide, Word, MAX_WORDS, WORD_BITS};

/// One signed term of a Solinas reduction
///
/// `idx[j]` names the product word placed in result word `j`, or `-1` for a
/// zero word.
#[derive(Debug)]
pub struct SolinasTerm {
    /// Multiplier applied to the term (±1 or ±2)
    pub coeff: i64,
    /// Product word index per result word, least significant first
    pub idx: &'static [i8],
}

/// How a curve reduces products modulo its prime
#[derive(Debug)]
pub enum Reduction {
    /// Signed sum of word-permuted terms
    Solinas(&'static [SolinasTerm]),
    /// Fold `hi · ω` back in for `p = 2^k - ω`
    PseudoMersenne {
        /// Bit length of the prime
        k: usize,
        /// Little-endian words of `ω`
        omega: &'static [Word],
    },
    /// Shift-and-subtract long division
    Generic,
}

impl Reduction {
    /// Reduce a `2w`-word product modulo `p`
    pub fn reduce(&self, product: &Wide, p: &Vli, w: usize) -> Vli {
        match self {
            Reduction::Solinas(terms) => solinas(terms, product, p, w),
            Reduction::PseudoMersenne { k, omega } => pseudo_mersenne(*k, omega, product, p, w),
            Reduction::Generic => product.mmod(p, w),
        }
    }
}

fn solinas(terms: &[SolinasTerm], product: &Wide, p: &Vli, w: usize) -> Vli {
    let c = product.words();

    //---- column sums
    let mut acc = [0i64; MAX_WORDS];
    for term in terms {
        for (j, ix) in term.idx.iter().enumerate() {
            if *ix >= 0 {
                acc[j] += term.coeff * c[*ix as usize] as i64;
            }
        }
    }

    //---- signed carry propagation
    let mut out = Vli::ZERO;
    let mut carry: i64 = 0;
    for j in 0..w {
        let v = acc[j] + carry;
        out.0[j] = v as Word;
        carry = v >> WORD_BITS;
    }

    //---- bring the value into [0, p)
    while carry < 0 {
        let (sum, c) = out.add_carry(p, w);
        out = sum;
        carry += c as i64;
    }
    while carry > 0 || out.cmp_vartime(p, w) != Ordering::Less {
        let (diff, b) = out.sub_borrow(p, w);
        out = diff;
        carry -= b as i64;
    }
    out
}

fn pseudo_mersenne(k: usize, omega: &[Word], product: &Wide, p: &Vli, w: usize) -> Vli {
    let mut acc = *product;
    loop {
        let hi = acc.shr_bits(k);
        if hi.is_zero() {
            break;
        }
        let mut lo = acc;
        lo.mask_bits(k);
        acc = lo.add_mul_small(&hi, omega);
    }

    let mut out = acc.low(w);
    while out.cmp_vartime(p, w) != Ordering::Less {
        out = out.sub_borrow(p, w).0;
    }
    out
}

/* ---------------------------------------------------------------- */
/*  Solinas tables                                                   */
/* ---------------------------------------------------------------- */

/// P-192: p = 2^192 - 2^64 - 1
pub static P192_TERMS: [SolinasTerm; 4] = [
    SolinasTerm { coeff: 1, idx: &[0, 1, 2, 3, 4, 5] },
    SolinasTerm { coeff: 1, idx: &[6, 7, 6, 7, -1, -1] },
    SolinasTerm { coeff: 1, idx: &[-1, -1, 8, 9, 8, 9] },
    SolinasTerm { coeff: 1, idx: &[10, 11, 10, 11, 10, 11] },
];

/// P-224: p = 2^224 - 2^96 + 1
pub static P224_TERMS: [SolinasTerm; 5] = [
    SolinasTerm { coeff: 1, idx: &[0, 1, 2, 3, 4, 5, 6] },
    SolinasTerm { coeff: 1, idx: &[-1, -1, -1, 7, 8, 9, 10] },
    SolinasTerm { coeff: 1, idx: &[-1, -1, -1, 11, 12, 13, -1] },
    SolinasTerm { coeff: -1, idx: &[7, 8, 9, 10, 11, 12, 13] },
    SolinasTerm { coeff: -1, idx: &[11, 12, 13, -1, -1, -1, -1] },
];

/// P-256: p = 2^256 - 2^224 + 2^192 + 2^96 - 1
pub static P256_TERMS: [SolinasTerm; 9] = [
    SolinasTerm { coeff: 1, idx: &[0, 1, 2, 3, 4, 5, 6, 7] },
    SolinasTerm { coeff: 2, idx: &[-1, -1, -1, 11, 12, 13, 14, 15] },
    SolinasTerm { coeff: 2, idx: &[-1, -1, -1, 12, 13, 14, 15, -1] },
    SolinasTerm { coeff: 1, idx: &[8, 9, 10, -1, -1, -1, 14, 15] },
    SolinasTerm { coeff: 1, idx: &[9, 10, 11, 13, 14, 15, 13, 8] },
    SolinasTerm { coeff: -1, idx: &[11, 12, 13, -1, -1, -1, 8, 10] },
    SolinasTerm { coeff: -1, idx: &[12, 13, 14, 15, -1, -1, 9, 11] },
    SolinasTerm { coeff: -1, idx: &[13, 14, 15, 8, 9, 10, -1, 12] },
    SolinasTerm { coeff: -1, idx: &[14, 15, -1, 9, 10, 11, -1, 13] },
];

/// P-384: p = 2^384 - 2^128 - 2^96 + 2^32 - 1
pub static P384_TERMS: [SolinasTerm; 10] = [
    SolinasTerm { coeff: 1, idx: &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] },
    SolinasTerm { coeff: 2, idx: &[-1, -1, -1, -1, 21, 22, 23, -1, -1, -1, -1, -1] },
    SolinasTerm { coeff: 1, idx: &[12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23] },
    SolinasTerm { coeff: 1, idx: &[21, 22, 23, 12, 13, 14, 15, 16, 17, 18, 19, 20] },
    SolinasTerm { coeff: 1, idx: &[-1, 23, -1, 20, 12, 13, 14, 15, 16, 17, 18, 19] },
    SolinasTerm { coeff: 1, idx: &[-1, -1, -1, -1, 20, 21, 22, 23, -1, -1, -1, -1] },
    SolinasTerm { coeff: 1, idx: &[20, -1, -1, 21, 22, 23, -1, -1, -1, -1, -1, -1] },
    SolinasTerm { coeff: -1, idx: &[23, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22] },
    SolinasTerm { coeff: -1, idx: &[-1, 20, 21, 22, 23, -1, -1, -1, -1, -1, -1, -1] },
    SolinasTerm { coeff: -1, idx: &[-1, -1, -1, 23, 23, -1, -1, -1, -1, -1, -1, -1] },
];

/* ---------------------------------------------------------------- */
/*  Pseudo-Mersenne constants                                        */
/* ---------------------------------------------------------------- */

/// secp160r1: p = 2^160 - (2^31 + 1)
pub static SECP160R1_OMEGA: [Word; 1] = [0x8000_0001];

/// secp256k1: p = 2^256 - (2^32 + 977)
pub static SECP256K1_OMEGA: [Word; 2] = [0x0000_03D1, 0x0000_0001];

/// secp521r1: p = 2^521 - 1
pub static SECP521R1_OMEGA: [Word; 1] = [0x0000_0001];
