//! Fixed-capacity multi-word integers
//!
//! A [`Vli`] is an unsigned integer stored as `MAX_WORDS` little-endian
//! 32-bit words. Every operation takes the active width `w` (the curve's word
//! count) explicitly; words at index `w` and above are kept at zero so that a
//! value can be compared, zeroized and copied without knowing its width.
//!
//! Operations whose name carries `vartime` branch on their inputs and must
//! only see public data. Everything else runs in time that depends on `w`
//! alone.

use core::cmp::Ordering;
use core::fmt;

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use vecc_internal::constant_time::{ct_is_nonzero_u32, ct_mask_u32};
use vecc_internal::endian;
use zeroize::Zeroize;

/// Machine word used for limbs
pub type Word = u32;

/// Double-width word used for products and carries
pub type DoubleWord = u64;

/// Bits per limb
pub const WORD_BITS: usize = 32;

/// Capacity in words, enough for secp521r1 (521 bits → 17 words)
pub const MAX_WORDS: usize = 17;

/// Capacity in bytes of a big-endian encoding
pub const MAX_BYTES: usize = MAX_WORDS * 4;

const HIGH_BIT: Word = 1 << (WORD_BITS - 1);

/// Fixed-capacity unsigned integer
#[derive(Clone, Copy, Zeroize)]
pub struct Vli(pub(crate) [Word; MAX_WORDS]);

/// Double-width product of two [`Vli`] values
#[derive(Clone, Copy, Zeroize)]
pub struct Wide(pub(crate) [Word; 2 * MAX_WORDS]);

impl Vli {
    /* ---------------------------------------------------------------- */
    /*  Construction and conversion                                      */
    /* ---------------------------------------------------------------- */

    /// The value 0
    pub const ZERO: Vli = Vli([0; MAX_WORDS]);

    /// The value 1
    pub const ONE: Vli = Vli::from_word(1);

    /// Build from a single word
    pub const fn from_word(value: Word) -> Self {
        let mut words = [0; MAX_WORDS];
        words[0] = value;
        Vli(words)
    }

    /// Build from little-endian words
    ///
    /// Panics if more than `MAX_WORDS` words are supplied.
    pub fn from_words(words: &[Word]) -> Self {
        assert!(words.len() <= MAX_WORDS, "too many words for a Vli");
        let mut out = Vli::ZERO;
        out.0[..words.len()].copy_from_slice(words);
        out
    }

    /// Build from a big-endian byte string at compile time
    ///
    /// Used for curve constants. Bytes beyond the capacity are ignored.
    pub const fn from_be_slice(bytes: &[u8]) -> Self {
        let mut words = [0; MAX_WORDS];
        let len = bytes.len();
        let mut i = 0;
        while i < len && i < MAX_BYTES {
            let b = bytes[len - 1 - i] as Word;
            words[i / 4] |= b << (8 * (i % 4));
            i += 1;
        }
        Vli(words)
    }

    /// Build from a big-endian byte string
    ///
    /// Only the low `MAX_BYTES` bytes are read; callers check lengths first.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut out = Vli::ZERO;
        endian::words_from_be_bytes(&mut out.0, bytes);
        out
    }

    /// Write the low `out.len()` bytes as a big-endian string
    pub fn to_be_bytes(&self, out: &mut [u8]) {
        endian::words_to_be_bytes(&self.0, out);
    }

    /// Big-endian encoding into a fresh vector of `len` bytes
    pub fn to_be_vec(&self, len: usize) -> Vec<u8> {
        let mut out = vec![0u8; len];
        self.to_be_bytes(&mut out);
        out
    }

    /// Little-endian words
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /* ---------------------------------------------------------------- */
    /*  Inspection                                                       */
    /* ---------------------------------------------------------------- */

    /// Constant-time zero test
    pub fn ct_is_zero(&self) -> Choice {
        let mut acc = 0;
        for w in self.0.iter() {
            acc |= *w;
        }
        !ct_is_nonzero_u32(acc)
    }

    /// Zero test
    pub fn is_zero(&self) -> bool {
        self.ct_is_zero().into()
    }

    /// Constant-time equality over the full capacity
    pub fn ct_equal(&self, other: &Vli) -> Choice {
        self.0.ct_eq(&other.0)
    }

    /// Bit `bit` as a [`Choice`], without branching
    pub fn bit(&self, bit: usize) -> Choice {
        Choice::from(((self.0[bit / WORD_BITS] >> (bit % WORD_BITS)) & 1) as u8)
    }

    /// Bit `bit`, for public values
    pub fn test_bit(&self, bit: usize) -> bool {
        (self.0[bit / WORD_BITS] >> (bit % WORD_BITS)) & 1 == 1
    }

    /// Number of significant bits (0 for zero)
    ///
    /// Variable time; only for public values and loop bounds.
    pub fn num_bits(&self) -> usize {
        for i in (0..MAX_WORDS).rev() {
            if self.0[i] != 0 {
                return i * WORD_BITS + (WORD_BITS - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Significant-bit count usable in constant expressions
    pub const fn const_num_bits(&self) -> usize {
        let mut i = MAX_WORDS;
        while i > 0 {
            i -= 1;
            if self.0[i] != 0 {
                return i * WORD_BITS + (WORD_BITS - self.0[i].leading_zeros() as usize);
            }
        }
        0
    }

    /// Variable-time comparison of the low `w` words
    pub fn cmp_vartime(&self, other: &Vli, w: usize) -> Ordering {
        for i in (0..w).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// Constant-time `self < other`
    pub fn ct_lt(&self, other: &Vli, w: usize) -> Choice {
        let (_, borrow) = self.sub_borrow(other, w);
        Choice::from(borrow as u8)
    }

    /// Comparison whose running time does not depend on the values
    ///
    /// The ordering is computed from a full subtraction; only the final
    /// conversion to [`Ordering`] inspects the result.
    pub fn cmp_ct(&self, other: &Vli, w: usize) -> Ordering {
        let (diff, borrow) = self.sub_borrow(other, w);
        let nonzero = !diff.ct_is_zero();
        let code = Word::conditional_select(
            &Word::conditional_select(&1, &2, nonzero),
            &0,
            Choice::from(borrow as u8),
        );
        match code {
            0 => Ordering::Less,
            1 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    }

    /* ---------------------------------------------------------------- */
    /*  Plain arithmetic                                                 */
    /* ---------------------------------------------------------------- */

    /// `self + other` over `w` words, with the carry out
    pub fn add_carry(&self, other: &Vli, w: usize) -> (Vli, Word) {
        let mut out = Vli::ZERO;
        let mut carry: DoubleWord = 0;
        for i in 0..w {
            let sum = self.0[i] as DoubleWord + other.0[i] as DoubleWord + carry;
            out.0[i] = sum as Word;
            carry = sum >> WORD_BITS;
        }
        (out, carry as Word)
    }

    /// `self - other` over `w` words, with the borrow out
    pub fn sub_borrow(&self, other: &Vli, w: usize) -> (Vli, Word) {
        let mut out = Vli::ZERO;
        let mut borrow: DoubleWord = 0;
        for i in 0..w {
            let diff = (self.0[i] as DoubleWord)
                .wrapping_sub(other.0[i] as DoubleWord)
                .wrapping_sub(borrow);
            out.0[i] = diff as Word;
            borrow = (diff >> WORD_BITS) & 1;
        }
        (out, borrow as Word)
    }

    /// Shift right by one bit in place
    pub fn rshift1(&mut self, w: usize) {
        let mut carry = 0;
        for i in (0..w).rev() {
            let word = self.0[i];
            self.0[i] = (word >> 1) | carry;
            carry = word << (WORD_BITS - 1);
        }
    }

    /// Halve in place, for use by callers that already made the value even
    /// by adding `carry_in · 2^(32w)`
    pub(crate) fn rshift1_with_carry(&mut self, carry_in: Word, w: usize) {
        self.rshift1(w);
        self.0[w - 1] |= carry_in << (WORD_BITS - 1);
    }

    /// `self >> 1` as a new value, usable in constant expressions
    pub const fn const_shr1(&self) -> Vli {
        let mut out = [0; MAX_WORDS];
        let mut i = 0;
        while i < MAX_WORDS {
            let hi = if i + 1 < MAX_WORDS { self.0[i + 1] } else { 0 };
            out[i] = (self.0[i] >> 1) | (hi << (WORD_BITS - 1));
            i += 1;
        }
        Vli(out)
    }

    /// Bitwise XOR over the full capacity
    pub fn xor(&self, other: &Vli) -> Vli {
        let mut out = *self;
        for (o, b) in out.0.iter_mut().zip(other.0.iter()) {
            *o ^= *b;
        }
        out
    }

    /// Keep only the low `bits` bits
    pub fn mask_bits(&mut self, bits: usize) {
        for i in 0..MAX_WORDS {
            let lo = i * WORD_BITS;
            if lo >= bits {
                self.0[i] = 0;
            } else if bits - lo < WORD_BITS {
                self.0[i] &= (1 << (bits - lo)) - 1;
            }
        }
    }

    /// Schoolbook product over `w` words
    pub fn mul_wide(&self, other: &Vli, w: usize) -> Wide {
        let mut out = Wide::ZERO;
        for i in 0..w {
            let mut carry: DoubleWord = 0;
            let a = self.0[i] as DoubleWord;
            for j in 0..w {
                let t = a * other.0[j] as DoubleWord + out.0[i + j] as DoubleWord + carry;
                out.0[i + j] = t as Word;
                carry = t >> WORD_BITS;
            }
            out.0[i + w] = carry as Word;
        }
        out
    }

    /// Square over `w` words
    ///
    /// Cross products are computed once and doubled, then the diagonal is
    /// added.
    pub fn square_wide(&self, w: usize) -> Wide {
        let mut out = Wide::ZERO;
        for i in 0..w {
            let mut carry: DoubleWord = 0;
            let a = self.0[i] as DoubleWord;
            for j in (i + 1)..w {
                let t = a * self.0[j] as DoubleWord + out.0[i + j] as DoubleWord + carry;
                out.0[i + j] = t as Word;
                carry = t >> WORD_BITS;
            }
            out.0[i + w] = carry as Word;
        }

        //---- double the cross products
        let mut top = 0;
        for i in 0..2 * w {
            let word = out.0[i];
            out.0[i] = (word << 1) | top;
            top = word >> (WORD_BITS - 1);
        }

        //---- add the diagonal
        let mut carry: DoubleWord = 0;
        for i in 0..w {
            let sq = self.0[i] as DoubleWord * self.0[i] as DoubleWord;
            let lo = out.0[2 * i] as DoubleWord + (sq & 0xFFFF_FFFF) + carry;
            out.0[2 * i] = lo as Word;
            let hi = out.0[2 * i + 1] as DoubleWord + (sq >> WORD_BITS) + (lo >> WORD_BITS);
            out.0[2 * i + 1] = hi as Word;
            carry = hi >> WORD_BITS;
        }
        out
    }

    /* ---------------------------------------------------------------- */
    /*  Modular arithmetic (inputs already reduced)                      */
    /* ---------------------------------------------------------------- */

    /// `(self + other) mod m`
    pub fn mod_add(&self, other: &Vli, m: &Vli, w: usize) -> Vli {
        let (sum, carry) = self.add_carry(other, w);
        let (reduced, borrow) = sum.sub_borrow(m, w);
        // keep the reduced value on overflow or when sum >= m
        let take_reduced = Choice::from((carry | (borrow ^ 1)) as u8);
        Vli::conditional_select(&sum, &reduced, take_reduced)
    }

    /// `(self - other) mod m`
    pub fn mod_sub(&self, other: &Vli, m: &Vli, w: usize) -> Vli {
        let (diff, borrow) = self.sub_borrow(other, w);
        let mut addend = *m;
        let mask = ct_mask_u32(Choice::from(borrow as u8));
        for word in addend.0[..w].iter_mut() {
            *word &= mask;
        }
        diff.add_carry(&addend, w).0
    }

    /// `(self * other) mod m` through the generic reduction
    pub fn mod_mult(&self, other: &Vli, m: &Vli, w: usize) -> Vli {
        let mut product = self.mul_wide(other, w);
        let reduced = product.mmod(m, w);
        product.zeroize();
        reduced
    }

    /// `self^-1 mod m` for odd `m`, or 0 when `self` is 0
    ///
    /// Binary extended Euclid. The number of iterations depends on the
    /// input; secret inputs are blinded by the caller.
    pub fn mod_inv(&self, m: &Vli, w: usize) -> Vli {
        if self.is_zero() {
            return Vli::ZERO;
        }

        let mut a = *self;
        let mut b = *m;
        let mut u = Vli::ONE;
        let mut v = Vli::ZERO;

        loop {
            let ord = a.cmp_vartime(&b, w);
            if ord == Ordering::Equal {
                break;
            }
            if !a.test_bit(0) {
                a.rshift1(w);
                u.inv_update(m, w);
            } else if !b.test_bit(0) {
                b.rshift1(w);
                v.inv_update(m, w);
            } else if ord == Ordering::Greater {
                a = a.sub_borrow(&b, w).0;
                a.rshift1(w);
                if u.cmp_vartime(&v, w) == Ordering::Less {
                    u = u.add_carry(m, w).0;
                }
                u = u.sub_borrow(&v, w).0;
                u.inv_update(m, w);
            } else {
                b = b.sub_borrow(&a, w).0;
                b.rshift1(w);
                if v.cmp_vartime(&u, w) == Ordering::Less {
                    v = v.add_carry(m, w).0;
                }
                v = v.sub_borrow(&u, w).0;
                v.inv_update(m, w);
            }
        }

        a.zeroize();
        b.zeroize();
        v.zeroize();
        u
    }

    // uv <- uv / 2 mod m
    fn inv_update(&mut self, m: &Vli, w: usize) {
        let mut carry = 0;
        if self.test_bit(0) {
            let (sum, c) = self.add_carry(m, w);
            *self = sum;
            carry = c;
        }
        self.rshift1_with_carry(carry, w);
    }
}

impl ConditionallySelectable for Vli {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = Vli::ZERO;
        for i in 0..MAX_WORDS {
            out.0[i] = Word::conditional_select(&a.0[i], &b.0[i], choice);
        }
        out
    }
}

impl ConstantTimeEq for Vli {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.ct_equal(other)
    }
}

impl PartialEq for Vli {
    fn eq(&self, other: &Self) -> bool {
        self.ct_equal(other).into()
    }
}

impl Eq for Vli {}

impl Default for Vli {
    fn default() -> Self {
        Vli::ZERO
    }
}

impl fmt::Debug for Vli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let top = self.0.iter().rposition(|w| *w != 0).unwrap_or(0);
        write!(f, "Vli(0x")?;
        for i in (0..=top).rev() {
            if i == top {
                write!(f, "{:x}", self.0[i])?;
            } else {
                write!(f, "{:08x}", self.0[i])?;
            }
        }
        write!(f, ")")
    }
}

impl Wide {
    /// The value 0
    pub const ZERO: Wide = Wide([0; 2 * MAX_WORDS]);

    /// Widen a single-width value
    pub fn from_vli(v: &Vli) -> Self {
        let mut out = Wide::ZERO;
        out.0[..MAX_WORDS].copy_from_slice(&v.0);
        out
    }

    /// Little-endian words
    pub fn words(&self) -> &[Word] {
        &self.0
    }

    /// Low `w` words as a single-width value
    pub fn low(&self, w: usize) -> Vli {
        let mut out = Vli::ZERO;
        out.0[..w].copy_from_slice(&self.0[..w]);
        out
    }

    /// Zero test
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|w| *w == 0)
    }

    fn sub_borrow(&self, other: &Wide, len: usize) -> (Wide, Word) {
        let mut out = Wide::ZERO;
        let mut borrow: DoubleWord = 0;
        for i in 0..len {
            let diff = (self.0[i] as DoubleWord)
                .wrapping_sub(other.0[i] as DoubleWord)
                .wrapping_sub(borrow);
            out.0[i] = diff as Word;
            borrow = (diff >> WORD_BITS) & 1;
        }
        (out, borrow as Word)
    }

    fn rshift1(&mut self, len: usize) {
        let mut carry = 0;
        for i in (0..len).rev() {
            let word = self.0[i];
            self.0[i] = (word >> 1) | carry;
            carry = word << (WORD_BITS - 1);
        }
    }

    /// `self >> bits`
    pub fn shr_bits(&self, bits: usize) -> Wide {
        let mut out = Wide::ZERO;
        let word_shift = bits / WORD_BITS;
        let bit_shift = bits % WORD_BITS;
        for i in 0..(2 * MAX_WORDS - word_shift) {
            let lo = self.0[i + word_shift] >> bit_shift;
            let hi = if bit_shift > 0 && i + word_shift + 1 < 2 * MAX_WORDS {
                self.0[i + word_shift + 1] << (WORD_BITS - bit_shift)
            } else {
                0
            };
            out.0[i] = lo | hi;
        }
        out
    }

    /// Keep only the low `bits` bits
    pub fn mask_bits(&mut self, bits: usize) {
        for i in 0..2 * MAX_WORDS {
            let lo = i * WORD_BITS;
            if lo >= bits {
                self.0[i] = 0;
            } else if bits - lo < WORD_BITS {
                self.0[i] &= (1 << (bits - lo)) - 1;
            }
        }
    }

    /// `self + x * small`, where `small` is at most a few words
    ///
    /// The caller guarantees the result fits.
    pub fn add_mul_small(&self, x: &Wide, small: &[Word]) -> Wide {
        let mut out = *self;
        for (j, s) in small.iter().enumerate() {
            let s = *s as DoubleWord;
            let mut carry: DoubleWord = 0;
            for i in 0..(2 * MAX_WORDS - j) {
                let t = out.0[i + j] as DoubleWord + x.0[i] as DoubleWord * s + carry;
                out.0[i + j] = t as Word;
                carry = t >> WORD_BITS;
            }
        }
        out
    }

    /// Generic reduction `self mod m` over a `2w`-word input
    ///
    /// Shift-and-subtract long division: `m` is shifted to the top of the
    /// double-width range and conditionally subtracted once per bit position.
    /// The subtraction always runs; only the selection depends on the borrow.
    pub fn mmod(&self, m: &Vli, w: usize) -> Vli {
        let len = 2 * w;
        let shift = len * WORD_BITS - m.num_bits();
        let word_shift = shift / WORD_BITS;
        let bit_shift = shift % WORD_BITS;

        let mut multiple = Wide::ZERO;
        let mut carry = 0;
        for i in 0..w {
            if word_shift + i >= len {
                break;
            }
            if bit_shift > 0 {
                multiple.0[word_shift + i] = (m.0[i] << bit_shift) | carry;
                carry = m.0[i] >> (WORD_BITS - bit_shift);
            } else {
                multiple.0[word_shift + i] = m.0[i];
            }
        }

        let mut cur = *self;
        for _ in 0..=shift {
            let (diff, borrow) = cur.sub_borrow(&multiple, len);
            cur = Wide::conditional_select(&diff, &cur, Choice::from(borrow as u8));
            multiple.rshift1(len);
        }

        let out = cur.low(w);
        cur.zeroize();
        out
    }
}

impl ConditionallySelectable for Wide {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = Wide::ZERO;
        for i in 0..2 * MAX_WORDS {
            out.0[i] = Word::conditional_select(&a.0[i], &b.0[i], choice);
        }
        out
    }
}

impl fmt::Debug for Wide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wide(")?;
        for w in self.0.iter().rev() {
            write!(f, "{:08x}", w)?;
        }
        write!(f, ")")
    }
}
