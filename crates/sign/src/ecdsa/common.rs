//! Signature objects and their byte encodings
//!
//! Two formats are supported:
//!
//! * DER: `SEQUENCE { INTEGER r, INTEGER s }`, written in minimal form and
//!   read leniently. The reader accepts long-form lengths with leading zero
//!   bytes and integers with redundant leading zeros, but every length must
//!   match the bytes actually present and nothing may follow the sequence.
//! * Compact: `r || s`, each exactly `num_n_bytes` big-endian. That is one
//!   byte wider than a coordinate on secp160r1, whose order has 161 bits.

use vecc_algorithms::ecdsa::RawSignature;
use vecc_algorithms::{Curve, Vli};

use crate::error::{Error, Result};

const TAG_SEQUENCE: u8 = 0x30;
const TAG_INTEGER: u8 = 0x02;

/// An ECDSA signature `(r, s)` bound to the curve instance that sizes it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EcdsaSignature {
    curve: Curve,
    raw: RawSignature,
}

impl EcdsaSignature {
    /// Wrap a raw signature
    pub fn new(curve: &Curve, raw: RawSignature) -> Self {
        EcdsaSignature { curve: *curve, raw }
    }

    /// Curve instance
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// The `(r, s)` integers
    pub fn raw(&self) -> &RawSignature {
        &self.raw
    }

    /// `r` as `num_n_bytes` big-endian bytes
    pub fn r_bytes(&self) -> Vec<u8> {
        self.raw.r.to_be_vec(self.curve.num_n_bytes())
    }

    /// `s` as `num_n_bytes` big-endian bytes
    pub fn s_bytes(&self) -> Vec<u8> {
        self.raw.s.to_be_vec(self.curve.num_n_bytes())
    }

    /// Serialize to `r || s`
    pub fn to_compact(&self) -> Vec<u8> {
        let mut out = self.r_bytes();
        out.extend_from_slice(&self.s_bytes());
        out
    }

    /// Parse `r || s`
    pub fn from_compact(curve: &Curve, bytes: &[u8]) -> Result<Self> {
        let len = curve.num_n_bytes();
        if bytes.len() != 2 * len {
            return Err(Error::InvalidSignatureSize {
                expected: 2 * len,
                actual: bytes.len(),
            });
        }
        let r = Vli::from_be_bytes(&bytes[..len]);
        let s = Vli::from_be_bytes(&bytes[len..]);
        Ok(Self::new(curve, RawSignature::new(r, s)))
    }

    /// Serialize to DER format
    pub fn to_der(&self) -> Vec<u8> {
        let r = encode_integer(&self.r_bytes());
        let s = encode_integer(&self.s_bytes());

        let mut body = Vec::with_capacity(r.len() + s.len() + 6);
        body.push(TAG_INTEGER);
        push_length(&mut body, r.len());
        body.extend_from_slice(&r);
        body.push(TAG_INTEGER);
        push_length(&mut body, s.len());
        body.extend_from_slice(&s);

        let mut der = Vec::with_capacity(body.len() + 3);
        der.push(TAG_SEQUENCE);
        push_length(&mut der, body.len());
        der.extend_from_slice(&body);
        der
    }

    /// Parse DER format, leniently
    pub fn from_der(curve: &Curve, der: &[u8]) -> Result<Self> {
        let mut reader = DerReader { input: der, pos: 0 };

        reader.expect_tag(TAG_SEQUENCE)?;
        let body_len = reader.read_length()?;
        if body_len != reader.remaining() {
            return Err(Error::Deserialization(
                "DER sequence length does not match the input".into(),
            ));
        }

        let max = curve.num_n_bytes();
        let r = reader.read_integer(max)?;
        let s = reader.read_integer(max)?;
        if reader.remaining() != 0 {
            return Err(Error::Deserialization(
                "trailing bytes after DER integers".into(),
            ));
        }

        let raw = RawSignature::new(Vli::from_be_bytes(r), Vli::from_be_bytes(s));
        Ok(Self::new(curve, raw))
    }
}

/// Encode integer for DER (strip leading zeros, add one back if high bit set)
fn encode_integer(bytes: &[u8]) -> Vec<u8> {
    let start = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len().saturating_sub(1));
    let trimmed = &bytes[start..];
    if trimmed.is_empty() || trimmed[0] & 0x80 == 0 {
        trimmed.to_vec()
    } else {
        let mut result = vec![0x00];
        result.extend_from_slice(trimmed);
        result
    }
}

fn push_length(out: &mut Vec<u8>, len: usize) {
    if len < 0x80 {
        out.push(len as u8);
    } else if len <= 0xFF {
        out.push(0x81);
        out.push(len as u8);
    } else {
        out.push(0x82);
        out.push((len >> 8) as u8);
        out.push(len as u8);
    }
}

struct DerReader<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> DerReader<'a> {
    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    fn next(&mut self) -> Result<u8> {
        let byte = *self
            .input
            .get(self.pos)
            .ok_or_else(|| Error::Deserialization("DER input truncated".into()))?;
        self.pos += 1;
        Ok(byte)
    }

    fn expect_tag(&mut self, tag: u8) -> Result<()> {
        if self.next()? != tag {
            return Err(Error::Deserialization(format!(
                "expected DER tag 0x{:02x}",
                tag
            )));
        }
        Ok(())
    }

    // Short or long form; long form may carry leading zero bytes
    fn read_length(&mut self) -> Result<usize> {
        let first = self.next()?;
        if first & 0x80 == 0 {
            return Ok(first as usize);
        }
        let mut count = (first & 0x7F) as usize;
        while count > 0 && self.input.get(self.pos) == Some(&0) {
            self.pos += 1;
            count -= 1;
        }
        if count > core::mem::size_of::<u32>() {
            return Err(Error::Deserialization("DER length too large".into()));
        }
        let mut len = 0usize;
        for _ in 0..count {
            len = (len << 8) | self.next()? as usize;
        }
        if len > self.remaining() {
            return Err(Error::Deserialization(
                "DER length exceeds the input".into(),
            ));
        }
        Ok(len)
    }

    fn read_integer(&mut self, max_len: usize) -> Result<&'a [u8]> {
        self.expect_tag(TAG_INTEGER)?;
        let len = self.read_length()?;
        if len > self.remaining() {
            return Err(Error::Deserialization(
                "DER integer exceeds the input".into(),
            ));
        }
        let mut value = &self.input[self.pos..self.pos + len];
        self.pos += len;
        while let Some((&0, rest)) = value.split_first() {
            value = rest;
        }
        if value.len() > max_len {
            return Err(Error::Deserialization(
                "DER integer wider than the curve order".into(),
            ));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(curve: &Curve, r: &str, s: &str) -> EcdsaSignature {
        let r = Vli::from_be_bytes(&hex::decode(r).unwrap());
        let s = Vli::from_be_bytes(&hex::decode(s).unwrap());
        EcdsaSignature::new(curve, RawSignature::new(r, s))
    }

    #[test]
    fn test_der_encoding() {
        let curve = Curve::secp256r1().unwrap();
        let signature = sig(&curve, "01234567", "79abcdef");
        let der = signature.to_der();
        assert_eq!(
            der,
            vec![0x30, 0x0c, 0x02, 0x04, 0x01, 0x23, 0x45, 0x67, 0x02, 0x04, 0x79, 0xab, 0xcd, 0xef]
        );
        assert_eq!(EcdsaSignature::from_der(&curve, &der).unwrap(), signature);
    }

    #[test]
    fn test_der_with_high_bit() {
        let curve = Curve::secp256k1().unwrap();
        let signature = sig(&curve, "ff234567", "79abcdef");
        let der = signature.to_der();

        // r gains a leading zero
        assert_eq!(der[3], 5);
        assert_eq!(der[4], 0x00);
        assert_eq!(der[5], 0xFF);
        assert_eq!(EcdsaSignature::from_der(&curve, &der).unwrap(), signature);
    }

    #[test]
    fn test_der_long_form_length() {
        let curve = Curve::secp521r1().unwrap();
        let full = "01ff".to_string() + &"ab".repeat(64);
        let signature = sig(&curve, &full, &full);
        let der = signature.to_der();
        // 2 * (2 + 66) = 136 needs the 0x81 form
        assert_eq!(&der[..3], &[0x30, 0x81, 136]);
        assert_eq!(EcdsaSignature::from_der(&curve, &der).unwrap(), signature);
    }

    #[test]
    fn test_der_lax_inputs() {
        let curve = Curve::secp256r1().unwrap();
        // long-form lengths padded with zeros, and a redundant zero in r
        let der = [
            0x30, 0x82, 0x00, 0x0e, 0x02, 0x81, 0x05, 0x00, 0x01, 0x23, 0x45, 0x67, 0x02, 0x04,
            0x79, 0xab, 0xcd, 0xef,
        ];
        let parsed = EcdsaSignature::from_der(&curve, &der).unwrap();
        assert_eq!(parsed, sig(&curve, "01234567", "79abcdef"));
    }

    #[test]
    fn test_der_rejects_malformed() {
        let curve = Curve::secp256r1().unwrap();
        let good = sig(&curve, "01234567", "79abcdef").to_der();

        let mut trailing = good.clone();
        trailing.push(0x00);
        assert!(EcdsaSignature::from_der(&curve, &trailing).is_err());

        assert!(EcdsaSignature::from_der(&curve, &good[..good.len() - 1]).is_err());

        let mut bad_tag = good.clone();
        bad_tag[0] = 0x31;
        assert!(EcdsaSignature::from_der(&curve, &bad_tag).is_err());

        let mut bad_integer = good.clone();
        bad_integer[2] = 0x03;
        assert!(EcdsaSignature::from_der(&curve, &bad_integer).is_err());

        // r claims more bytes than the sequence holds
        let mut long_r = good;
        long_r[3] = 0x0a;
        assert!(EcdsaSignature::from_der(&curve, &long_r).is_err());

        assert!(EcdsaSignature::from_der(&curve, &[]).is_err());
    }

    #[test]
    fn test_der_rejects_oversized_integer() {
        let curve = Curve::secp192r1().unwrap();
        let wide = Curve::secp256r1().unwrap();
        let der = sig(&wide, &"7f".repeat(32), "01").to_der();
        assert!(EcdsaSignature::from_der(&curve, &der).is_err());
    }

    #[test]
    fn test_compact_round_trip() {
        let curve = Curve::secp224r1().unwrap();
        let signature = sig(&curve, "0102", "ff");
        let compact = signature.to_compact();
        assert_eq!(compact.len(), 56);
        assert_eq!(compact[27], 0x02);
        assert_eq!(compact[55], 0xff);
        assert_eq!(EcdsaSignature::from_compact(&curve, &compact).unwrap(), signature);
        assert!(matches!(
            EcdsaSignature::from_compact(&curve, &compact[1..]),
            Err(Error::InvalidSignatureSize {
                expected: 56,
                actual: 55
            })
        ));
    }

    #[test]
    fn test_secp160r1_uses_order_width() {
        let curve = Curve::secp160r1().unwrap();
        let top = curve.n().sub_borrow(&Vli::ONE, curve.num_words()).0;
        let signature = EcdsaSignature::new(&curve, RawSignature::new(top, top));

        let compact = signature.to_compact();
        assert_eq!(compact.len(), 42);
        assert_eq!(compact[0], 0x01);
        assert_eq!(compact[21], 0x01);
        assert_eq!(EcdsaSignature::from_compact(&curve, &compact).unwrap(), signature);
        assert!(EcdsaSignature::from_compact(&curve, &compact[..40]).is_err());

        let der = signature.to_der();
        assert_eq!(EcdsaSignature::from_der(&curve, &der).unwrap(), signature);
    }
}
