//! Big-endian byte strings to and from little-endian 32-bit word arrays
//!
//! Integers on the wire are big-endian byte strings; in memory they are
//! arrays of 32-bit words, least significant word first.

use byteorder::{ByteOrder, LittleEndian};

/// Load a big-endian byte string into little-endian words
///
/// `words` is cleared first. Bytes beyond the capacity of `words` are
/// ignored from the most significant end.
pub fn words_from_be_bytes(words: &mut [u32], bytes: &[u8]) {
    for w in words.iter_mut() {
        *w = 0;
    }
    for (i, b) in bytes.iter().rev().enumerate() {
        let word = i / 4;
        if word >= words.len() {
            break;
        }
        words[word] |= (*b as u32) << (8 * (i % 4));
    }
}

/// Store the low `out.len()` bytes of a word array as a big-endian string
pub fn words_to_be_bytes(words: &[u32], out: &mut [u8]) {
    let len = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        let byte_index = len - 1 - i;
        let word = byte_index / 4;
        *slot = if word < words.len() {
            (words[word] >> (8 * (byte_index % 4))) as u8
        } else {
            0
        };
    }
}

/// Little-endian encoding of a u32 counter
pub fn u32_to_le_bytes(value: u32) -> [u8; 4] {
    let mut out = [0u8; 4];
    LittleEndian::write_u32(&mut out, value);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unaligned_round_trip() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0x05];
        let mut words = [0u32; 3];
        words_from_be_bytes(&mut words, &bytes);
        assert_eq!(words, [0x0203_0405, 0x01, 0]);

        let mut out = [0u8; 5];
        words_to_be_bytes(&words, &mut out);
        assert_eq!(out, bytes);
    }

    #[test]
    fn test_store_pads_with_zeros() {
        let words = [0xAABB_CCDDu32];
        let mut out = [0xFFu8; 6];
        words_to_be_bytes(&words, &mut out);
        assert_eq!(out, [0, 0, 0xAA, 0xBB, 0xCC, 0xDD]);
    }

    #[test]
    fn test_counters() {
        assert_eq!(u32_to_le_bytes(0x0102_0304), [4, 3, 2, 1]);
        assert_eq!(u32_to_le_bytes(0), [0; 4]);
    }
}
