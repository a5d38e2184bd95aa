//! Constant-time operations to prevent timing attacks

use subtle::Choice;

/// Constant-time mask generation for a 32-bit word
///
/// Returns `0xFFFF_FFFF` if condition is set, `0` otherwise.
#[inline]
pub fn ct_mask_u32(condition: Choice) -> u32 {
    0u32.wrapping_sub(condition.unwrap_u8() as u32)
}

/// Constant-time non-zero test for a 32-bit word
#[inline]
pub fn ct_is_nonzero_u32(x: u32) -> Choice {
    Choice::from(((x | x.wrapping_neg()) >> 31) as u8)
}
