//! Single-bit operations.
//!
//! Indices at or beyond the mask width are ignored: mutators leave the mask
//! untouched and [`check`] reports `false`.
//!
//! ```rust
//! use bitmask::{check, clear, set, toggle};
//!
//! let mut mask = 0u64;
//! set(&mut mask, 5);
//! toggle(&mut mask, 0);
//! assert_eq!(mask, 0b10_0001);
//!
//! clear(&mut mask, 5);
//! set(&mut mask, 200); // out of range, no-op
//! assert!(check(mask, 0));
//! assert!(!check(mask, 200));
//! assert_eq!(mask, 1);
//! ```

use crate::word::MaskWord;

pub const ALL_64: u64 = u64::MAX;
pub const ALL_32: u32 = u32::MAX;

/// Sentinel returned by the scans on an empty 64-bit mask.
pub const INVALID_INDEX: u8 = 64;
pub const INVALID_INDEX_32: u8 = 32;

/// `1 << n`, or `0` when `n` is not a valid 64-bit index.
#[inline(always)]
pub const fn bit(n: u8) -> u64 {
    if n < 64 { 1u64 << n } else { 0 }
}

#[inline(always)]
pub fn set<W: MaskWord>(mask: &mut W, bit: u8) {
    if bit < W::BITS {
        *mask |= W::ONE << bit;
    }
}

#[inline(always)]
pub fn clear<W: MaskWord>(mask: &mut W, bit: u8) {
    if bit < W::BITS {
        *mask &= !(W::ONE << bit);
    }
}

#[inline(always)]
pub fn toggle<W: MaskWord>(mask: &mut W, bit: u8) {
    if bit < W::BITS {
        *mask ^= W::ONE << bit;
    }
}

#[inline(always)]
pub fn check<W: MaskWord>(mask: W, bit: u8) -> bool {
    if bit >= W::BITS {
        return false;
    }
    (mask >> bit) & W::ONE == W::ONE
}
