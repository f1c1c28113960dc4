//! Contiguous, inclusive bit ranges.
//!
//! Every range operation goes through [`make_range_mask`], which is total:
//! inverted ranges and starts past the width give an empty mask, ends past
//! the width are clamped to the top bit.
//!
//! ```rust
//! use bitmask::{get_range, make_range_mask, write_range};
//!
//! assert_eq!(make_range_mask::<u64>(4, 7), 0xF0);
//! assert_eq!(make_range_mask::<u64>(0, 63), u64::MAX);
//! assert_eq!(make_range_mask::<u64>(9, 3), 0);
//!
//! let mut mask = 0u64;
//! write_range(&mut mask, 16, 23, 0xAB);
//! assert_eq!(get_range(mask, 16, 23), 0xAB);
//! ```

use crate::word::MaskWord;

/// Builds a mask with bits `start..=end` set.
#[inline(always)]
pub fn make_range_mask<W: MaskWord>(start: u8, end: u8) -> W {
    if start > end || start >= W::BITS {
        return W::ZERO;
    }

    let end = end.min(W::BITS - 1);
    let width = end - start + 1;

    // 1 << BITS would overflow
    if width == W::BITS {
        return W::ALL;
    }

    (W::ONE << width).wrapping_dec() << start
}

#[inline(always)]
pub fn set_range<W: MaskWord>(mask: &mut W, start: u8, end: u8) {
    *mask |= make_range_mask::<W>(start, end);
}

#[inline(always)]
pub fn clear_range<W: MaskWord>(mask: &mut W, start: u8, end: u8) {
    *mask &= !make_range_mask::<W>(start, end);
}

/// Extracts bits `start..=end`, right-aligned at bit 0.
#[inline(always)]
pub fn get_range<W: MaskWord>(mask: W, start: u8, end: u8) -> W {
    let range_mask = make_range_mask::<W>(start, end);
    if range_mask == W::ZERO {
        return W::ZERO;
    }
    (mask & range_mask) >> start
}

/// Replaces bits `start..=end` with the low bits of `value`.
///
/// Bits of `value` that do not fit in the range are dropped.
#[inline(always)]
pub fn write_range<W: MaskWord>(mask: &mut W, start: u8, end: u8, value: W) {
    let range_mask = make_range_mask::<W>(start, end);
    if range_mask == W::ZERO {
        return;
    }
    let write_mask = (value << start) & range_mask;
    *mask = (*mask & !range_mask) | write_mask;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_mask_edges() {
        assert_eq!(make_range_mask::<u64>(0, 0), 1);
        assert_eq!(make_range_mask::<u64>(63, 63), 1 << 63);
        assert_eq!(make_range_mask::<u64>(0, 63), u64::MAX);
        assert_eq!(make_range_mask::<u64>(1, 63), u64::MAX << 1);
        assert_eq!(make_range_mask::<u64>(5, 4), 0);
        assert_eq!(make_range_mask::<u64>(64, 70), 0);
        assert_eq!(make_range_mask::<u64>(255, 255), 0);
    }

    #[test]
    fn range_mask_clamps_end() {
        assert_eq!(make_range_mask::<u64>(60, 200), 0xF000_0000_0000_0000);
        assert_eq!(make_range_mask::<u64>(0, 255), u64::MAX);
        assert_eq!(make_range_mask::<u32>(0, 40), u32::MAX);
        assert_eq!(make_range_mask::<u32>(28, 40), 0xF000_0000);
        assert_eq!(make_range_mask::<u32>(32, 40), 0);
    }

    #[test]
    fn set_and_clear_range() {
        let mut m = 0u64;
        set_range(&mut m, 8, 15);
        assert_eq!(m, 0xFF00);
        clear_range(&mut m, 10, 11);
        assert_eq!(m, 0xF300);
        set_range(&mut m, 20, 10);
        assert_eq!(m, 0xF300);
    }

    #[test]
    fn write_discards_excess_bits() {
        let mut m = u64::MAX;
        write_range(&mut m, 4, 7, 0x1F5);
        assert_eq!(get_range(m, 4, 7), 0x5);
        assert_eq!(m, 0xFFFF_FFFF_FFFF_FF5F);
    }

    #[test]
    fn invalid_range_reads_zero_and_writes_nothing() {
        let mut m = 0x1234u64;
        assert_eq!(get_range(m, 64, 64), 0);
        assert_eq!(get_range(m, 7, 3), 0);
        write_range(&mut m, 70, 80, u64::MAX);
        write_range(&mut m, 9, 2, u64::MAX);
        assert_eq!(m, 0x1234);
    }

    #[test]
    fn full_width_write() {
        let mut m = 0u32;
        write_range(&mut m, 0, 31, 0xCAFE_BABE);
        assert_eq!(m, 0xCAFE_BABE);
        assert_eq!(get_range(m, 16, 31), 0xCAFE);
    }
}
