//! Bit scanning and counting.

use crate::word::MaskWord;

/// Index of the least significant set bit, or `W::INVALID_INDEX` for zero.
///
/// Narrows by halves (32, 16, 8, 4, 2, 1 for `u64`).
///
/// ```rust
/// use bitmask::{INVALID_INDEX, scan_forward};
///
/// assert_eq!(scan_forward(0b1000u64), 3);
/// assert_eq!(scan_forward(0u64), INVALID_INDEX);
/// ```
#[inline]
pub fn scan_forward<W: MaskWord>(mask: W) -> u8 {
    if mask == W::ZERO {
        return W::INVALID_INDEX;
    }

    let mut mask = mask;
    let mut idx = 0;
    let mut step = W::BITS / 2;
    while step > 0 {
        let low = (W::ONE << step).wrapping_dec();
        if mask & low == W::ZERO {
            idx += step;
            mask = mask >> step;
        }
        step /= 2;
    }
    idx
}

/// Index of the most significant set bit, or `W::INVALID_INDEX` for zero.
///
/// ```rust
/// use bitmask::scan_reverse;
///
/// assert_eq!(scan_reverse(0b1011u64), 3);
/// assert_eq!(scan_reverse(0u32), 32);
/// ```
#[inline]
pub fn scan_reverse<W: MaskWord>(mask: W) -> u8 {
    if mask == W::ZERO {
        return W::INVALID_INDEX;
    }

    let mut mask = mask;
    let mut idx = 0;
    let mut step = W::BITS / 2;
    while step > 0 {
        let high = mask >> step;
        if high != W::ZERO {
            idx += step;
            mask = high;
        }
        step /= 2;
    }
    idx
}

#[inline(always)]
pub fn popcount<W: MaskWord>(mask: W) -> u8 {
    mask.hamming_weight()
}
