//! Fallible counterparts of the bit and range operations.
//!
//! The plain functions never fail: they ignore bad indices and clamp or
//! empty bad ranges. The `try_*` functions here reject the same inputs with
//! a [`BitmaskError`] instead, and leave the mask untouched when they do.
//!
//! ```rust
//! use bitmask::{BitRange, BitmaskError, try_get_range, try_set, try_write_range};
//!
//! let mut mask = 0u64;
//! try_set(&mut mask, 3)?;
//! assert_eq!(
//!     try_set(&mut mask, 64),
//!     Err(BitmaskError::BitOutOfRange { bit: 64, width: 64 })
//! );
//!
//! let byte = BitRange::new(16, 23)?;
//! try_write_range(&mut mask, byte, 0xAB)?;
//! assert_eq!(try_get_range(mask, byte)?, 0xAB);
//! assert!(try_write_range(&mut mask, byte, 0x1FF).is_err());
//! # Ok::<(), BitmaskError>(())
//! ```

use crate::BitmaskError;
use crate::bit_ops;
use crate::range::{clear_range, get_range, make_range_mask, set_range, write_range};
use crate::word::MaskWord;

type Result<T> = core::result::Result<T, BitmaskError>;

/// An inclusive span `start..=end` of bit positions.
///
/// Construction only guarantees `start <= end`; whether the span fits a
/// particular width is checked when it is applied to a mask.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BitRange {
    start: u8,
    end: u8,
}

impl BitRange {
    pub fn new(start: u8, end: u8) -> Result<Self> {
        if start > end {
            return Err(BitmaskError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn single(bit: u8) -> Self {
        Self { start: bit, end: bit }
    }

    #[inline]
    pub fn start(self) -> u8 {
        self.start
    }

    #[inline]
    pub fn end(self) -> u8 {
        self.end
    }

    /// Number of bits covered, between 1 and 256.
    #[inline]
    pub fn width(self) -> u16 {
        (self.end - self.start) as u16 + 1
    }

    /// The range as a mask of width `W`, or an error if it does not fit.
    pub fn mask<W: MaskWord>(self) -> Result<W> {
        self.fits::<W>()?;
        Ok(make_range_mask::<W>(self.start, self.end))
    }

    fn fits<W: MaskWord>(self) -> Result<()> {
        if self.end >= W::BITS {
            return Err(BitmaskError::RangeOutOfBounds {
                end: self.end,
                width: W::BITS,
            });
        }
        Ok(())
    }
}

#[inline]
fn validate_bit<W: MaskWord>(bit: u8) -> Result<()> {
    if bit < W::BITS {
        Ok(())
    } else {
        Err(BitmaskError::BitOutOfRange {
            bit,
            width: W::BITS,
        })
    }
}

pub fn try_set<W: MaskWord>(mask: &mut W, bit: u8) -> Result<()> {
    validate_bit::<W>(bit)?;
    bit_ops::set(mask, bit);
    Ok(())
}

pub fn try_clear<W: MaskWord>(mask: &mut W, bit: u8) -> Result<()> {
    validate_bit::<W>(bit)?;
    bit_ops::clear(mask, bit);
    Ok(())
}

pub fn try_toggle<W: MaskWord>(mask: &mut W, bit: u8) -> Result<()> {
    validate_bit::<W>(bit)?;
    bit_ops::toggle(mask, bit);
    Ok(())
}

pub fn try_check<W: MaskWord>(mask: W, bit: u8) -> Result<bool> {
    validate_bit::<W>(bit)?;
    Ok(bit_ops::check(mask, bit))
}

/// Like [`make_range_mask`], but without clamping an oversized end.
pub fn try_range_mask<W: MaskWord>(start: u8, end: u8) -> Result<W> {
    BitRange::new(start, end)?.mask::<W>()
}

pub fn try_set_range<W: MaskWord>(mask: &mut W, range: BitRange) -> Result<()> {
    range.fits::<W>()?;
    set_range(mask, range.start, range.end);
    Ok(())
}

pub fn try_clear_range<W: MaskWord>(mask: &mut W, range: BitRange) -> Result<()> {
    range.fits::<W>()?;
    clear_range(mask, range.start, range.end);
    Ok(())
}

pub fn try_get_range<W: MaskWord>(mask: W, range: BitRange) -> Result<W> {
    range.fits::<W>()?;
    Ok(get_range(mask, range.start, range.end))
}

/// Writes `value` into `range`, rejecting values wider than the range.
pub fn try_write_range<W: MaskWord>(mask: &mut W, range: BitRange, value: W) -> Result<()> {
    range.fits::<W>()?;
    let width = range.width() as u8;
    if width < W::BITS && value >> width != W::ZERO {
        return Err(BitmaskError::ValueOverflow {
            value: value.widen(),
            width,
        });
    }
    write_range(mask, range.start, range.end, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_construction() {
        assert_eq!(
            BitRange::new(5, 4),
            Err(BitmaskError::InvertedRange { start: 5, end: 4 })
        );
        let r = BitRange::new(4, 7).unwrap();
        assert_eq!(r.width(), 4);
        assert_eq!(r.mask::<u64>(), Ok(0xF0));
        assert_eq!(BitRange::new(0, 255).unwrap().width(), 256);
        assert_eq!(BitRange::single(9).width(), 1);
    }

    #[test]
    fn range_fit_depends_on_width() {
        let r = BitRange::new(30, 40).unwrap();
        assert!(r.mask::<u64>().is_ok());
        assert_eq!(
            r.mask::<u32>(),
            Err(BitmaskError::RangeOutOfBounds { end: 40, width: 32 })
        );
        assert_eq!(
            try_range_mask::<u64>(60, 64),
            Err(BitmaskError::RangeOutOfBounds { end: 64, width: 64 })
        );
        assert_eq!(try_range_mask::<u64>(0, 63), Ok(u64::MAX));
    }

    #[test]
    fn bit_errors_leave_mask_untouched() {
        let mut m = 0x55u64;
        assert!(try_set(&mut m, 64).is_err());
        assert!(try_clear(&mut m, 100).is_err());
        assert!(try_toggle(&mut m, 255).is_err());
        assert_eq!(m, 0x55);
        assert_eq!(
            try_check(m, 64),
            Err(BitmaskError::BitOutOfRange { bit: 64, width: 64 })
        );

        let mut n = 0u32;
        assert_eq!(
            try_set(&mut n, 32),
            Err(BitmaskError::BitOutOfRange { bit: 32, width: 32 })
        );
        assert_eq!(n, 0);
    }

    #[test]
    fn bit_success_paths() {
        let mut m = 0u64;
        try_set(&mut m, 10).unwrap();
        assert_eq!(try_check(m, 10), Ok(true));
        try_toggle(&mut m, 11).unwrap();
        try_clear(&mut m, 10).unwrap();
        assert_eq!(m, 1 << 11);
    }

    #[test]
    fn range_ops() {
        let mut m = 0u64;
        let r = BitRange::new(8, 15).unwrap();
        try_set_range(&mut m, r).unwrap();
        assert_eq!(m, 0xFF00);
        assert_eq!(try_get_range(m, r), Ok(0xFF));
        try_clear_range(&mut m, BitRange::single(8)).unwrap();
        assert_eq!(m, 0xFE00);

        let wide = BitRange::new(60, 70).unwrap();
        assert!(try_set_range(&mut m, wide).is_err());
        assert!(try_clear_range(&mut m, wide).is_err());
        assert!(try_get_range(m, wide).is_err());
        assert_eq!(m, 0xFE00);
    }

    #[test]
    fn write_rejects_overflow() {
        let mut m = 0u64;
        let r = BitRange::new(4, 7).unwrap();
        assert_eq!(
            try_write_range(&mut m, r, 0x10),
            Err(BitmaskError::ValueOverflow {
                value: 0x10,
                width: 4
            })
        );
        assert_eq!(m, 0);
        try_write_range(&mut m, r, 0xF).unwrap();
        assert_eq!(m, 0xF0);
    }

    #[test]
    fn full_width_write_accepts_any_value() {
        let mut m = 0u32;
        let r = BitRange::new(0, 31).unwrap();
        try_write_range(&mut m, r, u32::MAX).unwrap();
        assert_eq!(m, u32::MAX);
    }
}
