//! Integer widths usable as a bitmask.

use core::fmt::{Binary, Debug};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, Shr};

mod private {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer interpreted as a set of bit flags.
///
/// Implemented for `u64` and `u32`. The sentinel [`MaskWord::INVALID_INDEX`]
/// is one past the last valid bit position, i.e. equal to the width.
pub trait MaskWord:
    private::Sealed
    + Copy
    + Eq
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u8, Output = Self>
    + Shr<u8, Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
{
    const BITS: u8;
    const ZERO: Self;
    const ONE: Self;
    const ALL: Self;
    const INVALID_INDEX: u8 = Self::BITS;

    /// `self - 1`, wrapping at zero.
    fn wrapping_dec(self) -> Self;

    /// Hamming weight computed by parallel bit summing.
    fn hamming_weight(self) -> u8;

    fn widen(self) -> u64;
}

macro_rules! impl_mask_word {
    ($($t:ty),*) => {$(
        impl private::Sealed for $t {}

        impl MaskWord for $t {
            const BITS: u8 = <$t>::BITS as u8;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const ALL: Self = <$t>::MAX;

            #[inline(always)]
            fn wrapping_dec(self) -> Self {
                self.wrapping_sub(1)
            }

            #[inline(always)]
            fn hamming_weight(self) -> u8 {
                // 0x55.., 0x33.., 0x0F.., 0x01..
                const M1: $t = <$t>::MAX / 3;
                const M2: $t = <$t>::MAX / 5;
                const M4: $t = <$t>::MAX / 17;
                const H01: $t = <$t>::MAX / 255;

                let mut x = self;
                x -= (x >> 1) & M1;
                x = (x & M2) + ((x >> 2) & M2);
                x = (x + (x >> 4)) & M4;
                (x.wrapping_mul(H01) >> (<$t>::BITS - 8)) as u8
            }

            #[inline(always)]
            fn widen(self) -> u64 {
                self as u64
            }
        }
    )*};
}

impl_mask_word!(u32, u64);
