//! Named wrapper records around a raw mask word.
//!
//! # Examples
//!
//! ```rust
//! use bitmask::Bitmask64;
//!
//! let mut flags = Bitmask64::new();
//! flags.set(2);
//! flags.set(40);
//! assert!(flags.check(40));
//! assert_eq!(flags.iter().collect::<Vec<_>>(), vec![2, 40]);
//!
//! flags.init();
//! assert_eq!(flags.bits, 0);
//! ```
//!
//! Both records are `Pod`, so they can be viewed as raw bytes:
//!
//! ```rust
//! use bitmask::Bitmask32;
//!
//! let flags = Bitmask32::from_bits(0x0102_0304);
//! assert_eq!(bytemuck::bytes_of(&flags), &0x0102_0304u32.to_ne_bytes());
//! ```

use core::fmt;

use bytemuck_derive::{Pod, Zeroable};

use crate::bit_ops;
use crate::iter::SetBits;

macro_rules! bitmask_record {
    ($(#[$meta:meta])* $name:ident, $word:ty) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
        pub struct $name {
            pub bits: $word,
        }

        impl $name {
            pub const fn new() -> Self {
                Self { bits: 0 }
            }

            pub const fn from_bits(bits: $word) -> Self {
                Self { bits }
            }

            /// Resets every bit to zero.
            pub fn init(&mut self) {
                self.bits = 0;
            }

            #[inline]
            pub fn set(&mut self, bit: u8) {
                bit_ops::set(&mut self.bits, bit);
            }

            #[inline]
            pub fn clear(&mut self, bit: u8) {
                bit_ops::clear(&mut self.bits, bit);
            }

            #[inline]
            pub fn toggle(&mut self, bit: u8) {
                bit_ops::toggle(&mut self.bits, bit);
            }

            #[inline]
            pub fn check(&self, bit: u8) -> bool {
                bit_ops::check(self.bits, bit)
            }

            pub fn iter(&self) -> SetBits<$word> {
                SetBits::new(self.bits)
            }
        }

        impl From<$word> for $name {
            fn from(bits: $word) -> Self {
                Self { bits }
            }
        }

        impl From<$name> for $word {
            fn from(mask: $name) -> Self {
                mask.bits
            }
        }

        impl IntoIterator for $name {
            type Item = u8;
            type IntoIter = SetBits<$word>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }

        impl fmt::Binary for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Binary::fmt(&self.bits, f)
            }
        }
    };
}

bitmask_record!(
    /// A 64-bit set of flags.
    Bitmask64,
    u64
);

bitmask_record!(
    /// A 32-bit set of flags. Indices 32 and above are out of range.
    Bitmask32,
    u32
);
