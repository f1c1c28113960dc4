//! Iteration over set bit indices.
//!
//! ```rust
//! use bitmask::set_bits;
//!
//! let bits: Vec<u8> = set_bits(0b1011u64).collect();
//! assert_eq!(bits, vec![0, 1, 3]);
//! ```

use core::iter::FusedIterator;

use crate::scan::{popcount, scan_forward};
use crate::word::MaskWord;

/// Yields the index of every set bit in ascending order.
///
/// Each step clears the lowest set bit, so a full pass costs one step per
/// set bit. Cloning the iterator restarts from the clone's position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetBits<W> {
    remaining: W,
}

impl<W: MaskWord> SetBits<W> {
    pub fn new(mask: W) -> Self {
        Self { remaining: mask }
    }

    /// Bits not yet yielded.
    pub fn remaining(&self) -> W {
        self.remaining
    }
}

#[inline]
pub fn set_bits<W: MaskWord>(mask: W) -> SetBits<W> {
    SetBits::new(mask)
}

impl<W: MaskWord> Iterator for SetBits<W> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == W::ZERO {
            return None;
        }
        let bit = scan_forward(self.remaining);
        self.remaining &= self.remaining.wrapping_dec();
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = popcount(self.remaining) as usize;
        (n, Some(n))
    }
}

impl<W: MaskWord> ExactSizeIterator for SetBits<W> {}

impl<W: MaskWord> FusedIterator for SetBits<W> {}
