//! # bitmask
//!
//! A `no_std` compatible set of inline bit manipulation primitives over
//! `u64` (and `u32`) masks.
//!
//! Every operation is total. Out-of-range bit indices are ignored by the
//! mutators and read as `false`; bad ranges produce an empty mask; the scans
//! return [`INVALID_INDEX`] (the mask width) when no bit is set.
//!
//! ```rust
//! use bitmask::{get_range, popcount, scan_forward, set, set_bits, write_range};
//!
//! let mut mask = 0u64;
//! for b in [0, 3, 5] {
//!     set(&mut mask, b);
//! }
//! assert_eq!(popcount(mask), 3);
//! assert_eq!(scan_forward(mask), 0);
//!
//! write_range(&mut mask, 16, 23, 0xAB);
//! assert_eq!(get_range(mask, 16, 23), 0xAB);
//! assert_eq!(set_bits(mask).count(), 8);
//! ```
//!
//! The same functions work on `u32`, with 32 as the width and sentinel:
//!
//! ```rust
//! use bitmask::{make_range_mask, scan_reverse};
//!
//! assert_eq!(make_range_mask::<u32>(0, 40), u32::MAX);
//! assert_eq!(scan_reverse(0u32), 32);
//! ```
//!
//! Callers that want bad input reported rather than ignored can use the
//! [`checked`] module.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::BitmaskError;

mod bit_ops;
pub mod checked;
mod iter;
mod mask;
mod range;
mod scan;
mod set_ops;
mod word;

pub use bit_ops::{ALL_32, ALL_64, INVALID_INDEX, INVALID_INDEX_32, bit, check, clear, set, toggle};
pub use checked::{
    BitRange, try_check, try_clear, try_clear_range, try_get_range, try_range_mask, try_set,
    try_set_range, try_toggle, try_write_range,
};
pub use iter::{SetBits, set_bits};
pub use mask::{Bitmask32, Bitmask64};
pub use range::{clear_range, get_range, make_range_mask, set_range, write_range};
pub use scan::{popcount, scan_forward, scan_reverse};
pub use set_ops::{difference, intersect, is_empty, is_full, is_subset, merge};
pub use word::MaskWord;
