//! Set algebra over whole masks.

use crate::word::MaskWord;

#[inline(always)]
pub fn merge<W: MaskWord>(a: W, b: W) -> W {
    a | b
}

#[inline(always)]
pub fn intersect<W: MaskWord>(a: W, b: W) -> W {
    a & b
}

/// Bits of `a` that are not in `b`.
#[inline(always)]
pub fn difference<W: MaskWord>(a: W, b: W) -> W {
    a & !b
}

#[inline(always)]
pub fn is_subset<W: MaskWord>(subset: W, superset: W) -> bool {
    subset & superset == subset
}

#[inline(always)]
pub fn is_empty<W: MaskWord>(mask: W) -> bool {
    mask == W::ZERO
}

#[inline(always)]
pub fn is_full<W: MaskWord>(mask: W) -> bool {
    mask == W::ALL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algebra() {
        let a = 0b1100u64;
        let b = 0b1010u64;
        assert_eq!(merge(a, b), 0b1110);
        assert_eq!(intersect(a, b), 0b1000);
        assert_eq!(difference(a, b), 0b0100);
        assert_eq!(difference(b, a), 0b0010);
    }

    #[test]
    fn subset() {
        assert!(is_subset(0u64, 0));
        assert!(is_subset(0b100u64, 0b110));
        assert!(!is_subset(0b101u64, 0b110));
        assert!(is_subset(0x8000_0000u32, u32::MAX));
    }

    #[test]
    fn empty_and_full() {
        assert!(is_empty(0u64));
        assert!(!is_empty(1u64));
        assert!(is_full(u64::MAX));
        assert!(!is_full(u64::MAX >> 1));
        assert!(is_full(u32::MAX));
        assert!(!is_full(u32::MAX as u64));
    }
}
