#[cfg(feature = "std")]
use thiserror::Error;

/// Rejections reported by the checked (`try_*`) operations.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitmaskError {
    #[cfg_attr(
        feature = "std",
        error("Bit index {bit} is out of range for a {width}-bit mask")
    )]
    BitOutOfRange { bit: u8, width: u8 },

    #[cfg_attr(feature = "std", error("Range start {start} is past its end {end}"))]
    InvertedRange { start: u8, end: u8 },

    #[cfg_attr(
        feature = "std",
        error("Range end {end} is out of range for a {width}-bit mask")
    )]
    RangeOutOfBounds { end: u8, width: u8 },

    #[cfg_attr(feature = "std", error("Value {value:#x} does not fit in {width} bits"))]
    ValueOverflow { value: u64, width: u8 },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitmaskError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitmaskError::BitOutOfRange { bit, width } => {
                write!(f, "Bit index {} is out of range for a {}-bit mask", bit, width)
            }
            BitmaskError::InvertedRange { start, end } => {
                write!(f, "Range start {} is past its end {}", start, end)
            }
            BitmaskError::RangeOutOfBounds { end, width } => {
                write!(f, "Range end {} is out of range for a {}-bit mask", end, width)
            }
            BitmaskError::ValueOverflow { value, width } => {
                write!(f, "Value {:#x} does not fit in {} bits", value, width)
            }
        }
    }
}
