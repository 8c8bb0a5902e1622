//! Scalar lane types the vectors are built over
//!
//! The hierarchy mirrors the numeric domains of the generated kernels:
//! [`Lane`] is every scalar that can fill a tuple, [`IntLane`] and
//! [`FloatLane`] refine it with the vocabulary the integer and float
//! operations need. All of the traits are sealed, the `(domain, width)`
//! surface of this crate is a closed set

use std::fmt::Debug;

use num_traits::{AsPrimitive, Float, PrimInt, WrappingShl, WrappingShr};

use crate::macros::{for_all_int_lanes, for_all_lanes};
use crate::private::Sealed;

/// Scalar type that can fill the lanes of a vector
pub trait Lane: Sealed + Copy + Debug + Default + PartialOrd + Send + Sync + 'static {}

/// Integer lane type
///
/// Shifts go through the wrapping flavor, an oversized shift amount wraps
/// around the lane width instead of being undefined
pub trait IntLane: Lane + PrimInt + WrappingShl + WrappingShr + AsPrimitive<u32> {}

/// Float lane type
///
/// Exposes the raw IEEE-754 representation: the bit pattern itself plus the
/// constants the exponent and mantissa operations are defined with. Bit
/// conversions reinterpret the representation, they never convert the value
pub trait FloatLane: Lane + Float {
    /// Unsigned integer carrying this lane's bit pattern
    type Bits: IntLane;

    /// Integer domain the raw bit fields travel in, same width as the lane
    type Int: IntLane;

    /// Mask of the biased exponent field
    const EXP_MASK: Self::Bits;

    /// Bit pattern of `1.0`, the exponent field holding exactly the bias
    const ONE_BITS: Self::Bits;

    /// Reinterpret raw bits as a lane
    fn from_bits(bits: Self::Bits) -> Self;

    /// Reinterpret the lane as raw bits
    fn to_bits(self) -> Self::Bits;

    /// Move raw bits into the integer field domain, same width reinterpret
    fn bits_to_int(bits: Self::Bits) -> Self::Int;

    /// Move an integer field into the bits domain, same width reinterpret
    fn int_to_bits(raw: Self::Int) -> Self::Bits;
}

/// Integer lane that can index a lookup table in the gather operations
pub trait GatherIndex: IntLane + AsPrimitive<usize> {
    /// The lane as a slice offset
    #[inline]
    fn as_offset(self) -> usize {
        AsPrimitive::<usize>::as_(self)
    }
}

macro_rules! impl_lane {
    ($({$ty:ident, $stem:ident}),*) => {
        $(
            impl Sealed for $ty {}
            impl Lane for $ty {}
        )*
    };
}

for_all_lanes!(impl_lane);

macro_rules! impl_int_lane {
    ($({$ty:ident}),*) => {
        $(
            impl IntLane for $ty {}
            impl GatherIndex for $ty {}
        )*
    };
}

for_all_int_lanes!(impl_int_lane);

impl FloatLane for f32 {
    type Bits = u32;
    type Int = i32;

    const EXP_MASK: u32 = 0x7F80_0000;
    const ONE_BITS: u32 = 0x3F80_0000;

    #[inline]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline]
    fn bits_to_int(bits: u32) -> i32 {
        bits as i32
    }

    #[inline]
    fn int_to_bits(raw: i32) -> u32 {
        raw as u32
    }
}

impl FloatLane for f64 {
    type Bits = u64;
    type Int = i64;

    const EXP_MASK: u64 = 0x7FF0_0000_0000_0000;
    const ONE_BITS: u64 = 0x3FF0_0000_0000_0000;

    #[inline]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline]
    fn bits_to_int(bits: u64) -> i64 {
        bits as i64
    }

    #[inline]
    fn int_to_bits(raw: i64) -> u64 {
        raw as u64
    }
}
