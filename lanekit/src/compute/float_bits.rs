//! Bit level access to the float representation
//!
//! These operations manipulate the biased exponent field and the mantissa
//! directly in the IEEE-754 encoding. Raw exponent fields always stay in
//! their bit position and stay biased, unbiasing and shifting are left to
//! the caller. Fields travel in the integer domain of matching width, `i32`
//! next to `f32` and `i64` next to `f64`

use super::unary_map;
use crate::lane::FloatLane;
use crate::vector::{SupportedWidth, Vector, Width};

impl<T: FloatLane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Build floats out of a raw biased exponent field
    ///
    /// Lane `i` of the result carries the exponent bits of `raw` lane `i`,
    /// a positive sign and a zero mantissa, so an in range field builds the
    /// power of two it encodes. Bits outside the exponent field are ignored
    #[inline]
    pub fn from_raw_exponent(raw: Vector<T::Int, N>) -> Self {
        unary_map(raw, |lane| T::from_bits(T::int_to_bits(lane) & T::EXP_MASK))
    }

    /// The raw biased exponent field of every lane, kept in its bit
    /// position
    ///
    /// The field is not unbiased and not shifted down, feeding the result
    /// straight back into [`Self::from_raw_exponent`] reproduces the
    /// exponent bits exactly
    #[inline]
    pub fn raw_exponent(self) -> Vector<T::Int, N> {
        unary_map(self, |lane| T::bits_to_int(lane.to_bits() & T::EXP_MASK))
    }

    /// Overwrite the exponent field of every lane with the bias, scaling
    /// the lane into the unit binade
    ///
    /// Sign and mantissa bits stay put, a finite nonzero lane becomes its
    /// significand in `[1, 2)` with the original sign. The rewrite is bit
    /// literal on every class, NaNs and subnormals included
    #[inline]
    pub fn mantissa(self) -> Self {
        unary_map(self, |lane| {
            T::from_bits((lane.to_bits() & !T::EXP_MASK) | T::ONE_BITS)
        })
    }
}
