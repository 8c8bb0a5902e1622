//! Elementwise float classification
//!
//! Each predicate matches the IEEE-754 class of the lane's bit pattern,
//! covering both NaN signs, the two zeros and the subnormal range

use std::num::FpCategory;

use super::unary_map;
use crate::lane::FloatLane;
use crate::vector::mask::Mask;
use crate::vector::{SupportedWidth, Vector, Width};

impl<T: FloatLane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Lanewise NaN test, quiet or signaling with either sign
    #[inline]
    pub fn is_nan(self) -> Mask<N> {
        Mask::from_raw(unary_map(self, |lane| lane.is_nan() as u32))
    }

    /// Lanewise infinity test, either sign
    #[inline]
    pub fn is_infinite(self) -> Mask<N> {
        Mask::from_raw(unary_map(self, |lane| lane.is_infinite() as u32))
    }

    /// Lanewise test for the non finite classes, NaN or either infinity
    #[inline]
    pub fn is_nan_or_infinite(self) -> Mask<N> {
        Mask::from_raw(unary_map(self, |lane| (!lane.is_finite()) as u32))
    }

    /// Lanewise zero test, matches both `+0.0` and `-0.0`
    #[inline]
    pub fn is_zero(self) -> Mask<N> {
        Mask::from_raw(unary_map(self, |lane| (lane == T::zero()) as u32))
    }

    /// Lanewise subnormal test, nonzero lanes below the smallest normal
    /// magnitude
    #[inline]
    pub fn is_subnormal(self) -> Mask<N> {
        Mask::from_raw(unary_map(self, |lane| {
            (lane.classify() == FpCategory::Subnormal) as u32
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{F32x4, F64x4};

    #[test]
    fn test_is_nan_both_signs() {
        let v = F32x4::from_array([0.0, f32::NAN, f32::INFINITY, f32::from_bits(0xFFC0_0000)]);
        assert_eq!(v.is_nan().to_array(), [false, true, false, true]);
    }

    #[test]
    fn test_is_infinite_and_is_nan_or_infinite() {
        let v = F64x4::from_array([f64::NEG_INFINITY, f64::NAN, 1.0e308, f64::INFINITY]);
        assert_eq!(v.is_infinite().to_array(), [true, false, false, true]);
        assert_eq!(v.is_nan_or_infinite().to_array(), [true, true, false, true]);
    }

    #[test]
    fn test_is_zero_matches_both_zeros() {
        let v = F32x4::from_array([0.0, -0.0, f32::MIN_POSITIVE, f32::NAN]);
        assert_eq!(v.is_zero().to_array(), [true, true, false, false]);
    }

    #[test]
    fn test_is_subnormal() {
        let v = F32x4::from_array([
            f32::MIN_POSITIVE / 2.0,
            f32::from_bits(1),
            f32::MIN_POSITIVE,
            0.0,
        ]);
        assert_eq!(v.is_subnormal().to_array(), [true, true, false, false]);

        let v = F64x4::from_array([5.0e-324, f64::MIN_POSITIVE, -2.0e-308, f64::NAN]);
        assert_eq!(v.is_subnormal().to_array(), [true, false, true, false]);
    }
}
