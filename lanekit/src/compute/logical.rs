//! Bit operations and boolean lifters over integer lanes
//!
//! The bit operators act on the two's complement representation. The
//! `logical_*` methods mirror the scalar boolean operators under numeric
//! truthiness: a nonzero input lane counts as true and output lanes are
//! exactly 0 or 1 in the same domain. Both operands of the binary forms are
//! always evaluated, there is no short circuit
//!
//! Right shift keeps the lane type's own semantics, arithmetic on signed
//! lanes and logical on unsigned lanes. Shift amounts wrap around the lane
//! width, an oversized amount never causes undefined behavior

use std::ops::{BitAnd, BitOr, Not, Shl, Shr};

use super::{binary_map, unary_map};
use crate::lane::IntLane;
use crate::vector::{SupportedWidth, Vector, Width};

impl<T: IntLane, const N: usize> Not for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        unary_map(self, |lane| !lane)
    }
}

impl<T: IntLane, const N: usize> BitAnd for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, rhs| lhs & rhs)
    }
}

impl<T: IntLane, const N: usize> BitOr for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, rhs| lhs | rhs)
    }
}

impl<T: IntLane, const N: usize> Shl for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn shl(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, amount| lhs.wrapping_shl(amount.as_()))
    }
}

impl<T: IntLane, const N: usize> Shr for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn shr(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, amount| lhs.wrapping_shr(amount.as_()))
    }
}

impl<T: IntLane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Boolean not under numeric truthiness, a zero lane becomes 1 and a
    /// nonzero lane becomes 0
    #[inline]
    pub fn logical_not(self) -> Self {
        unary_map(
            self,
            |lane| if lane.is_zero() { T::one() } else { T::zero() },
        )
    }

    /// Boolean and under numeric truthiness, output lanes are exactly 0 or 1
    ///
    /// Both operands are always evaluated
    #[inline]
    pub fn logical_and(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, rhs| {
            if !lhs.is_zero() && !rhs.is_zero() {
                T::one()
            } else {
                T::zero()
            }
        })
    }

    /// Boolean or under numeric truthiness, output lanes are exactly 0 or 1
    ///
    /// Both operands are always evaluated
    #[inline]
    pub fn logical_or(self, rhs: Self) -> Self {
        binary_map(self, rhs, |lhs, rhs| {
            if !lhs.is_zero() || !rhs.is_zero() {
                T::one()
            } else {
                T::zero()
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::types::{I32x2, I32x4, I64x2, U32x2, U32x4};

    #[test]
    fn test_shifts_follow_lane_signedness() {
        let signed = I32x4::from_array([-8, 8, -1, 1]);
        let amount = I32x4::from_array([1, 2, 1, 33]);
        // The last lane shifts by 33, the amount wraps to 1
        assert_eq!((signed >> amount).to_array(), [-4, 2, -1, 0]);

        let unsigned = U32x4::from_array([0x8000_0000, 8, u32::MAX, 1]);
        let amount = U32x4::from_array([1, 2, 31, 33]);
        assert_eq!((unsigned >> amount).to_array(), [0x4000_0000, 2, 1, 0]);

        let ones = U32x4::splat(1);
        let amount = U32x4::from_array([0, 1, 4, 31]);
        assert_eq!((ones << amount).to_array(), [1, 2, 16, 0x8000_0000]);
    }

    #[test]
    fn test_bitwise_ops() {
        let lhs = U32x2::from_array([0b1100, 0xFFFF_0000]);
        let rhs = U32x2::from_array([0b1010, 0x0000_FFFF]);

        assert_eq!((lhs & rhs).to_array(), [0b1000, 0]);
        assert_eq!((lhs | rhs).to_array(), [0b1110, u32::MAX]);
        assert_eq!((!lhs).to_array(), [!0b1100_u32, 0x0000_FFFF]);

        let signed = I64x2::from_array([0, -1]);
        assert_eq!((!signed).to_array(), [-1, 0]);
    }

    #[test]
    fn test_logical_ops_normalize_to_zero_or_one() {
        let lhs = U32x4::from_array([5, 0, 7, 1]);
        let rhs = U32x4::from_array([1, 1, 0, 3]);

        assert_eq!(lhs.logical_and(rhs).to_array(), [1, 0, 0, 1]);
        assert_eq!(lhs.logical_or(rhs).to_array(), [1, 1, 1, 1]);
        assert_eq!(lhs.logical_not().to_array(), [0, 1, 0, 0]);

        let signed = I32x2::from_array([-3, 0]);
        assert_eq!(signed.logical_not().to_array(), [0, 1]);
        assert_eq!(signed.logical_and(I32x2::splat(-1)).to_array(), [1, 0]);
    }
}
