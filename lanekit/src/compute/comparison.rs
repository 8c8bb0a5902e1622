//! Elementwise comparison producing masks
//!
//! Lifts the scalar relational operators lane by lane. Floats keep the
//! IEEE-754 ordering: a NaN lane makes every comparison false except `!=`,
//! and the two zeros compare equal

use super::binary_map;
use crate::lane::Lane;
use crate::vector::mask::Mask;
use crate::vector::{SupportedWidth, Vector, Width};

mod private {
    use crate::lane::Lane;

    #[inline]
    pub(super) fn eq<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs == rhs
    }

    #[inline]
    pub(super) fn ne<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs != rhs
    }

    #[inline]
    pub(super) fn gt<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs > rhs
    }

    #[inline]
    pub(super) fn ge<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs >= rhs
    }

    #[inline]
    pub(super) fn lt<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs < rhs
    }

    #[inline]
    pub(super) fn le<T: Lane>(lhs: T, rhs: T) -> bool {
        lhs <= rhs
    }
}

macro_rules! impl_lanes_cmp {
    ($({$func:ident, $scalar:ident, $op:literal}),*) => {
        impl<T: Lane, const N: usize> Vector<T, N>
        where
            Width<N>: SupportedWidth,
        {
            $(
                #[doc = concat!("Lanewise `", $op, "`, true lanes hold 1 and false lanes 0")]
                #[inline]
                pub fn $func(self, rhs: Self) -> Mask<N> {
                    Mask::from_raw(binary_map(self, rhs, |lhs, rhs| {
                        private::$scalar(lhs, rhs) as u32
                    }))
                }
            )*
        }
    };
}

impl_lanes_cmp! {
    {lanes_eq, eq, "=="},
    {lanes_ne, ne, "!="},
    {lanes_gt, gt, ">"},
    {lanes_ge, ge, ">="},
    {lanes_lt, lt, "<"},
    {lanes_le, le, "<="}
}

#[cfg(test)]
mod tests {
    use crate::types::{F32x4, F64x4, I32x4, U32x2};

    #[test]
    fn test_int_comparisons() {
        let lhs = I32x4::from_array([1, -2, 3, 0]);
        let rhs = I32x4::from_array([1, 2, -3, 1]);

        assert_eq!(lhs.lanes_eq(rhs).to_array(), [true, false, false, false]);
        assert_eq!(lhs.lanes_ne(rhs).to_array(), [false, true, true, true]);
        assert_eq!(lhs.lanes_lt(rhs).to_array(), [false, true, false, true]);
        assert_eq!(lhs.lanes_le(rhs).to_array(), [true, true, false, true]);
        assert_eq!(lhs.lanes_gt(rhs).to_array(), [false, false, true, false]);
        assert_eq!(lhs.lanes_ge(rhs).to_array(), [true, false, true, false]);

        let lhs = U32x2::from_array([0, u32::MAX]);
        let rhs = U32x2::from_array([1, 0]);
        assert_eq!(lhs.lanes_gt(rhs).to_array(), [false, true]);
    }

    #[test]
    fn test_float_comparisons_follow_ieee() {
        let lhs = F64x4::from_array([1.0, f64::NAN, -0.0, f64::INFINITY]);
        let rhs = F64x4::from_array([1.0, f64::NAN, 0.0, 1.0]);

        // NaN compares false under everything except !=, the zeros are equal
        assert_eq!(lhs.lanes_eq(rhs).to_array(), [true, false, true, false]);
        assert_eq!(lhs.lanes_ne(rhs).to_array(), [false, true, false, true]);
        assert_eq!(lhs.lanes_le(rhs).to_array(), [true, false, true, false]);
        assert_eq!(lhs.lanes_gt(rhs).to_array(), [false, false, false, true]);
        assert_eq!(lhs.lanes_ge(rhs).to_array(), [true, false, true, true]);
        assert_eq!(lhs.lanes_lt(rhs).to_array(), [false, false, false, false]);
    }

    #[test]
    fn test_comparisons_match_scalar_operators() {
        // Lanes chosen so the six operators produce six different masks,
        // any method wired to the wrong scalar relation fails here
        let lhs = F32x4::from_array([1.5, -3.0, f32::NAN, 2.0]);
        let rhs = F32x4::from_array([1.5, 2.0, 1.0, -7.5]);

        for lane in 0..F32x4::LANES {
            let (l, r) = (lhs[lane], rhs[lane]);
            assert_eq!(lhs.lanes_eq(rhs).test(lane), l == r);
            assert_eq!(lhs.lanes_ne(rhs).test(lane), l != r);
            assert_eq!(lhs.lanes_lt(rhs).test(lane), l < r);
            assert_eq!(lhs.lanes_le(rhs).test(lane), l <= r);
            assert_eq!(lhs.lanes_gt(rhs).test(lane), l > r);
            assert_eq!(lhs.lanes_ge(rhs).test(lane), l >= r);
        }
    }
}
