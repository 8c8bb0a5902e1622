//! Elementwise arithmetic
//!
//! Float lanes follow the scalar IEEE-754 operators bit for bit, including
//! the NaN and signed zero cases. Integer lanes wrap on overflow in two's
//! complement, which is what generated vector code observes on hardware,
//! and negation on unsigned lanes is the two's complement wrap as well.
//! Division and remainder stay native: a zero divisor lane traps exactly
//! like the scalar operation, callers guarantee nonzero divisors

use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::{binary_map, ternary_map, unary_map};
use crate::macros::{for_all_float_lanes, for_all_int_lanes};
use crate::vector::{SupportedWidth, Vector, Width};

macro_rules! impl_int_arith {
    ($({$ty:ident}),*) => {
        $(
            impl<const N: usize> Add for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    binary_map(self, rhs, $ty::wrapping_add)
                }
            }

            impl<const N: usize> Sub for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    binary_map(self, rhs, $ty::wrapping_sub)
                }
            }

            impl<const N: usize> Mul for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    binary_map(self, rhs, $ty::wrapping_mul)
                }
            }

            impl<const N: usize> Div for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs / rhs)
                }
            }

            impl<const N: usize> Rem for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn rem(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs % rhs)
                }
            }

            impl<const N: usize> Neg for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    unary_map(self, $ty::wrapping_neg)
                }
            }

            impl<const N: usize> Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                /// Ternary multiply add, `self * a + b` lane by lane with
                /// wrapping integer arithmetic
                #[inline]
                pub fn mul_add(self, a: Self, b: Self) -> Self {
                    ternary_map(self, a, b, |x, a, b| x.wrapping_mul(a).wrapping_add(b))
                }
            }
        )*
    };
}

for_all_int_lanes!(impl_int_arith);

macro_rules! impl_float_arith {
    ($({$ty:ident, $bits:ident, $int:ident}),*) => {
        $(
            impl<const N: usize> Add for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs + rhs)
                }
            }

            impl<const N: usize> Sub for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs - rhs)
                }
            }

            impl<const N: usize> Mul for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs * rhs)
                }
            }

            impl<const N: usize> Div for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    binary_map(self, rhs, |lhs, rhs| lhs / rhs)
                }
            }

            impl<const N: usize> Neg for Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                type Output = Self;

                #[inline]
                fn neg(self) -> Self {
                    unary_map(self, |lane| -lane)
                }
            }

            impl<const N: usize> Vector<$ty, N>
            where
                Width<N>: SupportedWidth,
            {
                /// Fused multiply add, `self * a + b` lane by lane with a
                /// single rounding
                ///
                /// The intermediate product is not rounded. Polynomial
                /// kernels rest on this, never replace it with a separate
                /// multiply and add
                #[inline]
                pub fn mul_add(self, a: Self, b: Self) -> Self {
                    ternary_map(self, a, b, |x, a, b| x.mul_add(a, b))
                }

                /// Fused multiply subtract, `self * a - b` lane by lane with
                /// a single rounding
                #[inline]
                pub fn mul_sub(self, a: Self, b: Self) -> Self {
                    ternary_map(self, a, b, |x, a, b| x.mul_add(a, -b))
                }
            }
        )*
    };
}

for_all_float_lanes!(impl_float_arith);
