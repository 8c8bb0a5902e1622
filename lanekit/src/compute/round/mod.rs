//! Round lanes to the nearest integral value with ties to even
//!
//! Two flavors share the rounding direction: `round_ties_even` stays in the
//! float domain and `to_int_ties_even` lands in the matching width integer
//! domain. Two strategies implement them, selected at build time by the
//! `hw_round` feature:
//!
//! - portable: the library `round_ties_even` routine plus the saturating
//!   float to integer cast
//!
//! - hardware: on aarch64 the scalar rounding instructions that carry the
//!   nearest even mode in the opcode, `frintn` and `fcvtns`, for the f32
//!   flavors. The f64 flavors always take the portable routine
//!
//! The strategies return identical bits for every input: normals,
//! subnormals, both zeros, both infinities, NaN and the halfway cases. Out
//! of range integer conversions saturate and NaN converts to zero under
//! both. On targets without the instructions the feature falls back to the
//! portable strategy at build time

#[cfg(not(all(feature = "hw_round", target_arch = "aarch64")))]
mod portable;
#[cfg(not(all(feature = "hw_round", target_arch = "aarch64")))]
use portable as imp;

#[cfg(all(feature = "hw_round", target_arch = "aarch64"))]
mod neon;
#[cfg(all(feature = "hw_round", target_arch = "aarch64"))]
use neon as imp;

use super::unary_map;
use crate::macros::for_all_float_lanes;
use crate::vector::{SupportedWidth, Vector, Width};

macro_rules! impl_round {
    ($({$ty:ident, $bits:ident, $int:ident}),*) => {
        paste::paste! {
            $(
                impl<const N: usize> Vector<$ty, N>
                where
                    Width<N>: SupportedWidth,
                {
                    /// Round every lane to the nearest integral value, ties
                    /// to even
                    ///
                    /// NaN, infinities and lanes that are already integral
                    /// pass through unchanged, which covers every magnitude
                    /// at or beyond the lane type's exact integer range
                    #[inline]
                    pub fn round_ties_even(self) -> Self {
                        unary_map(self, imp::[<round_ $ty>])
                    }

                    /// Round every lane to the nearest integer, ties to
                    /// even, and return it in the same width integer domain
                    ///
                    /// Out of range lanes saturate to the integer bounds
                    /// and NaN converts to zero
                    #[inline]
                    pub fn to_int_ties_even(self) -> Vector<$int, N> {
                        unary_map(self, imp::[<to_int_ $ty>])
                    }
                }
            )*
        }
    };
}

for_all_float_lanes!(impl_round);
