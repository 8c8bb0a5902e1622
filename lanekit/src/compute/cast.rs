//! Elementwise conversion between the numeric lane domains
//!
//! One operation covers every ordered pair of domains with the semantics of
//! the scalar `as` cast, so a converted lane is bit for bit the value the
//! scalar cast would produce

use num_traits::AsPrimitive;

use super::unary_map;
use crate::lane::Lane;
use crate::vector::{SupportedWidth, Vector, Width};

impl<T: Lane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Convert every lane into the target domain with the semantics of the
    /// scalar `as` cast
    ///
    /// - conversions that fit in the target are exact
    /// - int to float rounds to the nearest representable value, ties to
    ///   even
    /// - float to int truncates toward zero, saturates at the integer
    ///   bounds and converts NaN to zero
    /// - int to narrower int keeps the low bits
    #[inline]
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Lane,
    {
        unary_map(self, T::as_)
    }
}
