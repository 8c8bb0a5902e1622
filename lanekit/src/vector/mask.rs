//! Boolean mask tuples
//!
//! Masks come out of the comparison and classification operations and drive
//! lane selection. The representation is one `u32` per lane with a fixed
//! convention: every producer in this crate writes exactly 0 or 1, every
//! consumer treats any nonzero lane as true. Masks built through
//! [`Mask::from_raw`] may carry arbitrary nonzero lanes and still select
//! correctly

use std::fmt::{self, Debug};
use std::ops::{BitAnd, BitOr, Not};

use super::{SupportedWidth, Vector, Width};
use crate::lane::Lane;

/// Tuple of `N` lane predicates
///
/// `Debug` shows the raw integer lanes, not the truth values they encode
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Mask<const N: usize>(Vector<u32, N>);

impl<const N: usize> Mask<N>
where
    Width<N>: SupportedWidth,
{
    /// Build a mask from truth values, true lanes hold 1 and false lanes 0
    #[inline]
    pub fn from_array(lanes: [bool; N]) -> Self {
        Self(Vector(std::array::from_fn(|i| lanes[i] as u32)))
    }

    /// Build a mask with every lane holding `value`
    #[inline]
    pub fn splat(value: bool) -> Self {
        Self(Vector::splat(value as u32))
    }

    /// Wrap an integer tuple as a mask, lanes are kept verbatim
    #[inline]
    pub const fn from_raw(lanes: Vector<u32, N>) -> Self {
        Self(lanes)
    }

    /// The underlying integer tuple, lanes are kept verbatim
    #[inline]
    pub fn into_raw(self) -> Vector<u32, N> {
        self.0
    }

    /// Truth value of one lane
    #[inline]
    pub fn test(self, lane: usize) -> bool {
        self.0.0[lane] != 0
    }

    /// Copy the truth values out into an array
    #[inline]
    pub fn to_array(self) -> [bool; N] {
        std::array::from_fn(|i| self.0.0[i] != 0)
    }

    /// True when every lane is false
    #[inline]
    pub fn all_false(self) -> bool {
        self.0.0.iter().all(|&lane| lane == 0)
    }

    /// True when at least one lane is false
    #[inline]
    pub fn any_false(self) -> bool {
        self.0.0.iter().any(|&lane| lane == 0)
    }

    /// True when every lane is true
    #[inline]
    pub fn all_true(self) -> bool {
        self.0.0.iter().all(|&lane| lane != 0)
    }

    /// True when at least one lane is true
    #[inline]
    pub fn any_true(self) -> bool {
        self.0.0.iter().any(|&lane| lane != 0)
    }

    /// Blend two vectors: lane `i` of the result is lane `i` of `on_true`
    /// when mask lane `i` is true and lane `i` of `on_false` otherwise
    ///
    /// Both inputs are fully materialized before the blend, the untaken
    /// side is never evaluated lazily
    #[inline]
    pub fn select<T: Lane>(self, on_true: Vector<T, N>, on_false: Vector<T, N>) -> Vector<T, N> {
        Vector(std::array::from_fn(|i| {
            if self.0.0[i] != 0 {
                on_true.0[i]
            } else {
                on_false.0[i]
            }
        }))
    }
}

impl Mask<4> {
    /// Concatenate two 2 lane masks, `lo` fills lanes 0..2 and `hi` fills
    /// lanes 2..4. Raw lanes are preserved verbatim
    #[inline]
    pub fn concat(lo: Mask<2>, hi: Mask<2>) -> Self {
        Self(Vector::<u32, 4>::concat(lo.0, hi.0))
    }

    /// Split into the low and high half, the inverse of [`Self::concat`]
    #[inline]
    pub fn split(self) -> (Mask<2>, Mask<2>) {
        let (lo, hi) = self.0.split();
        (Mask(lo), Mask(hi))
    }
}

impl Mask<8> {
    /// Concatenate two 4 lane masks, `lo` fills lanes 0..4 and `hi` fills
    /// lanes 4..8. Raw lanes are preserved verbatim
    #[inline]
    pub fn concat(lo: Mask<4>, hi: Mask<4>) -> Self {
        Self(Vector::<u32, 8>::concat(lo.0, hi.0))
    }

    /// Concatenate four 2 lane masks in low to high order
    #[inline]
    pub fn concat4(v0: Mask<2>, v1: Mask<2>, v2: Mask<2>, v3: Mask<2>) -> Self {
        Self(Vector::<u32, 8>::concat4(v0.0, v1.0, v2.0, v3.0))
    }

    /// Split into the low and high half, the inverse of [`Self::concat`]
    #[inline]
    pub fn split(self) -> (Mask<4>, Mask<4>) {
        let (lo, hi) = self.0.split();
        (Mask(lo), Mask(hi))
    }

    /// Split into four 2 lane masks, the inverse of [`Self::concat4`]
    #[inline]
    pub fn split4(self) -> (Mask<2>, Mask<2>, Mask<2>, Mask<2>) {
        let (v0, v1, v2, v3) = self.0.split4();
        (Mask(v0), Mask(v1), Mask(v2), Mask(v3))
    }
}

impl<const N: usize> Not for Mask<N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(Vector(std::array::from_fn(|i| (self.0.0[i] == 0) as u32)))
    }
}

impl<const N: usize> BitAnd for Mask<N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(Vector(std::array::from_fn(|i| {
            (self.0.0[i] != 0 && rhs.0.0[i] != 0) as u32
        })))
    }
}

impl<const N: usize> BitOr for Mask<N>
where
    Width<N>: SupportedWidth,
{
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(Vector(std::array::from_fn(|i| {
            (self.0.0[i] != 0 || rhs.0.0[i] != 0) as u32
        })))
    }
}

impl<const N: usize> Debug for Mask<N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<const N: usize> Default for Mask<N>
where
    Width<N>: SupportedWidth,
{
    #[inline]
    fn default() -> Self {
        Self::splat(false)
    }
}
