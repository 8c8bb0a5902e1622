//! Fixed width tuples of scalar lanes
//!
//! [`Vector`] is the value type every elementwise operation in this crate is
//! defined over. Tuples are plain `Copy` values, operations consume their
//! inputs and return a fresh tuple, the output never aliases an input

pub mod mask;

use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use snafu::{ensure, Snafu};

use crate::lane::Lane;
use crate::private::Sealed;

/// Marker carrying a lane count at the type level
///
/// The lane counts this crate ships vectors for are enumerated by the
/// [`SupportedWidth`] impls, everything else is rejected at compile time
#[derive(Debug, Clone, Copy)]
pub struct Width<const N: usize>;

/// Lane counts supported by [`Vector`]
pub trait SupportedWidth: Sealed {}

macro_rules! impl_supported_width {
    ($($n:literal),*) => {
        $(
            impl Sealed for Width<$n> {}
            impl SupportedWidth for Width<$n> {}
        )*
    };
}

impl_supported_width!(2, 4, 8);

/// Fixed width tuple of `N` scalar lanes
///
/// Lane order is significant: lane `i` of every output is computed from
/// lane `i` of the inputs and lanes never influence their neighbours. The
/// only cross lane operations in the crate are the reductions on
/// [`mask::Mask`]
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Lane, const N: usize>(pub(crate) [T; N]);

impl<T: Lane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Number of lanes
    pub const LANES: usize = N;

    /// Build a vector with the scalars placed at lane 0 to `N - 1` in
    /// argument order
    #[inline]
    pub const fn from_array(lanes: [T; N]) -> Self {
        Self(lanes)
    }

    /// Build a vector with every lane holding `value`
    #[inline]
    pub fn splat(value: T) -> Self {
        Self([value; N])
    }

    /// Copy the lanes out into an array
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.0
    }

    /// Borrow the lanes as an array
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrow the lanes as an array
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

impl<T: Lane> Vector<T, 4> {
    /// Concatenate two 2 lane vectors, `lo` fills lanes 0..2 and `hi` fills
    /// lanes 2..4. Bit patterns are preserved verbatim
    #[inline]
    pub fn concat(lo: Vector<T, 2>, hi: Vector<T, 2>) -> Self {
        let mut lanes = [T::default(); 4];
        lanes[..2].copy_from_slice(lo.as_array());
        lanes[2..].copy_from_slice(hi.as_array());
        Self(lanes)
    }

    /// Split into the low and high half, the inverse of [`Self::concat`]
    #[inline]
    pub fn split(self) -> (Vector<T, 2>, Vector<T, 2>) {
        let mut lo = [T::default(); 2];
        let mut hi = [T::default(); 2];
        lo.copy_from_slice(&self.0[..2]);
        hi.copy_from_slice(&self.0[2..]);
        (Vector(lo), Vector(hi))
    }
}

impl<T: Lane> Vector<T, 8> {
    /// Concatenate two 4 lane vectors, `lo` fills lanes 0..4 and `hi` fills
    /// lanes 4..8. Bit patterns are preserved verbatim
    #[inline]
    pub fn concat(lo: Vector<T, 4>, hi: Vector<T, 4>) -> Self {
        let mut lanes = [T::default(); 8];
        lanes[..4].copy_from_slice(lo.as_array());
        lanes[4..].copy_from_slice(hi.as_array());
        Self(lanes)
    }

    /// Concatenate four 2 lane vectors in low to high order
    #[inline]
    pub fn concat4(v0: Vector<T, 2>, v1: Vector<T, 2>, v2: Vector<T, 2>, v3: Vector<T, 2>) -> Self {
        Self::concat(Vector::<T, 4>::concat(v0, v1), Vector::<T, 4>::concat(v2, v3))
    }

    /// Split into the low and high half, the inverse of [`Self::concat`]
    #[inline]
    pub fn split(self) -> (Vector<T, 4>, Vector<T, 4>) {
        let mut lo = [T::default(); 4];
        let mut hi = [T::default(); 4];
        lo.copy_from_slice(&self.0[..4]);
        hi.copy_from_slice(&self.0[4..]);
        (Vector(lo), Vector(hi))
    }

    /// Split into four 2 lane vectors, the inverse of [`Self::concat4`]
    #[inline]
    pub fn split4(self) -> (Vector<T, 2>, Vector<T, 2>, Vector<T, 2>, Vector<T, 2>) {
        let (lo, hi) = self.split();
        let (v0, v1) = lo.split();
        let (v2, v3) = hi.split();
        (v0, v1, v2, v3)
    }
}

impl<T: Lane, const N: usize> Debug for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl<T: Lane, const N: usize> Default for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    #[inline]
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Lane, const N: usize> Index<usize> for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Output = T;

    #[inline]
    fn index(&self, lane: usize) -> &T {
        &self.0[lane]
    }
}

impl<T: Lane, const N: usize> IndexMut<usize> for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    #[inline]
    fn index_mut(&mut self, lane: usize) -> &mut T {
        &mut self.0[lane]
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    #[inline]
    fn from(lanes: [T; N]) -> Self {
        Self(lanes)
    }
}

impl<T: Lane, const N: usize> From<Vector<T, N>> for [T; N]
where
    Width<N>: SupportedWidth,
{
    #[inline]
    fn from(vector: Vector<T, N>) -> Self {
        vector.0
    }
}

#[allow(missing_docs)]
#[derive(Debug, Snafu)]
#[snafu(display("slice has {len} elements, can not fill a vector with {width} lanes"))]
pub struct WidthMismatchError {
    len: usize,
    width: usize,
}

type Result<T> = std::result::Result<T, WidthMismatchError>;

impl<T: Lane, const N: usize> TryFrom<&[T]> for Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    type Error = WidthMismatchError;

    fn try_from(slice: &[T]) -> Result<Self> {
        ensure!(
            slice.len() == N,
            WidthMismatchSnafu {
                len: slice.len(),
                width: N
            }
        );

        let mut lanes = [T::default(); N];
        lanes.copy_from_slice(slice);
        Ok(Self(lanes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{F32x4, F64x2, I32x8, U32x2, U32x4, U32x8};

    #[test]
    fn test_construction() {
        let v = F32x4::from_array([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v[2], 3.0);
        assert_eq!(F32x4::LANES, 4);

        let mut v = U32x2::splat(7);
        v[1] = 9;
        assert_eq!(v.to_array(), [7, 9]);

        assert_eq!(F64x2::default().to_array(), [0.0, 0.0]);
    }

    #[test]
    fn test_try_from_slice() {
        let lanes = [1_i32, -2, 3, -4, 5, -6, 7, -8];
        let v = I32x8::try_from(lanes.as_slice()).unwrap();
        assert_eq!(v.to_array(), lanes);

        let err = I32x8::try_from(&lanes[..3]).unwrap_err();
        let expect =
            expect_test::expect![[r#"slice has 3 elements, can not fill a vector with 8 lanes"#]];
        expect.assert_eq(&err.to_string());
    }

    #[test]
    fn test_debug() {
        let v = F32x4::from_array([1.0, -0.0, f32::INFINITY, 1.5]);
        let expect = expect_test::expect![[r#"[1.0, -0.0, inf, 1.5]"#]];
        expect.assert_eq(&format!("{:?}", v));
    }

    #[test]
    fn test_concat_split_round_trip() {
        let lo = U32x2::from_array([1, 2]);
        let hi = U32x2::from_array([3, 4]);
        let v = U32x4::concat(lo, hi);
        assert_eq!(v.to_array(), [1, 2, 3, 4]);
        assert_eq!(v.split(), (lo, hi));

        let wide = U32x8::concat(v, v);
        assert_eq!(wide.to_array(), [1, 2, 3, 4, 1, 2, 3, 4]);
        assert_eq!(wide.split(), (v, v));

        let wide = U32x8::concat4(lo, hi, hi, lo);
        assert_eq!(wide.to_array(), [1, 2, 3, 4, 3, 4, 1, 2]);
        assert_eq!(wide.split4(), (lo, hi, hi, lo));
    }

    #[test]
    fn test_concat_preserves_bit_patterns() {
        let lo = F64x2::from_array([f64::NAN, -0.0]);
        let hi = F64x2::from_array([f64::INFINITY, 5.0e-324]);
        let v = Vector::<f64, 4>::concat(lo, hi);

        let bits: Vec<u64> = v.to_array().iter().map(|lane| lane.to_bits()).collect();
        assert_eq!(
            bits,
            [
                f64::NAN.to_bits(),
                (-0.0_f64).to_bits(),
                f64::INFINITY.to_bits(),
                5.0e-324_f64.to_bits()
            ]
        );
    }
}
