//! Elementwise computation over vector lanes
//!
//! Every operation in this tree lifts a scalar function over the lanes of
//! its operands: lane `i` of the output only ever depends on lane `i` of the
//! inputs. All operations are total, callers guarantee the numeric
//! preconditions (nonzero divisors, in bounds gather indices) and violations
//! behave exactly like the scalar operation would

pub mod arith;
pub mod cast;
pub mod classify;
pub mod comparison;
pub mod float_bits;
pub mod gather;
pub mod logical;
pub mod round;

use crate::lane::Lane;
use crate::vector::{SupportedWidth, Vector, Width};

/// Lift a scalar function over every lane
#[inline]
pub(crate) fn unary_map<T, U, const N: usize>(v: Vector<T, N>, f: impl Fn(T) -> U) -> Vector<U, N>
where
    T: Lane,
    U: Lane,
    Width<N>: SupportedWidth,
{
    Vector(std::array::from_fn(|i| f(v.0[i])))
}

/// Lift a scalar function over every lane pair
#[inline]
pub(crate) fn binary_map<T, U, const N: usize>(
    lhs: Vector<T, N>,
    rhs: Vector<T, N>,
    f: impl Fn(T, T) -> U,
) -> Vector<U, N>
where
    T: Lane,
    U: Lane,
    Width<N>: SupportedWidth,
{
    Vector(std::array::from_fn(|i| f(lhs.0[i], rhs.0[i])))
}

/// Lift a scalar function over every lane triple
#[inline]
pub(crate) fn ternary_map<T, const N: usize>(
    a: Vector<T, N>,
    b: Vector<T, N>,
    c: Vector<T, N>,
    f: impl Fn(T, T, T) -> T,
) -> Vector<T, N>
where
    T: Lane,
    Width<N>: SupportedWidth,
{
    Vector(std::array::from_fn(|i| f(a.0[i], b.0[i], c.0[i])))
}
