//! Gather lanes from a table through per lane indices
//!
//! The callers of these functions compute index vectors that are in bounds
//! by construction, therefore the functions skip the bound check and the
//! contract lives in the `# Safety` section. The `verify` feature turns the
//! contract into an assertion

use crate::lane::{GatherIndex, Lane};
use crate::vector::{SupportedWidth, Vector, Width};

impl<T: Lane, const N: usize> Vector<T, N>
where
    Width<N>: SupportedWidth,
{
    /// Gather one lane per index from `table`: lane `i` of the result is
    /// `table[idx lane i]`
    ///
    /// # Safety
    ///
    /// - Every lane of `idx` must be in bounds of `table`. Otherwise,
    ///   undefined behavior happens
    #[inline]
    pub unsafe fn gather<I: GatherIndex>(table: &[T], idx: Vector<I, N>) -> Self {
        #[cfg(feature = "verify")]
        idx.0
            .iter()
            .for_each(|&lane| assert!(lane.as_offset() < table.len()));

        Self(std::array::from_fn(|i| {
            let offset = idx.0[i].as_offset();
            unsafe { *table.get_unchecked(offset) }
        }))
    }

    /// Gather one lane per index pair from the rows of `table`: lane `i`
    /// of the result is `table[i0 lane i][i1 lane i]`
    ///
    /// # Safety
    ///
    /// - Every lane of `i0` must be in bounds of `table` and every lane of
    ///   `i1` must be smaller than `C`. Otherwise, undefined behavior
    ///   happens
    #[inline]
    pub unsafe fn gather_2d<I: GatherIndex, const C: usize>(
        table: &[[T; C]],
        i0: Vector<I, N>,
        i1: Vector<I, N>,
    ) -> Self {
        #[cfg(feature = "verify")]
        i0.0.iter().zip(i1.0.iter()).for_each(|(&row, &col)| {
            assert!(row.as_offset() < table.len() && col.as_offset() < C)
        });

        Self(std::array::from_fn(|i| {
            let row = i0.0[i].as_offset();
            let col = i1.0[i].as_offset();
            unsafe { *table.get_unchecked(row).get_unchecked(col) }
        }))
    }
}
