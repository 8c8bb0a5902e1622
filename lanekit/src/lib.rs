//! # Lanekit
//!
//! `Lanekit` is the vector primitive layer underneath our math function code
//! generator. The generated kernels are straight line code over fixed width
//! tuples and every operation they emit resolves to a method of this crate,
//! therefore:
//!
//! - it only provides the operations the generated kernels need
//!
//! - every operation keeps the exact IEEE-754 semantics of the scalar
//!   operator it lifts, lane by lane
//!
//! The `(domain, width)` surface is a closed set: lanes are `f32`, `f64`,
//! `i32`, `u32`, `i64` and `u64`, widths are 2, 4 and 8. Kernels name the
//! concrete alias from [`types`] and monomorphization does the rest, there
//! is no runtime dispatch anywhere in the crate.
//!
//! # Rounding
//!
//! `round_ties_even` and `to_int_ties_even` compile to either a portable
//! library routine or the hardware rounding instructions, selected by the
//! `hw_round` feature at build time. Both strategies produce the same bits
//! for every input, see [`compute::round`].

pub mod compute;
pub mod lane;
mod macros;
pub mod types;
pub mod vector;

mod private {
    /// Sealed trait protect against downstream implementations
    pub trait Sealed {}
}
