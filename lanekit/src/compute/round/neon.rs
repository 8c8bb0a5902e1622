//! Hardware rounding through the scalar NEON instructions
//!
//! `frintn` and `fcvtns` encode round to nearest with ties to even in the
//! opcode, independent of the runtime rounding mode. `fcvtns` saturates out
//! of range values and converts NaN to zero, exactly matching the portable
//! cast, so swapping strategies never changes a single output bit. Only the
//! f32 flavors have a dedicated instruction, the f64 flavors reuse the
//! portable routine

use std::arch::aarch64::{vcvtns_s32_f32, vrndns_f32};

#[inline]
pub(super) fn round_f32(lane: f32) -> f32 {
    // Note that this `unsafe` block is safe because neon is baseline on
    // every aarch64 target
    unsafe { vrndns_f32(lane) }
}

#[inline]
pub(super) fn to_int_f32(lane: f32) -> i32 {
    // Note that this `unsafe` block is safe because neon is baseline on
    // every aarch64 target
    unsafe { vcvtns_s32_f32(lane) }
}

#[inline]
pub(super) fn round_f64(lane: f64) -> f64 {
    lane.round_ties_even()
}

#[inline]
pub(super) fn to_int_f64(lane: f64) -> i64 {
    lane.round_ties_even() as i64
}
