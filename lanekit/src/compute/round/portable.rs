//! Library rounding routines, available on every target

#[inline]
pub(super) fn round_f32(lane: f32) -> f32 {
    lane.round_ties_even()
}

#[inline]
pub(super) fn to_int_f32(lane: f32) -> i32 {
    // The saturating cast: out of range lanes go to the integer bounds
    // and NaN goes to zero
    lane.round_ties_even() as i32
}

#[inline]
pub(super) fn round_f64(lane: f64) -> f64 {
    lane.round_ties_even()
}

#[inline]
pub(super) fn to_int_f64(lane: f64) -> i64 {
    lane.round_ties_even() as i64
}
