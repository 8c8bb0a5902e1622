//! Macros used in lanekit

/// Call macro for all lane types
///
/// Tuple: {lane type, alias stem}
macro_rules! for_all_lanes {
    ($macro:ident) => {
        $macro! {
            {f32, F32},
            {f64, F64},
            {i32, I32},
            {u32, U32},
            {i64, I64},
            {u64, U64}
        }
    };
}

pub(crate) use for_all_lanes;

/// Call macro for all integer lane types
///
/// Tuple: {lane type}
macro_rules! for_all_int_lanes {
    ($macro:ident) => {
        $macro! {
            {i32},
            {u32},
            {i64},
            {u64}
        }
    };
}

pub(crate) use for_all_int_lanes;

/// Call macro for all float lane types
///
/// Tuple: {lane type, bits type, field integer type}
macro_rules! for_all_float_lanes {
    ($macro:ident) => {
        $macro! {
            {f32, u32, i32},
            {f64, u64, i64}
        }
    };
}

pub(crate) use for_all_float_lanes;
