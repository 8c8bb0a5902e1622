//! Concrete `(domain, width)` aliases
//!
//! Generated kernels pick their operand types from this module by name, the
//! alias encodes the lane domain and the lane count. Every alias is the same
//! [`Vector`] underneath, the full catalogue exists so code generation can
//! map a `(domain, width)` pair to a type without any inference

use crate::macros::for_all_lanes;
use crate::vector::mask::Mask;
use crate::vector::Vector;

macro_rules! lane_aliases {
    ($({$ty:ident, $stem:ident}),*) => {
        paste::paste! {
            $(
                #[doc = concat!("2 lane `", stringify!($ty), "` vector")]
                pub type [<$stem x2>] = Vector<$ty, 2>;

                #[doc = concat!("4 lane `", stringify!($ty), "` vector")]
                pub type [<$stem x4>] = Vector<$ty, 4>;

                #[doc = concat!("8 lane `", stringify!($ty), "` vector")]
                pub type [<$stem x8>] = Vector<$ty, 8>;
            )*
        }
    };
}

for_all_lanes!(lane_aliases);

/// 2 lane boolean mask
pub type Mask2 = Mask<2>;

/// 4 lane boolean mask
pub type Mask4 = Mask<4>;

/// 8 lane boolean mask
pub type Mask8 = Mask<8>;
