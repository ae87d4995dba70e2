//! Element types for grids and label buffers

use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::fmt::Debug;

/// Value stored in an input grid
///
/// Zero (or `false`) is background; every other value is foreground.
/// Implemented for `bool` and all integer and floating point primitives.
pub trait Voxel: Copy + PartialEq + Debug {
    /// True for any non-zero value
    fn is_foreground(&self) -> bool;

    /// 1 for `true`, 0 for `false`
    fn from_flag(flag: bool) -> Self;
}

macro_rules! impl_voxel_numeric {
    ($($t:ty),*) => {
        $(
            impl Voxel for $t {
                #[inline]
                fn is_foreground(&self) -> bool {
                    *self != num_traits::Zero::zero()
                }

                #[inline]
                fn from_flag(flag: bool) -> Self {
                    if flag {
                        num_traits::One::one()
                    } else {
                        num_traits::Zero::zero()
                    }
                }
            }
        )*
    };
}

impl_voxel_numeric!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl Voxel for bool {
    #[inline]
    fn is_foreground(&self) -> bool {
        *self
    }

    #[inline]
    fn from_flag(flag: bool) -> Self {
        flag
    }
}

/// Unsigned integer used as a component label
pub trait Label: PrimInt + Unsigned + FromPrimitive + Debug {
    /// Label for a table index, or `None` if the type is too narrow
    #[inline]
    fn from_index(index: usize) -> Option<Self> {
        Self::from_usize(index)
    }

    /// Table index of this label
    #[inline]
    fn index(self) -> usize {
        self.to_usize().unwrap_or(usize::MAX)
    }
}

impl<T: PrimInt + Unsigned + FromPrimitive + Debug> Label for T {}

/// Same-component test used by labeling
///
/// Background joins background; foreground only joins an equal value.
#[inline]
pub fn same_class<T: Voxel>(a: T, b: T) -> bool {
    if a.is_foreground() {
        a == b
    } else {
        !b.is_foreground()
    }
}
