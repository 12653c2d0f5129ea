use std::fmt;
use std::ops::{Add, Mul};

use geodesy_array_types::Real;
use num_traits::{Float, Zero};

/// Scalar type of domain coordinates.
///
/// Implemented for `f32` and `f64`.
pub trait Coord: Real + Float + fmt::Debug + fmt::Display + 'static {
    fn from_index(i: usize) -> Self;

    /// Truncating conversion of a non-negative value.
    fn to_index(self) -> usize;
}

macro_rules! impl_coord {
    ($($T:ty)*) => {$(
        impl Coord for $T {
            #[inline(always)]
            fn from_index(i: usize) -> Self { i as $T }

            #[inline(always)]
            fn to_index(self) -> usize { self as usize }
        }
    )*};
}

impl_coord!{ f32 f64 }

/// Values that can be stored in a field and interpolated.
///
/// Interpolation only needs weighted sums, so this covers plain floats
/// as well as `Vector<T, K>` and `Complex<T>`.
pub trait Value<T>: Copy + Zero + Add<Output=Self> + Mul<T, Output=Self> { }

impl<T, Y> Value<T> for Y
where Y: Copy + Zero + Add<Output=Y> + Mul<T, Output=Y>,
{ }
