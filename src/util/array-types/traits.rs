/* ************************************************************************ **
** This file is part of geodesy-math, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Scalar traits.
//!
//! `Semiring`, `Ring` and `Real` carry no methods and cannot be implemented
//! outside this crate; they only name which primitives a vector or matrix
//! may hold. The operator bounds live on the crate-private traits in
//! `internal`, which are implemented for exactly the same types.

pub use self::sealed::{Semiring, Ring, Real};

mod sealed {
    pub trait Sealed { }

    /// Scalars with `+` and `*`: the primitive integers and floats.
    pub trait Semiring: Sealed { }

    /// Semirings that also have `-` and negation, so no unsigned integers.
    pub trait Ring: Semiring { }

    /// `f32` and `f64`.
    ///
    /// `Complex` is built out of these rather than being one of them.
    pub trait Real: Ring { }
}

gen_each!{
    @{semiring}
    impl_semiring!({$X:ty}) => {
        impl sealed::Sealed for $X { }
        impl Semiring for $X { }
    };
}

gen_each!{
    @{ring}
    impl_ring!({$X:ty}) => {
        impl Ring for $X { }
    };
}

gen_each!{
    @{real}
    impl_real!({$X:ty}) => {
        impl Real for $X { }
    };
}

pub(crate) mod internal {
    use std::fmt::Debug;
    use std::iter::{Sum, Product};
    use std::ops::{Add, Sub, Mul, Div, Neg};
    use num_traits::{Zero, One};

    use super::{Semiring, Ring, Real};

    /// What generic code may do with a `Semiring`.
    pub trait PrimitiveSemiring
        : Semiring + Copy + Default + Debug + PartialOrd
        + Add<Output=Self> + Mul<Output=Self>
        + Zero + One + Sum + Product
    {
        #[inline(always)]
        fn two() -> Self { Self::one() + Self::one() }
    }

    impl<X> PrimitiveSemiring for X
    where
        X: Semiring + Copy + Default + Debug + PartialOrd,
        X: Add<Output=X> + Mul<Output=X>,
        X: Zero + One + Sum + Product,
    { }

    pub trait PrimitiveRing: PrimitiveSemiring + Ring + Sub<Output=Self> + Neg<Output=Self> { }

    impl<X> PrimitiveRing for X
    where X: PrimitiveSemiring + Ring + Sub<Output=X> + Neg<Output=X>,
    { }

    /// The float functions used by the vector, matrix and complex methods.
    pub trait PrimitiveFloat: PrimitiveRing + Real + Div<Output=Self> + rand::Rand {
        fn sqrt(self) -> Self;
        fn min(self, b: Self) -> Self;
        fn max(self, b: Self) -> Self;
        fn acos(self) -> Self;
        fn atan2(self, x: Self) -> Self;
        fn sin_cos(self) -> (Self, Self);

        /// Uniform on `[lo, hi)`.
        fn uniform_with(rng: impl rand::Rng, range: (Self, Self)) -> Self;
    }

    gen_each!{
        @{real}
        impl_primitive_float!({$X:ty}) => {
            impl PrimitiveFloat for $X {
                #[inline(always)] fn sqrt(self) -> $X { self.sqrt() }
                #[inline(always)] fn min(self, b: $X) -> $X { self.min(b) }
                #[inline(always)] fn max(self, b: $X) -> $X { self.max(b) }
                #[inline(always)] fn acos(self) -> $X { self.acos() }
                #[inline(always)] fn atan2(self, x: $X) -> $X { self.atan2(x) }
                #[inline(always)] fn sin_cos(self) -> ($X, $X) { self.sin_cos() }

                #[inline]
                fn uniform_with(mut rng: impl rand::Rng, (lo, hi): ($X, $X)) -> $X {
                    let t: $X = rng.gen();
                    lo + (hi - lo) * t
                }
            }
        };
    }
}
