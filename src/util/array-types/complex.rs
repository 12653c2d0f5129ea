use crate::traits::{Semiring, Ring, Real};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::errors::DomainError;
use crate::types::*;
use num_traits::{Zero, One};

/// Magnitude of a complex number.
#[inline(always)]
pub fn abs<X: Real>(c: &Complex<X>) -> X
where X: PrimitiveFloat,
{ c.norm() }

/// Phase of a complex number, in `(-pi, pi]`.
#[inline(always)]
pub fn phase<X: Real>(c: &Complex<X>) -> X
where X: PrimitiveFloat,
{ c.phase() }

impl<X> Complex<X> {
    #[inline(always)]
    pub const fn new(re: X, im: X) -> Self
    { Complex(Vector([re, im])) }

    #[inline(always)]
    pub fn re(&self) -> X
    where X: Copy,
    { self[0] }

    #[inline(always)]
    pub fn im(&self) -> X
    where X: Copy,
    { self[1] }

    /// Complex conjugate.
    ///
    /// This is also what `!c` computes.
    #[inline]
    pub fn conj(&self) -> Self
    where X: Ring + PrimitiveRing,
    { Complex::new(self[0], -self[1]) }

    /// Squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> X
    where X: Semiring + PrimitiveSemiring,
    { self.0.sqnorm() }

    #[inline(always)]
    pub fn norm(&self) -> X
    where X: Real + PrimitiveFloat,
    { self.0.norm() }

    /// The angle `atan2(im, re)`.
    #[inline(always)]
    pub fn phase(&self) -> X
    where X: Real + PrimitiveFloat,
    { self[1].atan2(self[0]) }

    #[inline]
    pub fn from_polar(r: X, theta: X) -> Self
    where X: Real + PrimitiveFloat,
    {
        let (sin, cos) = theta.sin_cos();
        Complex::new(r * cos, r * sin)
    }

    /// Multiplicative inverse.
    ///
    /// # Panics
    ///
    /// Panics on zero. Use `checked_div` to get a `Result`.
    #[inline]
    pub fn recip(&self) -> Self
    where X: Real + PrimitiveFloat,
    { Self::one() / self }

    /// Divide by another complex number, reporting division by zero as an error
    /// instead of panicking.
    pub fn checked_div(&self, other: &Self) -> Result<Self, DomainError>
    where X: Real + PrimitiveFloat,
    {
        let denom = other.sqnorm();
        if denom == X::zero() {
            return Err(DomainError::DivisionByZero);
        }
        let numer = self * other.conj();
        Ok(Complex::new(numer[0] / denom, numer[1] / denom))
    }
}

impl<X: Semiring> Zero for Complex<X>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Complex(Zero::zero()) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.0.is_zero() }
}

impl<X: Ring> One for Complex<X>
where X: PrimitiveRing,
{
    #[inline]
    fn one() -> Self
    { Complex::new(X::one(), X::zero()) }
}

impl<X: Semiring> std::iter::Sum for Complex<X>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=Complex<X>>>(iter: I) -> Self {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a, X: Semiring> std::iter::Sum<&'a Complex<X>> for Complex<X>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=&'a Complex<X>>>(iter: I) -> Self {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}
