/* ************************************************************************ **
** This file is part of geodesy-math, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::traits::{Semiring, Ring, Real};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::errors::DomainError;

use super::types::*;

use num_traits::Zero;
use std::convert::TryFrom;

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a fixed-size vector from a function on indices.
///
/// The size is inferred from how the result is used.
#[inline(always)]
pub fn from_fn<X, F, const N: usize>(f: F) -> Vector<X, N>
where F: FnMut(usize) -> X,
{ Vector(std::array::from_fn(f)) }

/// Construct a zero vector (using type inference).
#[inline(always)]
pub fn zero<V: Zero + IsV>() -> V
{ Zero::zero() }

impl<X, const N: usize> Vector<X, N> {
    /// Get a zero vector.
    ///
    /// This is also available as the free function `vee::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    where Self: Zero,
    { Zero::zero() }

    /// Construct a fixed-size vector from a function on indices.
    ///
    /// This is also available as the free function `vee::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize) -> X,
    { from_fn(f) }

    /// The number of components.
    #[inline(always)]
    pub const fn dim() -> usize
    { N }

    /// Get the inner product of two vectors.
    ///
    /// This is also what `a * b` computes when both operands are vectors.
    /// It is recommended you write this as `V3::dot(a, b)`, rather than `a.dot(b)`.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> ScalarT<Self>
    where Self: Dot,
    { Dot::dot(self, other) }

    /// Get the vector's squared magnitude.
    #[inline(always)]
    pub fn sqnorm(&self) -> ScalarT<Self>
    where Self: Dot,
    { Dot::dot(self, self) }

    /// Get the vector's magnitude.
    #[inline(always)]
    pub fn norm(&self) -> X
    where X: Real + PrimitiveFloat,
    { self.sqnorm().sqrt() }

    /// Normalize the vector.
    ///
    /// # Panics
    ///
    /// Panics on the zero vector. See `checked_div`.
    #[inline(always)]
    pub fn unit(&self) -> Self
    where X: Real + PrimitiveFloat,
    { self / self.norm() }

    /// Divide by a scalar, reporting division by zero as an error instead of panicking.
    #[inline]
    pub fn checked_div(&self, scalar: X) -> Result<Self, DomainError>
    where X: Real + PrimitiveFloat,
    {
        if scalar == X::zero() {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Self::from_fn(|k| self[k] / scalar))
    }

    /// Get a basis vector.
    #[inline(always)]
    pub fn axis_unit(i: usize) -> Self
    where X: Semiring + PrimitiveSemiring,
    {
        let mut v = Self::zero();
        *v.get_mut(i)
            .unwrap_or_else(|| panic!("Invalid axis for {}d vector: {}", N, i)) = X::one();
        v
    }

    /// Get the shortest angle (as a value in `[0, pi]`) between this vector and another.
    #[inline(always)]
    pub fn angle_to(&self, other: &Self) -> X
    where X: Real + PrimitiveFloat,
    {
        let arg = dot(self, other) / X::sqrt(self.sqnorm() * other.sqnorm());
        X::acos(arg.min(X::one()).max(-X::one()))
    }

    /// Perform elementwise multiplication, or multiplication of a vector by a diagonal
    /// matrix.
    #[inline(always)]
    pub fn mul_diag(&self, other: &Self) -> Self
    where X: Semiring + PrimitiveSemiring,
    { Self::from_fn(|i| self[i] * other[i]) }

    /// Get the part of the vector that is parallel to `r`.
    #[inline]
    pub fn par(&self, r: &Self) -> Self
    where X: Real + PrimitiveFloat,
    { r * (dot(self, r) / dot(r, r)) }

    /// Get the part of the vector that is perpendicular to `r`.
    ///
    /// Be aware that chained calls to `perp` can have **spectacularly bad**
    /// numerical stability issues; you cannot trust that `c.perp(a).perp(b)`
    /// is even *remotely* orthogonal to `a` unless `b` is orthogonal to `a`.
    /// (for 3d vectors, try `c.par(a.cross(b))` instead.)
    #[inline]
    pub fn perp(&self, r: &Self) -> Self
    where X: Real + PrimitiveFloat,
    { self - self.par(r) }

    /// Apply a function to each element.
    #[inline]
    pub fn map<B, F>(self, f: F) -> Vector<B, N>
    where F: FnMut(X) -> B,
    { Vector(self.0.map(f)) }

    /// Apply a fallible function to each element, with short-circuiting.
    #[inline]
    pub fn try_map<E, B, F>(self, f: F) -> Result<Vector<B, N>, E>
    where F: FnMut(X) -> Result<B, E>,
    { collect_exact(IntoIterator::into_iter(self.0).map(f)) }

    /// Construct a fixed-size vector from a fallible function on indices,
    /// stopping at the first error.
    #[inline]
    pub fn try_from_fn<E, F>(f: F) -> Result<Self, E>
    where F: FnMut(usize) -> Result<X, E>,
    { collect_exact((0..N).map(f)) }

    /// Generate a randomly-oriented unit vector whose direction comes from a uniform
    /// distribution.
    #[inline(always)]
    pub fn random_unit() -> Self
    where Self: RandomUnit,
    { RandomUnit::random_unit() }

    /// Generate a randomly-oriented unit vector whose direction comes from a uniform
    /// distribution.
    #[inline(always)]
    pub fn random_unit_with(rng: impl rand::Rng) -> Self
    where Self: RandomUnit,
    { RandomUnit::random_unit_with(rng) }
}

impl<X: Ring> V3<X>
where X: PrimitiveRing
{
    /// Cross-product. Only defined on 3-dimensional vectors.
    ///
    /// This is also what `a ^ b` computes.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Vector([
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        ])
    }
}

/// Inner product of vectors.
///
/// This is basically just `Vector::dot` as a free function,
/// because everyone loves symmetry.
#[inline(always)]
pub fn dot<V>(a: &V, b: &V) -> ScalarT<V>
where V: Dot,
{ Dot::dot(a, b) }

/// Element type of the vector.
pub type ScalarT<V> = <V as IsV>::Scalar;
/// Trait that provides associated types for `Vector`.
pub trait IsV {
    type Scalar;
}

impl<X, const N: usize> IsV for Vector<X, N>
{ type Scalar = X; }

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

// Gathers exactly N fallible items into a vector.
fn collect_exact<X, E, I, const N: usize>(iter: I) -> Result<Vector<X, N>, E>
where I: Iterator<Item=Result<X, E>>,
{
    let vec = iter.collect::<Result<Vec<X>, E>>()?;
    match <[X; N]>::try_from(vec) {
        Ok(arr) => Ok(Vector(arr)),
        Err(vec) => unreachable!("expected {} items, got {}", N, vec.len()),
    }
}

impl<X: Semiring, const N: usize> Zero for Vector<X, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Vector([X::zero(); N]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.iter().all(Zero::is_zero) }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `Vector::dot`.
///
/// > **_Fuggedaboudit._**
///
/// Without this, the free function `dot` could not be generic over different
/// kinds of vectors.
pub trait Dot: IsV {
    fn dot(&self, b: &Self) -> ScalarT<Self>;
}

impl<X: Semiring, const N: usize> Dot for Vector<X, N>
  where X: PrimitiveSemiring,
{
    #[inline]
    fn dot(&self, other: &Vector<X, N>) -> ScalarT<Self>
    { (0..N).fold(X::zero(), |s, i| s + self[i] * other[i]) }
}

// ---------------------------------------------------------------------------

/// Implementation detail of the inherent method `Vector::random_unit`.
///
/// > **_Fuggedaboudit._**
pub trait RandomUnit: IsV + Sized {
    #[inline]
    fn random_unit() -> Self
    { RandomUnit::random_unit_with(rand::thread_rng()) }

    fn random_unit_with(rng: impl rand::Rng) -> Self;
}

// http://mathworld.wolfram.com/CirclePointPicking.html
impl<X: Real> RandomUnit for V2<X>
where X: PrimitiveFloat,
{
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let denom = x1*x1 + x2*x2;
            if denom >= X::one() || denom == X::zero() {
                continue;
            }
            let x = (x1*x1 - x2*x2) / denom;
            let y = X::two()*x1*x2 / denom;
            return Vector([x, y]);
        }
    }
}

// http://mathworld.wolfram.com/SpherePointPicking.html
impl<X: Real> RandomUnit for V3<X>
where X: PrimitiveFloat,
{
    #[inline]
    fn random_unit_with(mut rng: impl rand::Rng) -> Self
    {
        loop {
            let x1 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let x2 = X::uniform_with(&mut rng, (-X::one(), X::one()));
            let sqsum = x1*x1 + x2*x2;
            if sqsum >= X::one() {
                continue;
            }
            let root = X::sqrt(X::one() - sqsum);
            let x = X::two() * x1 * root;
            let y = X::two() * x2 * root;
            let z = X::one() - X::two() * sqsum;
            return Vector([x, y, z]);
        }
    }
}

// ---------------------------------------------------------------------------

// stdlib integration

impl<X: Semiring, const N: usize> std::iter::Sum for Vector<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=Vector<X, N>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

impl<'a, X: Semiring, const N: usize> std::iter::Sum<&'a Vector<X, N>> for Vector<X, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=&'a Vector<X, N>>>(iter: I) -> Self {
        iter.fold(Vector::zero(), |a, b| a + b)
    }
}

// slice-of-array integration.
//
// This is what lets `&[V3]` be viewed as `&[f64]` through `.flat()`,
// and `&[f64]` be viewed as `&[V3]` through `.nest()`.
unsafe impl<X, const N: usize> slice_of_array::IsSliceomorphic for Vector<X, N> {
    type Element = X;
    const LEN: usize = N;
}

// ---------------------------------------------------------------------------
