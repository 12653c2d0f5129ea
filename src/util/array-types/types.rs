/* ************************************************************************ **
** This file is part of geodesy-math, and is licensed under EITHER the MIT  **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::fmt;

// ---------------------------------------------------------------------------

/// An N-dimensional vector with operations for linear algebra.
///
/// Construct it from a literal array, as in `V3([1.0, 2.0, 3.0])`.
/// Component access goes through `Deref<Target=[X; N]>`, so `v[i]`
/// and all slice methods work as they do on the backing array.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<X, const N: usize>(pub [X; N]);

/// A 2-dimensional vector.
pub type V2<X=f64> = Vector<X, 2>;
/// A 3-dimensional vector.
pub type V3<X=f64> = Vector<X, 3>;
/// A 4-dimensional vector.
pub type V4<X=f64> = Vector<X, 4>;

// Type aliases live only in the type namespace, so `V3([..])` would not
// resolve as a tuple-struct constructor without these.
// (patterns still have to be written as `Vector([..])`)

/// Construct a `V2` from its components.
#[allow(non_snake_case)]
#[inline(always)]
pub const fn V2<X>(arr: [X; 2]) -> V2<X> { Vector(arr) }

/// Construct a `V3` from its components.
#[allow(non_snake_case)]
#[inline(always)]
pub const fn V3<X>(arr: [X; 3]) -> V3<X> { Vector(arr) }

/// Construct a `V4` from its components.
#[allow(non_snake_case)]
#[inline(always)]
pub const fn V4<X>(arr: [X; 4]) -> V4<X> { Vector(arr) }

// ---------------------------------------------------------------------------

/// A dense matrix with M rows and N columns.
///
/// Storage is column-major: the matrix holds `N` column vectors of length `M`.
/// Every constructor that takes scalars takes them in row-major order
/// (an array of rows), so that matrix literals read the way they are
/// written on paper:
///
/// ```
/// # use geodesy_array_types::M22;
/// let m = M22::new([
///     [1.0, 2.0],
///     [3.0, 4.0],
/// ]);
/// assert_eq!(m[(1, 0)], 3.0);
/// assert_eq!(m.col(0).0, [1.0, 3.0]);
/// ```
///
/// The storage order is an implementation detail; `m[(r, c)]` always
/// produces the element at row `r` and column `c` of the literal.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Matrix<X, const M: usize, const N: usize>(pub(crate) [Vector<X, M>; N]);

/// A square dense 2x2 matrix.
pub type M22<X=f64> = Matrix<X, 2, 2>;
/// A square dense 3x3 matrix.
pub type M33<X=f64> = Matrix<X, 3, 3>;
/// A square dense 4x4 matrix.
pub type M44<X=f64> = Matrix<X, 4, 4>;

// ---------------------------------------------------------------------------

/// A complex number, laid out as `[re, im]`.
///
/// This is a distinct type from `V2` because its multiplication is
/// not elementwise.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Complex<X=f64>(pub V2<X>);

// ---------------------------------------------------------------------------
// Vectors behave generally like their backing array type.

pub type Iter<'a, X> = std::slice::Iter<'a, X>;
pub type IterMut<'a, X> = std::slice::IterMut<'a, X>;

impl<X, const N: usize> Deref for Vector<X, N> {
    type Target = [X; N];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &self.0 }
}

impl<X, const N: usize> DerefMut for Vector<X, N> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut self.0 }
}

// Fix a paper cut not solved by Deref, which is that many methods
// take `I: IntoIterator`.
impl<'a, X, const N: usize> IntoIterator for &'a Vector<X, N> {
    type Item = &'a X;
    type IntoIter = Iter<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter() }
}

impl<'a, X, const N: usize> IntoIterator for &'a mut Vector<X, N> {
    type Item = &'a mut X;
    type IntoIter = IterMut<'a, X>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { self.0.iter_mut() }
}

impl<X, const N: usize> IntoIterator for Vector<X, N> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, N>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter
    { IntoIterator::into_iter(self.0) }
}

impl<X, const N: usize> From<[X; N]> for Vector<X, N> {
    #[inline(always)]
    fn from(arr: [X; N]) -> Self
    { Vector(arr) }
}

impl<X, const N: usize> From<Vector<X, N>> for [X; N] {
    #[inline(always)]
    fn from(v: Vector<X, N>) -> Self
    { v.0 }
}

// [X; N] only implements Default up to N = 32, and not generically.
impl<X: Default, const N: usize> Default for Vector<X, N> {
    #[inline]
    fn default() -> Self
    { Vector(std::array::from_fn(|_| X::default())) }
}

impl<X: Default, const M: usize, const N: usize> Default for Matrix<X, M, N> {
    #[inline]
    fn default() -> Self
    { Matrix(std::array::from_fn(|_| Vector::default())) }
}

// ---------------------------------------------------------------------------
// Matrix element access.

impl<X, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<X, M, N> {
    type Output = X;

    #[inline(always)]
    fn index(&self, (r, c): (usize, usize)) -> &X
    { &self.0[c][r] }
}

impl<X, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<X, M, N> {
    #[inline(always)]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut X
    { &mut self.0[c][r] }
}

// ---------------------------------------------------------------------------
// Complex numbers index like `[re, im]`.

impl<X> Deref for Complex<X> {
    type Target = [X; 2];

    #[inline(always)]
    fn deref(&self) -> &Self::Target
    { &(self.0).0 }
}

impl<X> DerefMut for Complex<X> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Self::Target
    { &mut (self.0).0 }
}

impl<X> From<V2<X>> for Complex<X> {
    #[inline(always)]
    fn from(v: V2<X>) -> Self
    { Complex(v) }
}

impl<X> From<[X; 2]> for Complex<X> {
    #[inline(always)]
    fn from(arr: [X; 2]) -> Self
    { Complex(Vector(arr)) }
}

impl<X> From<(X, X)> for Complex<X> {
    #[inline(always)]
    fn from((re, im): (X, X)) -> Self
    { Complex(Vector([re, im])) }
}

impl<X> From<Complex<X>> for V2<X> {
    #[inline(always)]
    fn from(c: Complex<X>) -> Self
    { c.0 }
}

// ---------------------------------------------------------------------------

// forward the debug impl without a surrounding "Vector(...)", for somewhat
// selfish reasons (it makes the debug output valid JSON and Python for
// many types, significantly lowering the barrier to some common tasks
// during debugging)
impl<X: fmt::Debug, const N: usize> fmt::Debug for Vector<X, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&self.0, f) }
}

impl<X: fmt::Debug> fmt::Debug for Complex<X> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    { fmt::Debug::fmt(&(self.0).0, f) }
}

// Matrices debug-print as a list of rows, matching their constructor.
impl<X: fmt::Debug, const M: usize, const N: usize> fmt::Debug for Matrix<X, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for r in 0..M {
            list.entry(&RowDebug(self, r));
        }
        list.finish()
    }
}

struct RowDebug<'a, X, const M: usize, const N: usize>(&'a Matrix<X, M, N>, usize);
impl<'a, X: fmt::Debug, const M: usize, const N: usize> fmt::Debug for RowDebug<'a, X, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let RowDebug(m, r) = *self;
        f.debug_list().entries((0..N).map(|c| &m[(r, c)])).finish()
    }
}

// ---------------------------------------------------------------------------
