//! Small fixed-size matrix types, compatible with `V2`/`V3`/`V4`
//!
//! Matrices are written and read in a row-based formalism (literals are arrays
//! of rows, `m[(r, c)]` is row `r`), but are stored as an array of columns.
//! The only place the storage order leaks out is `cols()`.

use crate::traits::{Semiring, Ring, Real};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::errors::DomainError;
use crate::types::*;
use num_traits::{Zero, One};

// ---------------------------------------------------------------------------
// ------------------------------ PUBLIC API ---------------------------------

/// Construct a matrix from a function on indices `(row, col)`.
///
/// The shape of the matrix will be inferred solely from how it
/// is used.  There is also a static method form of this for
/// easily supplying a type hint. (e.g. `M33::from_fn`)
#[inline(always)]
pub fn from_fn<X, F, const M: usize, const N: usize>(mut f: F) -> Matrix<X, M, N>
where F: FnMut(usize, usize) -> X,
{ Matrix(std::array::from_fn(|c| Vector(std::array::from_fn(|r| f(r, c))))) }

/// Construct a matrix from a 2D array (of rows).
///
/// This is intended to be used in places where an array of known
/// shape already exists, and needs to be wrapped into a matrix.
/// The signature is such that type inference will work in the
/// forward direction (deciding the output Matrix shape from
/// the input array).
#[inline(always)]
pub fn from_array<X: Copy, const M: usize, const N: usize>(rows: [[X; N]; M]) -> Matrix<X, M, N>
{ from_fn(|r, c| rows[r][c]) }

/// Construct an identity matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn eye<M: One + IsMatrix>() -> M
{ One::one() }

/// Construct a zero matrix (using type inference).
///
/// This is also available as a static method on the matrix types.
#[inline(always)]
pub fn zero<M: Zero + IsMatrix>() -> M
{ Zero::zero() }

/// Matrix inverse.
#[inline(always)]
pub fn inv<X: Real, const N: usize>(m: &Matrix<X, N, N>) -> Result<Matrix<X, N, N>, DomainError>
where X: PrimitiveFloat,
{ m.inv() }

impl<X, const M: usize, const N: usize> Matrix<X, M, N> {
    /// Construct from an array of rows.
    ///
    /// ```
    /// # use geodesy_array_types::{Matrix, V3};
    /// let m = Matrix::new([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(m.row(1), V3([4, 5, 6]));
    /// ```
    #[inline(always)]
    pub fn new(rows: [[X; N]; M]) -> Self
    where X: Copy,
    { from_array(rows) }

    /// Construct from an array of row vectors.
    #[inline]
    pub fn from_rows(rows: [Vector<X, N>; M]) -> Self
    where X: Copy,
    { from_fn(|r, c| rows[r][c]) }

    /// Construct from an array of column vectors.
    #[inline(always)]
    pub fn from_cols(cols: [Vector<X, M>; N]) -> Self
    { Matrix(cols) }

    /// Construct a matrix from a function on indices `(row, col)`.
    ///
    /// This is also available as the free function `mat::from_fn`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn from_fn<F>(f: F) -> Self
    where F: FnMut(usize, usize) -> X,
    { from_fn(f) }

    /// Construct the zero matrix.
    ///
    /// This is also available as the free function `mat::zero`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn zero() -> Self
    where Self: Zero,
    { Zero::zero() }

    /// Number of rows.
    #[inline(always)]
    pub const fn num_rows() -> usize
    { M }

    /// Number of columns.
    #[inline(always)]
    pub const fn num_cols() -> usize
    { N }

    /// Copy out a row.
    ///
    /// # Panics
    ///
    /// Panics if `r >= M`.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<X, N>
    where X: Copy,
    {
        assert!(r < M, "row {} out of range for a matrix with {} rows", r, M);
        crate::vee::from_fn(|c| self[(r, c)])
    }

    /// Copy out a column.
    ///
    /// # Panics
    ///
    /// Panics if `c >= N`.
    #[inline(always)]
    pub fn col(&self, c: usize) -> Vector<X, M>
    where X: Copy,
    { self.0[c] }

    /// Borrow the columns.
    #[inline(always)]
    pub fn cols(&self) -> &[Vector<X, M>; N]
    { &self.0 }

    /// Unwrap into the columns.
    #[inline(always)]
    pub fn into_cols(self) -> [Vector<X, M>; N]
    { self.0 }

    /// Copy out all of the rows.
    #[inline]
    pub fn to_rows(&self) -> [Vector<X, N>; M]
    where X: Copy,
    { std::array::from_fn(|r| self.row(r)) }

    /// Copy into a plain array of rows, the inverse of `Matrix::new`.
    #[inline]
    pub fn to_array(&self) -> [[X; N]; M]
    where X: Copy,
    { std::array::from_fn(|r| self.row(r).0) }

    /// Matrix transpose. (does not conjugate)
    #[inline]
    pub fn t(&self) -> Matrix<X, N, M>
    where X: Copy,
    { from_fn(|r, c| self[(c, r)]) }

    /// Map each scalar element of a matrix.
    #[inline]
    pub fn map<B, F>(self, mut f: F) -> Matrix<B, M, N>
    where F: FnMut(X) -> B,
    { Matrix(self.0.map(|col| col.map(&mut f))) }
}

impl<X, const N: usize> Matrix<X, N, N> {
    /// Construct the identity matrix.
    ///
    /// This is also available as the free function `mat::eye`;
    /// this static method just provides an easy way to supply a type hint.
    #[inline(always)]
    pub fn eye() -> Self
    where Self: One,
    { One::one() }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> X
    where X: Semiring + PrimitiveSemiring,
    { (0..N).map(|i| self[(i, i)]).sum() }

    /// Matrix determinant, by cofactor expansion along the rows.
    ///
    /// This is exact for integer scalars, but costs `O(N!)`;
    /// it is meant for the small matrices this crate is about.
    #[inline]
    pub fn det(&self) -> X
    where X: Ring + PrimitiveRing,
    { minor_det(self, 0, 0) }

    /// Signed minor obtained by deleting row `r` and column `c`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn cofactor(&self, r: usize, c: usize) -> X
    where X: Ring + PrimitiveRing,
    {
        assert!(r < N && c < N, "cofactor ({}, {}) out of range for a {}x{} matrix", r, c, N, N);
        let minor = minor_det(self, bit(r), bit(c));
        match (r + c) % 2 {
            0 => minor,
            _ => -minor,
        }
    }

    /// Transpose of the cofactor matrix.
    ///
    /// `m * m.adjugate() == m.det() * I` for every square `m`.
    #[inline]
    pub fn adjugate(&self) -> Self
    where X: Ring + PrimitiveRing,
    { from_fn(|r, c| self.cofactor(c, r)) }

    /// Matrix inverse, or `DomainError::SingularMatrix` if the determinant is zero.
    ///
    /// This is also available as the free function `mat::inv`.
    pub fn inv(&self) -> Result<Self, DomainError>
    where X: Real + PrimitiveFloat,
    {
        let det = self.det();
        if det == X::zero() {
            return Err(DomainError::SingularMatrix);
        }
        Ok(self.adjugate() / det)
    }
}

// -------------------------- END PUBLIC API ---------------------------------
// The rest is implementation and boiler boiler boiiiiler boiilerplaaaaate
// ---------------------------------------------------------------------------

#[inline(always)]
fn bit(i: usize) -> u64 { 1 << i }

// Determinant of the submatrix that excludes the rows and columns whose bits
// are set, expanding along the first remaining row.
fn minor_det<X: Ring, const N: usize>(m: &Matrix<X, N, N>, rows_out: u64, cols_out: u64) -> X
where X: PrimitiveRing,
{
    assert!(N <= 64, "determinant is only implemented for N <= 64");

    let r = match (0..N).find(|&r| rows_out & bit(r) == 0) {
        Some(r) => r,
        None => return X::one(),
    };

    let mut sum = X::zero();
    let mut positive = true;
    for c in (0..N).filter(|&c| cols_out & bit(c) == 0) {
        let elem = m[(r, c)];
        if elem != X::zero() {
            let term = elem * minor_det(m, rows_out | bit(r), cols_out | bit(c));
            sum = match positive {
                true => sum + term,
                false => sum - term,
            };
        }
        positive = !positive;
    }
    sum
}

/// Implementation detail of some free functions that defer to external traits.
///
/// > **_Fuggedaboudit._**
///
/// Its purpose is to prevent those functions from producing non-matrix types.
pub trait IsMatrix: Sized { }

impl<X, const M: usize, const N: usize> IsMatrix for Matrix<X, M, N> { }

// ---------------------------------------------------------------------------

impl<X: Semiring, const M: usize, const N: usize> Zero for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn zero() -> Self
    { Matrix([Vector([X::zero(); M]); N]) }

    #[inline]
    fn is_zero(&self) -> bool
    { self.0.iter().all(|col| col.iter().all(|x| x.is_zero())) }
}

impl<X: Semiring, const N: usize> One for Matrix<X, N, N>
where X: PrimitiveSemiring,
{
    #[inline]
    fn one() -> Self
    { from_fn(|r, c| eye_element(r, c)) }

    #[inline]
    fn is_one(&self) -> bool
    { (0..N).all(|r| (0..N).all(|c| self[(r, c)] == eye_element(r, c))) }
}

#[inline(always)]
fn eye_element<X: Zero + One>(r: usize, c: usize) -> X {
    match r == c {
        true => X::one(),
        false => X::zero(),
    }
}

impl<X: Semiring, const M: usize, const N: usize> std::iter::Sum for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=Matrix<X, M, N>>>(iter: I) -> Self {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

impl<'a, X: Semiring, const M: usize, const N: usize> std::iter::Sum<&'a Matrix<X, M, N>> for Matrix<X, M, N>
where X: PrimitiveSemiring,
{
    fn sum<I: Iterator<Item=&'a Matrix<X, M, N>>>(iter: I) -> Self {
        iter.fold(Zero::zero(), |a, b| a + b)
    }
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_eye() {
        assert_eq!(from_array([[0, 0], [0, 0]]), M22::<i32>::zero());
        assert_eq!(from_array([[1, 0], [0, 1]]), M22::<i32>::eye());
        assert_eq!(from_array([[0, 0, 0], [0, 0, 0], [0, 0, 0]]), M33::<i32>::zero());
        assert_eq!(from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1]]), M33::<i32>::eye());
        assert_eq!(from_array([[1, 0, 0, 0], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]]), eye::<M44<i32>>());
        assert!(from_array([[0, 0], [0, 0]]).is_zero());
        assert!(!from_array([[0, 1], [0, 0]]).is_zero());
        assert!(from_array([[1, 0], [0, 1]]).is_one());
        assert!(!from_array([[2, 0], [0, 1]]).is_one());
        assert!(!from_array([[1, -1], [0, 1]]).is_one());
    }

    #[test]
    fn storage_is_column_major() {
        let m = Matrix::new([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m.cols(), &[V2([1, 4]), V2([2, 5]), V2([3, 6])]);
        assert_eq!(m.col(1), V2([2, 5]));
        assert_eq!(Matrix::from_cols(m.into_cols()), m);
        assert_eq!(m.into_cols(), *m.cols());
        assert_eq!(m.to_rows(), [V3([1, 2, 3]), V3([4, 5, 6])]);
        assert_eq!(m.to_array(), [[1, 2, 3], [4, 5, 6]]);

        assert_eq!(m, Matrix::from_rows([V3([1, 2, 3]), V3([4, 5, 6])]));
        assert_eq!(m, Matrix::from_cols([V2([1, 4]), V2([2, 5]), V2([3, 6])]));
        assert_eq!(m, Matrix::from_fn(|r, c| (3 * r + c + 1) as i32));
        assert_eq!(m.t(), Matrix::new([[1, 4], [2, 5], [3, 6]]));
        assert_eq!(Matrix::<i32, 2, 3>::num_rows(), 2);
        assert_eq!(Matrix::<i32, 2, 3>::num_cols(), 3);
    }

    #[test]
    fn index_mut_writes_logical_position() {
        let mut m = M22::<i32>::zero();
        m[(0, 1)] = 7;
        assert_eq!(m.to_array(), [[0, 7], [0, 0]]);
        assert_eq!(m.col(1), V2([7, 0]));
    }

    #[test]
    fn map_and_sum() {
        let m = M22::<i32>::new([[1, 2], [3, 4]]);
        assert_eq!(m.map(|x| x * 2), m + m);
        assert_eq!(vec![m, m, m].into_iter().sum::<M22<i32>>(), m * 3);
        assert_eq!(m.trace(), 5);
    }

    #[test]
    fn test_det() {
        assert_eq!(M22::<i32>::new([[1, 2], [3, 4]]).det(), -2);
        assert_eq!(M33::<i32>::new([[1, 2, 4], [5, 2, 1], [3, 6, 3]]).det(), 72);
        assert_eq!(Matrix::<i32, 1, 1>::new([[-7]]).det(), -7);

        let a = M44::<i32>::new([
            [2, -1, 0, 1],
            [1, 3, -2, 0],
            [0, 2, 4, -1],
            [1, -1, 1, 2],
        ]);
        assert_eq!(a.det(), 55);
        assert_eq!(a.t().det(), 55);

        let a = M44::<f64>::new([
            [2.0, -1.0, 0.0, 1.0],
            [1.0, 3.0, -2.0, 0.0],
            [0.0, 2.0, 4.0, -1.0],
            [1.0, -1.0, 1.0, 2.0],
        ]);
        assert_close!(abs=1e-12, 55.0, a.det());

        // rows in arithmetic progression are linearly dependent
        let m = M44::<i32>::from_fn(|r, c| (4 * r + c + 1) as i32);
        assert_eq!(m.det(), 0);
    }

    #[test]
    fn det_matches_expansion_of_3x3() {
        for _ in 0..10 {
            let m = M33::<f64>::from_fn(|_, _| ::rand::random::<f64>() - 0.5);
            let [
                [a0, a1, a2],
                [b0, b1, b2],
                [c0, c1, c2],
            ] = m.to_array();
            let expected = 0.0
                + a0 * b1 * c2 + a1 * b2 * c0 + a2 * b0 * c1
                - a0 * b2 * c1 - a1 * b0 * c2 - a2 * b1 * c0;
            assert_close!(abs=1e-12, expected, m.det());
        }
    }

    #[test]
    fn adjugate_identity() {
        let m = M33::<i32>::new([[1, 2, 4], [5, 2, 1], [3, 6, 3]]);
        assert_eq!(&m * &m.adjugate(), M33::<i32>::eye() * m.det());
        assert_eq!(m.cofactor(0, 0), 0);
        assert_eq!(m.cofactor(0, 1), -12);
    }

    #[test]
    fn test_inverse_2() {
        let actual = inv(&from_array([[7., 2.], [-11., 4.]])).unwrap();
        let expected = from_array([
            [ 2./25., -1./25.],
            [11./50.,  7./50.],
        ]);

        assert_close!(abs=1e-12, expected.to_array(), actual.to_array());
    }

    #[test]
    fn test_inverse_3() {
        let actual = inv(&from_array([
            [1., 2., 4.],
            [5., 2., 1.],
            [3., 6., 3.],
        ])).unwrap();

        let expected = from_array([
            [ 0./1.,  1./4., -1./12.],
            [-1./6., -1./8., 19./72.],
            [ 1./3.,  0./1., -1./9. ],
        ]);

        assert_close!(abs=1e-12, expected.to_array(), actual.to_array());
    }

    #[test]
    fn test_inverse_4() {
        let a = M44::<f64>::new([
            [2.0, -1.0, 0.0, 1.0],
            [1.0, 3.0, -2.0, 0.0],
            [0.0, 2.0, 4.0, -1.0],
            [1.0, -1.0, 1.0, 2.0],
        ]);
        let inv_a = a.inv().unwrap();
        assert_close!(abs=1e-12, M44::<f64>::eye().to_array(), (&inv_a * &a).to_array());
        assert_close!(abs=1e-12, M44::<f64>::eye().to_array(), (&a * &inv_a).to_array());
    }

    #[test]
    fn singular_inverse() {
        let m = M33::<f64>::from_fn(|r, c| (3 * r + c) as f64);
        assert_eq!(m.inv(), Err(DomainError::SingularMatrix));
        assert_eq!(inv(&M22::<f64>::zero()), Err(DomainError::SingularMatrix));
    }
}
