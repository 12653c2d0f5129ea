use std::ops::{Add, Sub, AddAssign, SubAssign, Neg, Not, BitXor};
use std::ops::{Mul, Div, MulAssign, DivAssign};
use std::fmt;
use crate::traits::{Semiring, Ring, Real};
use crate::traits::internal::{PrimitiveSemiring, PrimitiveRing, PrimitiveFloat};
use crate::errors::DomainError;

use super::*;

// ---------------------------------------------------------------------------
// vector-vector ops

// NOTE: Operator impls are deliberately between same-typed vectors,
//       rather than e.g. V3<T> and V3<U> where T: Add<U>.
//
//       The reason for this is that the having such generic bounds
//       tends to influence the design of the rest of the library
//       towards a design that is actually impossible to implement.
//
// NOTE: `vector * vector` is the dot product and `vector * scalar` is scaling.
//       Both impls can coexist because a vector is never a Semiring.
gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_v_v_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // vector + vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize> Add<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn add(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { vee::from_fn(|k| self[k] + other[k]) }
        }

        // vector - vector
        impl<$($lt_a)* $($lt_b)* X: Ring, const N: usize> Sub<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
          where X: PrimitiveRing,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn sub(self, other: $($ref_b)* Vector<X, N>) -> Self::Output
            { vee::from_fn(|k| self[k] - other[k]) }
        }

        // vector * vector  (dot product)
        impl<$($lt_a)* $($lt_b)* X: Semiring, const N: usize> Mul<$($ref_b)* Vector<X, N>> for $($ref_a)* Vector<X, N>
          where X: PrimitiveSemiring,
        {
            type Output = X;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<X, N>) -> X
            { (0..N).fold(X::zero(), |s, k| s + self[k] * other[k]) }
        }

        // vector ^ vector  (cross product, 3d only)
        impl<$($lt_a)* $($lt_b)* X: Ring> BitXor<$($ref_b)* V3<X>> for $($ref_a)* V3<X>
          where X: PrimitiveRing,
        {
            type Output = V3<X>;

            #[inline]
            fn bitxor(self, other: $($ref_b)* V3<X>) -> V3<X>
            { self.cross(&other) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector unary ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_unops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -vector
        impl<$($lt_a)* X: Ring, const N: usize> Neg for $($ref_a)* Vector<X, N>
          where X: PrimitiveRing,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { vee::from_fn(|k| -self[k]) }
        }
    }
}

// ---------------------------------------------------------------------------
// vector-scalar ops

// scalar `op` vector
gen_each!{
    // NOTE: the orphan rules prevent us from impl-ing these ops "for X" so
    //       we must generate a separate impl for each Semiring type rather than
    //       being generic over X: Semiring
    @{semiring}
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_scalar_v_ops!(
        {$X:ty}
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // scalar * vector
        impl<$($lt_a)* const N: usize> Mul<$($ref_a)* Vector<$X, N>> for $X {
            type Output = Vector<$X, N>;

            #[inline(always)]
            fn mul(self, vector: $($ref_a)* Vector<$X, N>) -> Self::Output
            { vector * self }
        }

        // scalar * matrix
        impl<$($lt_a)* const M: usize, const N: usize> Mul<$($ref_a)* Matrix<$X, M, N>> for $X {
            type Output = Matrix<$X, M, N>;

            #[inline(always)]
            fn mul(self, matrix: $($ref_a)* Matrix<$X, M, N>) -> Self::Output
            { matrix * self }
        }

        // scalar * complex
        impl<$($lt_a)*> Mul<$($ref_a)* Complex<$X>> for $X {
            type Output = Complex<$X>;

            #[inline(always)]
            fn mul(self, complex: $($ref_a)* Complex<$X>) -> Self::Output
            { complex * self }
        }
    }
}

// vector `op` scalar
gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_v_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // vector * scalar
        impl<$($lt_a)* X: Semiring, const N: usize> Mul<X> for $($ref_a)* Vector<X, N>
        where X: PrimitiveSemiring,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { vee::from_fn(|k| self[k] * scalar) }
        }

        // vector / scalar
        impl<$($lt_a)* X: Real, const N: usize> Div<X> for $($ref_a)* Vector<X, N>
        where X: PrimitiveFloat,
        {
            type Output = Vector<X, N>;

            /// # Panics
            ///
            /// Panics if `scalar` is zero. Use `Vector::checked_div` to get a `Result`.
            #[inline]
            fn div(self, scalar: X) -> Self::Output {
                assert!(scalar != X::zero(), "{}", DomainError::DivisionByZero);
                vee::from_fn(|k| self[k] / scalar)
            }
        }

        // No modulus, which hardly makes sense for vectors anyways
        // except for the special case of `% 1.0`.
    }
}

// ---------------------------------------------------------------------------
// assign ops (general)
//
// These are all defined in terms of the corresponding binary operator,
// so `a op= b` always produces exactly `a op b`.

macro_rules! impl_assign_ops {
    ([$($generics:tt)*] $Type:ty) => {
        // x += y;
        impl<$($generics)*, B> AddAssign<B> for $Type where for<'a> &'a Self: Add<B, Output=Self> {
            #[inline(always)]
            fn add_assign(&mut self, rhs: B)
            { *self = &*self + rhs; }
        }

        // x -= y;
        impl<$($generics)*, B> SubAssign<B> for $Type where for<'a> &'a Self: Sub<B, Output=Self> {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: B)
            { *self = &*self - rhs; }
        }

        // x *= scalar;
        // x *= matrix;   (when the product has the same shape)
        impl<$($generics)*, B> MulAssign<B> for $Type where for<'a> &'a Self: Mul<B, Output=Self> {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: B)
            { *self = &*self * rhs; }
        }

        // x /= scalar;
        impl<$($generics)*, B> DivAssign<B> for $Type where for<'a> &'a Self: Div<B, Output=Self> {
            #[inline(always)]
            fn div_assign(&mut self, rhs: B)
            { *self = &*self / rhs; }
        }
    };
}

impl_assign_ops!{ [X, const N: usize] Vector<X, N> }
impl_assign_ops!{ [X, const M: usize, const N: usize] Matrix<X, M, N> }
impl_assign_ops!{ [X] Complex<X> }

// ---------------------------------------------------------------------------
// matrix-matrix ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_m_m_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // matrix + matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const N: usize>
            Add<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn add(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output
            { mat::from_fn(|r, c| self[(r, c)] + other[(r, c)]) }
        }

        // matrix - matrix
        impl<$($lt_a)* $($lt_b)* X: Ring, const M: usize, const N: usize>
            Sub<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveRing,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn sub(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output
            { mat::from_fn(|r, c| self[(r, c)] - other[(r, c)]) }
        }

        // matrix * matrix
        //
        // The shared dimension K is what makes a mismatched product fail to type-check.
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const K: usize, const N: usize>
            Mul<$($ref_b)* Matrix<X, K, N>> for $($ref_a)* Matrix<X, M, K>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, K, N>) -> Self::Output {
                mat::from_fn(|r, c| {
                    (0..K).fold(X::zero(), |s, i| s + self[(r, i)] * other[(i, c)])
                })
            }
        }

        // matrix * column vector
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const N: usize>
            Mul<$($ref_b)* Vector<X, N>> for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<X, M>;

            #[inline]
            fn mul(self, other: $($ref_b)* Vector<X, N>) -> Self::Output {
                let matrix = self;
                let vector = other;
                vee::from_fn(|r| (0..N).fold(X::zero(), |s, i| s + matrix[(r, i)] * vector[i]))
            }
        }

        // row vector * matrix
        impl<$($lt_a)* $($lt_b)* X: Semiring, const M: usize, const N: usize>
            Mul<$($ref_b)* Matrix<X, M, N>> for $($ref_a)* Vector<X, M>
          where X: PrimitiveSemiring,
        {
            type Output = Vector<X, N>;

            #[inline]
            fn mul(self, other: $($ref_b)* Matrix<X, M, N>) -> Self::Output {
                let vector = self;
                let matrix = other;
                vee::from_fn(|c| (0..M).fold(X::zero(), |s, i| s + vector[i] * matrix[(i, c)]))
            }
        }
    }
}

// matrix unary ops, and matrix `op` scalar
gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_m_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -matrix
        impl<$($lt_a)* X: Ring, const M: usize, const N: usize> Neg for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveRing,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn neg(self) -> Self::Output
            { mat::from_fn(|r, c| -self[(r, c)]) }
        }

        // matrix * scalar
        impl<$($lt_a)* X: Semiring, const M: usize, const N: usize> Mul<X> for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveSemiring,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { mat::from_fn(|r, c| self[(r, c)] * scalar) }
        }

        // matrix / scalar
        impl<$($lt_a)* X: Real, const M: usize, const N: usize> Div<X> for $($ref_a)* Matrix<X, M, N>
          where X: PrimitiveFloat,
        {
            type Output = Matrix<X, M, N>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output {
                assert!(scalar != X::zero(), "{}", DomainError::DivisionByZero);
                mat::from_fn(|r, c| self[(r, c)] / scalar)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// complex ops

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    [ [(   ) (   )] [('b,) (&'b)] ]
    impl_c_c_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
        [ ($($lt_b:tt)*) ($($ref_b:tt)*) ]
    ) => {
        // complex + complex
        impl<$($lt_a)* $($lt_b)* X: Semiring> Add<$($ref_b)* Complex<X>> for $($ref_a)* Complex<X>
          where X: PrimitiveSemiring,
        {
            type Output = Complex<X>;

            #[inline]
            fn add(self, other: $($ref_b)* Complex<X>) -> Self::Output
            { Complex(self.0 + other.0) }
        }

        // complex - complex
        impl<$($lt_a)* $($lt_b)* X: Ring> Sub<$($ref_b)* Complex<X>> for $($ref_a)* Complex<X>
          where X: PrimitiveRing,
        {
            type Output = Complex<X>;

            #[inline]
            fn sub(self, other: $($ref_b)* Complex<X>) -> Self::Output
            { Complex(self.0 - other.0) }
        }

        // complex * complex
        impl<$($lt_a)* $($lt_b)* X: Ring> Mul<$($ref_b)* Complex<X>> for $($ref_a)* Complex<X>
          where X: PrimitiveRing,
        {
            type Output = Complex<X>;

            #[inline]
            fn mul(self, other: $($ref_b)* Complex<X>) -> Self::Output {
                let (a, b) = (self[0], self[1]);
                let (c, d) = (other[0], other[1]);
                Complex::new(a * c - b * d, a * d + b * c)
            }
        }

        // complex / complex
        impl<$($lt_a)* $($lt_b)* X: Real> Div<$($ref_b)* Complex<X>> for $($ref_a)* Complex<X>
          where X: PrimitiveFloat,
        {
            type Output = Complex<X>;

            /// # Panics
            ///
            /// Panics if `other` is zero. Use `Complex::checked_div` to get a `Result`.
            #[inline]
            fn div(self, other: $($ref_b)* Complex<X>) -> Self::Output {
                match self.checked_div(&other) {
                    Ok(quotient) => quotient,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    }
}

gen_each!{
    [ [(   ) (   )] [('a,) (&'a)] ]
    impl_c_unary_scalar_ops!(
        [ ($($lt_a:tt)*) ($($ref_a:tt)*) ]
    ) => {
        // -complex
        impl<$($lt_a)* X: Ring> Neg for $($ref_a)* Complex<X>
          where X: PrimitiveRing,
        {
            type Output = Complex<X>;

            #[inline]
            fn neg(self) -> Self::Output
            { Complex(-self.0) }
        }

        // !complex  (conjugate)
        impl<$($lt_a)* X: Ring> Not for $($ref_a)* Complex<X>
          where X: PrimitiveRing,
        {
            type Output = Complex<X>;

            #[inline]
            fn not(self) -> Self::Output
            { self.conj() }
        }

        // complex * scalar
        impl<$($lt_a)* X: Semiring> Mul<X> for $($ref_a)* Complex<X>
          where X: PrimitiveSemiring,
        {
            type Output = Complex<X>;

            #[inline]
            fn mul(self, scalar: X) -> Self::Output
            { Complex(self.0 * scalar) }
        }

        // complex / scalar
        impl<$($lt_a)* X: Real> Div<X> for $($ref_a)* Complex<X>
          where X: PrimitiveFloat,
        {
            type Output = Complex<X>;

            #[inline]
            fn div(self, scalar: X) -> Self::Output
            { Complex(self.0 / scalar) }
        }
    }
}

// ---------------------------------------------------------------------------

// fmt traits apply the format to each element for convenience.
gen_each!{
    [
        // Note: the inclusion of Display in this list is a necessary evil, because
        //       there's no other way to get output like `[1.0000, 0.3333]`,
        //       which is kind of, you know, THE motivating use-case.
        {Binary} {LowerExp} {LowerHex} {Display}
        {Octal} {UpperExp} {UpperHex}
    ]
    impl_fmt!(
        {$Format:ident}
    ) => {
        impl<X: fmt::$Format, const N: usize> fmt::$Format for Vector<X, N> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
            { fmt_list(f, self.iter(), fmt::$Format::fmt) }
        }

        impl<X: fmt::$Format> fmt::$Format for Complex<X> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
            { fmt_list(f, self.iter(), fmt::$Format::fmt) }
        }

        // matrices are formatted as a list of rows
        impl<X: fmt::$Format, const M: usize, const N: usize> fmt::$Format for Matrix<X, M, N> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt_list(f, 0..M, |&r, f| {
                    fmt_list(f, (0..N).map(|c| &self[(r, c)]), fmt::$Format::fmt)
                })
            }
        }
    }
}

fn fmt_list<T, I, F>(f: &mut fmt::Formatter, items: I, mut fmt_item: F) -> fmt::Result
where
    I: IntoIterator<Item=T>,
    F: FnMut(&T, &mut fmt::Formatter) -> fmt::Result,
{
    write!(f, "[")?;
    for (i, x) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        fmt_item(&x, f)?;
    }
    write!(f, "]")?;
    Ok(())
}

// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_arith() {
        let a = V3([2.0f32, 1.0, -3.0]);
        let b = V3([0.0f32, -2.09, 9.987]);
        let s = 3.14159f32;

        assert_close!(abs=1e-5, [-2.0, -1.0, 3.0], (-a).0);
        assert_close!(abs=1e-5, [2.0, -1.09, 6.987], (a + b).0);
        assert_close!(abs=1e-5, [2.0, 3.09, -12.987], (a - b).0);
        assert_close!(abs=1e-5, [2.0 * s, 1.0 * s, -3.0 * s], (a * s).0);
        assert_close!(abs=1e-5, [2.0 / s, 1.0 / s, -3.0 / s], (a / s).0);
        assert_eq!(a * s, s * a);
        assert_eq!(&a + &b, a + b);
    }

    #[test]
    fn assign_ops_match_binary_ops() {
        let a = V3([2.0f32, 1.0, -3.0]);
        let b = V3([0.0f32, -2.09, 9.987]);
        let s = 3.14159f32;

        let mut v = a; v += b; assert_eq!(v, a + b);
        let mut v = a; v += &b; assert_eq!(v, a + b);
        let mut v = a; v -= b; assert_eq!(v, a - b);
        let mut v = a; v *= s; assert_eq!(v, a * s);
        let mut v = a; v /= s; assert_eq!(v, a / s);
    }

    #[test]
    fn dot_and_cross_operators() {
        let a = V3([2.0f32, 1.0, -3.0]);
        let b = V3([0.0f32, -2.09, 9.987]);

        let dot: f32 = a * b;
        assert_close!(abs=1e-5, 2.0*0.0 + 1.0*(-2.09) + (-3.0)*9.987, dot);
        assert_eq!(a * b, b * a);
        assert_eq!(a * b, vee::dot(&a, &b));

        assert_close!(abs=1e-4, [3.717, -19.974, -4.18], (a ^ b).0);
        assert_eq!(a ^ b, a.cross(&b));
        assert_eq!(a ^ b, -(b ^ a));
        assert_eq!(V3([1, 0, 0]) ^ V3([0, 1, 0]), V3([0, 0, 1]));
    }

    #[test]
    #[should_panic(expected = "division by a zero scalar")]
    fn vec_div_by_zero_panics() {
        let _ = V2([1.0, 2.0]) / 0.0;
    }

    #[test]
    fn prop_add_sub_mul_div_inverses() {
        for _ in 0..10 {
            let a: V4 = V4(::rand::random());
            let b: V4 = V4(::rand::random());
            let s = ::rand::random::<f64>() + 0.5;
            assert_close!(abs=1e-12, a.0, ((a + b) - b).0);
            assert_close!(abs=1e-12, a.0, ((a * s) / s).0);
            assert_eq!(a * b, b * a);
        }
    }

    #[test]
    fn mat_mat() {
        let eye2 = mat::from_array([[1, 0], [0, 1i32]]);
        let eye3 = mat::from_array([[1, 0, 0], [0, 1, 0], [0, 0, 1i32]]);

        let a = mat::from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);

        let b = mat::from_array([
            [1,  1],
            [1, -1],
            [0,  1],
        ]);

        let a_dot_b = mat::from_array([
            [3, 2],
            [9, 5],
        ]);

        assert_eq!(a, &eye2 * &a);
        assert_eq!(a, &a * &eye3);
        assert_eq!(a_dot_b, &a * &b);
        assert_eq!(a_dot_b, a * b);
    }

    #[test]
    fn mat_mat_4x4() {
        let a = M44::<f32>::new([
            [1.0f32, 0.0, 0.0, 1.0],
            [2.0, 1.0, -1.0, 2.0],
            [3.0, 2.0, 0.0, 3.0],
            [4.0, 3.0, 1.0, 4.0],
        ]);
        let b = M44::<f32>::new([
            [1.0f32, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let expected = M44::<f32>::new([
            [14.0f32, 16.0, 18.0, 20.0],
            [24.0, 28.0, 32.0, 36.0],
            [52.0, 60.0, 68.0, 76.0],
            [80.0, 92.0, 104.0, 116.0],
        ]);
        assert_eq!(expected, &a * &b);
    }

    #[test]
    fn mat_vec() {
        let m = mat::from_array([
            [1, 2, 3],
            [4, 5, 6],
        ]);
        assert_eq!(V2([1, 7]), &m * V3([4, -3, 1]));
        assert_eq!(V3([-8, -7, -6]), V2([4, -3]) * &m);

        // try with the other dimension longer so that we make sure the sums
        // are over the right indices
        let m = m.t();
        assert_eq!(V2([1, 7]), V3([4, -3, 1]) * &m);
        assert_eq!(V3([-8, -7, -6]), &m * V2([4, -3]));
    }

    #[test]
    fn mat_scalar_and_assign() {
        let a = M22::<f64>::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = M22::<f64>::new([[0.5, 0.0], [0.0, 0.5]]);
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!((a * 2.0) / 2.0, a);
        assert_eq!(-a + a, M22::<f64>::zero());

        let mut m = a; m *= &b; assert_eq!(m, &a * &b);
        let mut m = a; m += a; assert_eq!(m, a * 2.0);
        let mut m = a; m -= a; assert_eq!(m, M22::<f64>::zero());
        let mut m = a; m /= 4.0; assert_eq!(m, a / 4.0);
    }

    #[test]
    fn complex_ops() {
        let a = Complex::new(1.0f32, 2.0);
        let b = Complex::new(3.0f32, 4.0);

        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(b - a, Complex::new(2.0, 2.0));
        assert_eq!(a * b, Complex::new(-5.0, 10.0));
        assert_eq!(!a, Complex::new(1.0, -2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Complex::new(2.0, 4.0));
        assert_eq!(2.0f32 * a, a * 2.0);
        assert_close!(abs=1e-6, [1.0, 2.0], ((a * b) / b).0 .0);

        let mut c = a; c *= b; assert_eq!(c, a * b);
        let mut c = a; c += b; assert_eq!(c, a + b);
    }

    #[test]
    #[should_panic(expected = "division by a zero scalar")]
    fn complex_div_by_zero_panics() {
        let _ = Complex::new(1.0, 2.0) / Complex::new(0.0, 0.0);
    }

    #[test]
    fn formatting() {
        assert_eq!(format!("{}", V3([1, 2, 3])), "[1, 2, 3]");
        assert_eq!(format!("{:.2}", V2([1.0, 0.5])), "[1.00, 0.50]");
        assert_eq!(format!("{:?}", V2([1, 2])), "[1, 2]");
        assert_eq!(format!("{}", M22::<i32>::new([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
        assert_eq!(format!("{:?}", M22::<i32>::new([[1, 2], [3, 4]])), "[[1, 2], [3, 4]]");
        assert_eq!(format!("{}", Complex::new(1, -2)), "[1, -2]");
    }
}
