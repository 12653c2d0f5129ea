//! Tolerance-based float assertions for tests.
//!
//! `assert_close!(abs=1e-8, a, b)` compares two floats, or two arrays of
//! them (nested to any depth), elementwise. `rel=` may be given as well as
//! or instead of `abs=`.

#[macro_use]
extern crate failure;

/// Relative tolerance used when the caller does not give one.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

#[macro_export]
macro_rules! assert_close {
    (abs=$abs:expr, rel=$rel:expr, $($rest:tt)+) => { $crate::__assert_close!{$abs, $rel, $($rest)+} };
    (rel=$rel:expr, abs=$abs:expr, $($rest:tt)+) => { $crate::__assert_close!{$abs, $rel, $($rest)+} };
    (abs=$abs:expr, $($rest:tt)+) => { $crate::__assert_close!{$abs, $crate::DEFAULT_REL_TOL, $($rest)+} };
    (rel=$rel:expr, $($rest:tt)+) => { $crate::__assert_close!{0.0, $rel, $($rest)+} };
    ($($rest:tt)+) => { $crate::__assert_close!{0.0, $crate::DEFAULT_REL_TOL, $($rest)+} };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __assert_close {
    ($abs:expr, $rel:expr, $a:expr, $b:expr $(,)?) => {{
        let tol = $crate::Tolerances { abs: $abs, rel: $rel };
        let (a, b) = ($a, $b);
        if let Err(e) = $crate::CheckClose::check_close(&a, &b, tol) {
            panic!(
                "not nearly equal! (abs={}, rel={})\n left: {:?}\nright: {:?}\n{}",
                tol.abs, tol.rel, a, b, e,
            );
        }
    }};
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

/// The first pair of elements that were not close.
#[derive(Debug, Fail, Clone, PartialEq)]
#[fail(display = "first mismatch: {} vs {}", left, right)]
pub struct CheckCloseError {
    pub left: f64,
    pub right: f64,
}

/// `a` and `b` are close if they are equal, or if both are finite and
/// differ by at most `abs`, or by at most `rel` times the larger magnitude.
pub fn is_close(a: f64, b: f64, Tolerances { abs, rel }: Tolerances) -> bool {
    assert!(abs >= 0.0 && rel >= 0.0, "negative tolerance");

    if a == b { return true; }
    if !(a.is_finite() && b.is_finite()) { return false; }

    let diff = (a - b).abs();
    diff <= abs || diff <= rel * a.abs().max(b.abs())
}

pub trait CheckClose {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError>;
}

// f32 is widened to f64, which is exact.
macro_rules! impl_float {
    ($($F:ty)*) => {$(
        impl CheckClose for $F {
            #[inline]
            fn check_close(&self, other: &$F, tol: Tolerances) -> Result<(), CheckCloseError> {
                let (left, right) = (*self as f64, *other as f64);
                if is_close(left, right, tol) {
                    Ok(())
                } else {
                    Err(CheckCloseError { left, right })
                }
            }
        }
    )*};
}

impl_float! { f32 f64 }

impl<T: CheckClose, const N: usize> CheckClose for [T; N] {
    fn check_close(&self, other: &Self, tol: Tolerances) -> Result<(), CheckCloseError> {
        self.iter().zip(other).try_for_each(|(a, b)| a.check_close(b, tol))
    }
}
