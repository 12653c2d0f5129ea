//! Fixed-size vectors, matrices and complex numbers.
//!
//! Dimensions are const generic parameters, so shape errors such as adding
//! a `V2` to a `V3`, or multiplying matrices whose inner dimensions disagree,
//! are caught at compile time rather than at runtime.

#[cfg(test)]
#[macro_use]
extern crate geodesy_assert_close;
#[macro_use]
extern crate failure;

#[macro_use] mod macros;

pub use self::traits::{Semiring, Ring, Real};
mod traits;

pub use self::types::*;
mod types;

pub use self::errors::DomainError;
mod errors;

pub use self::complex::{abs, phase};
mod complex;

mod ops;

// Expose neatly-named modules, but let the .rs files have names that are close alphabetically.
#[doc(hidden)] pub mod methods_v;
#[doc(hidden)] pub mod methods_m;
pub use self::methods_v as vee;
pub use self::methods_m as mat;

pub use self::methods_v::dot;
