//! Scalar- and vector-valued functions sampled over a rectangular domain.
//!
//! A [`Field`] owns a dense grid of values and reconstructs the function
//! between the grid nodes using one of the [`Interp`] orders.
//!
//! [`Field`]: struct.Field.html
//! [`Interp`]: enum.Interp.html

#[cfg(test)]
#[macro_use]
extern crate geodesy_assert_close;
#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[cfg(test)] extern crate rand;

macro_rules! throw {
    ($e:expr) => {
        return Err(::std::convert::Into::into($e));
    }
}

pub use self::errors::FieldError;
mod errors;

pub use self::traits::{Coord, Value};
mod traits;

pub use self::grid::Grid;
mod grid;

pub use self::interp::Interp;
mod interp;

pub use self::field::Field;
mod field;
