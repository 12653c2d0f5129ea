//! Application layer of geodesy-math: the math self-check suite,
//! logging setup, and the command-line entry points.

#[macro_use] extern crate log;
#[macro_use] extern crate itertools;
#[macro_use] extern crate failure;
#[cfg(test)] #[macro_use] extern crate pretty_assertions;

pub type FailResult<T> = Result<T, failure::Error>;

mod color;
mod logging;
mod checks;
pub mod entry_points;

pub use crate::logging::{GlobalLogger, ColorizedLevel};
pub use crate::checks::{CheckConfig, CheckOutcome, CheckReport, CheckSection, CheckSuite};
pub use crate::checks::run_math_checks;
