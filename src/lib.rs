//! Fixed-size linear algebra and sampled fields.
//!
//! This crate only re-exports the workspace members:
//!
//! * [`array_types`]: `Vector`, `Matrix` and `Complex` over a scalar type,
//!   with dimensions checked at compile time.
//! * [`field`]: functions sampled on a rectangular grid, and interpolated
//!   between the nodes.
//! * [`tasks`]: the self-check suite behind `geodesy-math-check`.

pub use geodesy_array_types as array_types;
pub use geodesy_field as field;
pub use geodesy_tasks as tasks;
