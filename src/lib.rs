//! Generic 2D grid primitives: row/column locations and rectangular grids
//!
//! [`Location`] is a value type with overflow-checked arithmetic, directional
//! movement and deterministic neighbour enumeration. [`Grid`] is the contract
//! for fixed-size rectangular containers addressed by locations, with
//! bounds-checked (`at`) and unchecked (`[]`) access; [`DenseGrid`] is its
//! row-major, single-buffer implementation.

#![forbid(unsafe_code)]

/// Crate errors and constants
pub mod common;
/// Grid contract, bounds rules and the dense backend
pub mod grid;
/// Integer helpers for mixed-type arithmetic and hashing
pub mod math;
/// Locations and directions
pub mod spatial;

pub use common::error::{Axis, GridError, Result};
pub use grid::{Bounds, ColumnBound, DenseGrid, Grid, LinearStorage};
pub use spatial::{Direction, Location};
