//! Rectangular grids addressed by `Location`
//!
//! This module contains:
//! - The abstract grid contract and its bounds rules
//! - Linear storage backends
//! - The dense row-major grid and its `ndarray` interop

/// `ndarray` conversions for dense grids
pub mod array;
/// Grid trait with checked and unchecked access
pub mod base;
/// Dimensions, column policy and validity checks
pub mod bounds;
/// Dense row-major grid
pub mod dense;
/// Backing buffer abstraction
pub mod storage;

pub use base::Grid;
pub use bounds::{Bounds, ColumnBound};
pub use dense::DenseGrid;
pub use storage::LinearStorage;
