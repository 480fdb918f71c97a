//! Coordinates and directional movement
//!
//! This module contains the value types grids are addressed with:
//! - Row/column locations and their arithmetic
//! - Unit directions along the two axes

/// Unit movements and their reversal
pub mod direction;
/// Location value type and neighbour enumeration
pub mod location;

pub use direction::Direction;
pub use location::Location;
