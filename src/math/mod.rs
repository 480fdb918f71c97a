//! Integer utilities shared by locations and grids

/// Order-sensitive hash combining
pub mod hashing;
/// Generic integer trait and mixed-type checked arithmetic
pub mod integral;
