//! Crate-wide error handling and constants

/// Crate constants and defaults
pub mod configuration;
/// Error types for grid construction and access
pub mod error;
