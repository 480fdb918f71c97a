//! Error types for grid construction and checked element access

use std::fmt;

use ndarray::ShapeError;

/// Grid axis named in out-of-range reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Vertical axis, indexed by `Location::row`
    Row,
    /// Horizontal axis, indexed by `Location::column`
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Grid dimensions cannot describe a grid
    ///
    /// Occurs when:
    /// - A dimension is negative (signed index types only)
    /// - The cell count does not fit in `usize`
    /// - Supplied storage does not hold exactly `rows * columns` cells
    InvalidDimensions {
        /// Requested number of rows
        rows: String,
        /// Requested number of columns
        columns: String,
        /// Explanation of why the dimensions were rejected
        reason: String,
    },

    /// Coordinate failed a bounds check
    OutOfRange {
        /// Axis whose check failed
        axis: Axis,
        /// Offending index value
        index: String,
        /// Accepted range, rendered as a Rust range expression
        valid: String,
    },

    /// Array interop produced an inconsistent shape
    Shape {
        /// Underlying ndarray shape error
        source: ShapeError,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions {
                rows,
                columns,
                reason,
            } => {
                write!(f, "Invalid grid dimensions {rows}x{columns}: {reason}")
            }
            Self::OutOfRange { axis, index, valid } => {
                write!(f, "{axis} {index} out of range (valid: {valid})")
            }
            Self::Shape { source } => {
                write!(f, "Array shape mismatch: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape { source } => Some(source),
            _ => None,
        }
    }
}

impl From<ShapeError> for GridError {
    fn from(err: ShapeError) -> Self {
        Self::Shape { source: err }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid dimensions error
pub fn invalid_dimensions(
    rows: &impl ToString,
    columns: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidDimensions {
        rows: rows.to_string(),
        columns: columns.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-range error
pub fn out_of_range(axis: Axis, index: &impl ToString, valid: &impl ToString) -> GridError {
    GridError::OutOfRange {
        axis,
        index: index.to_string(),
        valid: valid.to_string(),
    }
}

impl GridError {
    /// Axis of an out-of-range failure, if this is one
    pub const fn axis(&self) -> Option<Axis> {
        match self {
            Self::OutOfRange { axis, .. } => Some(*axis),
            _ => None,
        }
    }

    /// Test whether this error reports a failed bounds check
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
