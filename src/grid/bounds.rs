//! Grid dimensions and the validity rules derived from them

use crate::common::configuration::DEFAULT_COLUMN_BOUND;
use crate::common::error::{Axis, Result, invalid_dimensions, out_of_range};
use crate::math::integral::Integral;
use crate::spatial::location::Location;

/// Upper-bound rule used by column validation
///
/// Rows always use an exclusive upper bound. Columns default to the
/// inclusive rule, which accepts `column == num_columns`. On a dense grid
/// such a column addresses the first cell of the next row, and on the last
/// row it falls past the buffer and is reported as out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnBound {
    /// `0 <= column <= num_columns`
    Inclusive,
    /// `0 <= column < num_columns`, matching rows
    Exclusive,
}

impl Default for ColumnBound {
    fn default() -> Self {
        DEFAULT_COLUMN_BOUND
    }
}

/// Fixed dimensions of a grid and its coordinate validity rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<I = i64> {
    rows: I,
    columns: I,
    cell_count: usize,
    column_bound: ColumnBound,
}

impl<I: Integral> Bounds<I> {
    /// Create bounds for a `rows` by `columns` grid
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if:
    /// - Either dimension is negative (unreachable for unsigned `I`)
    /// - `rows * columns` does not fit in `usize`
    pub fn new(rows: I, columns: I) -> Result<Self> {
        if rows < I::zero() || columns < I::zero() {
            return Err(invalid_dimensions(
                &rows,
                &columns,
                &"dimensions must not be negative",
            ));
        }

        let cell_count = rows
            .to_usize()
            .zip(columns.to_usize())
            .and_then(|(r, c)| r.checked_mul(c))
            .ok_or_else(|| {
                invalid_dimensions(&rows, &columns, &"cell count exceeds addressable memory")
            })?;

        Ok(Self {
            rows,
            columns,
            cell_count,
            column_bound: ColumnBound::default(),
        })
    }

    /// Create bounds from a `(num_rows, num_columns)` location
    ///
    /// # Errors
    ///
    /// Same conditions as [`Bounds::new`].
    pub fn from_dimensions(dimensions: Location<I>) -> Result<Self> {
        Self::new(dimensions.row, dimensions.column)
    }

    /// Replace the column validation rule
    #[must_use]
    pub const fn with_column_bound(mut self, column_bound: ColumnBound) -> Self {
        self.column_bound = column_bound;
        self
    }

    /// Number of rows
    pub const fn rows(&self) -> I {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> I {
        self.columns
    }

    /// Number of cells, `rows * columns`
    pub const fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Active column validation rule
    pub const fn column_bound(&self) -> ColumnBound {
        self.column_bound
    }

    /// Dimensions as a `(num_rows, num_columns)` location
    pub const fn dimensions(&self) -> Location<I> {
        Location::new(self.rows, self.columns)
    }

    /// Test `0 <= row < rows`
    pub fn valid_row(&self, row: I) -> bool {
        I::zero() <= row && row < self.rows
    }

    /// Test `column` against the active [`ColumnBound`]
    pub fn valid_column(&self, column: I) -> bool {
        match self.column_bound {
            ColumnBound::Inclusive => I::zero() <= column && column <= self.columns,
            ColumnBound::Exclusive => I::zero() <= column && column < self.columns,
        }
    }

    /// Test both components of `location`
    pub fn valid(&self, location: Location<I>) -> bool {
        self.valid_row(location.row) && self.valid_column(location.column)
    }

    /// Fail unless `row` is valid
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` for the row axis.
    pub fn check_row(&self, row: I) -> Result<()> {
        if self.valid_row(row) {
            Ok(())
        } else {
            Err(out_of_range(Axis::Row, &row, &format!("0..{}", self.rows)))
        }
    }

    /// Fail unless `column` is valid
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` for the column axis.
    pub fn check_column(&self, column: I) -> Result<()> {
        if self.valid_column(column) {
            Ok(())
        } else {
            Err(out_of_range(Axis::Column, &column, &self.column_range()))
        }
    }

    /// Check the row, then the column
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange`; a bad row is reported even when the
    /// column is bad too.
    pub fn check_location(&self, location: Location<I>) -> Result<()> {
        self.check_row(location.row)?;
        self.check_column(location.column)
    }

    /// Accepted column range, rendered as a Rust range expression
    pub(crate) fn column_range(&self) -> String {
        match self.column_bound {
            ColumnBound::Inclusive => format!("0..={}", self.columns),
            ColumnBound::Exclusive => format!("0..{}", self.columns),
        }
    }
}
