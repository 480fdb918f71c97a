//! Abstract rectangular grid contract
//!
//! Backends supply the dimensions and an O(1) addressing primitive that
//! never validates coordinates. Everything else (dimension queries, bounds
//! checks, checked and unchecked access, in-bounds neighbours) is provided
//! here on top of those two pieces.

use crate::common::error::{Axis, GridError, Result, out_of_range};
use crate::grid::bounds::Bounds;
use crate::math::integral::Integral;
use crate::spatial::location::Location;

/// Fixed-size rectangular container addressed by [`Location`]
pub trait Grid {
    /// Element type stored in each cell
    type Cell;
    /// Integer type of row and column indices
    type Index: Integral;

    /// Dimensions and validity rules, fixed at construction
    fn bounds(&self) -> &Bounds<Self::Index>;

    /// Cell that `location` addresses, without bounds validation
    ///
    /// Returns `None` only when the address falls outside the backing
    /// storage. A `Some` result says nothing about whether `location` is
    /// valid for the grid.
    fn lookup(&self, location: Location<Self::Index>) -> Option<&Self::Cell>;

    /// Mutable form of [`Grid::lookup`]
    fn lookup_mut(&mut self, location: Location<Self::Index>) -> Option<&mut Self::Cell>;

    /// Number of rows
    fn num_rows(&self) -> Self::Index {
        self.bounds().rows()
    }

    /// Number of columns
    fn num_columns(&self) -> Self::Index {
        self.bounds().columns()
    }

    /// Dimensions as a `(num_rows, num_columns)` location
    fn dimensions(&self) -> Location<Self::Index> {
        self.bounds().dimensions()
    }

    /// Number of cells
    fn cell_count(&self) -> usize {
        self.bounds().cell_count()
    }

    /// Test whether the grid has no addressable cells
    fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Test `0 <= row < num_rows`
    fn valid_row(&self, row: Self::Index) -> bool {
        self.bounds().valid_row(row)
    }

    /// Test `column` against the grid's column rule
    fn valid_column(&self, column: Self::Index) -> bool {
        self.bounds().valid_column(column)
    }

    /// Test both components of `location`
    fn valid(&self, location: Location<Self::Index>) -> bool {
        self.bounds().valid(location)
    }

    /// Fail unless `row` is valid
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` for the row axis.
    fn check_row(&self, row: Self::Index) -> Result<()> {
        self.bounds().check_row(row)
    }

    /// Fail unless `column` is valid
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` for the column axis.
    fn check_column(&self, column: Self::Index) -> Result<()> {
        self.bounds().check_column(column)
    }

    /// Check the row, then the column
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange`, row failures first.
    fn check_location(&self, location: Location<Self::Index>) -> Result<()> {
        self.bounds().check_location(location)
    }

    /// Bounds-checked access
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` before touching storage if the
    /// location is invalid, or if it passes validation but lies past the
    /// backing storage.
    fn at(&self, location: Location<Self::Index>) -> Result<&Self::Cell> {
        self.check_location(location)?;
        self.lookup(location)
            .ok_or_else(|| missed_storage(self.bounds(), location.column))
    }

    /// Bounds-checked mutable access
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::at`].
    fn at_mut(&mut self, location: Location<Self::Index>) -> Result<&mut Self::Cell> {
        self.check_location(location)?;
        let bounds = *self.bounds();
        self.lookup_mut(location)
            .ok_or_else(|| missed_storage(&bounds, location.column))
    }

    /// Access without bounds validation
    ///
    /// The caller guarantees `location` is valid. An invalid location may
    /// alias another cell; one that misses the storage entirely panics.
    ///
    /// # Panics
    ///
    /// Panics if `location` does not address backing storage.
    #[track_caller]
    fn unchecked(&self, location: Location<Self::Index>) -> &Self::Cell {
        match self.lookup(location) {
            Some(cell) => cell,
            None => contract_violation(location),
        }
    }

    /// Mutable access without bounds validation
    ///
    /// # Panics
    ///
    /// Panics if `location` does not address backing storage.
    #[track_caller]
    fn unchecked_mut(&mut self, location: Location<Self::Index>) -> &mut Self::Cell {
        match self.lookup_mut(location) {
            Some(cell) => cell,
            None => contract_violation(location),
        }
    }

    /// Valid orthogonal neighbours of `location`, in `adjacent()` order
    fn adjacent_within(&self, location: Location<Self::Index>) -> Vec<Location<Self::Index>> {
        location
            .checked_adjacent()
            .filter(|neighbour| self.valid(*neighbour))
            .collect()
    }

    /// Valid neighbours of `location`, in `surrounding()` order
    fn surrounding_within(&self, location: Location<Self::Index>) -> Vec<Location<Self::Index>> {
        location
            .checked_surrounding()
            .filter(|neighbour| self.valid(*neighbour))
            .collect()
    }
}

/// Column error for a location that passed validation but missed storage
fn missed_storage<I: Integral>(bounds: &Bounds<I>, column: I) -> GridError {
    out_of_range(Axis::Column, &column, &bounds.column_range())
}

/// Report unchecked access that missed the backing storage
#[cold]
#[track_caller]
#[allow(clippy::panic)]
fn contract_violation<I: Integral>(location: Location<I>) -> ! {
    panic!("unchecked grid access at {location} is outside the backing storage")
}
