//! Dense grid backed by a single row-major buffer

use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use crate::common::error::{Result, invalid_dimensions};
use crate::grid::base::Grid;
use crate::grid::bounds::{Bounds, ColumnBound};
use crate::grid::storage::LinearStorage;
use crate::math::integral::Integral;
use crate::spatial::location::Location;

/// Grid storing every cell in one contiguous buffer
///
/// Cell `(row, column)` lives at offset `row * num_columns + column`.
/// The buffer always holds exactly `num_rows * num_columns` cells and the
/// dimensions never change after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid<T, I = i64, S = Vec<T>> {
    bounds: Bounds<I>,
    cells: S,
    marker: PhantomData<T>,
}

impl<T, I: Integral> DenseGrid<T, I> {
    /// Create a grid with every cell set to `T::default()`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if a dimension is negative or
    /// the cell count does not fit in `usize`.
    pub fn new(num_rows: I, num_columns: I) -> Result<Self>
    where
        T: Default + Clone,
    {
        Self::with_fill(num_rows, num_columns, T::default())
    }

    /// Create a grid with every cell set to `fill`
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if a dimension is negative or
    /// the cell count does not fit in `usize`.
    pub fn with_fill(num_rows: I, num_columns: I, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self::from_bounds(Bounds::new(num_rows, num_columns)?, fill))
    }

    /// Create a grid from `(num_rows, num_columns)` dimensions
    ///
    /// # Errors
    ///
    /// Same conditions as [`DenseGrid::with_fill`].
    pub fn from_dimensions(dimensions: Location<I>, fill: T) -> Result<Self>
    where
        T: Clone,
    {
        Self::with_fill(dimensions.row, dimensions.column, fill)
    }
}

impl<T, I: Integral, S: LinearStorage<T>> DenseGrid<T, I, S> {
    /// Allocate storage for `bounds` with every cell set to `fill`
    pub fn from_bounds(bounds: Bounds<I>, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            cells: S::filled(bounds.cell_count(), fill),
            bounds,
            marker: PhantomData,
        }
    }

    /// Wrap existing row-major storage
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if the dimensions are invalid
    /// or `cells` does not hold exactly `num_rows * num_columns` cells.
    pub fn from_storage(num_rows: I, num_columns: I, cells: S) -> Result<Self> {
        let bounds = Bounds::new(num_rows, num_columns)?;
        if cells.len() != bounds.cell_count() {
            return Err(invalid_dimensions(
                &num_rows,
                &num_columns,
                &format!(
                    "storage holds {} cells, expected {}",
                    cells.len(),
                    bounds.cell_count()
                ),
            ));
        }

        Ok(Self {
            bounds,
            cells,
            marker: PhantomData,
        })
    }

    /// Replace the column validation rule
    #[must_use]
    pub fn with_column_bound(mut self, column_bound: ColumnBound) -> Self {
        self.bounds = self.bounds.with_column_bound(column_bound);
        self
    }

    /// Row-major buffer offset of `location`
    ///
    /// Does not validate against the grid; `None` only when a component is
    /// negative or the offset does not fit in `usize`.
    pub fn offset(&self, location: Location<I>) -> Option<usize> {
        let columns = self.bounds.columns().to_usize()?;
        location
            .row
            .to_usize()?
            .checked_mul(columns)?
            .checked_add(location.column.to_usize()?)
    }

    /// Every cell in row-major order
    pub fn as_slice(&self) -> &[T] {
        self.cells.as_slice()
    }

    /// Every cell in row-major order, mutably
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.cells.as_mut_slice()
    }

    /// Release the backing storage
    pub fn into_storage(self) -> S {
        self.cells
    }

    /// Overwrite every cell with `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.as_mut_slice().fill(value);
    }

    /// Every valid location in row-major order
    ///
    /// Columns follow the exclusive rule here regardless of the grid's
    /// column policy, since storage holds exactly `num_columns` per row.
    pub fn locations(&self) -> impl Iterator<Item = Location<I>> + use<T, I, S> {
        let columns = self.bounds.columns().to_usize().unwrap_or_default();
        (0..self.bounds.cell_count()).filter_map(move |offset| {
            Some(Location::new(
                num_traits::cast(offset / columns)?,
                num_traits::cast(offset % columns)?,
            ))
        })
    }

    /// Location and value of every cell in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Location<I>, &T)> {
        self.locations().zip(self.cells.as_slice())
    }

    /// Values of every cell in row-major order
    pub fn values(&self) -> std::slice::Iter<'_, T> {
        self.cells.as_slice().iter()
    }

    /// Mutable values of every cell in row-major order
    pub fn values_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.as_mut_slice().iter_mut()
    }
}

impl<T, I: Integral, S: LinearStorage<T>> Grid for DenseGrid<T, I, S> {
    type Cell = T;
    type Index = I;

    fn bounds(&self) -> &Bounds<I> {
        &self.bounds
    }

    fn lookup(&self, location: Location<I>) -> Option<&T> {
        self.cells.get(self.offset(location)?)
    }

    fn lookup_mut(&mut self, location: Location<I>) -> Option<&mut T> {
        let offset = self.offset(location)?;
        self.cells.get_mut(offset)
    }
}

impl<T, I: Integral, S: LinearStorage<T>> Index<Location<I>> for DenseGrid<T, I, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, location: Location<I>) -> &T {
        self.unchecked(location)
    }
}

impl<T, I: Integral, S: LinearStorage<T>> IndexMut<Location<I>> for DenseGrid<T, I, S> {
    #[track_caller]
    fn index_mut(&mut self, location: Location<I>) -> &mut T {
        self.unchecked_mut(location)
    }
}
