//! Conversions between dense grids and `ndarray` matrices

use ndarray::Array2;

use crate::common::error::{Result, invalid_dimensions};
use crate::grid::base::Grid;
use crate::grid::dense::DenseGrid;
use crate::grid::storage::LinearStorage;
use crate::math::integral::Integral;

impl<T: Clone, I: Integral, S: LinearStorage<T>> DenseGrid<T, I, S> {
    /// Copy the grid into a `(rows, columns)` matrix
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions do not fit in `usize` or the
    /// matrix cannot be built from the cell buffer.
    pub fn to_array2(&self) -> Result<Array2<T>> {
        let rows = self.num_rows();
        let columns = self.num_columns();
        let shape = rows
            .to_usize()
            .zip(columns.to_usize())
            .ok_or_else(|| invalid_dimensions(&rows, &columns, &"dimensions exceed usize"))?;

        Ok(Array2::from_shape_vec(shape, self.as_slice().to_vec())?)
    }
}

impl<T: Clone, I: Integral> DenseGrid<T, I> {
    /// Copy a matrix into a grid, matrix rows becoming grid rows
    ///
    /// Works for any memory layout; cells are read in logical order.
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidDimensions` if a matrix dimension does not
    /// fit in the index type `I`.
    pub fn from_array2(array: &Array2<T>) -> Result<Self> {
        let (rows, columns) = array.dim();
        let Some((num_rows, num_columns)) =
            num_traits::cast::<_, I>(rows).zip(num_traits::cast::<_, I>(columns))
        else {
            return Err(invalid_dimensions(
                &rows,
                &columns,
                &"dimensions do not fit the index type",
            ));
        };

        Self::from_storage(num_rows, num_columns, array.iter().cloned().collect())
    }
}
