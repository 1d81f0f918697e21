//! Conversions between grids and `ndarray` matrices
//!
//! A grid of width `w` and height `h` corresponds to an `Array2` of shape
//! `(h, w)`: array rows are grid rows and array columns are grid columns.

use ndarray::Array2;

use crate::io::error::{GridError, Result};
use crate::spatial::grid::Grid;

impl<T> Grid<T> {
    /// Move the grid's cells into an `Array2` of shape `(height, width)`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLayout`] if `ndarray` rejects the shape,
    /// which only happens if the grid's buffer disagrees with its dimensions
    pub fn into_array2(self) -> Result<Array2<T>> {
        let (width, height) = self.dimensions();
        let len = self.len();
        Array2::from_shape_vec((height, width), self.into_cells())
            .map_err(|_shape_error| GridError::InvalidLayout { width, len })
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the grid into an `Array2` of shape `(height, width)`
    ///
    /// # Errors
    ///
    /// See [`Grid::into_array2`]
    pub fn to_array2(&self) -> Result<Array2<T>> {
        self.clone().into_array2()
    }

    /// Build a grid from any two-dimensional array, in logical row-major order
    ///
    /// Arrays in column-major or strided layouts are read element by element,
    /// so the result does not depend on the array's memory order.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either axis of the array is empty
    pub fn from_array2(array: &Array2<T>) -> Result<Self> {
        let (rows, cols) = array.dim();
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension {
                width: cols,
                height: rows,
            });
        }

        Ok(Self::from_raw_parts(array.iter().cloned().collect(), cols, rows))
    }
}
