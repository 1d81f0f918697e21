//! Row-major grid storage with coordinate and flat-index addressing
//!
//! A [`Grid`] owns a single contiguous buffer of `width * height` cells. The
//! cell at `(x, y)` lives at flat offset `y * width + x`; every traversal,
//! copy and text layout in this crate relies on that ordering.

use std::ops::Range;

use crate::io::error::{GridError, Position, Result};
use crate::spatial::cell_index::CellIndex;

/// A fixed-size two-dimensional grid addressed with geometric `(x, y)` indexing
///
/// Dimensions are fixed at construction and always positive. Operations that
/// produce another grid (sub-grids, rows, columns, transforms) allocate a
/// fresh buffer, so the source may be mutated or dropped afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `initial`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is zero or
    /// the cell count overflows `usize`
    pub fn new(width: usize, height: usize, initial: T) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            cells: vec![initial; len],
            width,
            height,
        })
    }
}

impl<T> Grid<T> {
    /// Adopt a flat row-major buffer, deriving the height from its length
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidLayout`] if `width` is zero, the buffer is
    /// empty, or its length is not a multiple of `width`
    pub fn from_cells(width: usize, cells: Vec<T>) -> Result<Self> {
        let len = cells.len();
        if width == 0 || len == 0 || len % width != 0 {
            return Err(GridError::InvalidLayout { width, len });
        }

        Ok(Self {
            cells,
            width,
            height: len / width,
        })
    }

    /// Create a grid by evaluating `generator` at every coordinate in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidDimension`] if either dimension is zero or
    /// the cell count overflows `usize`
    pub fn from_fn<F>(width: usize, height: usize, mut generator: F) -> Result<Self>
    where
        F: FnMut(CellIndex) -> T,
    {
        let len = checked_len(width, height)?;
        let cells = (0..len)
            .map(|index| generator(cell_index_for(width, index)))
            .collect();

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Assemble a grid from parts whose lengths already agree
    ///
    /// Callers guarantee `cells.len() == width * height` with both dimensions positive.
    pub(crate) const fn from_raw_parts(cells: Vec<T>, width: usize, height: usize) -> Self {
        Self {
            cells,
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Total number of cells, `width * height`
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; grids have at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The row-major backing buffer
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// Mutable view of the backing buffer
    ///
    /// The slice cannot change length, so the grid's shape is preserved.
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    /// Consume the grid, returning its backing buffer
    pub fn into_cells(self) -> Vec<T> {
        self.cells
    }

    /// The bottom right coordinate
    pub const fn last_cell(&self) -> CellIndex {
        CellIndex::new(self.width as isize - 1, self.height as isize - 1)
    }

    /// Test whether `cell` addresses a cell of this grid
    pub const fn contains(&self, cell: CellIndex) -> bool {
        cell.is_within(self.width, self.height)
    }

    /// Flat offset for `(x, y)`, `y * width + x`
    ///
    /// No bounds check is made. Out-of-range input yields a meaningless
    /// offset, never a panic.
    pub const fn offset_of(&self, x: usize, y: usize) -> usize {
        y.wrapping_mul(self.width).wrapping_add(x)
    }

    /// Flat offset for a coordinate, with the same unchecked arithmetic as [`Self::offset_of`]
    pub const fn offset_of_cell(&self, cell: CellIndex) -> isize {
        cell.y.wrapping_mul(self.width as isize).wrapping_add(cell.x)
    }

    /// The coordinate stored at flat offset `index`
    ///
    /// Exact inverse of [`Self::offset_of`] for every index below [`Self::len`].
    pub const fn cell_index_of(&self, index: usize) -> CellIndex {
        cell_index_for(self.width, index)
    }

    /// Every coordinate of the grid in ascending flat order
    pub fn cell_indices(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.indices().map(|index| self.cell_index_of(index))
    }

    /// Flat index range `0..len`, for adapters driving their own iteration
    pub fn indices(&self) -> Range<usize> {
        0..self.cells.len()
    }

    /// Borrow the value at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `x >= width` or `y >= height`
    pub fn get(&self, x: usize, y: usize) -> Result<&T> {
        let offset = self.checked_offset(x, y)?;
        self.get_index(offset)
    }

    /// Mutably borrow the value at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `x >= width` or `y >= height`
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut T> {
        let offset = self.checked_offset(x, y)?;
        self.get_index_mut(offset)
    }

    /// Replace the value at `(x, y)`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `x >= width` or `y >= height`
    pub fn set(&mut self, x: usize, y: usize, value: T) -> Result<()> {
        *self.get_mut(x, y)? = value;
        Ok(())
    }

    /// Borrow the value at a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `cell` has a negative
    /// component or lies beyond the grid
    pub fn get_cell(&self, cell: CellIndex) -> Result<&T> {
        let offset = self.checked_cell_offset(cell)?;
        self.get_index(offset)
    }

    /// Mutably borrow the value at a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `cell` has a negative
    /// component or lies beyond the grid
    pub fn get_cell_mut(&mut self, cell: CellIndex) -> Result<&mut T> {
        let offset = self.checked_cell_offset(cell)?;
        self.get_index_mut(offset)
    }

    /// Replace the value at a coordinate
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `cell` has a negative
    /// component or lies beyond the grid
    pub fn set_cell(&mut self, cell: CellIndex, value: T) -> Result<()> {
        *self.get_cell_mut(cell)? = value;
        Ok(())
    }

    /// Borrow the value at a flat offset
    ///
    /// Rows wrap from one to the next, following the buffer layout.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `index >= len`
    pub fn get_index(&self, index: usize) -> Result<&T> {
        let (width, height) = self.dimensions();
        self.cells
            .get(index)
            .ok_or_else(|| flat_out_of_bounds(index, width, height))
    }

    /// Mutably borrow the value at a flat offset
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `index >= len`
    pub fn get_index_mut(&mut self, index: usize) -> Result<&mut T> {
        let (width, height) = self.dimensions();
        self.cells
            .get_mut(index)
            .ok_or_else(|| flat_out_of_bounds(index, width, height))
    }

    /// Replace the value at a flat offset
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `index >= len`
    pub fn set_index(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_index_mut(index)? = value;
        Ok(())
    }

    /// Iterate values in ascending flat order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterate mutable values in ascending flat order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterate `(flat index, value)` pairs in ascending flat order
    pub fn indexed(&self) -> std::iter::Enumerate<std::slice::Iter<'_, T>> {
        self.cells.iter().enumerate()
    }

    fn checked_offset(&self, x: usize, y: usize) -> Result<usize> {
        if x < self.width && y < self.height {
            Ok(self.offset_of(x, y))
        } else {
            Err(GridError::IndexOutOfBounds {
                position: Position::Cell(CellIndex::new(x as isize, y as isize)),
                width: self.width,
                height: self.height,
            })
        }
    }

    fn checked_cell_offset(&self, cell: CellIndex) -> Result<usize> {
        if self.contains(cell) {
            Ok(self.offset_of(cell.x as usize, cell.y as usize))
        } else {
            Err(GridError::IndexOutOfBounds {
                position: Position::Cell(cell),
                width: self.width,
                height: self.height,
            })
        }
    }
}

impl<T> IntoIterator for Grid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Grid<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter_mut()
    }
}

fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidDimension { width, height });
    }
    match width.checked_mul(height) {
        Some(len) => Ok(len),
        None => Err(GridError::InvalidDimension { width, height }),
    }
}

const fn cell_index_for(width: usize, index: usize) -> CellIndex {
    CellIndex::new((index % width) as isize, (index / width) as isize)
}

fn flat_out_of_bounds(index: usize, width: usize, height: usize) -> GridError {
    GridError::IndexOutOfBounds {
        position: Position::Flat(index),
        width,
        height,
    }
}
