//! Rectangular region traversal, extraction and copy-in
//!
//! Two boundary conventions coexist here. Value operations ([`Grid::sub_grid`],
//! [`Grid::for_each_in`], [`Grid::row`], [`Grid::column`]) treat their end
//! coordinate as inclusive, while index enumeration ([`Grid::indices_of`]) treats
//! it as exclusive. Every traversal is row-major: each row left to right, rows
//! top to bottom.

use std::iter::FusedIterator;

use log::{debug, trace};

use crate::io::error::{GridError, Position, Result};
use crate::spatial::cell_index::CellIndex;
use crate::spatial::grid::Grid;

/// Lazy row-major walk over a closed rectangle of coordinates
///
/// Cloning a traversal before consuming it restarts the walk from the same
/// position; [`RangeTraversal::restarted`] rewinds to the rectangle's start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeTraversal {
    start: CellIndex,
    end: CellIndex,
    next: Option<CellIndex>,
}

impl RangeTraversal {
    /// Walk every coordinate from `start` to `end`, both inclusive
    ///
    /// Yields nothing when `start` lies right of or below `end`.
    pub const fn closed(start: CellIndex, end: CellIndex) -> Self {
        let next = if start.x <= end.x && start.y <= end.y {
            Some(start)
        } else {
            None
        };
        Self { start, end, next }
    }

    /// Walk every coordinate from `start` inclusive to `end` exclusive
    pub const fn half_open(start: CellIndex, end: CellIndex) -> Self {
        Self::closed(
            start,
            CellIndex::new(end.x.saturating_sub(1), end.y.saturating_sub(1)),
        )
    }

    /// Top left corner of the rectangle
    pub const fn start(&self) -> CellIndex {
        self.start
    }

    /// Bottom right corner of the rectangle, inclusive
    pub const fn end(&self) -> CellIndex {
        self.end
    }

    /// A fresh traversal over the same rectangle
    #[must_use]
    pub const fn restarted(&self) -> Self {
        Self::closed(self.start, self.end)
    }

    /// Number of coordinates still to be yielded
    ///
    /// `None` when the count does not fit in a `usize`, which only happens
    /// for rectangles spanning most of the coordinate space.
    pub fn remaining(&self) -> Option<usize> {
        let Some(current) = self.next else {
            return Some(0);
        };
        let row_width = self.end.x.abs_diff(self.start.x).checked_add(1)?;
        let full_rows_after = self.end.y.abs_diff(current.y);
        let rest_of_row = self.end.x.abs_diff(current.x).checked_add(1)?;
        full_rows_after
            .checked_mul(row_width)?
            .checked_add(rest_of_row)
    }
}

impl Iterator for RangeTraversal {
    type Item = CellIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current.x < self.end.x {
            Some(current.offset(1, 0))
        } else if current.y < self.end.y {
            Some(CellIndex::new(self.start.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining()
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl FusedIterator for RangeTraversal {}

impl<T> Grid<T> {
    /// Apply `action` to every cell from `from` to the grid's last coordinate
    ///
    /// The visited region is the rectangle whose top left corner is `from` and
    /// whose bottom right corner is the grid's last cell; each row restarts at
    /// `from.x`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `from` lies outside the grid.
    /// Nothing is visited when an error is returned.
    pub fn for_each_from<F>(&self, from: CellIndex, action: F) -> Result<()>
    where
        F: FnMut(CellIndex, &T),
    {
        self.for_each_in(from, self.last_cell(), action)
    }

    /// Apply `action` to every cell of the closed rectangle `[from, to]`
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if either corner lies outside
    /// the grid, and [`GridError::InvalidRegion`] if `from` lies right of or
    /// below `to`. Nothing is visited when an error is returned.
    pub fn for_each_in<F>(&self, from: CellIndex, to: CellIndex, mut action: F) -> Result<()>
    where
        F: FnMut(CellIndex, &T),
    {
        self.require_cell(from)?;
        self.require_cell(to)?;
        require_ordered(from, to)?;

        for cell in RangeTraversal::closed(from, to) {
            action(cell, self.get_cell(cell)?);
        }
        Ok(())
    }

    /// Coordinates of the half-open rectangle `[start, end)` in row-major order
    ///
    /// This only enumerates indices; nothing is checked against the grid.
    pub const fn indices_of(&self, start: CellIndex, end: CellIndex) -> RangeTraversal {
        RangeTraversal::half_open(start, end)
    }

    /// Coordinates from `start` to the grid's extent, end exclusive
    pub const fn indices_from(&self, start: CellIndex) -> RangeTraversal {
        RangeTraversal::half_open(
            start,
            CellIndex::new(self.width() as isize, self.height() as isize),
        )
    }

    /// Apply `action` to every flat index and value, producing a grid of the results
    ///
    /// The new grid has the same dimensions; `self` is left untouched.
    pub fn transform<U, F>(&self, mut action: F) -> Grid<U>
    where
        F: FnMut(usize, &T) -> U,
    {
        let cells = self
            .indexed()
            .map(|(index, value)| action(index, value))
            .collect();
        Grid::from_raw_parts(cells, self.width(), self.height())
    }

    fn require_cell(&self, cell: CellIndex) -> Result<()> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(GridError::IndexOutOfBounds {
                position: Position::Cell(cell),
                width: self.width(),
                height: self.height(),
            })
        }
    }
}

impl<T: Clone> Grid<T> {
    /// Copy the closed rectangle `[start, end]` into a new grid
    ///
    /// `end` is clamped to the grid's last coordinate, so an oversized end
    /// means "to the edge".
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRegion`] if `start` lies right of or below
    /// the requested `end`, and [`GridError::IndexOutOfBounds`] if `start`
    /// lies outside the grid
    pub fn sub_grid(&self, start: CellIndex, end: CellIndex) -> Result<Self> {
        require_ordered(start, end)?;
        self.require_cell(start)?;

        let last = self.last_cell();
        let clamped = CellIndex::new(end.x.min(last.x), end.y.min(last.y));
        if clamped != end {
            trace!("Clamped sub-grid end {end} to {clamped}");
        }

        let traversal = RangeTraversal::closed(start, clamped);
        let mut values = Vec::with_capacity(traversal.remaining().unwrap_or_default());
        self.for_each_in(start, clamped, |_, value| values.push(value.clone()))?;

        let width = (clamped.x - start.x + 1) as usize;
        let height = (clamped.y - start.y + 1) as usize;
        Ok(Self::from_raw_parts(values, width, height))
    }

    /// Copy everything from `start` to the grid's last coordinate into a new grid
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `start` lies outside the grid
    pub fn sub_grid_from(&self, start: CellIndex) -> Result<Self> {
        self.sub_grid(start, CellIndex::new(isize::MAX, isize::MAX))
    }

    /// Extract row `y` as a grid one cell high
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `y >= height`
    pub fn row(&self, y: usize) -> Result<Self> {
        let y = y as isize;
        self.sub_grid(
            CellIndex::new(0, y),
            CellIndex::new(self.width() as isize - 1, y),
        )
    }

    /// Extract column `x` as a grid one cell wide
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if `x >= width`
    pub fn column(&self, x: usize) -> Result<Self> {
        let x = x as isize;
        self.sub_grid(
            CellIndex::new(x, 0),
            CellIndex::new(x, self.height() as isize - 1),
        )
    }

    /// Write `source` into `self` with its origin placed at `to`
    ///
    /// Source cells landing outside `self` are skipped, and the whole copy is
    /// a no-op when `to` itself is out of bounds. Cells of `self` outside the
    /// overlap are never touched. Returns the number of cells written.
    pub fn copy_from(&mut self, source: &Self, to: CellIndex) -> usize {
        if !self.contains(to) {
            debug!("Skipped copy: destination {to} is outside the grid");
            return 0;
        }

        let last = self.last_cell();
        let end = CellIndex::new(
            (to.x + source.width() as isize - 1).min(last.x),
            (to.y + source.height() as isize - 1).min(last.y),
        );

        let mut written = 0;
        for target in RangeTraversal::closed(to, end) {
            let origin = target.offset(-to.x, -to.y);
            if let (Ok(value), Ok(slot)) = (source.get_cell(origin), self.get_cell_mut(target)) {
                *slot = value.clone();
                written += 1;
            }
        }

        if written < source.len() {
            debug!(
                "Clipped copy at {to}: wrote {written} of {} cells",
                source.len()
            );
        }
        written
    }
}

fn require_ordered(start: CellIndex, end: CellIndex) -> Result<()> {
    if start.x > end.x || start.y > end.y {
        Err(GridError::InvalidRegion { start, end })
    } else {
        Ok(())
    }
}
