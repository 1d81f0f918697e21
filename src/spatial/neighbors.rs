//! Neighboring cells around a grid coordinate
//!
//! Candidates that fall outside the `width` by `height` extent, or that
//! cannot be represented at all, are dropped.
//! Grid edges are expected, so nothing here reports an error.

use crate::spatial::cell_index::CellIndex;
use crate::spatial::grid::Grid;

/// Orthogonal offsets: left, right, up, down
const EDGE_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal offsets: up-left, down-right, up-right, down-left
const CORNER_OFFSETS: [(isize, isize); 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Coordinates sharing an edge with `cell`
///
/// Yields at most four cells, in the order left, right, up, down.
pub fn edge_neighbors(width: usize, height: usize, cell: CellIndex) -> Vec<CellIndex> {
    offset_neighbors(width, height, cell, &EDGE_OFFSETS)
}

/// Coordinates touching `cell` only at a corner
///
/// Yields at most four cells, in the order up-left, down-right, up-right, down-left.
pub fn corner_neighbors(width: usize, height: usize, cell: CellIndex) -> Vec<CellIndex> {
    offset_neighbors(width, height, cell, &CORNER_OFFSETS)
}

/// Every coordinate of the 3x3 block centered on `cell`, excluding `cell`
///
/// The x offset is the outer loop and the y offset the inner one, both
/// running from -1 to 1.
pub fn all_neighbors(width: usize, height: usize, cell: CellIndex) -> Vec<CellIndex> {
    let mut results = Vec::with_capacity(8);
    for dx in -1..=1 {
        for dy in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if let Some(neighbor) = cell.checked_offset(dx, dy)
                && neighbor.is_within(width, height)
            {
                results.push(neighbor);
            }
        }
    }
    results
}

fn offset_neighbors(
    width: usize,
    height: usize,
    cell: CellIndex,
    offsets: &[(isize, isize)],
) -> Vec<CellIndex> {
    offsets
        .iter()
        .filter_map(|&(dx, dy)| cell.checked_offset(dx, dy))
        .filter(|neighbor| neighbor.is_within(width, height))
        .collect()
}

impl<T> Grid<T> {
    /// In-bounds coordinates sharing an edge with `cell`; see [`edge_neighbors`]
    pub fn edge_neighbors(&self, cell: CellIndex) -> Vec<CellIndex> {
        edge_neighbors(self.width(), self.height(), cell)
    }

    /// In-bounds diagonal coordinates of `cell`; see [`corner_neighbors`]
    pub fn corner_neighbors(&self, cell: CellIndex) -> Vec<CellIndex> {
        corner_neighbors(self.width(), self.height(), cell)
    }

    /// In-bounds coordinates surrounding `cell`; see [`all_neighbors`]
    pub fn all_neighbors(&self, cell: CellIndex) -> Vec<CellIndex> {
        all_neighbors(self.width(), self.height(), cell)
    }
}
