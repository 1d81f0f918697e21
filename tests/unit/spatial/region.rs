//! Tests for range traversal, sub-grids, rows, columns, copy-in and transforms

#[cfg(test)]
mod tests {
    use cellgrid::{CellIndex, Grid, GridError, Position, RangeTraversal, Result};

    fn twelve() -> Result<Grid<i32>> {
        Grid::from_cells(4, (1..=12).collect())
    }

    fn points(traversal: impl Iterator<Item = CellIndex>) -> Vec<(isize, isize)> {
        traversal.map(|cell| (cell.x, cell.y)).collect()
    }

    // Tests closed traversal visits rows left to right, top to bottom
    // Verified by advancing y before x
    #[test]
    fn test_closed_traversal_is_row_major() {
        let traversal = RangeTraversal::closed(CellIndex::new(1, 2), CellIndex::new(2, 4));

        assert_eq!(traversal.remaining(), Some(6));
        assert_eq!(
            points(traversal),
            vec![(1, 2), (2, 2), (1, 3), (2, 3), (1, 4), (2, 4)]
        );
    }

    // Tests a traversal can be replayed from a clone or by restarting
    // Verified by sharing the cursor between clones
    #[test]
    fn test_traversal_is_restartable() {
        let mut traversal = RangeTraversal::closed(CellIndex::ORIGIN, CellIndex::new(1, 1));
        let replay = traversal.clone();

        assert_eq!(traversal.next(), Some(CellIndex::ORIGIN));
        assert_eq!(traversal.remaining(), Some(3));
        assert_eq!(replay.count(), 4);
        assert_eq!(traversal.restarted().count(), 4);
        assert_eq!(traversal.start(), CellIndex::ORIGIN);
        assert_eq!(traversal.end(), CellIndex::new(1, 1));
    }

    // Tests inverted and half-open-empty ranges yield nothing
    // Verified by treating start > end as a single cell
    #[test]
    fn test_empty_traversals() {
        let inverted = RangeTraversal::closed(CellIndex::new(2, 0), CellIndex::new(1, 3));
        let empty = RangeTraversal::half_open(CellIndex::new(1, 1), CellIndex::new(1, 5));

        assert_eq!(inverted.remaining(), Some(0));
        assert!(points(inverted).is_empty());
        assert!(points(empty).is_empty());
    }

    // Tests ranges wider than the address space are still walked lazily
    // Verified by computing the row width with unchecked subtraction
    #[test]
    fn test_huge_ranges_do_not_overflow() -> Result<()> {
        let grid = twelve()?;
        let far = CellIndex::new(isize::MAX, isize::MAX);
        let unbounded = grid.indices_of(CellIndex::ORIGIN, far);

        assert_eq!(unbounded.remaining(), None);
        assert_eq!(unbounded.size_hint(), (usize::MAX, None));
        assert_eq!(points(unbounded.take(2)), vec![(0, 0), (1, 0)]);

        let left = CellIndex::new(isize::MIN, 0);
        let wide = RangeTraversal::closed(left, CellIndex::ORIGIN);
        assert_eq!(wide.remaining(), Some(usize::MAX / 2 + 2));
        assert_eq!(wide.size_hint().1, wide.remaining());
        Ok(())
    }

    // Tests indices_of excludes its end while sub_grid includes it
    // Verified by building the half-open traversal without subtracting one
    #[test]
    fn test_indices_are_half_open() -> Result<()> {
        let grid = twelve()?;

        assert_eq!(
            points(grid.indices_of(CellIndex::new(1, 0), CellIndex::new(3, 2))),
            vec![(1, 0), (2, 0), (1, 1), (2, 1)]
        );
        assert_eq!(grid.indices_from(CellIndex::new(2, 1)).count(), 4);
        assert_eq!(grid.indices_from(CellIndex::ORIGIN).count(), grid.len());

        let closed = grid.sub_grid(CellIndex::new(1, 0), CellIndex::new(3, 2))?;
        assert_eq!(closed.dimensions(), (3, 3));
        Ok(())
    }

    // Tests for_each_from walks the rectangle down to the last cell
    // Verified by restarting rows at x = 0
    #[test]
    fn test_for_each_from() -> Result<()> {
        let grid = twelve()?;
        let mut seen = Vec::new();

        grid.for_each_from(CellIndex::new(2, 1), |cell, &value| seen.push((cell, value)))?;

        assert_eq!(
            seen,
            vec![
                (CellIndex::new(2, 1), 7),
                (CellIndex::new(3, 1), 8),
                (CellIndex::new(2, 2), 11),
                (CellIndex::new(3, 2), 12),
            ]
        );
        Ok(())
    }

    // Tests for_each_in validates before visiting anything
    // Verified by checking bounds lazily inside the loop
    #[test]
    fn test_for_each_in_rejects_bad_regions() -> Result<()> {
        let grid = twelve()?;
        let mut visited = 0;

        let outside = grid.for_each_in(CellIndex::ORIGIN, CellIndex::new(4, 0), |_, _| {
            visited += 1;
        });
        assert!(matches!(
            outside,
            Err(GridError::IndexOutOfBounds {
                position: Position::Cell(CellIndex { x: 4, y: 0 }),
                ..
            })
        ));

        let inverted = grid.for_each_in(CellIndex::new(2, 2), CellIndex::new(1, 2), |_, _| {
            visited += 1;
        });
        assert!(matches!(inverted, Err(GridError::InvalidRegion { .. })));

        let negative = grid.for_each_from(CellIndex::new(-1, 0), |_, _| visited += 1);
        assert!(negative.is_err());

        assert_eq!(visited, 0);
        Ok(())
    }

    // Tests extracting the whole grid reproduces it
    // Verified by computing the width without the +1
    #[test]
    fn test_sub_grid_identity() -> Result<()> {
        let grid = twelve()?;

        assert_eq!(grid.sub_grid(CellIndex::ORIGIN, grid.last_cell())?, grid);
        assert_eq!(grid.sub_grid_from(CellIndex::ORIGIN)?, grid);
        Ok(())
    }

    // Tests oversized ends are clamped to the grid's edge
    // Verified by removing the clamp
    #[test]
    fn test_sub_grid_clamps_end() -> Result<()> {
        let grid = twelve()?;

        let corner = grid.sub_grid(CellIndex::new(2, 1), CellIndex::new(100, 100))?;
        assert_eq!(corner.dimensions(), (2, 2));
        assert_eq!(corner.cells(), &[7, 8, 11, 12]);

        let tail = grid.sub_grid_from(CellIndex::new(1, 2))?;
        assert_eq!(tail.cells(), &[10, 11, 12]);
        Ok(())
    }

    // Tests sub-grid preconditions
    // Verified by clamping before the ordering check
    #[test]
    fn test_sub_grid_errors() -> Result<()> {
        let grid = twelve()?;

        assert!(matches!(
            grid.sub_grid(CellIndex::new(2, 0), CellIndex::new(1, 2)),
            Err(GridError::InvalidRegion { .. })
        ));
        assert!(matches!(
            grid.sub_grid(CellIndex::new(0, 2), CellIndex::new(3, 1)),
            Err(GridError::InvalidRegion { .. })
        ));
        assert!(matches!(
            grid.sub_grid_from(CellIndex::new(4, 0)),
            Err(GridError::IndexOutOfBounds { .. })
        ));
        assert!(matches!(
            grid.sub_grid(CellIndex::new(-1, 0), CellIndex::new(1, 1)),
            Err(GridError::IndexOutOfBounds { .. })
        ));
        Ok(())
    }

    // Tests rows and columns keep their source values and shape
    // Verified by swapping row and column corners
    #[test]
    fn test_row_and_column() -> Result<()> {
        let grid = twelve()?;

        let row = grid.row(1)?;
        assert_eq!(row.dimensions(), (4, 1));
        assert_eq!(row.cells(), &[5, 6, 7, 8]);

        let column = grid.column(0)?;
        assert_eq!(column.dimensions(), (1, 3));
        assert_eq!(column.cells(), &[1, 5, 9]);

        assert_eq!(grid.column(3)?.cells(), &[4, 8, 12]);
        assert!(grid.row(3).is_err());
        assert!(grid.column(4).is_err());
        Ok(())
    }

    // Tests copy at the origin followed by extraction returns the source
    // Verified by writing to target + 1
    #[test]
    fn test_copy_then_extract() -> Result<()> {
        let source = Grid::from_cells(2, vec![1, 2, 3, 4])?;
        let mut destination = Grid::new(5, 4, 0)?;

        let written = destination.copy_from(&source, CellIndex::ORIGIN);

        assert_eq!(written, 4);
        assert_eq!(
            destination.sub_grid(CellIndex::ORIGIN, CellIndex::new(1, 1))?,
            source
        );
        assert_eq!(destination.iter().filter(|&&v| v != 0).count(), 4);
        Ok(())
    }

    // Tests a copy overhanging the destination writes only the overlap
    // Verified by wrapping overflowing columns to the next row
    #[test]
    fn test_partial_copy_is_clipped() -> Result<()> {
        let source = Grid::new(3, 3, 0)?;
        let mut destination = twelve()?;

        let written = destination.copy_from(&source, CellIndex::new(2, 1));

        assert_eq!(written, 4);
        assert_eq!(
            destination.cells(),
            &[1, 2, 3, 4, 5, 6, 0, 0, 9, 10, 0, 0]
        );
        Ok(())
    }

    // Tests an out-of-bounds destination leaves the grid untouched
    // Verified by clipping negative origins instead of skipping them
    #[test]
    fn test_copy_outside_is_noop() -> Result<()> {
        let source = Grid::new(3, 3, 9)?;
        let mut destination = twelve()?;

        assert_eq!(destination.copy_from(&source, CellIndex::new(4, 0)), 0);
        assert_eq!(destination.copy_from(&source, CellIndex::new(0, 3)), 0);
        assert_eq!(destination.copy_from(&source, CellIndex::new(-1, -1)), 0);
        assert_eq!(destination, twelve()?);
        Ok(())
    }

    // Tests transform maps every cell in flat order without touching the source
    // Verified by passing the value in place of the flat index
    #[test]
    fn test_transform() -> Result<()> {
        let grid = twelve()?;

        let doubled = grid.transform(|_, &value| value * 2);
        assert_eq!(doubled.dimensions(), grid.dimensions());
        assert_eq!(
            doubled.cells(),
            grid.iter().map(|v| v * 2).collect::<Vec<_>>().as_slice()
        );

        let mut order = Vec::new();
        let labels = grid.transform(|index, value| {
            order.push(index);
            format!("{index}:{value}")
        });
        assert_eq!(order, (0..12).collect::<Vec<_>>());
        assert_eq!(labels.get(1, 2)?, "9:10");
        assert_eq!(grid, twelve()?);
        Ok(())
    }

    // Tests derived grids own their buffers
    // Verified by returning a view sharing the source storage
    #[test]
    fn test_results_do_not_alias_source() -> Result<()> {
        let mut grid = twelve()?;
        let row = grid.row(0)?;
        let doubled = grid.transform(|_, &v| v * 2);

        grid.set(0, 0, 100)?;

        assert_eq!(row.get(0, 0)?, &1);
        assert_eq!(doubled.get(0, 0)?, &2);
        Ok(())
    }
}
