//! Zero-based `(x, y)` grid coordinates with a 1-based convenience view

use std::fmt;

/// An `(x, y)` point addressing a grid cell
///
/// A `CellIndex` is always zero-based. [`CellIndex::from_one_based`] and
/// [`CellIndex::as_one_based`] are views over that same representation for
/// callers who think in 1-based positions.
///
/// Components are signed so that positions left of or above the origin can
/// be expressed; checked grid accessors reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellIndex {
    /// Column, growing to the right
    pub x: isize,
    /// Row, growing downwards
    pub y: isize,
}

impl CellIndex {
    /// The grid origin, top left
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a zero-based coordinate
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    /// Create a coordinate from 1-based components
    ///
    /// `CellIndex::from_one_based(1, 1)` is the origin.
    pub const fn from_one_based(x: isize, y: isize) -> Self {
        Self::new(x - 1, y - 1)
    }

    /// The same point expressed with 1-based components
    #[must_use]
    pub const fn as_one_based(self) -> Self {
        Self::new(self.x + 1, self.y + 1)
    }

    /// Offset this coordinate by `dx` columns and `dy` rows
    #[must_use]
    pub const fn offset(self, dx: isize, dy: isize) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Offset this coordinate, or `None` if either component would overflow
    pub const fn checked_offset(self, dx: isize, dy: isize) -> Option<Self> {
        match (self.x.checked_add(dx), self.y.checked_add(dy)) {
            (Some(x), Some(y)) => Some(Self::new(x, y)),
            _ => None,
        }
    }

    /// Test whether the coordinate lies inside a `width` by `height` extent
    pub const fn is_within(self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}

impl From<(isize, isize)> for CellIndex {
    fn from((x, y): (isize, isize)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
