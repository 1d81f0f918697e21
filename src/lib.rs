//! Fixed-size, row-major two-dimensional grids
//!
//! A [`Grid`] stores `width * height` homogeneous cells in one contiguous
//! buffer and addresses them by geometric `(x, y)` coordinates ([`CellIndex`])
//! or by flat index. On top of that storage the crate provides neighbor
//! enumeration, rectangular region traversal, sub-grid extraction, bounded
//! copy-in and element-wise transforms, plus adapters for text, `ndarray`
//! and PNG images.

#![forbid(unsafe_code)]

/// Error handling, text layout and file adapters
pub mod io;
/// Grid storage, coordinates, neighbors and region operations
pub mod spatial;

pub use io::error::{GridError, Position, Result};
pub use io::text::TextLayout;
pub use spatial::{CellIndex, Grid, RangeTraversal};
