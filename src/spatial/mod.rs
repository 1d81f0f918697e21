//! Grid storage and the operations built on it
//!
//! This module contains:
//! - The row-major grid container and its checked accessors
//! - Zero-based coordinates with a 1-based view
//! - Neighbor enumeration under edge, corner and full adjacency
//! - Region traversal, sub-grids, rows, columns, copy-in and transforms
//! - Conversions to and from `ndarray` matrices

/// Conversions between grids and `ndarray` matrices
pub mod array;
/// Zero-based grid coordinates
pub mod cell_index;
/// Grid storage and element access
pub mod grid;
/// Edge, corner and full neighbor enumeration
pub mod neighbors;
/// Region traversal, extraction and copy-in
pub mod region;

pub use cell_index::CellIndex;
pub use grid::Grid;
pub use region::RangeTraversal;
