//! Error types for voidfill-core
//!
//! Provides a unified error type for grid construction and access.
//! Hole filling itself is total over well-formed grids, so the variants
//! here only cover shapes and buffers that do not describe a grid.

use thiserror::Error;

/// voidfill-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Voxel count does not fit in `usize`
    #[error("dimension overflow: {sx}x{sy}x{sz} is not addressable")]
    DimensionOverflow { sx: usize, sy: usize, sz: usize },

    /// Buffer length does not match the grid dimensions
    #[error("buffer size mismatch: expected {expected} voxels, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Coordinate outside the grid
    #[error("coordinate ({x}, {y}, {z}) out of bounds for {sx}x{sy}x{sz} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        sx: usize,
        sy: usize,
        sz: usize,
    },
}

/// Result type alias for voidfill-core operations
pub type Result<T> = std::result::Result<T, Error>;
