//! voidfill-core - Basic data structures for hole filling
//!
//! This crate provides the grid data model shared by the voidfill crates:
//!
//! - [`Dims`] / [`Rank`] - Shape of a flat 1D/2D/3D grid and its boundary
//! - [`Volume`] - Owned grid buffer
//! - [`Voxel`] - Input element types (zero = background, non-zero = foreground)
//! - [`Label`] - Unsigned integer types used for component labels

pub mod dims;
pub mod error;
pub mod volume;
pub mod voxel;

pub use dims::{Dims, Rank};
pub use error::{Error, Result};
pub use volume::Volume;
pub use voxel::{Label, Voxel, same_class};
