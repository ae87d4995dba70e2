//! voidfill-region - Void filling and component labeling
//!
//! This crate provides the hole-filling algorithms:
//!
//! - **Flood fill** - Border-reachability sweep with run-length seeding
//! - **Fused labeling** - Connected components with enclosed voids absorbed
//! - **Bounded labeling** - Void filling with an 8-bit online label space
//! - **Disjoint set** - Union-find used by both labeling passes
//!
//! Grids are flat buffers in x-fastest order described by a
//! [`voidfill_core::Dims`]. Connectivity is face adjacency: 2 neighbours in
//! 1D, 4 in 2D and 6 in 3D. Any non-zero value is foreground.
//!
//! # Examples
//!
//! ## Filling a hole
//!
//! ```
//! use voidfill_region::fill_voids_2d;
//!
//! let mut grid = vec![
//!     1u8, 1, 1,
//!     1,   0, 1,
//!     1,   1, 1,
//! ];
//! let filled = fill_voids_2d(&mut grid, 3, 3).unwrap();
//! assert_eq!(filled, 1);
//! assert!(grid.iter().all(|&v| v == 1));
//! ```
//!
//! ## Labeling components
//!
//! ```
//! use voidfill_core::Dims;
//! use voidfill_region::fill_voids_labeled;
//!
//! let grid = vec![
//!     1u8, 1, 1, 0, 2,
//!     1,   0, 1, 0, 2,
//!     1,   1, 1, 0, 2,
//! ];
//! let dims = Dims::new_2d(5, 3).unwrap();
//! let (labels, stats) = fill_voids_labeled::<u8, u32>(&grid, dims).unwrap();
//! assert_eq!(labels, vec![
//!     1, 1, 1, 0, 2,
//!     1, 1, 1, 0, 2,
//!     1, 1, 1, 0, 2,
//! ]);
//! assert_eq!(stats.num_labels, 2);
//! assert_eq!(stats.filled, 1);
//! ```

pub mod error;
pub mod label;
pub mod online;
pub mod seedfill;
pub mod unionfind;

// Re-export core types
pub use voidfill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export seedfill functions
pub use seedfill::{
    count_voids, fill_holes, fill_voids, fill_voids_2d, fill_voids_3d, fill_volume,
};

// Re-export labeling types and functions
pub use label::{LabelStats, fill_voids_labeled, fill_voids_labeled_into, label_volume};

// Re-export online labeling types and functions
pub use online::{DEFAULT_LABEL_CEILING, OnlineOptions, fill_voids_bounded};

// Re-export disjoint set
pub use unionfind::DisjointSet;
