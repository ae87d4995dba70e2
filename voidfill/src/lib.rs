//! voidfill - Fill enclosed voids in binary and labeled grids
//!
//! A void is a background region that is not connected to the grid
//! boundary through face-adjacent background. This crate fills such
//! regions in 1D, 2D and 3D grids, and can label foreground components
//! with their voids absorbed.
//!
//! # Overview
//!
//! - Run-length flood fill from the boundary ([`region::fill_voids`])
//! - Void filling fused with connected component labeling
//!   ([`region::fill_voids_labeled`])
//! - A fill that works in a bounded 8-bit label space
//!   ([`region::fill_voids_bounded`])
//!
//! # Example
//!
//! ```
//! use voidfill::{Dims, Volume};
//! use voidfill::region::fill_volume;
//!
//! // 4x4x4 cube with a 2x2x2 cavity
//! let dims = Dims::new_3d(4, 4, 4).unwrap();
//! let mut vol = Volume::from_fn(dims, |x, y, z| {
//!     let inner = |c: usize| c == 1 || c == 2;
//!     u8::from(!(inner(x) && inner(y) && inner(z)))
//! });
//! let filled = fill_volume(&mut vol).unwrap();
//! assert_eq!(filled, 8);
//! assert_eq!(vol.count_foreground(), 64);
//! ```

// Re-export core types (grid shape, volumes, element traits)
pub use voidfill_core::*;

// Re-export the algorithms as a module to keep the core names flat
pub use voidfill_region as region;
