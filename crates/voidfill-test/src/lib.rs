//! voidfill-test - Regression test framework for voidfill
//!
//! This crate provides the shared scaffolding for the regression tests:
//!
//! - [`RegParams`] - Indexed comparisons with a summary at `cleanup()`
//! - Fixture loading from `tests/data/volumes/` and synthetic generators
//! - Brute-force reference implementations to compare against
//!
//! # Usage
//!
//! ```ignore
//! use voidfill_test::{RegParams, load_test_volume};
//!
//! let mut rp = RegParams::new("seedfill");
//! let vol = load_test_volume("ring5.txt").unwrap();
//! rp.compare_values(1.0, filled as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
pub mod fixtures;
pub mod oracle;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{
    format_volume, hollow_box, hollow_box_void, hollow_sphere, load_test_volume, parse_volume,
    random_labels, random_volume,
};
pub use oracle::{
    exterior_mask, face_neighbors, reference_components, reference_fill, reference_void_count,
    same_partition,
};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // voidfill-test is at crates/voidfill-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to a fixture volume
pub fn test_data_path(name: &str) -> String {
    format!("{}/tests/data/volumes/{}", workspace_root(), name)
}
