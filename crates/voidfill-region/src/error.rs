//! Error types for voidfill-region

use thiserror::Error;

/// Errors that can occur during void filling and labeling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error (bad dimensions or buffer length)
    #[error("core error: {0}")]
    Core(#[from] voidfill_core::Error),

    /// Provisional label space exhausted
    #[error("labels exhausted: capacity {capacity} exceeded")]
    LabelsExhausted { capacity: usize },

    /// Output label type cannot hold the number of components
    #[error("label overflow: {count} components do not fit in {type_name}")]
    LabelOverflow {
        count: usize,
        type_name: &'static str,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
