//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to read a fixture volume
    #[error("failed to load fixture '{path}': {message}")]
    FixtureLoad { path: String, message: String },

    /// Fixture text is not a well-formed volume
    #[error("malformed fixture at line {line}: {message}")]
    FixtureParse { line: usize, message: String },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] voidfill_core::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
