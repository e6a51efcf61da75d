//! Error types for glitch-sort
//!
//! The engine itself has no failure modes beyond allocating its output
//! grid: thresholds are clamped rather than rejected.

use thiserror::Error;

/// Errors that can occur during a sort pass
#[derive(Debug, Error)]
pub enum SortError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glitch_core::Error),
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;
