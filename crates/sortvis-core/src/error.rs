//! Error types for sortvis-core.

use thiserror::Error;

/// Result type for sortvis-core operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors raised while tracing or replaying a sort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// An algorithm or replayed step addressed an index outside the sequence.
    #[error("index {index} out of bounds for sequence of length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// An algorithm key did not name any known algorithm.
    #[error("unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}
