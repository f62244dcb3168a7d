//! Error types for sortvis-vis.

use thiserror::Error;

/// Result type for sortvis-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or serving the visualizer.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// Sorting fault
    #[error("Sort error: {0}")]
    Sort(#[from] sortvis_core::SortError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// WebSocket transport error
    #[error("Transport error: {0}")]
    Transport(#[from] axum::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
