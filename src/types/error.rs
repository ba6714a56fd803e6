//! Error types for the netwalk library.

use thiserror::Error;

/// All errors that can occur in the netwalk library.
#[derive(Error, Debug)]
pub enum WalkError {
    /// The walker was dereferenced at the end sentinel.
    #[error("Layer walker is out of bounds")]
    OutOfBounds,

    /// Layer not found by name.
    #[error("Layer not found: {0}")]
    LayerNotFound(String),

    /// Data slot not found by name.
    #[error("Data not found: {0}")]
    DataNotFound(String),

    /// Two layers share a name.
    #[error("Duplicate layer name: {0}")]
    DuplicateLayer(String),

    /// A data name is produced twice, or clashes with a declared input.
    #[error("Duplicate data name: {0}")]
    DuplicateData(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed topology description.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for netwalk operations.
pub type WalkResult<T> = Result<T, WalkError>;
