//! Error types for onnxviz
//!
//! This module defines all error types used throughout the crate.
//!
//! Only model loading and output writing are fatal. Everything the walker and
//! the label pipeline encounter mid-traversal (unparseable shapes, malformed
//! attributes, a broken operator) is recoverable: it is logged, accumulated
//! as a warning, and the walk continues with a partial graph.

use thiserror::Error;

/// Main error type for visualization operations
#[derive(Error, Debug)]
pub enum VizError {
    /// Invalid or unreadable model
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Invalid node configuration
    #[error("Invalid node: {0}")]
    InvalidNode(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Output rendering failed
    #[error("Render failed: {0}")]
    RenderFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Protobuf decode error
    #[error("Protobuf decode error: {0}")]
    ProtoDecode(#[from] prost::DecodeError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for visualization operations
pub type VizResult<T> = Result<T, VizError>;
