//! Error types for the flat slider bearing element

use thiserror::Error;

/// Main error type for bearing element operations
#[derive(Error, Debug)]
pub enum BearingError {
    #[error("Node {0} not found in domain")]
    NodeNotFound(i32),

    #[error("Duplicate node tag {0} already exists")]
    DuplicateNode(i32),

    #[error("Element {0} is not connected to a domain")]
    NotConnected(i32),

    #[error("Invalid orientation: {0}")]
    InvalidOrientation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(
        "Element {element}: shear force did not converge after {iterations} iterations (residual {residual:e})"
    )]
    ConvergenceFailed {
        element: i32,
        iterations: usize,
        residual: f64,
    },

    #[error("Unknown model type '{0}'")]
    UnknownModelType(String),

    #[error("Material error: {0}")]
    MaterialFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for bearing element operations
pub type BearingResult<T> = Result<T, BearingError>;
