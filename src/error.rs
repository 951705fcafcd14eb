//! Error types for map generation

use thiserror::Error;

/// Main error type for the generator
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid map dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("invalid noise parameters: frequency {frequency}, octaves {octaves}")]
    InvalidNoiseParams { frequency: f64, octaves: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
