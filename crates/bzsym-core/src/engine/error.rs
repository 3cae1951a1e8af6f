use super::config::ConfigError;
use crate::core::models::dataset::DatasetError;
use crate::core::symmetry::SymmetryError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Shape mismatch: {ibz_len} IBZ points but {func_len} function values")]
    ShapeMismatch { ibz_len: usize, func_len: usize },

    #[error("Malformed Brillouin zone path: {0}")]
    MalformedBrillouinZone(String),

    #[error("Point group generation failed: {source}")]
    GroupGeneration {
        #[from]
        source: SymmetryError,
    },
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::InvalidArgument(e.to_string())
    }
}

impl From<DatasetError> for EngineError {
    fn from(e: DatasetError) -> Self {
        match e {
            DatasetError::LengthMismatch {
                points,
                diagonal,
                off_diagonal,
            } => EngineError::ShapeMismatch {
                ibz_len: points,
                func_len: if diagonal != points {
                    diagonal
                } else {
                    off_diagonal
                },
            },
        }
    }
}
