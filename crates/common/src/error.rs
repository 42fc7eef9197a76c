//! Error types shared across TargetKit crates.

use std::path::PathBuf;

/// Top-level error type for TargetKit operations.
#[derive(Debug, thiserror::Error)]
pub enum TargetkitError {
    #[error("Parse error in {path} at line {line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Mesh error: {message}")]
    Mesh { message: String },

    #[error("Object '{name}' is not an eligible base mesh")]
    NotEligibleBase { name: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using TargetkitError.
pub type TargetkitResult<T> = Result<T, TargetkitError>;

impl TargetkitError {
    pub fn parse(path: impl Into<PathBuf>, line: usize, msg: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line,
            message: msg.into(),
        }
    }

    pub fn mesh(msg: impl Into<String>) -> Self {
        Self::Mesh {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }
}
