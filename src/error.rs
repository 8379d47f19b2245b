//! Error types for batch renaming.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for planning and applying renames.
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Glob pattern error: {0}")]
    Glob(#[from] globset::Error),

    #[error("Failed to walk {path}: {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{from:?} to {to:?}: {source}")]
    Transfer {
        from: PathBuf,
        to: PathBuf,
        completed: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RenameError {
    /// Process exit code for this error: 1 for bad options, 2 for filesystem failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenameError::InvalidConfig(_) | RenameError::Regex(_) | RenameError::Glob(_) => 1,
            _ => 2,
        }
    }

    /// Number of operations that succeeded before a transfer failure.
    pub fn completed(&self) -> usize {
        match self {
            RenameError::Transfer { completed, .. } => *completed,
            _ => 0,
        }
    }
}

/// A specialized Result type for rename operations.
pub type Result<T> = std::result::Result<T, RenameError>;
