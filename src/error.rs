//! Error types for trindex.
//!
//! The indices only fail when a vertex index runs out of handles; every other
//! error comes from reading and writing mesh files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur while loading, saving or growing meshes.
#[derive(Error, Debug)]
pub enum MeshError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of a mesh file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {source}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<MeshError>,
    },

    /// Error saving mesh to file.
    #[error("failed to save mesh to {path}: {source}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: Box<MeshError>,
    },

    /// Invalid parameter value.
    #[error("invalid parameter: {name} = {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The invalid value (as string).
        value: String,
        /// Reason the value is invalid.
        reason: &'static str,
    },

    /// Every vertex handle of the index type is already allocated.
    #[error("out of vertex handles: {requested} requested, {available} left")]
    HandlesExhausted {
        /// Handles the operation needed.
        requested: usize,
        /// Handles still free.
        available: usize,
    },

    /// Index state does not allow the requested operation.
    #[error("invalid mesh state: {0}")]
    InvalidState(String),
}

impl MeshError {
    /// Create a parse error for a 1-based line number.
    pub fn parse<T: std::fmt::Display>(line: usize, message: T) -> Self {
        MeshError::Parse {
            line,
            message: message.to_string(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_param<T: std::fmt::Display>(
        name: &'static str,
        value: T,
        reason: &'static str,
    ) -> Self {
        MeshError::InvalidParameter {
            name,
            value: value.to_string(),
            reason,
        }
    }
}
