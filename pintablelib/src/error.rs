//! Error types for pintablelib
//!
//! Sorting, layout and state transitions never fail: malformed columns, odd
//! cell values and unusable comparators all degrade to a best-effort result.
//! Errors only surface while loading a table document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading table input
#[derive(Error, Debug)]
pub enum PintableError {
    /// Failed to read a document file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Document is not valid JSON or does not match the expected shape
    #[error("failed to parse table document: {0}")]
    Json(#[from] serde_json::Error),

    /// Document parsed but is structurally unusable
    #[error("invalid table document: {0}")]
    InvalidDocument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
