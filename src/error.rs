//! Error types for the tagging engine.
//!
//! Input errors (empty file list, unreadable file) abort the whole
//! `process` call; there is no per-file recovery. Recognizer non-matches
//! and module-resolution misses are normal control flow and never surface
//! here.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the tagging engine and its supporting layers.
#[derive(Error, Debug)]
pub enum PltagsError {
    /// `process` was called with an empty file list.
    #[error("no input files were provided")]
    NoInput,

    /// A file submitted for scanning could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error outside of file scanning (tags file output, config).
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PltagsError>;
