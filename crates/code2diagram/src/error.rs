//! Error types for Code2Diagram operations.
//!
//! This module provides the main error type [`Code2DiagramError`]. The scan,
//! normalization and diagram stages themselves never fail; the variants cover
//! caller-side validation, I/O, configuration and the optional repository
//! fetcher.

use std::io;

use thiserror::Error;

#[cfg(feature = "github")]
use crate::github::FetchError;

/// The main error type for Code2Diagram operations.
#[derive(Debug, Error)]
pub enum Code2DiagramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No code provided")]
    EmptySubmission,

    /// An unexpected failure inside the analysis pipeline. The message shown
    /// to callers is fixed; the payload keeps the underlying reason.
    #[error("Failed to analyze code")]
    Analysis(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[cfg(feature = "github")]
    #[error(transparent)]
    Fetch(#[from] FetchError),
}
