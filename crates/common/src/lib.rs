//! Common types and utilities for Discovery Bridge
//!
//! This crate contains the shared error type and result alias used across
//! the converter, validator, and CLI components.

use thiserror::Error;

/// Errors that can occur while acquiring or converting a document
#[derive(Error, Debug)]
pub enum BridgeError {
    /// The caller supplied both or neither of the two document sources.
    /// Raised before any translation begins.
    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Parse error: {0}")]
    Parse(String),

    /// The upstream Discovery fetch failed. Carries the HTTP status code,
    /// response body, and response headers reported by the collaborator.
    #[error("Fetch of {url} failed with status {status}: {body}")]
    Fetch {
        url: String,
        status: u16,
        body: String,
        headers: Vec<(String, String)>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;
