//! Error types for token compilation.
//!
//! The core pipeline only ever fails with [`TokenError::CircularReference`].
//! The remaining variants come from the outer layers: document loading, the
//! registry, and configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or compiling a token document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Resolving an alias would re-enter a token that is still being resolved.
    ///
    /// `path` is the chain of identity keys that led to the cycle; its last
    /// element is the offending reference.
    #[error("circular reference: {}", .path.join(" -> "))]
    CircularReference { path: Vec<String> },

    /// A token document or configuration file could not be parsed.
    #[error("failed to parse {}: {message}", location(.path))]
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// A file could not be read, or a directory could not be registered.
    #[error("failed to load token document: {message}")]
    Load { message: String },

    /// No registered source provides a document with this name.
    #[error("token document not found: {name}")]
    NotFound { name: String },
}

impl TokenError {
    /// Returns the identity key that closed the cycle, for circular references.
    pub fn offending_reference(&self) -> Option<&str> {
        match self {
            TokenError::CircularReference { path } => path.last().map(String::as_str),
            _ => None,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "token document".to_string())
}

/// Result type for token operations.
pub type Result<T> = std::result::Result<T, TokenError>;
