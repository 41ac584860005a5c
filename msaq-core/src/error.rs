//! Structured error types for alignment scoring.

use thiserror::Error;

/// Unified error type for all msaq operations.
#[derive(Debug, Error)]
pub enum MsaqError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input: ragged or empty alignment, index out of range, bad weights.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A symbol pair that the substitution matrix does not define.
    #[error("no score for pair ({a}, {b}) in matrix {matrix}")]
    Lookup { a: char, b: char, matrix: String },

    /// Malformed substitution matrix or structure data.
    #[error("file format error at line {line}: {message}")]
    FileFormat { line: usize, message: String },
}

impl MsaqError {
    /// Shorthand for a [`MsaqError::FileFormat`] at a 1-based line number.
    pub fn file_format(line: usize, message: impl Into<String>) -> Self {
        MsaqError::FileFormat {
            line,
            message: message.into(),
        }
    }
}

/// Convenience alias used throughout the msaq crates.
pub type Result<T> = std::result::Result<T, MsaqError>;
