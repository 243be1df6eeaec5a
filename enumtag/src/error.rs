//! Error types for the extraction pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Error raised while turning source text into rendered code.
///
/// Scanning and rendering cannot fail, so the only failure is the source
/// itself not parsing.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Syntax error in the Rust source.
    #[error("Syntax error in {file}:{line}:{column}: {message}")]
    Syntax {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },
}

impl GenerateError {
    /// Create a syntax error with location information.
    pub fn syntax(file: PathBuf, line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            file,
            line,
            column,
            message: message.into(),
        }
    }

    /// Build a syntax error from a `syn` error, keeping its position.
    pub fn from_syn(file: PathBuf, error: &syn::Error) -> Self {
        let start = error.span().start();
        // Columns are zero-based in span locations.
        Self::syntax(file, start.line, start.column + 1, error.to_string())
    }
}
