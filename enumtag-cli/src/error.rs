//! Error types for the CLI.
//!
//! This module defines all error types used throughout the CLI,
//! providing detailed error messages with context for debugging.

use std::path::PathBuf;
use thiserror::Error;

pub use enumtag::GenerateError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Required inputs missing or configuration unreadable.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Source file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source file is not valid Rust.
    #[error("Failed to parse source file: {0}")]
    Parse(#[from] GenerateError),

    /// Formatting or writing a generated file failed.
    #[error("Failed to emit generated code: {0}")]
    Emit(#[from] EmitError),

    /// Validation failed (generated files out of date).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Invalid TOML syntax.
    #[error("Invalid TOML in {path}: {message}")]
    InvalidToml { path: PathBuf, message: String },

    /// One or more of type, file and package were not given.
    #[error("type, file and package name must be provided (missing: {})", .missing.join(", "))]
    MissingInputs { missing: Vec<&'static str> },

    /// IO error reading config.
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error writing output files.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create directory.
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("Failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a previously generated file for comparison.
    #[error("Failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error emitting one or both generated files.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Rendered code is not valid Rust.
    #[error("Generated code for {path} does not parse at {line}:{column}: {message}")]
    Format {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Formatted code could not be persisted.
    #[error(transparent)]
    Write(#[from] WriteError),

    /// Several independent failures.
    #[error("Multiple emit errors:\n{}", format_errors(.0))]
    Multiple(Vec<EmitError>),
}

/// Format multiple errors for display.
fn format_errors(errors: &[EmitError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, e)| format!("  {}. {}", i + 1, e))
        .collect::<Vec<_>>()
        .join("\n")
}

impl EmitError {
    /// Create a format error from the `syn` error that rejected the code.
    pub fn format(path: PathBuf, error: &syn::Error) -> Self {
        let start = error.span().start();
        Self::Format {
            path,
            line: start.line,
            column: start.column + 1,
            message: error.to_string(),
        }
    }

    /// Combine independent failures.
    ///
    /// Returns `None` when there are none and the error itself when there is
    /// exactly one.
    pub fn join(errors: Vec<EmitError>) -> Option<Self> {
        let mut errors = errors;
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }

    /// Every underlying failure, with nested groups flattened.
    pub fn causes(&self) -> Vec<&EmitError> {
        match self {
            Self::Multiple(errors) => errors.iter().flat_map(EmitError::causes).collect(),
            other => vec![other],
        }
    }
}

impl ConfigError {
    /// Create a not found error.
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create an invalid TOML error.
    pub fn invalid_toml(path: PathBuf, message: impl Into<String>) -> Self {
        Self::InvalidToml {
            path,
            message: message.into(),
        }
    }

    /// Create a missing inputs error.
    pub fn missing_inputs(missing: Vec<&'static str>) -> Self {
        Self::MissingInputs { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_error(path: &str) -> EmitError {
        EmitError::Write(WriteError::WriteFile {
            path: PathBuf::from(path),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        })
    }

    #[test]
    fn test_join_none() {
        assert!(EmitError::join(Vec::new()).is_none());
    }

    #[test]
    fn test_join_single_is_unwrapped() {
        let joined = EmitError::join(vec![write_error("a.rs")]).unwrap();
        assert!(matches!(joined, EmitError::Write(_)));
    }

    #[test]
    fn test_join_multiple() {
        let joined = EmitError::join(vec![write_error("a.rs"), write_error("b.rs")]).unwrap();
        assert!(matches!(joined, EmitError::Multiple(ref errors) if errors.len() == 2));
        assert_eq!(joined.causes().len(), 2);

        let message = joined.to_string();
        assert!(message.contains("1. Failed to write file a.rs"));
        assert!(message.contains("2. Failed to write file b.rs"));
    }

    #[test]
    fn test_causes_flattens_nested_groups() {
        let nested = EmitError::Multiple(vec![
            write_error("a.rs"),
            EmitError::Multiple(vec![write_error("b.rs"), write_error("c.rs")]),
        ]);
        assert_eq!(nested.causes().len(), 3);
    }

    #[test]
    fn test_missing_inputs_message() {
        let error = ConfigError::missing_inputs(vec!["type", "package"]);
        assert_eq!(
            error.to_string(),
            "type, file and package name must be provided (missing: type, package)"
        );
    }

    #[test]
    fn test_format_error_location() {
        let error = syn::parse_file("const X u8 = 1;").unwrap_err();
        let emit = EmitError::format(PathBuf::from("out.rs"), &error);
        assert!(matches!(emit, EmitError::Format { line: 1, .. }));
    }
}
