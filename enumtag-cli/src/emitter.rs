//! Formats rendered sources and hands them to the writer.
//!
//! Each of the two sources is formatted and written on its own: a failure
//! in one does not stop the other from being attempted, and all failures
//! are reported together.

use crate::error::EmitError;
use crate::writer::{FileWriter, WriteResult};
use enumtag::RenderedOutput;
use std::path::{Path, PathBuf};

/// File name suffix of the encoding implementation.
pub const ENCODING_SUFFIX: &str = "_enum_encoding.rs";

/// File name suffix of the encoding tests.
pub const ENCODING_TEST_SUFFIX: &str = "_enum_encoding_test.rs";

/// Where the two generated files go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub code: PathBuf,
    pub test: PathBuf,
}

impl OutputPaths {
    /// Paths next to `source`, named after the lowercased type.
    pub fn for_source(source: &Path, type_name: &str) -> Self {
        let dir = source.parent().unwrap_or_else(|| Path::new(""));
        let stem = type_name.to_lowercase();

        Self {
            code: dir.join(format!("{stem}{ENCODING_SUFFIX}")),
            test: dir.join(format!("{stem}{ENCODING_TEST_SUFFIX}")),
        }
    }
}

/// Validate `code` as a Rust file and pretty-print it.
pub fn format_source(code: &str, path: &Path) -> Result<String, EmitError> {
    let file = syn::parse_file(code).map_err(|e| EmitError::format(path.to_path_buf(), &e))?;
    Ok(prettyplease::unparse(&file))
}

/// Formats and persists rendered output.
#[derive(Debug)]
pub struct Emitter {
    writer: FileWriter,
}

impl Emitter {
    pub fn new(writer: FileWriter) -> Self {
        Self { writer }
    }

    /// Emit both sources.
    ///
    /// Returns the write results when both succeed, otherwise every failure.
    /// A source that formats and writes fine is persisted even when the
    /// other fails.
    pub fn emit(
        &self,
        output: &RenderedOutput,
        paths: &OutputPaths,
    ) -> Result<Vec<WriteResult>, EmitError> {
        let mut results = Vec::with_capacity(2);
        let mut errors = Vec::new();

        for (code, path) in [(&output.code, &paths.code), (&output.test, &paths.test)] {
            match self.emit_one(code, path) {
                Ok(result) => results.push(result),
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "emit failed");
                    errors.push(e);
                }
            }
        }

        match EmitError::join(errors) {
            Some(error) => Err(error),
            None => Ok(results),
        }
    }

    fn emit_one(&self, code: &str, path: &Path) -> Result<WriteResult, EmitError> {
        let formatted = format_source(code, path)?;
        Ok(self.writer.write(path, &formatted)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::WriteMode;
    use tempfile::TempDir;

    const VALID: &str = "pub const RED : u8 = 0 ;";
    const MALFORMED: &str = "const X u8 = 1;";

    fn rendered(code: &str, test: &str) -> RenderedOutput {
        RenderedOutput {
            code: code.to_string(),
            test: test.to_string(),
        }
    }

    #[test]
    fn test_output_paths() {
        let paths = OutputPaths::for_source(Path::new("src/paint/color.rs"), "Color");
        assert_eq!(paths.code, PathBuf::from("src/paint/color_enum_encoding.rs"));
        assert_eq!(paths.test, PathBuf::from("src/paint/color_enum_encoding_test.rs"));
    }

    #[test]
    fn test_output_paths_bare_file_name() {
        let paths = OutputPaths::for_source(Path::new("status.rs"), "HTTPStatus");
        assert_eq!(paths.code, PathBuf::from("httpstatus_enum_encoding.rs"));
        assert_eq!(paths.test, PathBuf::from("httpstatus_enum_encoding_test.rs"));
    }

    #[test]
    fn test_format_source_canonicalizes() {
        let formatted = format_source(VALID, Path::new("out.rs")).unwrap();
        assert_eq!(formatted, "pub const RED: u8 = 0;\n");
    }

    #[test]
    fn test_format_source_rejects_invalid() {
        let result = format_source(MALFORMED, Path::new("out.rs"));
        assert!(matches!(result, Err(EmitError::Format { ref path, .. }) if path == Path::new("out.rs")));
    }

    #[test]
    fn test_emit_writes_both() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::for_source(&dir.path().join("color.rs"), "Color");

        let emitter = Emitter::new(FileWriter::new(WriteMode::Write));
        let results = emitter.emit(&rendered(VALID, VALID), &paths).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(WriteResult::was_written));
        assert_eq!(
            std::fs::read_to_string(&paths.code).unwrap(),
            "pub const RED: u8 = 0;\n"
        );
        assert!(paths.test.exists());
    }

    #[test]
    fn test_malformed_test_source_still_writes_code() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::for_source(&dir.path().join("color.rs"), "Color");

        let emitter = Emitter::new(FileWriter::new(WriteMode::Write));
        let error = emitter.emit(&rendered(VALID, MALFORMED), &paths).unwrap_err();

        assert!(matches!(error, EmitError::Format { ref path, .. } if *path == paths.test));
        assert!(paths.code.exists());
        assert!(!paths.test.exists());
    }

    #[test]
    fn test_both_failures_are_reported() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::for_source(&dir.path().join("color.rs"), "Color");

        let emitter = Emitter::new(FileWriter::new(WriteMode::Write));
        let error = emitter
            .emit(&rendered(MALFORMED, MALFORMED), &paths)
            .unwrap_err();

        let causes = error.causes();
        assert_eq!(causes.len(), 2);
        assert!(matches!(causes[0], EmitError::Format { path, .. } if *path == paths.code));
        assert!(matches!(causes[1], EmitError::Format { path, .. } if *path == paths.test));
        assert!(!paths.code.exists());
        assert!(!paths.test.exists());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let paths = OutputPaths::for_source(&dir.path().join("color.rs"), "Color");

        let emitter = Emitter::new(FileWriter::new(WriteMode::DryRun));
        let results = emitter.emit(&rendered(VALID, VALID), &paths).unwrap();

        assert_eq!(results.len(), 2);
        assert!(!paths.code.exists());
        assert!(!paths.test.exists());
    }
}
