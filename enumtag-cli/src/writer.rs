//! File writer for generated sources.
//!
//! Writes formatted code to disk, or in dry-run mode hands it back
//! untouched, or in check mode compares it against what is already there.

use crate::error::WriteError;
use std::path::{Path, PathBuf};

/// How the writer treats its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Write files to disk.
    #[default]
    Write,
    /// Return content without writing.
    DryRun,
    /// Compare content with the existing file.
    Check,
}

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
    /// Check - content was compared with the file on disk.
    Checked {
        /// Path that was compared.
        path: PathBuf,
        /// Whether the file exists and matches.
        up_to_date: bool,
    },
}

/// File writer with dry-run and check support.
#[derive(Debug, Default)]
pub struct FileWriter {
    mode: WriteMode,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(mode: WriteMode) -> Self {
        Self { mode }
    }

    /// Write content to a file.
    pub fn write(&self, path: &Path, content: &str) -> Result<WriteResult, WriteError> {
        match self.mode {
            WriteMode::DryRun => Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            }),
            WriteMode::Check => self.check(path, content),
            WriteMode::Write => self.persist(path, content),
        }
    }

    fn persist(&self, path: &Path, content: &str) -> Result<WriteResult, WriteError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    fn check(&self, path: &Path, content: &str) -> Result<WriteResult, WriteError> {
        let up_to_date = match std::fs::read_to_string(path) {
            Ok(existing) => existing == content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                return Err(WriteError::ReadFile {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        Ok(WriteResult::Checked {
            path: path.to_path_buf(),
            up_to_date,
        })
    }

    /// The mode this writer runs in.
    pub fn mode(&self) -> WriteMode {
        self.mode
    }
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
            WriteResult::Checked { path, .. } => path,
        }
    }

    /// Check if the file was written.
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }

    /// False only for a check that found a missing or different file.
    pub fn is_up_to_date(&self) -> bool {
        !matches!(
            self,
            WriteResult::Checked {
                up_to_date: false,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONTENT: &str = "pub const RED: u8 = 0;\n";

    #[test]
    fn test_write_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color_enum_encoding.rs");

        let writer = FileWriter::new(WriteMode::Write);
        let result = writer.write(&path, CONTENT).unwrap();

        assert!(matches!(result, WriteResult::Written { bytes, .. } if bytes == CONTENT.len()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONTENT);
    }

    #[test]
    fn test_write_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/dir/color_enum_encoding.rs");

        let writer = FileWriter::default();
        let result = writer.write(&path, CONTENT).unwrap();

        assert!(result.was_written());
        assert!(path.exists());
    }

    #[test]
    fn test_write_into_missing_parent_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let writer = FileWriter::new(WriteMode::Write);
        let result = writer.write(&blocker.join("out.rs"), CONTENT);

        assert!(result.is_err());
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color_enum_encoding.rs");

        let writer = FileWriter::new(WriteMode::DryRun);
        let result = writer.write(&path, CONTENT).unwrap();

        assert!(!path.exists());
        match result {
            WriteResult::DryRun { content, .. } => assert_eq!(content, CONTENT),
            other => panic!("expected dry run, got {:?}", other),
        }
    }

    #[test]
    fn test_check_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color_enum_encoding.rs");

        let result = FileWriter::new(WriteMode::Check).write(&path, CONTENT).unwrap();

        assert!(!result.is_up_to_date());
        assert!(!path.exists());
    }

    #[test]
    fn test_check_compares_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("color_enum_encoding.rs");
        std::fs::write(&path, CONTENT).unwrap();

        let writer = FileWriter::new(WriteMode::Check);
        assert!(writer.write(&path, CONTENT).unwrap().is_up_to_date());
        assert!(!writer.write(&path, "pub const BLUE: u8 = 1;\n").unwrap().is_up_to_date());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), CONTENT);
    }

    #[test]
    fn test_write_result_path() {
        let path = PathBuf::from("/test/color_enum_encoding.rs");

        let written = WriteResult::Written {
            path: path.clone(),
            bytes: 100,
        };
        assert_eq!(written.path(), &path);

        let checked = WriteResult::Checked {
            path: path.clone(),
            up_to_date: true,
        };
        assert_eq!(checked.path(), &path);
        assert!(!checked.was_written());
    }
}
