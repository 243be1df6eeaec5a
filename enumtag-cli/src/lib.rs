//! # enumtag-cli
//!
//! CLI library for generating JSON encoding code for tagged Rust constants.
//!
//! This crate drives the [`enumtag`] pipeline for one source file: it
//! resolves the inputs, reads the file, renders the encoding sources and
//! formats and writes them next to the input.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and input validation
//! - [`emitter`] - Output paths, formatting and per-file fault isolation
//! - [`writer`] - File output with dry-run and check support
//! - [`logging`] - Diagnostic `tracing` subscriber
//! - [`error`] - Error types and handling

pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod writer;

pub use config::{Config, ConfigManager, Invocation};
pub use emitter::{Emitter, OutputPaths};
pub use error::{CliError, CliResult, EmitError};
pub use writer::{FileWriter, WriteMode, WriteResult};

use std::path::Path;

/// Generate and write the encoding files for one type.
///
/// Fails before touching the filesystem when any input is empty.
pub fn process(type_name: &str, file: &Path, package: &str) -> CliResult<Vec<WriteResult>> {
    let invocation = Invocation::new(type_name, file, package)?;
    run(&invocation, WriteMode::Write)
}

/// Run the whole pipeline for a resolved invocation.
///
/// Read and parse failures stop the run before anything is written. Past
/// that point both output files are attempted independently.
pub fn run(invocation: &Invocation, mode: WriteMode) -> CliResult<Vec<WriteResult>> {
    tracing::debug!(
        type_name = %invocation.type_name,
        file = %invocation.file.display(),
        package = %invocation.package,
        ?mode,
        "resolved inputs"
    );

    let content = read_source(&invocation.file)?;
    let output = enumtag::generate(
        &content,
        &invocation.file,
        &invocation.type_name,
        &invocation.package,
    )?;

    let paths = OutputPaths::for_source(&invocation.file, &invocation.type_name);
    tracing::debug!(
        code = %paths.code.display(),
        test = %paths.test.display(),
        "output paths"
    );

    let results = Emitter::new(FileWriter::new(mode)).emit(&output, &paths)?;
    Ok(results)
}

/// Fail with a validation error naming every stale file.
pub fn ensure_up_to_date(results: &[WriteResult]) -> CliResult<()> {
    let stale: Vec<String> = results
        .iter()
        .filter(|result| !result.is_up_to_date())
        .map(|result| result.path().display().to_string())
        .collect();

    if stale.is_empty() {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "generated files are out of date: {}",
            stale.join(", ")
        )))
    }
}

fn read_source(path: &Path) -> CliResult<String> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
