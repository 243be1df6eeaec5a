//! # enumtag
//!
//! Generates serde JSON encoding code for enum-like Rust constants.
//!
//! A source file declares the values of a type and tags each one with a
//! trailing `json:"..."` comment:
//!
//! ```rust,ignore
//! pub const RED: Color = Color(0); // json:"red"
//! pub const BLUE: Color = Color(1); // json:"blue"
//! ```
//!
//! The pipeline parses the file, collects the tagged declarations, sorts
//! them by identifier and renders two sources from fixed templates: a
//! `Serialize`/`Deserialize` implementation and a round-trip test.
//!
//! ## Architecture
//!
//! - [`parser`] - Rust source parsing and the declaration scanner
//! - [`tag`] - The `json:"<value>"` tag grammar
//! - [`pairs`] - Extracted pairs and their ordering
//! - [`generator`] - Template rendering
//! - [`error`] - Error types
//!
//! Formatting and writing the rendered sources is left to the caller.

pub mod error;
pub mod generator;
pub mod pairs;
pub mod parser;
pub mod tag;

pub use error::{GenerateError, GenerateResult};
pub use generator::{EncodingRenderer, RenderedOutput, TemplateContext};
pub use pairs::{Pair, PairList};
pub use parser::{DeclarationScanner, ParsedSource, RustParser};

use std::path::Path;

/// Run the pipeline over one source file's content.
///
/// `file_path` is only used for error reporting. The result is a pure
/// function of the three text inputs.
pub fn generate(
    content: &str,
    file_path: &Path,
    type_name: &str,
    package_name: &str,
) -> GenerateResult<RenderedOutput> {
    let parsed = RustParser::new().parse_source(content, file_path)?;
    let pairs = parsed.scan().sorted();

    tracing::debug!(
        file = %file_path.display(),
        type_name,
        pairs = pairs.len(),
        "extracted tagged values"
    );

    let context = TemplateContext::new(type_name, package_name, pairs);
    Ok(EncodingRenderer::new().render(&context))
}
