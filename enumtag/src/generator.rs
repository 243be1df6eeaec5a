//! Template renderer for the encoding and encoding test sources.
//!
//! Both templates are embedded at compile time. Rendering is literal
//! placeholder substitution: every occurrence of a placeholder is replaced
//! and nothing is escaped. The result is raw text that has not been checked
//! for syntactic validity.

use crate::pairs::PairList;
use tracing::debug;

/// Template for the encoding implementation.
pub const ENCODING_TEMPLATE: &str = include_str!("../templates/enum_encoding.rs.template");

/// Template for the encoding tests.
pub const ENCODING_TEST_TEMPLATE: &str =
    include_str!("../templates/enum_encoding_test.rs.template");

/// Placeholder tokens recognised in the templates.
pub mod placeholder {
    pub const TYPE: &str = "{{.Type}}";
    pub const PACKAGE: &str = "{{.Package}}";
    pub const VAL_TO_JSON: &str = "{{.val_to_json}}";
    pub const JSON_TO_VALUE: &str = "{{.json_to_value}}";
    pub const VALUES: &str = "{{.Values}}";
    pub const TAGS: &str = "{{.Tags}}";
}

/// Everything the templates are rendered from.
#[derive(Debug, Clone)]
pub struct TemplateContext {
    /// Name of the type the encoding is generated for.
    pub type_name: String,

    /// Module path the generated files import the type and values from.
    pub package_name: String,

    /// Tagged values, expected to be sorted.
    pub pairs: PairList,
}

impl TemplateContext {
    pub fn new(
        type_name: impl Into<String>,
        package_name: impl Into<String>,
        pairs: PairList,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            package_name: package_name.into(),
            pairs,
        }
    }
}

/// Text blocks derived from a pair list.
///
/// All four are built from the same list, so index `i` of `values` and
/// index `i` of `tags` always describe the same pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedBlocks {
    /// Serialize table rows, one per line: `(&IDENT, "tag"),`.
    pub val_to_json: String,

    /// Deserialize table rows, one per line: `("tag", &IDENT),`.
    pub json_to_value: String,

    /// Bare identifiers joined with `", "`.
    pub values: String,

    /// Quoted tags joined with `","`.
    pub tags: String,
}

impl DerivedBlocks {
    pub fn from_pairs(pairs: &PairList) -> Self {
        Self {
            val_to_json: join(pairs, "\n", |name, tag| format!("(&{name}, \"{tag}\"),")),
            json_to_value: join(pairs, "\n", |name, tag| format!("(\"{tag}\", &{name}),")),
            values: join(pairs, ", ", |name, _| name.to_string()),
            tags: join(pairs, ",", |_, tag| format!("\"{tag}\"")),
        }
    }
}

fn join(pairs: &PairList, separator: &str, line: impl Fn(&str, &str) -> String) -> String {
    pairs
        .iter()
        .map(|pair| line(pair.name(), pair.tag()))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Raw rendered sources, not yet formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    /// The encoding implementation.
    pub code: String,

    /// The encoding tests.
    pub test: String,
}

/// Renders the two fixed templates.
#[derive(Debug, Default)]
pub struct EncodingRenderer;

impl EncodingRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render both templates for the given context.
    pub fn render(&self, context: &TemplateContext) -> RenderedOutput {
        let blocks = DerivedBlocks::from_pairs(&context.pairs);

        let code = ENCODING_TEMPLATE
            .replace(placeholder::TYPE, &context.type_name)
            .replace(placeholder::PACKAGE, &context.package_name)
            .replace(placeholder::VAL_TO_JSON, &blocks.val_to_json)
            .replace(placeholder::JSON_TO_VALUE, &blocks.json_to_value);

        let test = ENCODING_TEST_TEMPLATE
            .replace(placeholder::TYPE, &context.type_name)
            .replace(placeholder::PACKAGE, &context.package_name)
            .replace(placeholder::VALUES, &blocks.values)
            .replace(placeholder::TAGS, &blocks.tags);

        debug!(
            type_name = %context.type_name,
            pairs = context.pairs.len(),
            code_bytes = code.len(),
            test_bytes = test.len(),
            "rendered templates"
        );

        RenderedOutput { code, test }
    }
}
