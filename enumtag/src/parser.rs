//! Rust source parser and declaration scanner.
//!
//! This module parses a source file with `syn` and walks every `const`,
//! `static` and `let` declaration in it. Declarations that bind exactly one
//! identifier and carry a `json:"..."` token in their trailing comment are
//! collected as [`Pair`]s.
//!
//! `syn` drops ordinary comments, so the trailing comment is read back from
//! the source text: whatever follows the declaration's closing `;` on the
//! same line. Span positions come from `proc-macro2`'s `span-locations`
//! feature.
//!
//! The declared type is not compared with the type being generated for; any
//! tagged declaration in the file is picked up.

use crate::error::{GenerateError, GenerateResult};
use crate::pairs::{Pair, PairList};
use crate::tag;
use proc_macro2::LineColumn;
use std::path::Path;
use syn::visit::Visit;
use syn::{Ident, ItemConst, ItemStatic, Local, Pat};
use tracing::{debug, trace};

const BOM: char = '\u{feff}';

/// A parsed source file together with the text it was parsed from.
pub struct ParsedSource<'a> {
    /// The syntax tree.
    pub syntax: syn::File,

    text: &'a str,
}

impl ParsedSource<'_> {
    /// Scan the file's declarations for tagged values, in source order.
    pub fn scan(&self) -> PairList {
        let mut scanner = DeclarationScanner::new(self.text);
        scanner.visit_file(&self.syntax);
        scanner.into_pairs()
    }
}

/// Parser for Rust source files.
#[derive(Debug, Default)]
pub struct RustParser;

impl RustParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse source code, keeping the text for trailing comment lookup.
    pub fn parse_source<'a>(
        &self,
        content: &'a str,
        file_path: &Path,
    ) -> GenerateResult<ParsedSource<'a>> {
        let text = content.strip_prefix(BOM).unwrap_or(content);
        let syntax = syn::parse_file(text)
            .map_err(|e| GenerateError::from_syn(file_path.to_path_buf(), &e))?;

        debug!(
            file = %file_path.display(),
            items = syntax.items.len(),
            "parsed source file"
        );

        Ok(ParsedSource { syntax, text })
    }
}

/// Syntax tree visitor collecting tagged value declarations.
pub struct DeclarationScanner<'a> {
    lines: Vec<&'a str>,
    pairs: PairList,
}

impl<'a> DeclarationScanner<'a> {
    /// Create a scanner over the source text the tree was parsed from.
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            pairs: PairList::new(),
        }
    }

    /// Pairs found so far, in encounter order.
    pub fn into_pairs(self) -> PairList {
        self.pairs
    }

    /// Comment text following `end` on the same line, without its markers.
    fn trailing_comment(&self, end: LineColumn) -> Option<&'a str> {
        let line = *self.lines.get(end.line.checked_sub(1)?)?;
        let rest = match line.char_indices().nth(end.column) {
            Some((offset, _)) => &line[offset..],
            None => "",
        };
        tag::comment_text(rest)
    }

    fn declaration(&mut self, kind: &'static str, names: &[&Ident], end: LineColumn) {
        let [name] = names else {
            trace!(kind, count = names.len(), line = end.line, "skipping multi-binding declaration");
            return;
        };

        let Some(tag) = self.trailing_comment(end).and_then(tag::find_tag) else {
            trace!(kind, name = %name, "no json tag");
            return;
        };

        debug!(kind, name = %name, tag, "found tagged declaration");
        self.pairs.push(Pair::new(name.to_string(), tag));
    }
}

impl<'ast> Visit<'ast> for DeclarationScanner<'_> {
    // Declarations are leaves: nothing inside an initializer is scanned.

    fn visit_item_const(&mut self, item: &'ast ItemConst) {
        let names: Vec<&Ident> = if item.ident == "_" {
            Vec::new()
        } else {
            vec![&item.ident]
        };
        self.declaration("const", &names, item.semi_token.spans[0].end());
    }

    fn visit_item_static(&mut self, item: &'ast ItemStatic) {
        self.declaration("static", &[&item.ident], item.semi_token.spans[0].end());
    }

    fn visit_local(&mut self, local: &'ast Local) {
        let names = binding_names(&local.pat);
        self.declaration("let", &names, local.semi_token.spans[0].end());
    }
}

/// Every identifier a pattern binds.
fn binding_names(pat: &Pat) -> Vec<&Ident> {
    let mut names = Vec::new();
    collect_bindings(pat, &mut names);
    names
}

fn collect_bindings<'p>(pat: &'p Pat, names: &mut Vec<&'p Ident>) {
    match pat {
        Pat::Ident(p) => {
            names.push(&p.ident);
            if let Some((_, sub)) = &p.subpat {
                collect_bindings(sub, names);
            }
        }
        Pat::Type(p) => collect_bindings(&p.pat, names),
        Pat::Reference(p) => collect_bindings(&p.pat, names),
        Pat::Paren(p) => collect_bindings(&p.pat, names),
        Pat::Tuple(p) => p.elems.iter().for_each(|e| collect_bindings(e, names)),
        Pat::TupleStruct(p) => p.elems.iter().for_each(|e| collect_bindings(e, names)),
        Pat::Slice(p) => p.elems.iter().for_each(|e| collect_bindings(e, names)),
        Pat::Struct(p) => p.fields.iter().for_each(|f| collect_bindings(&f.pat, names)),
        // Every alternative binds the same names.
        Pat::Or(p) => {
            if let Some(first) = p.cases.first() {
                collect_bindings(first, names);
            }
        }
        _ => {}
    }
}
