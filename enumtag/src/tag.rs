//! The `json:"<value>"` tag grammar.
//!
//! A tag token is the literal `json:"`, zero or more characters other than
//! `"`, and a closing `"` that ends the token. Tokens are taken from the
//! whitespace-split text of a declaration's trailing comment; the first
//! token that matches wins.

/// Literal that opens a tag token.
pub const TAG_PREFIX: &str = "json:\"";

/// Match a single whitespace-free token against the tag grammar.
///
/// Returns the tag value, or `None` when the token is not a tag.
pub fn parse_token(token: &str) -> Option<&str> {
    let value = token.strip_prefix(TAG_PREFIX)?.strip_suffix('"')?;
    if value.contains('"') {
        return None;
    }
    Some(value)
}

/// Find the first tag in a comment's text.
pub fn find_tag(comment: &str) -> Option<&str> {
    comment.split_whitespace().find_map(parse_token)
}

/// Strip the comment markers from a trailing comment.
///
/// Accepts a `//` line comment or a `/* */` block comment; anything else
/// is not a comment and yields `None`.
pub fn comment_text(raw: &str) -> Option<&str> {
    let raw = raw.trim_start();
    if let Some(line) = raw.strip_prefix("//") {
        return Some(line);
    }
    let block = raw.strip_prefix("/*")?;
    Some(match block.find("*/") {
        Some(end) => &block[..end],
        None => block,
    })
}
