//! Embedded table handling.
//!
//! Raw HTML `<table>` regions are lifted out of the input before any
//! line-oriented processing and replaced by opaque placeholder tokens; the
//! block splitter later resolves each token back to a parsed table node.
//! Markdown pipe tables are parsed from the line stream directly.

mod html;
mod markdown;

pub use html::parse_html_table;
pub use markdown::parse_markdown_table;

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TABLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<table[^>]*>.*?</table>").unwrap());
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^__HTML_TABLE_(\d+)__$").unwrap());

/// Replace each embedded `<table>...</table>` region (case-insensitive,
/// non-greedy to the nearest close tag) with a placeholder token, returning
/// the substituted text and the raw table sources in order. An opening tag
/// with no matching close is left untouched.
pub fn extract_tables(input: &str) -> (String, Vec<String>) {
    let mut sources = Vec::new();
    let replaced = HTML_TABLE.replace_all(input, |caps: &regex::Captures<'_>| {
        let token = placeholder(sources.len());
        sources.push(caps[0].to_string());
        token
    });
    (replaced.into_owned(), sources)
}

/// The placeholder token substituted for extracted table `index`
pub(crate) fn placeholder(index: usize) -> String {
    format!("__HTML_TABLE_{index}__")
}

/// Parse a line consisting solely of a placeholder token
pub(crate) fn parse_placeholder(line: &str) -> Option<usize> {
    PLACEHOLDER
        .captures(line)
        .and_then(|caps| caps[1].parse().ok())
}
