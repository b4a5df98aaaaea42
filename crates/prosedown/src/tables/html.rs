//! Raw HTML table parsing.
//!
//! A regex/token scan over one extracted `<table>` source, not a full HTML
//! parser: only the `<tr>` and `<td>`/`<th>` tag families are recognized
//! structurally. Inline tags inside a cell go through the cell-tag rule
//! registry; unknown or malformed tags degrade to plain text with the
//! markers stripped. Never fails.

use once_cell::sync::Lazy;
use prosedown_core::{text, text_with_marks, Mark, Node, NodeFactory};
use regex::Regex;

use crate::inline::parse_inline;
use crate::rules::{CellRules, TagRule};
use crate::utilities::find_ignore_ascii_case;

static ROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").unwrap());
static CELL: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?is)<t[dh][^>]*>(.*?)</t[dh]>").unwrap());
static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?is)^<a[^>]*href=["']([^"']*)["'][^>]*>"#).unwrap());

/// Convert one raw `<table>` source into a table node, one `table_row` per
/// `<tr>` and one `table_cell` per `<td>`/`<th>`. Returns `None` when zero
/// rows are found.
pub fn parse_html_table(source: &str, factory: &NodeFactory, rules: &CellRules) -> Option<Node> {
    let mut rows = Vec::new();
    for row_caps in ROW.captures_iter(source) {
        let row_html = row_caps.get(1).map_or("", |m| m.as_str());
        let mut cells = Vec::new();
        for cell_caps in CELL.captures_iter(row_html) {
            let cell_html = cell_caps.get(1).map_or("", |m| m.as_str());
            let content = parse_cell(cell_html.trim(), rules);
            cells.push(factory.table_cell(vec![factory.paragraph(content)]));
        }
        if !cells.is_empty() {
            rows.push(factory.table_row(cells));
        }
    }
    if rows.is_empty() {
        None
    } else {
        Some(factory.table(rows))
    }
}

/// Parse one cell's inner HTML into marked text nodes.
///
/// Text runs between tags go through the markdown inline formatter; tags are
/// dispatched through the rule registry.
pub(crate) fn parse_cell(html: &str, rules: &CellRules) -> Vec<Node> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < html.len() {
        if html.as_bytes()[pos] != b'<' {
            let run_end = html[pos..].find('<').map_or(html.len(), |rel| pos + rel);
            out.extend(parse_inline(&html[pos..run_end]));
            pos = run_end;
            continue;
        }

        if let Some((nodes, next)) = apply_rule(html, pos, rules) {
            out.extend(nodes);
            pos = next;
        } else {
            // unknown or malformed tag: strip the marker
            match html[pos..].find('>') {
                Some(rel) => pos += rel + 1,
                None => {
                    out.extend(parse_inline(&html[pos + 1..]));
                    pos = html.len();
                }
            }
        }
    }
    out
}

/// Apply the registered rule for the tag opening at `pos`, returning the
/// produced nodes and the position just past the consumed region
fn apply_rule(html: &str, pos: usize, rules: &CellRules) -> Option<(Vec<Node>, usize)> {
    let name = tag_name(&html[pos..])?;
    match rules.get(name)? {
        TagRule::Wrap(mark_fn) => {
            let open_end = html[pos..].find('>')? + pos;
            let close_pat = format!("</{name}>");
            let close = find_ignore_ascii_case(&html[open_end + 1..], &close_pat)? + open_end + 1;
            let mark = mark_fn();
            let nodes = parse_cell(&html[open_end + 1..close], rules)
                .into_iter()
                .map(|node| node.with_mark(mark.clone()))
                .collect();
            Some((nodes, close + close_pat.len()))
        }
        TagRule::Link => {
            let caps = HREF.captures(&html[pos..])?;
            let open_end = pos + caps.get(0)?.end();
            let close = find_ignore_ascii_case(&html[open_end..], "</a>")? + open_end;
            let label = &html[open_end..close];
            let nodes = if label.is_empty() {
                Vec::new()
            } else {
                vec![text_with_marks(label, vec![Mark::link(&caps[1])])]
            };
            Some((nodes, close + "</a>".len()))
        }
        TagRule::Replace(replacement) => {
            let open_end = html[pos..].find('>')? + pos;
            Some((vec![text(*replacement)], open_end + 1))
        }
    }
}

/// The alphanumeric tag name following `<`, if any
fn tag_name(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('<')?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(rest.len());
    if end == 0 {
        None
    } else {
        Some(&rest[..end])
    }
}
