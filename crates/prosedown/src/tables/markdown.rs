//! Markdown pipe-table parsing.

use once_cell::sync::Lazy;
use prosedown_core::{text_with_marks, Mark, Node, NodeFactory};
use regex::Regex;

use crate::inline::parse_inline;
use crate::service::Options;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\|[-:\s|]+\|$").unwrap());

/// Convert a contiguous run of `|`-prefixed lines into a table node.
///
/// The header-separator line (only `-`, `:`, `|` and whitespace) is
/// discarded; the first retained row is the header and renders its cells as
/// literal text with an implicit strong mark, regardless of their own
/// markup. Body cells are parsed for inline markup. Column count is taken
/// from the widest row; shorter rows are padded with empty cells so the
/// table stays rectangular. Returns `None` when nothing but separator lines
/// remains.
pub fn parse_markdown_table(
    lines: &[&str],
    factory: &NodeFactory,
    options: &Options,
) -> Option<Node> {
    let rows: Vec<Vec<&str>> = lines
        .iter()
        .filter(|line| !SEPARATOR.is_match(line))
        .map(|line| split_cells(line))
        .collect();
    if rows.is_empty() {
        return None;
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);

    let row_nodes = rows
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            let header = i == 0 && options.md_table_header_row;
            let cell_nodes = (0..width)
                .map(|col| {
                    let content = match cells.get(col) {
                        Some(cell) => cell_content(cell, header),
                        None => Vec::new(),
                    };
                    factory.table_cell(vec![factory.paragraph(content)])
                })
                .collect();
            factory.table_row(cell_nodes)
        })
        .collect();

    Some(factory.table(row_nodes))
}

/// Split one table line into trimmed cell strings, dropping the outer pipes
fn split_cells(line: &str) -> Vec<&str> {
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}

fn cell_content(cell: &str, header: bool) -> Vec<Node> {
    if cell.is_empty() {
        return Vec::new();
    }
    if header {
        vec![text_with_marks(cell, vec![Mark::Strong])]
    } else {
        parse_inline(cell)
    }
}
