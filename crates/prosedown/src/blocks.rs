//! Block classification.
//!
//! Walks the placeholder-substituted text line by line, classifying runs of
//! lines into heading, paragraph, bullet-list and table blocks and
//! dispatching to the inline and table parsers. Open paragraph, list and
//! markdown-table buffers flush on blank lines, on any transition to another
//! block type, and at end of input. There is no unrecognized-syntax error:
//! any other non-blank line is paragraph text.

use once_cell::sync::Lazy;
use prosedown_core::{text, Node, NodeFactory};
use regex::Regex;

use crate::inline::parse_inline;
use crate::rules::CellRules;
use crate::service::Options;
use crate::tables;
use crate::utilities::collapse_whitespace;

static HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.*)$").unwrap());

/// One line of input, classified
enum LineKind<'a> {
    Blank,
    Heading { level: u8, rest: &'a str },
    Placeholder(usize),
    TableRow(&'a str),
    ListItem(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> LineKind<'_> {
    if line.is_empty() {
        return LineKind::Blank;
    }
    if let Some(index) = tables::parse_placeholder(line) {
        return LineKind::Placeholder(index);
    }
    if let Some(caps) = HEADING.captures(line) {
        return LineKind::Heading {
            level: caps[1].len() as u8,
            rest: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if line.starts_with('|') {
        return LineKind::TableRow(line);
    }
    if let Some(caps) = LIST_ITEM.captures(line) {
        return LineKind::ListItem(caps.get(1).map_or("", |m| m.as_str()));
    }
    LineKind::Text(line)
}

/// Splits placeholder-substituted text into an ordered block-node sequence
pub struct BlockSplitter<'a> {
    factory: &'a NodeFactory,
    options: &'a Options,
    rules: &'a CellRules,
    tables: &'a [String],
}

impl<'a> BlockSplitter<'a> {
    pub fn new(
        factory: &'a NodeFactory,
        options: &'a Options,
        rules: &'a CellRules,
        tables: &'a [String],
    ) -> Self {
        Self {
            factory,
            options,
            rules,
            tables,
        }
    }

    /// Consume the text line by line, emitting one node per block
    pub fn split(&self, input: &str) -> Vec<Node> {
        let mut blocks = Vec::new();
        let mut paragraph: Vec<&str> = Vec::new();
        let mut list: Vec<&str> = Vec::new();
        let mut table: Vec<&str> = Vec::new();

        for raw in input.lines() {
            let line = raw.trim();
            match classify(line) {
                LineKind::Blank => {
                    self.flush_all(&mut paragraph, &mut list, &mut table, &mut blocks);
                }
                LineKind::Heading { level, rest } => {
                    self.flush_all(&mut paragraph, &mut list, &mut table, &mut blocks);
                    blocks.push(self.factory.heading(level, parse_inline(rest)));
                }
                LineKind::Placeholder(index) if index < self.tables.len() => {
                    self.flush_all(&mut paragraph, &mut list, &mut table, &mut blocks);
                    self.emit_html_table(index, &mut blocks);
                }
                // a stray token the extractor never produced: plain text
                LineKind::Placeholder(_) | LineKind::Text(_) => {
                    self.flush_list(&mut list, &mut blocks);
                    self.flush_table(&mut table, &mut blocks);
                    paragraph.push(line);
                }
                LineKind::TableRow(row) => {
                    self.flush_paragraph(&mut paragraph, &mut blocks);
                    self.flush_list(&mut list, &mut blocks);
                    table.push(row);
                }
                LineKind::ListItem(item) => {
                    self.flush_paragraph(&mut paragraph, &mut blocks);
                    self.flush_table(&mut table, &mut blocks);
                    list.push(item);
                }
            }
        }

        self.flush_all(&mut paragraph, &mut list, &mut table, &mut blocks);
        blocks
    }

    fn emit_html_table(&self, index: usize, blocks: &mut Vec<Node>) {
        let source = &self.tables[index];
        if self.options.convert_html_tables {
            if let Some(node) = tables::parse_html_table(source, self.factory, self.rules) {
                blocks.push(node);
            }
        } else {
            // keep the raw source as a paragraph, whitespace collapsed
            blocks.push(
                self.factory
                    .paragraph(vec![text(collapse_whitespace(source))]),
            );
        }
    }

    fn flush_all(
        &self,
        paragraph: &mut Vec<&str>,
        list: &mut Vec<&str>,
        table: &mut Vec<&str>,
        blocks: &mut Vec<Node>,
    ) {
        self.flush_paragraph(paragraph, blocks);
        self.flush_list(list, blocks);
        self.flush_table(table, blocks);
    }

    /// Buffered paragraph lines join with single spaces into one paragraph
    fn flush_paragraph(&self, lines: &mut Vec<&str>, blocks: &mut Vec<Node>) {
        if lines.is_empty() {
            return;
        }
        let joined = lines.join(" ");
        lines.clear();
        blocks.push(self.factory.paragraph(parse_inline(&joined)));
    }

    /// Each buffered item becomes a list_item wrapping one paragraph
    fn flush_list(&self, items: &mut Vec<&str>, blocks: &mut Vec<Node>) {
        if items.is_empty() {
            return;
        }
        let nodes = items
            .drain(..)
            .map(|item| {
                self.factory
                    .list_item(vec![self.factory.paragraph(parse_inline(item))])
            })
            .collect();
        blocks.push(self.factory.bullet_list(nodes));
    }

    fn flush_table(&self, rows: &mut Vec<&str>, blocks: &mut Vec<Node>) {
        if rows.is_empty() {
            return;
        }
        if let Some(node) = tables::parse_markdown_table(rows, self.factory, self.options) {
            blocks.push(node);
        }
        rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(input: &str) -> Vec<Node> {
        split_with(input, &[], &Options::default())
    }

    fn split_with(input: &str, tables: &[String], options: &Options) -> Vec<Node> {
        let factory = NodeFactory::new();
        let rules = CellRules::new();
        BlockSplitter::new(&factory, options, &rules, tables).split(input)
    }

    fn types(blocks: &[Node]) -> Vec<&'static str> {
        blocks.iter().map(|b| b.node_type()).collect()
    }

    #[test]
    fn test_heading_closes_paragraph() {
        let blocks = split("para line\n# Title");
        assert_eq!(types(&blocks), vec!["paragraph", "heading"]);
    }

    #[test]
    fn test_heading_levels() {
        for level in 1..=6u8 {
            let input = format!("{} Title", "#".repeat(level as usize));
            let blocks = split(&input);
            match &blocks[0] {
                Node::Heading { attrs, content } => {
                    assert_eq!(attrs.level, level);
                    assert_eq!(content[0].text(), Some("Title"));
                }
                other => panic!("expected heading, got {}", other.node_type()),
            }
        }
    }

    #[test]
    fn test_hash_without_space_is_paragraph() {
        let blocks = split("#nospace");
        assert_eq!(types(&blocks), vec!["paragraph"]);
        assert_eq!(blocks[0].content().unwrap()[0].text(), Some("#nospace"));
    }

    #[test]
    fn test_paragraph_lines_join_with_space() {
        let blocks = split("first line\nsecond line");
        assert_eq!(
            blocks[0].content().unwrap()[0].text(),
            Some("first line second line")
        );
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let blocks = split("one\n\ntwo");
        assert_eq!(types(&blocks), vec!["paragraph", "paragraph"]);
    }

    #[test]
    fn test_list_items_grouped() {
        let blocks = split("- one\n- two\n* three");
        assert_eq!(types(&blocks), vec!["bullet_list"]);
        let items = blocks[0].content().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].node_type(), "list_item");
        assert_eq!(
            items[2].content().unwrap()[0].content().unwrap()[0].text(),
            Some("three")
        );
    }

    #[test]
    fn test_list_ends_on_plain_line() {
        let blocks = split("- one\nplain");
        assert_eq!(types(&blocks), vec!["bullet_list", "paragraph"]);
    }

    #[test]
    fn test_markdown_table_buffered_until_non_pipe() {
        let blocks = split("| a | b |\n|---|---|\n| c | d |\nafter");
        assert_eq!(types(&blocks), vec!["table", "paragraph"]);
        assert_eq!(blocks[0].content().unwrap().len(), 2);
    }

    #[test]
    fn test_placeholder_resolves_to_table() {
        let tables = vec!["<table><tr><td>x</td></tr></table>".to_string()];
        let blocks = split_with("__HTML_TABLE_0__", &tables, &Options::default());
        assert_eq!(types(&blocks), vec!["table"]);
    }

    #[test]
    fn test_placeholder_raw_fallback_when_conversion_off() {
        let tables = vec!["<table>\n  <tr><td>x</td></tr>\n</table>".to_string()];
        let options = Options {
            convert_html_tables: false,
            ..Default::default()
        };
        let blocks = split_with("__HTML_TABLE_0__", &tables, &options);
        assert_eq!(types(&blocks), vec!["paragraph"]);
        assert_eq!(
            blocks[0].content().unwrap()[0].text(),
            Some("<table> <tr><td>x</td></tr> </table>")
        );
    }

    #[test]
    fn test_stray_placeholder_token_is_paragraph_text() {
        let blocks = split("__HTML_TABLE_7__");
        assert_eq!(types(&blocks), vec!["paragraph"]);
        assert_eq!(
            blocks[0].content().unwrap()[0].text(),
            Some("__HTML_TABLE_7__")
        );
    }

    #[test]
    fn test_empty_input_yields_no_blocks() {
        assert!(split("").is_empty());
        assert!(split("\n\n  \n").is_empty());
    }
}
