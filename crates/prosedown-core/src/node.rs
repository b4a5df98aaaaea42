//! Document tree nodes
//!
//! This module defines the node types of the rich-document tree. The tree is
//! the common output format of every converter frontend: a single `doc` root
//! holding a flat sequence of block nodes, with marked `text` leaves at the
//! bottom.

use serde::Serialize;

use crate::attrs::{
    CellAttrs, DocAttrs, HeadingAttrs, IdAttrs, LinkAttrs, ParagraphAttrs, TableAttrs,
};

/// A single element of the document tree.
///
/// Container variants carry a fixed-shape `attrs` record and ordered
/// `content`; the `text` leaf carries its string and an ordered list of
/// [`Mark`]s instead. Serializes to the editor's JSON schema, tagged on
/// `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Root document container
    Doc { attrs: DocAttrs, content: Vec<Node> },

    /// Heading with level (1-6) and inline content
    Heading {
        attrs: HeadingAttrs,
        content: Vec<Node>,
    },

    /// Paragraph containing inline content
    Paragraph {
        attrs: ParagraphAttrs,
        content: Vec<Node>,
    },

    /// Text leaf with zero or more marks
    Text {
        text: String,
        #[serde(skip_serializing_if = "Vec::is_empty")]
        marks: Vec<Mark>,
    },

    /// Table containing only `table_row` children
    Table {
        attrs: TableAttrs,
        content: Vec<Node>,
    },

    /// Table row containing only `table_cell` children
    TableRow { attrs: IdAttrs, content: Vec<Node> },

    /// Table cell wrapping block content (typically one paragraph)
    TableCell {
        attrs: CellAttrs,
        content: Vec<Node>,
    },

    /// Bullet list containing only `list_item` children
    BulletList { attrs: IdAttrs, content: Vec<Node> },

    /// List item wrapping block content
    ListItem { attrs: IdAttrs, content: Vec<Node> },
}

/// An inline annotation attached to a text node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mark {
    /// Bold
    Strong,
    /// Italic
    Em,
    /// Hyperlink carrying its href
    Link { attrs: LinkAttrs },
}

impl Mark {
    /// Create a link mark for the given href
    pub fn link(href: impl Into<String>) -> Self {
        Mark::Link {
            attrs: LinkAttrs::new(href),
        }
    }
}

impl Node {
    /// The schema name of this node type
    pub fn node_type(&self) -> &'static str {
        match self {
            Node::Doc { .. } => "doc",
            Node::Heading { .. } => "heading",
            Node::Paragraph { .. } => "paragraph",
            Node::Text { .. } => "text",
            Node::Table { .. } => "table",
            Node::TableRow { .. } => "table_row",
            Node::TableCell { .. } => "table_cell",
            Node::BulletList { .. } => "bullet_list",
            Node::ListItem { .. } => "list_item",
        }
    }

    /// Check if this is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text { .. })
    }

    /// The generated identifier, `None` for text leaves
    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Doc { attrs, .. } => Some(&attrs.id),
            Node::Heading { attrs, .. } => Some(&attrs.id),
            Node::Paragraph { attrs, .. } => Some(&attrs.id),
            Node::Text { .. } => None,
            Node::Table { attrs, .. } => Some(&attrs.id),
            Node::TableRow { attrs, .. } => Some(&attrs.id),
            Node::TableCell { attrs, .. } => Some(&attrs.id),
            Node::BulletList { attrs, .. } => Some(&attrs.id),
            Node::ListItem { attrs, .. } => Some(&attrs.id),
        }
    }

    /// Child nodes, `None` for text leaves
    pub fn content(&self) -> Option<&[Node]> {
        match self {
            Node::Doc { content, .. }
            | Node::Heading { content, .. }
            | Node::Paragraph { content, .. }
            | Node::Table { content, .. }
            | Node::TableRow { content, .. }
            | Node::TableCell { content, .. }
            | Node::BulletList { content, .. }
            | Node::ListItem { content, .. } => Some(content),
            Node::Text { .. } => None,
        }
    }

    /// The text of a text leaf, `None` otherwise
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The marks of a text leaf (empty slice otherwise)
    pub fn marks(&self) -> &[Mark] {
        match self {
            Node::Text { marks, .. } => marks,
            _ => &[],
        }
    }

    /// Append a mark to a text leaf; non-text nodes are returned unchanged.
    ///
    /// Inner marks come first, so a node built inside `<em>` and then wrapped
    /// by `<strong>` ends up with `[em, strong]`.
    pub fn with_mark(self, mark: Mark) -> Node {
        match self {
            Node::Text { text, mut marks } => {
                marks.push(mark);
                Node::Text { text, marks }
            }
            other => other,
        }
    }

    /// Check if this node renders no visible content
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Text { text, .. } => text.trim().is_empty(),
            _ => self
                .content()
                .is_some_and(|c| c.iter().all(|n| n.is_blank())),
        }
    }

    /// Iterate over this node and all its descendants, depth-first
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }
}

/// Depth-first iterator over a node and its descendants
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(content) = node.content() {
            self.stack.extend(content.iter().rev());
        }
        Some(node)
    }
}
