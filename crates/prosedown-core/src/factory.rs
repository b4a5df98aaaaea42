//! Node construction with generated identifiers.
//!
//! Every non-text node needs a fresh, collision-resistant id at construction
//! time. [`NodeFactory`] owns the id source and stamps each node's complete
//! default attrs record; the source is injectable so tests can run with a
//! deterministic sequence instead of random ids.

use uuid::Uuid;

use crate::attrs::{
    CellAttrs, DocAttrs, HeadingAttrs, IdAttrs, ParagraphAttrs, TableAttrs,
};
use crate::node::{Mark, Node};

/// An id-generating function, invoked once per constructed node
pub type IdSource = Box<dyn Fn() -> String + Send + Sync>;

/// Platform-shaped identifier: `n` followed by 11 hex digits of a UUIDv4
fn random_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("n{}", &hex[..11])
}

/// Builds document nodes, stamping each with a fresh id and its node type's
/// complete default attrs record.
pub struct NodeFactory {
    ids: IdSource,
}

impl NodeFactory {
    /// Create a factory generating random UUIDv4-derived ids
    pub fn new() -> Self {
        Self::with_ids(Box::new(random_id))
    }

    /// Create a factory with a custom id source
    pub fn with_ids(ids: IdSource) -> Self {
        Self { ids }
    }

    /// Generate one fresh id
    pub fn fresh_id(&self) -> String {
        (self.ids)()
    }

    /// Root document wrapping an ordered block sequence
    pub fn doc(&self, content: Vec<Node>) -> Node {
        Node::Doc {
            attrs: DocAttrs::new(self.fresh_id()),
            content,
        }
    }

    /// Heading at the given level (clamped to 1-6)
    pub fn heading(&self, level: u8, content: Vec<Node>) -> Node {
        Node::Heading {
            attrs: HeadingAttrs::new(self.fresh_id(), level.clamp(1, 6)),
            content,
        }
    }

    /// Paragraph of inline content
    pub fn paragraph(&self, content: Vec<Node>) -> Node {
        Node::Paragraph {
            attrs: ParagraphAttrs::new(self.fresh_id()),
            content,
        }
    }

    /// Table of `table_row` children
    pub fn table(&self, rows: Vec<Node>) -> Node {
        Node::Table {
            attrs: TableAttrs::new(self.fresh_id()),
            content: rows,
        }
    }

    /// Table row of `table_cell` children
    pub fn table_row(&self, cells: Vec<Node>) -> Node {
        Node::TableRow {
            attrs: IdAttrs::new(self.fresh_id()),
            content: cells,
        }
    }

    /// Table cell wrapping block content
    pub fn table_cell(&self, content: Vec<Node>) -> Node {
        Node::TableCell {
            attrs: CellAttrs::new(self.fresh_id()),
            content,
        }
    }

    /// Bullet list of `list_item` children
    pub fn bullet_list(&self, items: Vec<Node>) -> Node {
        Node::BulletList {
            attrs: IdAttrs::new(self.fresh_id()),
            content: items,
        }
    }

    /// List item wrapping block content
    pub fn list_item(&self, content: Vec<Node>) -> Node {
        Node::ListItem {
            attrs: IdAttrs::new(self.fresh_id()),
            content,
        }
    }
}

impl Default for NodeFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Unmarked text leaf
pub fn text(content: impl Into<String>) -> Node {
    Node::Text {
        text: content.into(),
        marks: Vec::new(),
    }
}

/// Text leaf carrying the given marks, inner-first
pub fn text_with_marks(content: impl Into<String>, marks: Vec<Mark>) -> Node {
    Node::Text {
        text: content.into(),
        marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sequential_factory() -> NodeFactory {
        let counter = AtomicUsize::new(0);
        NodeFactory::with_ids(Box::new(move || {
            format!("id{}", counter.fetch_add(1, Ordering::Relaxed))
        }))
    }

    #[test]
    fn test_random_id_shape() {
        let id = NodeFactory::new().fresh_id();
        assert_eq!(id.len(), 12);
        assert!(id.starts_with('n'));
        assert!(id[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_random_ids_differ() {
        let factory = NodeFactory::new();
        assert_ne!(factory.fresh_id(), factory.fresh_id());
    }

    #[test]
    fn test_injected_source_is_deterministic() {
        let factory = sequential_factory();
        let para = factory.paragraph(vec![]);
        let table = factory.table(vec![]);
        assert_eq!(para.id(), Some("id0"));
        assert_eq!(table.id(), Some("id1"));
    }

    #[test]
    fn test_every_container_gets_an_id() {
        let factory = sequential_factory();
        let doc = factory.doc(vec![
            factory.bullet_list(vec![factory.list_item(vec![factory.paragraph(vec![])])]),
            factory.table(vec![factory.table_row(vec![factory.table_cell(vec![])])]),
        ]);
        for node in doc.descendants() {
            assert!(node.id().is_some(), "{} has no id", node.node_type());
        }
    }

    #[test]
    fn test_heading_level_clamped() {
        let factory = NodeFactory::new();
        let high = factory.heading(9, vec![]);
        let low = factory.heading(0, vec![]);
        match (high, low) {
            (Node::Heading { attrs: h, .. }, Node::Heading { attrs: l, .. }) => {
                assert_eq!(h.level, 6);
                assert_eq!(l.level, 1);
            }
            _ => unreachable!(),
        }
    }
}
