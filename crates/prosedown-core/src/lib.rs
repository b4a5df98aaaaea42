//! prosedown-core - rich-document tree model and serialization
//!
//! This crate provides the node types, attribute records, and JSON
//! serialization for the document trees produced by the `prosedown`
//! converter.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──converter──▶ ┌───────────────┐
//!                         │               │
//!                         │ Document tree │ ──▶ JSON / replace request
//! HTML tables ───────────▶│               │
//!                         └───────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use prosedown_core::{text, text_with_marks, to_value, Mark, NodeFactory};
//!
//! let factory = NodeFactory::new();
//! let doc = factory.doc(vec![
//!     factory.heading(1, vec![text("Hello World")]),
//!     factory.paragraph(vec![
//!         text("This is "),
//!         text_with_marks("bold", vec![Mark::Strong]),
//!         text(" text."),
//!     ]),
//! ]);
//!
//! let json = to_value(&doc).unwrap();
//! assert_eq!(json["type"], "doc");
//! ```

mod attrs;
mod factory;
mod node;
mod serialize;

pub use attrs::{
    CellAttrs, DocAttrs, HeadingAttrs, IdAttrs, LinkAttrs, ParagraphAttrs, SuggestionAttrs,
    TableAttrs,
};
pub use factory::{text, text_with_marks, IdSource, NodeFactory};
pub use node::{Descendants, Mark, Node};
pub use serialize::{to_json, to_value, ReplaceContentRequest, ReplaceMethod};

/// Error type for document serialization
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocumentError>;
