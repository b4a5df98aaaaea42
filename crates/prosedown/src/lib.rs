//! # prosedown
//!
//! Convert markdown with embedded raw HTML tables into the node-based
//! rich-document tree a web publishing platform's editor imports.
//!
//! ## Design
//!
//! The converter runs one pass over the input: raw `<table>` regions are
//! lifted out and replaced by placeholder tokens, the remaining text is
//! classified line by line into heading, paragraph, bullet-list and table
//! blocks, inline spans are scanned for bold, italic and link marks, and the
//! resulting block nodes are wrapped in a single `doc` root. Malformed input
//! never fails: unterminated markers and unknown tags degrade to literal
//! text, so every call returns a complete, well-formed tree.
//!
//! ## Example
//!
//! ```rust
//! use prosedown::ProsedownService;
//!
//! let service = ProsedownService::new();
//! let doc = service.convert("# Title\n\nSome **bold** text.");
//! assert_eq!(doc.node_type(), "doc");
//! assert_eq!(doc.content().unwrap().len(), 2);
//! ```
//!
//! ## Example (request payload)
//!
//! ```rust
//! use prosedown::{ProsedownService, ReplaceContentRequest};
//!
//! let doc = ProsedownService::new().convert("Release notes.");
//! let body = ReplaceContentRequest::new(doc).to_value().unwrap();
//! assert_eq!(body["method"], "replace");
//! ```

mod blocks;
mod inline;
mod rules;
mod service;
mod tables;
mod utilities;

pub use inline::parse_inline;
pub use prosedown_core::{
    text, text_with_marks, to_json, to_value, DocumentError, IdSource, Mark, Node, NodeFactory,
    ReplaceContentRequest, ReplaceMethod, Result,
};
pub use rules::{CellRules, MarkFn, TagRule};
pub use service::{Options, ProsedownService};
pub use tables::extract_tables;
pub use utilities::collapse_whitespace;
