//! ProsedownService - the main entry point for markdown to document-tree
//! conversion.

use prosedown_core::{IdSource, Node, NodeFactory};

use crate::blocks::BlockSplitter;
use crate::rules::{CellRules, TagRule};
use crate::tables;

/// Options for ProsedownService
#[derive(Debug, Clone)]
pub struct Options {
    /// Convert embedded HTML tables to table nodes. When off, each extracted
    /// table is kept as raw source in a paragraph; some platform endpoints
    /// reject table nodes.
    pub convert_html_tables: bool,

    /// Render the first retained markdown-table row as a strong header
    pub md_table_header_row: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            convert_html_tables: true,
            md_table_header_row: true,
        }
    }
}

/// The main service for converting markdown to a document tree.
///
/// Conversion is pure and synchronous: each call walks one input string and
/// returns a freshly built tree. The only per-call state is the id source
/// consulted once per constructed node, so a service shared across threads
/// needs no coordination.
pub struct ProsedownService {
    options: Options,
    rules: CellRules,
    factory: NodeFactory,
}

impl ProsedownService {
    /// Create a new ProsedownService with default options
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// Create a ProsedownService with custom options
    pub fn with_options(options: Options) -> Self {
        Self {
            options,
            rules: CellRules::new(),
            factory: NodeFactory::new(),
        }
    }

    /// Create a ProsedownService with a custom node-id source
    pub fn with_ids(ids: IdSource) -> Self {
        Self {
            options: Options::default(),
            rules: CellRules::new(),
            factory: NodeFactory::with_ids(ids),
        }
    }

    /// Register a cell-tag rule for HTML tags inside table cells
    pub fn add_cell_rule(&mut self, tag: &str, rule: TagRule) -> &mut Self {
        self.rules.add(tag, rule);
        self
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Convert markdown (possibly containing raw HTML tables) into a
    /// document tree.
    ///
    /// Never fails: unterminated markers, unmatched table tags and ragged
    /// tables all degrade to literal text or padded structure, and the
    /// result is always a single well-formed `doc` node.
    pub fn convert(&self, input: &str) -> Node {
        let (substituted, sources) = tables::extract_tables(input);
        let splitter = BlockSplitter::new(&self.factory, &self.options, &self.rules, &sources);
        let content = splitter.split(&substituted);
        self.factory.doc(content)
    }
}

impl Default for ProsedownService {
    fn default() -> Self {
        Self::new()
    }
}
