//! Rule types for HTML tags recognized inside table cells.

use prosedown_core::Mark;

/// Produces the mark stamped on content wrapped by a tag
pub type MarkFn = fn() -> Mark;

/// How one recognized HTML tag inside a table cell maps onto the tree.
///
/// Anything a rule does not claim degrades to plain text with the tag
/// markers stripped.
#[derive(Debug, Clone, Copy)]
pub enum TagRule {
    /// Parse the enclosed content recursively, then stamp each resulting
    /// node with the produced mark (`<strong>`, `<em>`)
    Wrap(MarkFn),
    /// Emit the enclosed text as a single node carrying a link mark, with
    /// the href read from the opening tag (`<a href="...">`)
    Link,
    /// Void tag replaced by fixed text (`<br>`)
    Replace(&'static str),
}
