//! Built-in cell-tag rules.

use indexmap::IndexMap;
use prosedown_core::Mark;

use super::rule::TagRule;

/// The tags the cell parser recognizes out of the box
pub(super) fn builtin_rules() -> IndexMap<String, TagRule> {
    let mut rules = IndexMap::new();
    rules.insert("strong".to_string(), TagRule::Wrap(|| Mark::Strong));
    rules.insert("em".to_string(), TagRule::Wrap(|| Mark::Em));
    rules.insert("a".to_string(), TagRule::Link);
    rules.insert("br".to_string(), TagRule::Replace(" "));
    rules
}
