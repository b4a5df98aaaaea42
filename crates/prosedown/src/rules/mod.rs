//! Rule registry for HTML tags recognized inside table cells.

mod builtin;
mod rule;

pub use rule::{MarkFn, TagRule};

use indexmap::IndexMap;

/// Dispatch table mapping lowercase tag names to cell rules.
///
/// Starts with the built-in set (`strong`, `em`, `a`, `br`); additional tags
/// can be registered through [`add`](CellRules::add). Insertion order is
/// preserved so the table stays auditable.
pub struct CellRules {
    rules: IndexMap<String, TagRule>,
}

impl CellRules {
    /// Create a registry with the built-in tag rules
    pub fn new() -> Self {
        Self {
            rules: builtin::builtin_rules(),
        }
    }

    /// Register a rule for a tag name (matched case-insensitively)
    pub fn add(&mut self, tag: &str, rule: TagRule) {
        self.rules.insert(tag.to_ascii_lowercase(), rule);
    }

    /// Look up the rule for a tag name, if recognized
    pub fn get(&self, tag: &str) -> Option<&TagRule> {
        self.rules.get(&tag.to_ascii_lowercase())
    }
}

impl Default for CellRules {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prosedown_core::Mark;

    #[test]
    fn test_builtin_tags_present() {
        let rules = CellRules::new();
        assert!(matches!(rules.get("strong"), Some(TagRule::Wrap(_))));
        assert!(matches!(rules.get("em"), Some(TagRule::Wrap(_))));
        assert!(matches!(rules.get("a"), Some(TagRule::Link)));
        assert!(matches!(rules.get("br"), Some(TagRule::Replace(" "))));
        assert!(rules.get("span").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let rules = CellRules::new();
        assert!(rules.get("STRONG").is_some());
        assert!(rules.get("Em").is_some());
    }

    #[test]
    fn test_add_registers_custom_tag() {
        let mut rules = CellRules::new();
        rules.add("B", TagRule::Wrap(|| Mark::Strong));
        assert!(matches!(rules.get("b"), Some(TagRule::Wrap(_))));
    }
}
