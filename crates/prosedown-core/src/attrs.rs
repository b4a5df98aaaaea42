//! Attribute records for each node type.
//!
//! The editor schema expects every attribute key to be present on every node,
//! with `null` for unset values. Each record here serializes its complete
//! shape; constructors fill the defaults and stamp the generated id.

use serde::Serialize;
use serde_json::Value;

/// Suggested-edit bookkeeping shared by most block nodes. Always null in
/// freshly converted documents; flattened into the owning attrs record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionAttrs {
    pub suggestion_id: Option<String>,
    pub suggestion_timestamp: Option<i64>,
    pub suggestion_user_id: Option<String>,
    pub suggestion_discussion_id: Option<String>,
    pub suggestion_kind: Option<String>,
    pub suggestion_original_attrs: Option<Value>,
}

/// Attributes of the root `doc` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocAttrs {
    pub id: String,
    pub meta: Value,
    #[serde(flatten)]
    pub suggestion: SuggestionAttrs,
}

impl DocAttrs {
    pub fn new(id: String) -> Self {
        Self {
            id,
            meta: Value::Object(serde_json::Map::new()),
            suggestion: SuggestionAttrs::default(),
        }
    }
}

/// Attributes of a `paragraph` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphAttrs {
    pub id: String,
    pub class: Option<String>,
    pub text_align: Option<String>,
    pub rtl: Option<bool>,
    #[serde(flatten)]
    pub suggestion: SuggestionAttrs,
}

impl ParagraphAttrs {
    pub fn new(id: String) -> Self {
        Self {
            id,
            class: None,
            text_align: None,
            rtl: None,
            suggestion: SuggestionAttrs::default(),
        }
    }
}

/// Attributes of a `heading` node. `level` is 1-6.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingAttrs {
    pub level: u8,
    pub fixed_id: String,
    pub id: String,
    pub text_align: Option<String>,
    pub rtl: Option<bool>,
    #[serde(flatten)]
    pub suggestion: SuggestionAttrs,
}

impl HeadingAttrs {
    pub fn new(id: String, level: u8) -> Self {
        Self {
            level,
            fixed_id: String::new(),
            id,
            text_align: None,
            rtl: None,
            suggestion: SuggestionAttrs::default(),
        }
    }
}

/// Attributes of a `table` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableAttrs {
    pub id: String,
    pub hide_label: bool,
    pub align: Option<String>,
    pub size: Option<String>,
    pub smaller_font: bool,
    #[serde(flatten)]
    pub suggestion: SuggestionAttrs,
}

impl TableAttrs {
    pub fn new(id: String) -> Self {
        Self {
            id,
            hide_label: false,
            align: None,
            size: None,
            smaller_font: false,
            suggestion: SuggestionAttrs::default(),
        }
    }
}

/// Attributes of a `table_cell` node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellAttrs {
    pub id: String,
    pub colspan: u32,
    pub rowspan: u32,
    pub colwidth: Option<Vec<u32>>,
    pub background: Option<String>,
}

impl CellAttrs {
    pub fn new(id: String) -> Self {
        Self {
            id,
            colspan: 1,
            rowspan: 1,
            colwidth: None,
            background: None,
        }
    }
}

/// Attributes of `table_row`, `bullet_list` and `list_item` nodes, which
/// carry nothing beyond their identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdAttrs {
    pub id: String,
}

impl IdAttrs {
    pub fn new(id: String) -> Self {
        Self { id }
    }
}

/// Attributes carried by a `link` mark.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkAttrs {
    pub href: String,
    pub title: Option<String>,
    pub target: Option<String>,
}

impl LinkAttrs {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
            target: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_attrs_serialize_all_keys() {
        let attrs = ParagraphAttrs::new("n0".to_string());
        let value = serde_json::to_value(&attrs).unwrap();
        let obj = value.as_object().unwrap();

        for key in [
            "id",
            "class",
            "textAlign",
            "rtl",
            "suggestionId",
            "suggestionTimestamp",
            "suggestionUserId",
            "suggestionDiscussionId",
            "suggestionKind",
            "suggestionOriginalAttrs",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
        assert_eq!(obj["id"], "n0");
        assert_eq!(obj["class"], Value::Null);
    }

    #[test]
    fn test_heading_attrs_defaults() {
        let attrs = HeadingAttrs::new("n1".to_string(), 3);
        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value["level"], 3);
        assert_eq!(value["fixedId"], "");
        assert_eq!(value["textAlign"], Value::Null);
    }

    #[test]
    fn test_cell_attrs_defaults() {
        let attrs = CellAttrs::new("n2".to_string());
        let value = serde_json::to_value(&attrs).unwrap();
        assert_eq!(value["colspan"], 1);
        assert_eq!(value["rowspan"], 1);
        assert_eq!(value["colwidth"], Value::Null);
        assert_eq!(value["background"], Value::Null);
    }

    #[test]
    fn test_doc_attrs_meta_is_empty_object() {
        let attrs = DocAttrs::new("n3".to_string());
        let value = serde_json::to_value(&attrs).unwrap();
        assert!(value["meta"].as_object().unwrap().is_empty());
    }
}
