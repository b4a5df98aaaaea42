//! Document tree serialization
//!
//! Converts a finished tree into the JSON accepted by the publishing
//! platform's "replace content" endpoint.

use serde::Serialize;
use serde_json::Value;

use crate::node::Node;
use crate::Result;

/// Serialize a document tree to a JSON value
pub fn to_value(node: &Node) -> Result<Value> {
    Ok(serde_json::to_value(node)?)
}

/// Serialize a document tree to a JSON string
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string(node)?)
}

/// Content-replacement method accepted by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMethod {
    #[default]
    Replace,
}

/// Body of the platform's "replace content" request.
///
/// Transport, auth and retries belong to the HTTP client; this type only
/// fixes the payload shape the converter has contracted to produce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceContentRequest {
    pub doc: Node,
    pub publish_release: bool,
    pub method: ReplaceMethod,
}

impl ReplaceContentRequest {
    /// Wrap a document tree in an unpublished replace request
    pub fn new(doc: Node) -> Self {
        Self {
            doc,
            publish_release: false,
            method: ReplaceMethod::Replace,
        }
    }

    /// Request an immediate release on replace
    pub fn publish(mut self) -> Self {
        self.publish_release = true;
        self
    }

    /// Serialize the request body to a JSON value
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
