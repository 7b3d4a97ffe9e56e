//! Upstream content records
//!
//! A [`ContentRecord`] is the engine's view of one item in the upstream
//! content store: a declared content type, scalar fields, reference fields
//! pointing at other records, and (for document records) a raw JSON body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One upstream content item, already fetched by the host data layer.
///
/// Scalar fields live in `fields` as raw JSON values; links to other records
/// live in `references` keyed by field name. Document records (configuration
/// payloads, section content payloads) carry their undecoded JSON text in
/// `body`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Store-internal record identifier
    pub id: String,
    /// Declared content type of the record
    pub content_type: String,
    /// Upstream-facing identifier, when the store exposes one
    #[serde(default)]
    pub external_id: Option<String>,
    /// Scalar fields by name
    #[serde(default)]
    pub fields: Map<String, Value>,
    /// Reference fields: field name to referenced record id
    #[serde(default)]
    pub references: BTreeMap<String, String>,
    /// Raw JSON body for document records
    #[serde(default)]
    pub body: Option<String>,
}

impl ContentRecord {
    /// Create a record with the given id and content type and no fields
    pub fn new(id: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content_type: content_type.into(),
            external_id: None,
            fields: Map::new(),
            references: BTreeMap::new(),
            body: None,
        }
    }

    /// Set a scalar field
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Set a reference field pointing at another record
    pub fn with_reference(mut self, field: impl Into<String>, record_id: impl Into<String>) -> Self {
        self.references.insert(field.into(), record_id.into());
        self
    }

    /// Set the raw JSON body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the upstream-facing identifier
    pub fn with_external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Scalar field as a string, if present and string-valued
    pub fn field_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Scalar field as a list of strings, dropping non-string entries
    pub fn field_str_list(&self, name: &str) -> Vec<String> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Referenced record id for the given field
    pub fn reference(&self, field: &str) -> Option<&str> {
        self.references.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_sets_fields_references_and_body() {
        let record = ContentRecord::new("r1", "page")
            .with_field("title", "Home")
            .with_reference("hero", "r2")
            .with_body(r#"{"settings":{}}"#)
            .with_external_id("ext-1");

        assert_eq!(record.field_str("title"), Some("Home"));
        assert_eq!(record.reference("hero"), Some("r2"));
        assert_eq!(record.body.as_deref(), Some(r#"{"settings":{}}"#));
        assert_eq!(record.external_id.as_deref(), Some("ext-1"));
    }

    #[test]
    fn field_str_list_drops_non_string_entries() {
        let record =
            ContentRecord::new("r1", "page").with_field("models", json!(["a:b", 7, "c:d", null]));

        assert_eq!(record.field_str_list("models"), vec!["a:b", "c:d"]);
    }

    #[test]
    fn field_str_list_is_empty_for_missing_or_non_array_field() {
        let record = ContentRecord::new("r1", "page").with_field("models", "not-a-list");

        assert!(record.field_str_list("models").is_empty());
        assert!(record.field_str_list("absent").is_empty());
    }

    #[test]
    fn reference_returns_none_for_unknown_field() {
        let record = ContentRecord::new("r1", "page");
        assert_eq!(record.reference("hero"), None);
    }
}
