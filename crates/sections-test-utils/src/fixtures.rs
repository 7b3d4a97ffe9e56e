//! Builders for common record shapes

use sections_model::ContentRecord;
use serde_json::json;

/// Content type used for definition records in fixtures
pub const DEFINITION_TYPE: &str = "sectionDefinition";

/// A definition-bearing record: title, model pattern strings, and an
/// optional reference to a linked configuration document record
pub fn definition_record(
    id: &str,
    title: &str,
    models: &[&str],
    config_ref: Option<&str>,
) -> ContentRecord {
    let mut record = ContentRecord::new(id, DEFINITION_TYPE)
        .with_field("title", title)
        .with_field("models", json!(models));
    if let Some(config_id) = config_ref {
        record = record.with_reference("config", config_id);
    }
    record
}

/// A document record carrying a raw JSON body
pub fn document_record(id: &str, body: &str) -> ContentRecord {
    ContentRecord::new(id, "jsonDocument").with_body(body)
}
