//! Model matching
//!
//! Determines which definitions, and which of their declared model
//! patterns, apply to a given content record.

use sections_model::{ContentRecord, Definition, ModelPattern};
use std::sync::Arc;

/// Whether one pattern matches a record: the content type equals the
/// record's type (or is the wildcard) and the record carries a reference
/// under the pattern's field.
pub fn pattern_matches(pattern: &ModelPattern, record: &ContentRecord) -> bool {
    (pattern.is_wildcard() || pattern.content_type == record.content_type)
        && record.reference(&pattern.field).is_some()
}

/// Definitions with at least one pattern matching the record, in
/// definition order
pub fn matching_definitions<'a>(
    record: &ContentRecord,
    definitions: &'a [Arc<Definition>],
) -> Vec<&'a Definition> {
    definitions
        .iter()
        .map(Arc::as_ref)
        .filter(|def| def.models.iter().any(|p| pattern_matches(p, record)))
        .collect()
}

/// All patterns of one definition that individually match the record, in
/// declaration order. A definition mapping to several fields on the same
/// record yields one entry per field.
pub fn matching_models<'a>(
    record: &ContentRecord,
    definition: &'a Definition,
) -> Vec<&'a ModelPattern> {
    definition
        .models
        .iter()
        .filter(|p| pattern_matches(p, record))
        .collect()
}
