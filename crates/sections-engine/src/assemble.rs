//! Section assembly
//!
//! Top-level orchestration: for every (definition, matching pattern) pair,
//! fetch the referenced field's content record, decode its payload, coerce
//! the declared settings, and assemble the block list.

use crate::blocks::assemble_blocks;
use crate::cache::DefinitionCache;
use crate::coerce::coerce_settings;
use crate::matcher::{matching_definitions, matching_models};
use sections_model::{ContentRecord, RawContent, Section};
use sections_store::ContentStore;

/// Assemble every section the record resolves to.
///
/// One section per (definition, matching model pattern) pair: a record
/// satisfying several field mappings of the same definition yields several
/// sections, one per field, each with `id` equal to that field's name.
/// Output order is definition discovery order, then pattern declaration
/// order.
pub async fn assemble_sections(
    store: &dyn ContentStore,
    cache: &DefinitionCache,
    record: &ContentRecord,
) -> Vec<Section> {
    let definitions = cache.get_all(store).await;

    let mut sections = Vec::new();
    for definition in matching_definitions(record, definitions) {
        for pattern in matching_models(record, definition) {
            // The match guarantees the reference is present
            let Some(target_id) = record.reference(&pattern.field) else {
                continue;
            };
            let raw = fetch_raw_content(store, target_id).await;
            let settings = coerce_settings(store, definition.setting_configs(), &raw.settings).await;
            let blocks = assemble_blocks(store, &raw.blocks, definition.block_configs()).await;
            sections.push(Section {
                id: pattern.field.clone(),
                name: definition.title.clone(),
                models: definition.model_strings(),
                config_json: definition.config_json.clone(),
                settings,
                blocks,
            });
        }
    }
    sections
}

/// Fetch the referenced record and decode its body as a raw payload.
/// Missing records, missing bodies, and malformed JSON all degrade to an
/// empty payload so declared settings still resolve to their defaults.
async fn fetch_raw_content(store: &dyn ContentStore, record_id: &str) -> RawContent {
    let record = match store.record_by_id(record_id).await {
        Ok(Some(record)) => record,
        Ok(None) => {
            tracing::debug!(%record_id, "Referenced content record not found");
            return RawContent::default();
        }
        Err(error) => {
            tracing::warn!(%record_id, %error, "Failed to fetch referenced content record");
            return RawContent::default();
        }
    };

    let Some(body) = record.body.as_deref() else {
        return RawContent::default();
    };
    match RawContent::parse(body) {
        Ok(raw) => raw,
        Err(error) => {
            tracing::warn!(%record_id, %error, "Malformed content payload; treating as empty");
            RawContent::default()
        }
    }
}
