//! Definition cache
//!
//! Loads and memoizes the full set of section definitions for the process
//! lifetime. The cache is an explicit object constructed once at setup time
//! and passed by reference into the resolver surface; there is no implicit
//! module-level state.

use sections_model::{ConfigDocument, ContentRecord, Definition, ModelPattern};
use sections_store::ContentStore;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Lazily-loaded, process-lifetime set of section definitions.
///
/// The first `get_all` call queries the store for all records of the
/// configured definition type and decodes them; every later call returns
/// the memoized list without touching the store. Concurrent first calls
/// await the same in-flight load, so exactly one store query is issued.
///
/// There is no invalidation: definitions edited upstream after the first
/// load are not observed until process restart.
pub struct DefinitionCache {
    definition_type: String,
    definitions: OnceCell<Vec<Arc<Definition>>>,
}

impl DefinitionCache {
    /// Create an unloaded cache for the given definition content type
    pub fn new(definition_type: impl Into<String>) -> Self {
        Self {
            definition_type: definition_type.into(),
            definitions: OnceCell::new(),
        }
    }

    /// All known definitions, loading them on first call.
    ///
    /// A store failure during the load is logged and memoizes an empty set:
    /// resolution proceeds and every record yields zero sections.
    pub async fn get_all(&self, store: &dyn ContentStore) -> &[Arc<Definition>] {
        self.definitions
            .get_or_init(|| load_definitions(store, &self.definition_type))
            .await
    }

    /// Whether the initial load has completed
    pub fn is_loaded(&self) -> bool {
        self.definitions.initialized()
    }
}

async fn load_definitions(
    store: &dyn ContentStore,
    definition_type: &str,
) -> Vec<Arc<Definition>> {
    let records = match store.records_of_type(definition_type).await {
        Ok(records) => records,
        Err(error) => {
            tracing::warn!(%definition_type, %error, "Definition source unavailable; resolving with an empty definition set");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut definitions = Vec::new();
    for record in records {
        // First occurrence wins on duplicate ids
        if !seen.insert(record.id.clone()) {
            tracing::debug!(id = %record.id, "Skipping duplicate definition");
            continue;
        }
        definitions.push(Arc::new(decode_definition(store, &record).await));
    }
    tracing::debug!(count = definitions.len(), "Loaded section definitions");
    definitions
}

async fn decode_definition(store: &dyn ContentStore, record: &ContentRecord) -> Definition {
    let title = record.field_str("title").map(str::to_string);

    let mut models = Vec::new();
    for raw in record.field_str_list("models") {
        match raw.parse::<ModelPattern>() {
            Ok(pattern) => models.push(pattern),
            Err(error) => {
                tracing::warn!(definition = %record.id, %error, "Skipping malformed model pattern");
            }
        }
    }

    let (config, config_json) = match record.reference("config") {
        Some(config_id) => load_config(store, &record.id, config_id).await,
        None => (None, "{}".to_string()),
    };

    Definition {
        id: record.id.clone(),
        title,
        models,
        config,
        config_json,
    }
}

/// Fetch and parse the linked configuration document. Parse failure leaves
/// the definition usable with `config = None`; the raw body is still
/// forwarded as `config_json`.
async fn load_config(
    store: &dyn ContentStore,
    definition_id: &str,
    config_id: &str,
) -> (Option<ConfigDocument>, String) {
    let document = match store.record_by_id(config_id).await {
        Ok(Some(document)) => document,
        Ok(None) => {
            tracing::debug!(definition = %definition_id, %config_id, "Linked config document not found");
            return (None, "{}".to_string());
        }
        Err(error) => {
            tracing::warn!(definition = %definition_id, %config_id, %error, "Failed to fetch linked config document");
            return (None, "{}".to_string());
        }
    };

    let body = document.body.clone().unwrap_or_else(|| "{}".to_string());
    match ConfigDocument::parse(&body) {
        Ok(parsed) => (Some(parsed), body),
        Err(error) => {
            tracing::warn!(definition = %definition_id, %error, "Malformed config document; treating as undeclared");
            (None, body)
        }
    }
}
