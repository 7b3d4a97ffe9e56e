//! Resolver surface
//!
//! The query operations exposed to the host schema. Setting projections
//! and block filtering live on the assembled [`Section`] itself (see
//! `sections_model::SettingAccess`); this facade owns the store handle and
//! the definition cache and runs the assembly.

use crate::assemble::assemble_sections;
use crate::cache::DefinitionCache;
use crate::config::EngineConfig;
use sections_model::{ContentRecord, Section};
use sections_store::ContentStore;
use std::sync::Arc;

/// Read-only resolution facade over one store and one definition cache.
///
/// Construct once at schema-setup time and share by reference; the cache
/// populates lazily on the first resolution and lives until process
/// restart.
pub struct Resolver {
    store: Arc<dyn ContentStore>,
    cache: DefinitionCache,
}

impl Resolver {
    /// Resolver with default engine configuration
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self::with_config(store, EngineConfig::default())
    }

    /// Resolver with explicit engine configuration
    pub fn with_config(store: Arc<dyn ContentStore>, config: EngineConfig) -> Self {
        Self {
            cache: DefinitionCache::new(config.definition_type),
            store,
        }
    }

    /// All sections the record resolves to, in discovery order
    pub async fn sections(&self, record: &ContentRecord) -> Vec<Section> {
        assemble_sections(self.store.as_ref(), &self.cache, record).await
    }

    /// The first section whose id (field name) equals `id`, if any
    pub async fn section(&self, record: &ContentRecord, id: &str) -> Option<Section> {
        self.sections(record).await.into_iter().find(|s| s.id == id)
    }

    /// The definition cache backing this resolver
    pub fn cache(&self) -> &DefinitionCache {
        &self.cache
    }
}
