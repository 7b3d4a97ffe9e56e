//! ContentStore trait and related types

use crate::Result;
use async_trait::async_trait;
use sections_model::ContentRecord;
use std::sync::Arc;

/// Which record family an external-id lookup searches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Regular content entries
    Entry,
    /// Uploaded assets (images, files)
    Asset,
}

/// Read-only access to the upstream content store.
///
/// Implementations wrap the host data layer; the engine issues one lookup
/// per suspension point and never caches records itself (definitions are
/// cached separately, once per process).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// All records of the given content type, in store order
    async fn records_of_type(&self, content_type: &str) -> Result<Vec<Arc<ContentRecord>>>;

    /// A record by its store-internal id
    async fn record_by_id(&self, id: &str) -> Result<Option<Arc<ContentRecord>>>;

    /// A record by its upstream-facing id, scoped to entries or assets
    async fn record_by_external_id(
        &self,
        kind: ReferenceKind,
        external_id: &str,
    ) -> Result<Option<Arc<ContentRecord>>>;
}
