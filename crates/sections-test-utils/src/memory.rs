//! In-memory ContentStore for tests

use async_trait::async_trait;
use sections_model::ContentRecord;
use sections_store::{ContentStore, Error, ReferenceKind, Result};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// An in-memory [`ContentStore`] seeded with records up front.
///
/// Counts type queries so tests can assert cache behavior, and can be
/// constructed in a failing mode where every lookup errors.
pub struct MemoryStore {
    records: Vec<Arc<ContentRecord>>,
    by_id: HashMap<String, usize>,
    type_queries: AtomicUsize,
    fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            type_queries: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// A store whose every lookup fails, for degraded-path tests
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Seed a record, keeping insertion order for type queries
    pub fn with(mut self, record: ContentRecord) -> Self {
        self.by_id.insert(record.id.clone(), self.records.len());
        self.records.push(Arc::new(record));
        self
    }

    /// How many `records_of_type` queries have been issued
    pub fn type_query_count(&self) -> usize {
        self.type_queries.load(Ordering::SeqCst)
    }

    fn check_failing(&self) -> Result<()> {
        if self.fail {
            Err(Error::unavailable("memory store in failing mode"))
        } else {
            Ok(())
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn records_of_type(&self, content_type: &str) -> Result<Vec<Arc<ContentRecord>>> {
        self.type_queries.fetch_add(1, Ordering::SeqCst);
        self.check_failing()?;
        Ok(self
            .records
            .iter()
            .filter(|r| r.content_type == content_type)
            .cloned()
            .collect())
    }

    async fn record_by_id(&self, id: &str) -> Result<Option<Arc<ContentRecord>>> {
        self.check_failing()?;
        Ok(self.by_id.get(id).map(|&i| Arc::clone(&self.records[i])))
    }

    async fn record_by_external_id(
        &self,
        kind: ReferenceKind,
        external_id: &str,
    ) -> Result<Option<Arc<ContentRecord>>> {
        self.check_failing()?;
        Ok(self
            .records
            .iter()
            .find(|r| {
                r.external_id.as_deref() == Some(external_id)
                    && match kind {
                        ReferenceKind::Asset => r.content_type == "asset",
                        ReferenceKind::Entry => r.content_type != "asset",
                    }
            })
            .cloned())
    }
}
