//! In-memory health entry repository
//!
//! Same contract as the PostgreSQL store, kept in process memory. Used by
//! tests and by the CLI when no database is configured.

use super::{HealthEntryRepository, RepositoryError};
use async_trait::async_trait;
use bmi_planner_shared::{EntryId, HealthEntry};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory storage for health entries
#[derive(Debug, Clone)]
pub struct InMemoryHealthEntryRepository {
    entries: Arc<RwLock<BTreeMap<EntryId, HealthEntry>>>,
    next_id: Arc<AtomicI64>,
}

impl Default for InMemoryHealthEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryHealthEntryRepository {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    /// Number of stored entries
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl HealthEntryRepository for InMemoryHealthEntryRepository {
    async fn save(&self, mut entry: HealthEntry) -> Result<HealthEntry, RepositoryError> {
        let mut store = self.entries.write().await;

        let id = match entry.id {
            Some(id) if store.contains_key(&id) => id,
            Some(id) => return Err(RepositoryError::NotFound(id)),
            None => self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        entry.id = Some(id);
        store.insert(id, entry.clone());

        debug!(id, category = %entry.bmi_category, "Saved health entry in memory");
        Ok(entry)
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<HealthEntry>, RepositoryError> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn find_latest(&self) -> Result<Option<HealthEntry>, RepositoryError> {
        Ok(self
            .entries
            .read()
            .await
            .last_key_value()
            .map(|(_, entry)| entry.clone()))
    }
}
