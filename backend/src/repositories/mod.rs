//! Database repositories
//!
//! Provides the storage abstraction for health entries and its two
//! implementations. Callers pick one explicitly; see [`crate::state`].

use async_trait::async_trait;
use bmi_planner_shared::{EntryId, HealthEntry};
use thiserror::Error;

pub mod health_entry;
pub mod in_memory;

pub use health_entry::{HealthEntryRecord, PgHealthEntryRepository};
pub use in_memory::InMemoryHealthEntryRepository;

/// Error type for repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Health entry not found: {0}")]
    NotFound(EntryId),

    #[error("Corrupt stored entry: {0}")]
    Corrupt(String),
}

/// Storage of health entries with identifier lookup
///
/// Fields are stored verbatim; nothing is recomputed on save.
#[async_trait]
pub trait HealthEntryRepository: Send + Sync {
    /// Persist an entry
    ///
    /// Without an id the store assigns a fresh one and returns the entry
    /// carrying it. With an id the stored fields are replaced and the id is
    /// kept; an id the store never issued is `NotFound`.
    async fn save(&self, entry: HealthEntry) -> Result<HealthEntry, RepositoryError>;

    /// Look up an entry, `None` when the id was never assigned
    async fn find_by_id(&self, id: EntryId) -> Result<Option<HealthEntry>, RepositoryError>;

    /// Most recently created entry
    async fn find_latest(&self) -> Result<Option<HealthEntry>, RepositoryError>;
}
