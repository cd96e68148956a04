//! Application state management
//!
//! The component graph is assembled here, explicitly: pick a repository
//! from configuration and hand it, with a plan notifier, to the entry
//! service.

use crate::config::{AppConfig, StorageBackend};
use crate::db;
use crate::notify::{PlanNotifier, TracingNotifier};
use crate::repositories::{
    HealthEntryRepository, InMemoryHealthEntryRepository, PgHealthEntryRepository,
};
use crate::services::{HealthEntryService, HealthService};
use anyhow::Result;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

/// Shared application state
///
/// All fields are cheap to clone: the pool and config are reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Pure BMI and plan computation
    pub health: HealthService,
    /// Generate-and-persist workflow
    pub entries: HealthEntryService,
    /// Database pool, present only for the PostgreSQL backend
    pub db: Option<PgPool>,
}

impl AppState {
    /// Build state for the backend named in the configuration
    ///
    /// For PostgreSQL this opens the pool and, if configured, creates the
    /// entries table.
    pub async fn connect(config: AppConfig) -> Result<Self> {
        match config.storage.backend {
            StorageBackend::Memory => Ok(Self::in_memory(config)),
            StorageBackend::Postgres => {
                info!("Connecting to database...");
                let pool = db::create_pool(&config.database).await?;
                if config.database.init_schema {
                    db::init_schema(&pool).await?;
                }
                Ok(Self::postgres(pool, config))
            }
        }
    }

    /// State over a PostgreSQL pool
    pub fn postgres(pool: PgPool, config: AppConfig) -> Self {
        let repository = Arc::new(PgHealthEntryRepository::new(pool.clone()));
        Self::with_repository(config, repository, Arc::new(TracingNotifier), Some(pool))
    }

    /// State over a fresh in-memory store
    pub fn in_memory(config: AppConfig) -> Self {
        Self::with_repository(
            config,
            Arc::new(InMemoryHealthEntryRepository::new()),
            Arc::new(TracingNotifier),
            None,
        )
    }

    /// State over any repository and notifier implementation
    pub fn with_repository(
        config: AppConfig,
        repository: Arc<dyn HealthEntryRepository>,
        notifier: Arc<dyn PlanNotifier>,
        db: Option<PgPool>,
    ) -> Self {
        let health = HealthService::new();
        let entries = HealthEntryService::new(health.clone(), repository, notifier);

        Self {
            config: Arc::new(config),
            health,
            entries,
            db,
        }
    }

    /// Get a reference to the configuration
    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Check that storage is reachable
    pub async fn health_check(&self) -> Result<()> {
        match &self.db {
            Some(pool) => db::health_check(pool).await,
            None => Ok(()),
        }
    }
}
