//! Database connection and pool management
//!
//! This module provides database connection pooling, the one-table
//! schema bootstrap and a liveness check.

use crate::config::DatabaseConfig;
use anyhow::Result;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Schema for the entries table. Idempotent.
pub const HEALTH_ENTRIES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS health_entries (
    id                BIGSERIAL PRIMARY KEY,
    email             TEXT      NOT NULL,
    weight_kg         NUMERIC   NOT NULL,
    height_cm         NUMERIC   NOT NULL,
    bmi               NUMERIC   NOT NULL,
    bmi_category      TEXT      NOT NULL,
    meal_plan_json    TEXT      NOT NULL,
    workout_plan_json TEXT      NOT NULL,
    tips_json         TEXT      NOT NULL,
    quotes_json       TEXT      NOT NULL
)
"#;

/// Create a PostgreSQL connection pool from the database settings
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = pool_options(config)
        .connect_with(connect_options(&config.url)?)
        .await?;

    info!(
        "Database pool created: max={}, min={}",
        config.max_connections, config.min_connections
    );

    Ok(pool)
}

fn connect_options(url: &str) -> Result<PgConnectOptions> {
    Ok(PgConnectOptions::from_str(url)?.application_name("bmi-planner"))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
}

/// Create the entries table if it does not exist
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(HEALTH_ENTRIES_DDL).execute(pool).await?;
    info!("Database schema ready");
    Ok(())
}

/// Check database health
pub async fn health_check(pool: &PgPool) -> Result<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| {
            warn!("Database health check failed: {}", e);
            e.into()
        })
}
