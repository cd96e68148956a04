//! Health entry repository backed by PostgreSQL

use super::{HealthEntryRepository, RepositoryError};
use async_trait::async_trait;
use bmi_planner_shared::{BmiCategory, EntryId, HealthEntry};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

/// Health entry record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct HealthEntryRecord {
    pub id: i64,
    pub email: String,
    pub weight_kg: Decimal,
    pub height_cm: Decimal,
    pub bmi: Decimal,
    pub bmi_category: String,
    pub meal_plan_json: String,
    pub workout_plan_json: String,
    pub tips_json: String,
    pub quotes_json: String,
}

impl TryFrom<HealthEntryRecord> for HealthEntry {
    type Error = RepositoryError;

    fn try_from(record: HealthEntryRecord) -> Result<Self, Self::Error> {
        let bmi_category = record.bmi_category.parse::<BmiCategory>().map_err(|e| {
            RepositoryError::Corrupt(format!("entry {}: {}", record.id, e))
        })?;

        Ok(HealthEntry {
            id: Some(record.id),
            email: record.email,
            weight_kg: record.weight_kg,
            height_cm: record.height_cm,
            bmi: record.bmi,
            bmi_category,
            meal_plan_json: record.meal_plan_json,
            workout_plan_json: record.workout_plan_json,
            tips_json: record.tips_json,
            quotes_json: record.quotes_json,
        })
    }
}

/// Health entry repository for database operations
#[derive(Clone)]
pub struct PgHealthEntryRepository {
    pool: PgPool,
}

impl PgHealthEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new entry, letting the database assign the id
    async fn insert(&self, entry: &HealthEntry) -> Result<HealthEntryRecord, RepositoryError> {
        let record = sqlx::query_as::<_, HealthEntryRecord>(
            r#"
            INSERT INTO health_entries
                (email, weight_kg, height_cm, bmi, bmi_category, meal_plan_json, workout_plan_json, tips_json, quotes_json)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, email, weight_kg, height_cm, bmi, bmi_category, meal_plan_json, workout_plan_json, tips_json, quotes_json
            "#,
        )
        .bind(&entry.email)
        .bind(entry.weight_kg)
        .bind(entry.height_cm)
        .bind(entry.bmi)
        .bind(entry.bmi_category.label())
        .bind(&entry.meal_plan_json)
        .bind(&entry.workout_plan_json)
        .bind(&entry.tips_json)
        .bind(&entry.quotes_json)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    /// Overwrite every field of an existing entry
    async fn update(
        &self,
        id: EntryId,
        entry: &HealthEntry,
    ) -> Result<Option<HealthEntryRecord>, RepositoryError> {
        let record = sqlx::query_as::<_, HealthEntryRecord>(
            r#"
            UPDATE health_entries
            SET email = $2, weight_kg = $3, height_cm = $4, bmi = $5, bmi_category = $6,
                meal_plan_json = $7, workout_plan_json = $8, tips_json = $9, quotes_json = $10
            WHERE id = $1
            RETURNING id, email, weight_kg, height_cm, bmi, bmi_category, meal_plan_json, workout_plan_json, tips_json, quotes_json
            "#,
        )
        .bind(id)
        .bind(&entry.email)
        .bind(entry.weight_kg)
        .bind(entry.height_cm)
        .bind(entry.bmi)
        .bind(entry.bmi_category.label())
        .bind(&entry.meal_plan_json)
        .bind(&entry.workout_plan_json)
        .bind(&entry.tips_json)
        .bind(&entry.quotes_json)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}

#[async_trait]
impl HealthEntryRepository for PgHealthEntryRepository {
    async fn save(&self, entry: HealthEntry) -> Result<HealthEntry, RepositoryError> {
        let record = match entry.id {
            None => self.insert(&entry).await?,
            Some(id) => self
                .update(id, &entry)
                .await?
                .ok_or(RepositoryError::NotFound(id))?,
        };

        debug!(id = record.id, category = %record.bmi_category, "Saved health entry");
        record.try_into()
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<HealthEntry>, RepositoryError> {
        let record = sqlx::query_as::<_, HealthEntryRecord>(
            r#"
            SELECT id, email, weight_kg, height_cm, bmi, bmi_category, meal_plan_json, workout_plan_json, tips_json, quotes_json
            FROM health_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        record.map(HealthEntry::try_from).transpose()
    }

    async fn find_latest(&self) -> Result<Option<HealthEntry>, RepositoryError> {
        let record = sqlx::query_as::<_, HealthEntryRecord>(
            r#"
            SELECT id, email, weight_kg, height_cm, bmi, bmi_category, meal_plan_json, workout_plan_json, tips_json, quotes_json
            FROM health_entries
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await?;

        record.map(HealthEntry::try_from).transpose()
    }
}
