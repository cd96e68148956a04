//! Health entry service
//!
//! Coordinates the pure [`HealthService`] with a storage backend and a
//! plan notifier: compute a result, persist it, then deliver the plan.

use crate::error::{AppError, AppResult};
use crate::notify::PlanNotifier;
use crate::repositories::HealthEntryRepository;
use crate::services::HealthService;
use bmi_planner_shared::{EntryId, HealthEntry};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Health entry service for recording and reading snapshots
#[derive(Clone)]
pub struct HealthEntryService {
    health: HealthService,
    repository: Arc<dyn HealthEntryRepository>,
    notifier: Arc<dyn PlanNotifier>,
}

impl HealthEntryService {
    pub fn new(
        health: HealthService,
        repository: Arc<dyn HealthEntryRepository>,
        notifier: Arc<dyn PlanNotifier>,
    ) -> Self {
        Self {
            health,
            repository,
            notifier,
        }
    }

    /// Generate a plan for the given measurements, store it and send it
    ///
    /// A delivery failure leaves the entry saved and is reported as
    /// [`AppError::Notification`], which carries the saved entry.
    #[instrument(skip(self))]
    pub async fn record(
        &self,
        email: &str,
        weight_kg: Decimal,
        height_cm: Decimal,
    ) -> AppResult<HealthEntry> {
        let result = self.health.generate(weight_kg, height_cm)?;
        let entry = HealthEntry::from_result(email, weight_kg, height_cm, &result)?;
        let saved = self.repository.save(entry).await?;

        info!(
            id = ?saved.id,
            bmi = %saved.bmi,
            category = %saved.bmi_category,
            "Recorded health entry"
        );

        if let Err(source) = self.notifier.send_plan(&saved).await {
            warn!(id = ?saved.id, error = %source, "Plan delivery failed");
            return Err(AppError::Notification {
                entry: Box::new(saved),
                source,
            });
        }
        Ok(saved)
    }

    /// Fetch a stored entry
    pub async fn get(&self, id: EntryId) -> AppResult<Option<HealthEntry>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Fetch the most recently recorded entry
    pub async fn latest(&self) -> AppResult<Option<HealthEntry>> {
        Ok(self.repository.find_latest().await?)
    }
}
