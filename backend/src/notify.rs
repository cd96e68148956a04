//! Plan delivery
//!
//! After an entry is saved its plan is sent to the entry's email address.
//! Delivery sits behind [`PlanNotifier`] so the entry service never knows
//! which channel is in use.

use async_trait::async_trait;
use bmi_planner_shared::{EntryId, HealthEntry};
use thiserror::Error;
use tracing::info;

/// Errors raised while delivering a plan
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Entry has not been saved")]
    Unsaved,

    #[error("No recipient address on entry {0}")]
    MissingRecipient(EntryId),

    #[error("Plan could not be rendered: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

/// Sends a saved entry's plan to its owner
#[async_trait]
pub trait PlanNotifier: Send + Sync {
    async fn send_plan(&self, entry: &HealthEntry) -> Result<(), NotifyError>;
}

/// Rendered plan, ready for any delivery channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanMessage {
    pub entry_id: EntryId,
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl PlanMessage {
    /// Render the plain-text message for a saved entry
    pub fn from_entry(entry: &HealthEntry) -> Result<Self, NotifyError> {
        let entry_id = entry.id.ok_or(NotifyError::Unsaved)?;
        let to = entry.email.trim();
        if to.is_empty() {
            return Err(NotifyError::MissingRecipient(entry_id));
        }

        let mut body = format!(
            "Your BMI is {} ({}).\n",
            entry.bmi, entry.bmi_category
        );
        push_section(&mut body, "Meal plan", &entry.meal_plan()?);
        push_section(&mut body, "Workout plan", &entry.workout_plan()?);
        push_section(&mut body, "Tips", &entry.tips()?);
        push_section(&mut body, "Motivation", &entry.quotes()?);

        Ok(Self {
            entry_id,
            to: to.to_string(),
            subject: format!("Your health plan: {}", entry.bmi_category),
            body,
        })
    }
}

fn push_section(body: &mut String, title: &str, items: &[String]) {
    body.push('\n');
    body.push_str(title);
    body.push_str(":\n");
    for item in items {
        body.push_str("- ");
        body.push_str(item);
        body.push('\n');
    }
}

/// Default notifier: renders the message and records it as a log event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

#[async_trait]
impl PlanNotifier for TracingNotifier {
    async fn send_plan(&self, entry: &HealthEntry) -> Result<(), NotifyError> {
        let message = PlanMessage::from_entry(entry)?;
        info!(
            id = message.entry_id,
            to = %message.to,
            subject = %message.subject,
            lines = message.body.lines().count(),
            "Plan delivered"
        );
        Ok(())
    }
}
