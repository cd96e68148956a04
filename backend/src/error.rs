//! Application error handling
//!
//! This module provides unified error handling for the planner,
//! separating bad input from storage failures for the caller.

use crate::notify::NotifyError;
use crate::repositories::RepositoryError;
use bmi_planner_shared::{HealthEntry, HealthError};
use thiserror::Error;

/// Error type surfaced to callers of the services
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] RepositoryError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    /// The entry is stored; only delivery of its plan failed
    #[error("Entry saved but plan delivery failed: {source}")]
    Notification {
        entry: Box<HealthEntry>,
        source: NotifyError,
    },

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<HealthError> for AppError {
    fn from(err: HealthError) -> Self {
        match err {
            HealthError::InvalidInput(msg) => AppError::InvalidInput(msg),
            other => AppError::Internal(other.into()),
        }
    }
}

impl AppError {
    /// Stable code for logs and CLI output
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Persistence(_) => "PERSISTENCE_ERROR",
            AppError::Encoding(_) => "ENCODING_ERROR",
            AppError::Notification { .. } => "NOTIFICATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Result type alias for service calls
pub type AppResult<T> = Result<T, AppError>;
