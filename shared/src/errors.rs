//! Error types for the BMI Health Planner domain

use thiserror::Error;

/// Errors raised by the pure health computations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HealthError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Plan content for {category} has no {kind}")]
    EmptyPlan {
        category: String,
        kind: &'static str,
    },
}
