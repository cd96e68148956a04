//! BMI Health Planner Shared Library
//!
//! This crate contains the domain types and pure computations used by
//! the backend: BMI math, category bands, plan content and entry models.

pub mod errors;
pub mod health_metrics;
pub mod models;
pub mod plans;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use health_metrics::*;
pub use models::*;
pub use plans::{CategoryPlan, PlanCatalog, PlanCatalogBuilder};
pub use types::*;
