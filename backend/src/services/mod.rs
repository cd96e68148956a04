//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! the pure health computations and the repositories.

pub mod entry;
pub mod health;

pub use entry::HealthEntryService;
pub use health::HealthService;
