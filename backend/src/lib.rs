//! BMI Health Planner Backend Library
//!
//! This library exposes the backend modules for use in tests and the CLI.

pub mod config;
pub mod db;
pub mod error;
pub mod notify;
pub mod repositories;
pub mod services;
pub mod state;
