//! Ancla Core - Domain entities, services, and traits.
//!
//! This crate contains the budgeting and reporting logic for Ancla.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod analytics;
pub mod budget_limits;
pub mod constants;
pub mod errors;
pub mod period;
pub mod reports;
pub mod savings_goals;
pub mod transactions;

pub use period::{Period, TimeWindow};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
