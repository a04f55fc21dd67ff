//! Budget analytics module.
//!
//! Aggregates a user's transaction log over a fixed-duration window into
//! totals, an expense breakdown per category, budget alerts, a six-bucket
//! expense trend, savings progress and a naive projection.

pub mod aggregation;
mod analytics_model;
mod analytics_service;
mod analytics_traits;

pub use analytics_model::*;
pub use analytics_service::AnalyticsService;
pub use analytics_traits::AnalyticsServiceTrait;

#[cfg(test)]
mod analytics_service_tests;
