use crate::analytics::analytics_model::BudgetAnalytics;
use crate::errors::Result;

/// Trait for analytics service operations
pub trait AnalyticsServiceTrait: Send + Sync {
    /// Aggregates the user's data over the window named by `period`.
    /// Unrecognized periods fall back to monthly; an unknown user yields an
    /// all-zero result.
    fn compute_analytics(&self, user_id: &str, period: &str) -> Result<BudgetAnalytics>;
}
