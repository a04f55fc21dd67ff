use crate::budget_limits::budget_limits_model::{BudgetLimit, NewBudgetLimit};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for budget limit repository operations
#[async_trait]
pub trait BudgetLimitRepositoryTrait: Send + Sync {
    /// All limits of `user_id`, in insertion order.
    fn list_budget_limits(&self, user_id: &str) -> Result<Vec<BudgetLimit>>;
    async fn insert_budget_limit(&self, limit: BudgetLimit) -> Result<BudgetLimit>;
    async fn update_budget_limit(&self, limit_id: &str, update: NewBudgetLimit)
        -> Result<BudgetLimit>;
}

/// Trait for budget limit service operations
#[async_trait]
pub trait BudgetLimitServiceTrait: Send + Sync {
    fn get_budget_limits(&self, user_id: &str) -> Result<Vec<BudgetLimit>>;
    async fn create_budget_limit(
        &self,
        user_id: &str,
        new_limit: NewBudgetLimit,
    ) -> Result<BudgetLimit>;
    async fn update_budget_limit(&self, limit_id: &str, update: NewBudgetLimit)
        -> Result<BudgetLimit>;
}
