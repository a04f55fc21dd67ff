use crate::errors::Result;
use crate::savings_goals::savings_goals_model::{NewSavingsGoal, SavingsGoal};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for savings goal repository operations
#[async_trait]
pub trait SavingsGoalRepositoryTrait: Send + Sync {
    /// All goals of `user_id`, in insertion order.
    fn list_savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    async fn insert_savings_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal>;
    /// Adds `amount` to the goal's current amount in a single write.
    async fn add_to_current_amount(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal>;
}

/// Trait for savings goal service operations
#[async_trait]
pub trait SavingsGoalServiceTrait: Send + Sync {
    fn get_savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>>;
    async fn create_savings_goal(
        &self,
        user_id: &str,
        new_goal: NewSavingsGoal,
    ) -> Result<SavingsGoal>;
    async fn add_money(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal>;
}
