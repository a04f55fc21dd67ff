use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::savings_goals_model::{NewSavingsGoal, SavingsGoal};
use super::savings_goals_traits::{SavingsGoalRepositoryTrait, SavingsGoalServiceTrait};
use crate::constants::MAX_AMOUNT;
use crate::errors::{Error, Result, ValidationError};

pub struct SavingsGoalService {
    repository: Arc<dyn SavingsGoalRepositoryTrait>,
}

impl SavingsGoalService {
    pub fn new(repository: Arc<dyn SavingsGoalRepositoryTrait>) -> Self {
        SavingsGoalService { repository }
    }
}

#[async_trait]
impl SavingsGoalServiceTrait for SavingsGoalService {
    fn get_savings_goals(&self, user_id: &str) -> Result<Vec<SavingsGoal>> {
        self.repository.list_savings_goals(user_id)
    }

    async fn create_savings_goal(
        &self,
        user_id: &str,
        new_goal: NewSavingsGoal,
    ) -> Result<SavingsGoal> {
        new_goal.validate()?;
        let goal = SavingsGoal {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: new_goal.title,
            target_amount: new_goal.target_amount,
            current_amount: Decimal::ZERO,
            target_date: new_goal.target_date,
            description: new_goal.description,
            created_at: Utc::now().naive_utc(),
        };
        self.repository.insert_savings_goal(goal).await
    }

    async fn add_money(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal> {
        if amount.abs() > MAX_AMOUNT {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Deposit amount cannot exceed {}",
                MAX_AMOUNT
            ))));
        }
        debug!("Depositing {} into savings goal {}", amount, goal_id);
        self.repository.add_to_current_amount(goal_id, amount).await
    }
}
