use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use super::budget_limits_model::{BudgetLimit, NewBudgetLimit};
use super::budget_limits_traits::{BudgetLimitRepositoryTrait, BudgetLimitServiceTrait};
use crate::errors::Result;

pub struct BudgetLimitService {
    repository: Arc<dyn BudgetLimitRepositoryTrait>,
}

impl BudgetLimitService {
    pub fn new(repository: Arc<dyn BudgetLimitRepositoryTrait>) -> Self {
        BudgetLimitService { repository }
    }
}

#[async_trait]
impl BudgetLimitServiceTrait for BudgetLimitService {
    fn get_budget_limits(&self, user_id: &str) -> Result<Vec<BudgetLimit>> {
        self.repository.list_budget_limits(user_id)
    }

    async fn create_budget_limit(
        &self,
        user_id: &str,
        new_limit: NewBudgetLimit,
    ) -> Result<BudgetLimit> {
        debug!(
            "Creating {} limit of {} on '{}' for user {}",
            new_limit.period, new_limit.limit_amount, new_limit.category, user_id
        );
        let limit = BudgetLimit {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            category: new_limit.category,
            limit_amount: new_limit.limit_amount,
            period: new_limit.period,
            current_amount: Decimal::ZERO,
            created_at: Utc::now().naive_utc(),
        };
        self.repository.insert_budget_limit(limit).await
    }

    async fn update_budget_limit(
        &self,
        limit_id: &str,
        update: NewBudgetLimit,
    ) -> Result<BudgetLimit> {
        self.repository.update_budget_limit(limit_id, update).await
    }
}
