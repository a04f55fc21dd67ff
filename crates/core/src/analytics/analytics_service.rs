use chrono::{NaiveDateTime, Utc};
use log::debug;
use std::sync::Arc;

use super::aggregation;
use super::analytics_model::{BudgetAnalytics, ExpenseTrendPoint};
use super::analytics_traits::AnalyticsServiceTrait;
use crate::budget_limits::BudgetLimitRepositoryTrait;
use crate::errors::Result;
use crate::period::{Period, TimeWindow};
use crate::savings_goals::SavingsGoalRepositoryTrait;
use crate::transactions::TransactionRepositoryTrait;

pub struct AnalyticsService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    budget_limit_repository: Arc<dyn BudgetLimitRepositoryTrait>,
    savings_goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
}

impl AnalyticsService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        budget_limit_repository: Arc<dyn BudgetLimitRepositoryTrait>,
        savings_goal_repository: Arc<dyn SavingsGoalRepositoryTrait>,
    ) -> Self {
        AnalyticsService {
            transaction_repository,
            budget_limit_repository,
            savings_goal_repository,
        }
    }

    /// Computes analytics as seen at `now`. Reading the same store state with
    /// the same `now` always yields the same result.
    pub fn compute_analytics_at(
        &self,
        user_id: &str,
        period: &str,
        now: NaiveDateTime,
    ) -> Result<BudgetAnalytics> {
        let period = Period::from_token(period);
        let window = period.window_ending_at(now);
        debug!(
            "Computing {} analytics for user {} over [{}, {}]",
            period, user_id, window.start, window.end
        );

        let transactions =
            self.transaction_repository
                .list_transactions(user_id, window.start, window.end)?;
        let totals = aggregation::summarize_totals(&transactions);
        let category_breakdown = aggregation::expense_breakdown(&transactions);

        let limits = self.budget_limit_repository.list_budget_limits(user_id)?;
        let budget_alerts = aggregation::budget_alerts(&limits, &category_breakdown);

        let expense_trends = self.expense_trends(user_id, now)?;

        let goals = self.savings_goal_repository.list_savings_goals(user_id)?;
        let savings_progress = aggregation::savings_progress(&goals);

        Ok(BudgetAnalytics {
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            net_balance: totals.net_balance,
            category_breakdown,
            expense_trends,
            budget_alerts,
            savings_progress,
            predictions: aggregation::project_expenses(totals.total_expenses),
        })
    }

    /// Six 30-day expense buckets ending at `now`, most recent first. Each
    /// bucket is its own store query. Buckets are half-open so a transaction on
    /// a shared boundary is counted once; the most recent one keeps `now`.
    fn expense_trends(&self, user_id: &str, now: NaiveDateTime) -> Result<Vec<ExpenseTrendPoint>> {
        aggregation::trend_windows(now)
            .into_iter()
            .map(|bucket| {
                let rows = self
                    .transaction_repository
                    .list_transactions(user_id, bucket.start, bucket.end)?;
                let amount = aggregation::sum_amounts(
                    rows.iter()
                        .filter(|t| t.is_expense())
                        .filter(|t| in_bucket(&bucket, t.created_at, now))
                        .map(|t| t.amount),
                );
                Ok(ExpenseTrendPoint {
                    month: aggregation::month_label(bucket.start),
                    amount,
                })
            })
            .collect()
    }
}

fn in_bucket(bucket: &TimeWindow, created_at: NaiveDateTime, now: NaiveDateTime) -> bool {
    if bucket.end == now {
        bucket.contains(created_at)
    } else {
        bucket.contains_half_open(created_at)
    }
}

impl AnalyticsServiceTrait for AnalyticsService {
    fn compute_analytics(&self, user_id: &str, period: &str) -> Result<BudgetAnalytics> {
        self.compute_analytics_at(user_id, period, Utc::now().naive_utc())
    }
}
