use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use super::reports_model::FinancialReport;
use super::reports_traits::{FinancialReportRepositoryTrait, ReportServiceTrait};
use crate::analytics::aggregation;
use crate::constants::REPORT_GROWTH_RATE;
use crate::errors::Result;
use crate::period::Period;
use crate::transactions::TransactionRepositoryTrait;

pub struct ReportService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    report_repository: Arc<dyn FinancialReportRepositoryTrait>,
}

impl ReportService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        report_repository: Arc<dyn FinancialReportRepositoryTrait>,
    ) -> Self {
        ReportService {
            transaction_repository,
            report_repository,
        }
    }

    /// Builds and stores a report for the window ending at `now`.
    pub async fn generate_report_at(
        &self,
        user_id: &str,
        report_type: &str,
        now: NaiveDateTime,
    ) -> Result<FinancialReport> {
        let window = Period::from_token(report_type).window_ending_at(now);
        let transactions =
            self.transaction_repository
                .list_transactions(user_id, window.start, window.end)?;
        debug!(
            "Building '{}' report for user {} from {} transactions",
            report_type,
            user_id,
            transactions.len()
        );

        let totals = aggregation::summarize_totals(&transactions);
        let mut trends = HashMap::new();
        trends.insert("growth_rate".to_string(), REPORT_GROWTH_RATE);

        let report = FinancialReport {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            report_type: report_type.to_string(),
            period_start: window.start.date(),
            period_end: window.end.date(),
            total_income: totals.total_income,
            total_expenses: totals.total_expenses,
            net_balance: totals.net_balance,
            category_breakdown: aggregation::full_breakdown(&transactions),
            trends,
            created_at: now,
        };

        let id = self.report_repository.append_report(report.clone()).await?;
        info!("Stored financial report {} for user {}", id, user_id);
        Ok(report)
    }
}

#[async_trait]
impl ReportServiceTrait for ReportService {
    async fn generate_report(&self, user_id: &str, report_type: &str) -> Result<FinancialReport> {
        self.generate_report_at(user_id, report_type, Utc::now().naive_utc())
            .await
    }

    fn get_reports(&self, user_id: &str) -> Result<Vec<FinancialReport>> {
        self.report_repository.list_reports(user_id)
    }
}
