use crate::errors::Result;
use crate::reports::reports_model::FinancialReport;
use async_trait::async_trait;

/// Trait for the append-only report store
#[async_trait]
pub trait FinancialReportRepositoryTrait: Send + Sync {
    /// Stores the report and returns its id.
    async fn append_report(&self, report: FinancialReport) -> Result<String>;
    /// Reports of `user_id`, newest first.
    fn list_reports(&self, user_id: &str) -> Result<Vec<FinancialReport>>;
}

/// Trait for report service operations
#[async_trait]
pub trait ReportServiceTrait: Send + Sync {
    async fn generate_report(&self, user_id: &str, report_type: &str) -> Result<FinancialReport>;
    fn get_reports(&self, user_id: &str) -> Result<Vec<FinancialReport>>;
}
