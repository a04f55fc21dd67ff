//! Financial reports module - snapshots of a user's totals for a period.

mod reports_model;
mod reports_service;
mod reports_traits;

pub use reports_model::FinancialReport;
pub use reports_service::ReportService;
pub use reports_traits::{FinancialReportRepositoryTrait, ReportServiceTrait};
