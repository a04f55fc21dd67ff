//! SQLite storage implementation for financial reports.

mod model;
mod repository;

pub use model::FinancialReportDB;
pub use repository::FinancialReportRepository;
