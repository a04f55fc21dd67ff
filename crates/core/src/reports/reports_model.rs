use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Persisted snapshot of a user's income, expenses and per-category totals
/// over one period window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FinancialReport {
    pub id: String,
    pub user_id: String,
    /// Period token as requested by the caller, kept verbatim.
    pub report_type: String,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    /// Income and expenses summed together per category.
    pub category_breakdown: HashMap<String, Decimal>,
    pub trends: HashMap<String, Decimal>,
    pub created_at: NaiveDateTime,
}
