//! Analytics result models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Income/expense totals over a set of transactions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct TransactionTotals {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Medium,
    High,
}

/// Raised when spending on a category reaches 90% of its limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAlert {
    pub category: String,
    pub percentage: Decimal,
    pub spent: Decimal,
    pub limit: Decimal,
    pub severity: AlertSeverity,
}

/// Expense total for one 30-day bucket, labelled by the bucket's start month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseTrendPoint {
    pub month: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsProgress {
    pub id: String,
    pub title: String,
    pub progress: Decimal,
    pub current_amount: Decimal,
    pub target_amount: Decimal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ExpensePredictions {
    pub next_month_expenses: Decimal,
    pub annual_projection: Decimal,
}

/// Everything the analytics endpoint returns for one user and period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetAnalytics {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_balance: Decimal,
    pub category_breakdown: HashMap<String, Decimal>,
    pub expense_trends: Vec<ExpenseTrendPoint>,
    pub budget_alerts: Vec<BudgetAlert>,
    pub savings_progress: Vec<SavingsProgress>,
    pub predictions: ExpensePredictions,
}
