//! Budget limit domain models.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::Period;

/// Domain model for a spending ceiling on one category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLimit {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: Decimal,
    pub period: Period,
    /// Declared for clients but never maintained by the analytics path.
    pub current_amount: Decimal,
    pub created_at: NaiveDateTime,
}

/// Input model for creating or replacing a budget limit
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewBudgetLimit {
    pub category: String,
    pub limit_amount: Decimal,
    #[serde(default)]
    pub period: Period,
}
