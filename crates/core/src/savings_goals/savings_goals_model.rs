//! Savings goal domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a savings goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingsGoal {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub target_date: NaiveDate,
    pub description: String,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new savings goal
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct NewSavingsGoal {
    pub title: String,
    pub target_amount: Decimal,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl NewSavingsGoal {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "title".to_string(),
            )));
        }
        Ok(())
    }
}
