//! Database models for budget limits.

use ancla_core::budget_limits::BudgetLimit;
use ancla_core::{Error, Period};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

/// Database model for budget limits
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_limits)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BudgetLimitDB {
    pub id: String,
    pub user_id: String,
    pub category: String,
    pub limit_amount: String,
    pub period: String,
    pub current_amount: String,
    pub created_at: NaiveDateTime,
}

/// Columns replaced by an update
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::budget_limits)]
pub struct BudgetLimitChangesDB {
    pub category: String,
    pub limit_amount: String,
    pub period: String,
}

impl TryFrom<BudgetLimitDB> for BudgetLimit {
    type Error = Error;

    fn try_from(db: BudgetLimitDB) -> Result<Self, Self::Error> {
        Ok(Self {
            limit_amount: Decimal::from_str(&db.limit_amount).map_err(StorageError::from)?,
            current_amount: Decimal::from_str(&db.current_amount).map_err(StorageError::from)?,
            period: Period::from_token(&db.period),
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            created_at: db.created_at,
        })
    }
}

impl From<BudgetLimit> for BudgetLimitDB {
    fn from(domain: BudgetLimit) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            category: domain.category,
            limit_amount: domain.limit_amount.to_string(),
            period: domain.period.as_str().to_string(),
            current_amount: domain.current_amount.to_string(),
            created_at: domain.created_at,
        }
    }
}
