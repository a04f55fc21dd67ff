//! Database models for savings goals.

use ancla_core::savings_goals::SavingsGoal;
use ancla_core::Error;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

/// Database model for savings goals
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::savings_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavingsGoalDB {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: NaiveDate,
    pub description: String,
    pub created_at: NaiveDateTime,
}

impl TryFrom<SavingsGoalDB> for SavingsGoal {
    type Error = Error;

    fn try_from(db: SavingsGoalDB) -> Result<Self, Self::Error> {
        Ok(Self {
            target_amount: Decimal::from_str(&db.target_amount).map_err(StorageError::from)?,
            current_amount: Decimal::from_str(&db.current_amount).map_err(StorageError::from)?,
            id: db.id,
            user_id: db.user_id,
            title: db.title,
            target_date: db.target_date,
            description: db.description,
            created_at: db.created_at,
        })
    }
}

impl From<SavingsGoal> for SavingsGoalDB {
    fn from(domain: SavingsGoal) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            title: domain.title,
            target_amount: domain.target_amount.to_string(),
            current_amount: domain.current_amount.to_string(),
            target_date: domain.target_date,
            description: domain.description,
            created_at: domain.created_at,
        }
    }
}
