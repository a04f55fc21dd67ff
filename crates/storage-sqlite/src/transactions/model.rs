//! Database models for transactions.

use ancla_core::transactions::{Transaction, TransactionKind};
use ancla_core::Error;
use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;

/// Database model for transactions. Amounts are stored as decimal text.
#[derive(Queryable, Insertable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::transactions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct TransactionDB {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

impl TryFrom<TransactionDB> for Transaction {
    type Error = Error;

    fn try_from(db: TransactionDB) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: TransactionKind::from_str(&db.kind)?,
            amount: Decimal::from_str(&db.amount).map_err(StorageError::from)?,
            id: db.id,
            user_id: db.user_id,
            category: db.category,
            description: db.description,
            date: db.date,
            created_at: db.created_at,
        })
    }
}

impl From<Transaction> for TransactionDB {
    fn from(domain: Transaction) -> Self {
        Self {
            id: domain.id,
            user_id: domain.user_id,
            kind: domain.kind.as_str().to_string(),
            category: domain.category,
            description: domain.description,
            amount: domain.amount.to_string(),
            date: domain.date,
            created_at: domain.created_at,
        }
    }
}
