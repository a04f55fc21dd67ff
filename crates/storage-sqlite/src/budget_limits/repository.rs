use ancla_core::budget_limits::{BudgetLimit, BudgetLimitRepositoryTrait, NewBudgetLimit};
use ancla_core::errors::{DatabaseError, Error};
use ancla_core::Result;

use super::model::{BudgetLimitChangesDB, BudgetLimitDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::budget_limits;
use crate::schema::budget_limits::dsl::*;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;

use std::sync::Arc;

pub struct BudgetLimitRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl BudgetLimitRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        BudgetLimitRepository { pool, writer }
    }
}

#[async_trait]
impl BudgetLimitRepositoryTrait for BudgetLimitRepository {
    fn list_budget_limits(&self, owner: &str) -> Result<Vec<BudgetLimit>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = budget_limits
            .filter(user_id.eq(owner))
            // rowid follows insertion order; created_at can tie.
            .order(sql::<BigInt>("rowid"))
            .select(BudgetLimitDB::as_select())
            .load::<BudgetLimitDB>(&mut conn)
            .into_core()?;
        rows.into_iter().map(BudgetLimit::try_from).collect()
    }

    async fn insert_budget_limit(&self, limit: BudgetLimit) -> Result<BudgetLimit> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetLimit> {
                let row: BudgetLimitDB = limit.into();
                let stored = diesel::insert_into(budget_limits::table)
                    .values(&row)
                    .returning(BudgetLimitDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                BudgetLimit::try_from(stored)
            })
            .await
    }

    async fn update_budget_limit(
        &self,
        limit_id: &str,
        update: NewBudgetLimit,
    ) -> Result<BudgetLimit> {
        let limit_id = limit_id.to_string();
        let changes = BudgetLimitChangesDB {
            category: update.category,
            limit_amount: update.limit_amount.to_string(),
            period: update.period.as_str().to_string(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<BudgetLimit> {
                let updated = diesel::update(budget_limits.find(limit_id.as_str()))
                    .set(&changes)
                    .returning(BudgetLimitDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "Budget limit {} not found",
                            limit_id
                        )))
                    })?;
                BudgetLimit::try_from(updated)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_database;
    use ancla_core::Period;
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn limit(limit_id: &str, owner: &str, offset_minutes: i64) -> BudgetLimit {
        let created: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 2, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::minutes(offset_minutes);
        BudgetLimit {
            id: limit_id.to_string(),
            user_id: owner.to_string(),
            category: "Food".to_string(),
            limit_amount: dec!(500),
            period: Period::Monthly,
            current_amount: Decimal::ZERO,
            created_at: created,
        }
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_in_insertion_order() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = BudgetLimitRepository::new(pool, writer);
        repo.insert_budget_limit(limit("b", "u1", 1)).await.unwrap();
        repo.insert_budget_limit(limit("a", "u1", 2)).await.unwrap();
        repo.insert_budget_limit(limit("c", "u2", 0)).await.unwrap();

        let listed = repo.list_budget_limits("u1").unwrap();

        let ids: Vec<&str> = listed.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(listed[0].limit_amount, dec!(500));
    }

    #[tokio::test]
    async fn test_update_replaces_mutable_fields() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = BudgetLimitRepository::new(pool, writer);
        let original = repo.insert_budget_limit(limit("b1", "u1", 0)).await.unwrap();

        let updated = repo
            .update_budget_limit(
                "b1",
                NewBudgetLimit {
                    category: "Dining".to_string(),
                    limit_amount: dec!(275.50),
                    period: Period::Weekly,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.user_id, "u1");
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.category, "Dining");
        assert_eq!(updated.limit_amount, dec!(275.50));
        assert_eq!(updated.period, Period::Weekly);
    }

    #[tokio::test]
    async fn test_update_of_unknown_limit_is_not_found() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = BudgetLimitRepository::new(pool, writer);

        let err = repo
            .update_budget_limit(
                "missing",
                NewBudgetLimit {
                    category: "Food".to_string(),
                    limit_amount: dec!(1),
                    period: Period::Monthly,
                },
            )
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rows_sharing_a_timestamp_keep_insertion_order() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = BudgetLimitRepository::new(pool, writer);
        for row_id in ["z", "m", "a"] {
            repo.insert_budget_limit(limit(row_id, "u1", 0)).await.unwrap();
        }

        let listed = repo.list_budget_limits("u1").unwrap();

        let ids: Vec<&str> = listed.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }
}
