use ancla_core::errors::{DatabaseError, Error, ValidationError};
use ancla_core::savings_goals::{SavingsGoal, SavingsGoalRepositoryTrait};
use ancla_core::Result;

use super::model::SavingsGoalDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::savings_goals;
use crate::schema::savings_goals::dsl::*;
use async_trait::async_trait;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sql_types::BigInt;
use diesel::SqliteConnection;
use rust_decimal::Decimal;

use std::sync::Arc;

pub struct SavingsGoalRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl SavingsGoalRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        SavingsGoalRepository { pool, writer }
    }
}

#[async_trait]
impl SavingsGoalRepositoryTrait for SavingsGoalRepository {
    fn list_savings_goals(&self, owner: &str) -> Result<Vec<SavingsGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = savings_goals
            .filter(user_id.eq(owner))
            // rowid follows insertion order; created_at can tie.
            .order(sql::<BigInt>("rowid"))
            .select(SavingsGoalDB::as_select())
            .load::<SavingsGoalDB>(&mut conn)
            .into_core()?;
        rows.into_iter().map(SavingsGoal::try_from).collect()
    }

    async fn insert_savings_goal(&self, goal: SavingsGoal) -> Result<SavingsGoal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsGoal> {
                let row: SavingsGoalDB = goal.into();
                let stored = diesel::insert_into(savings_goals::table)
                    .values(&row)
                    .returning(SavingsGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                SavingsGoal::try_from(stored)
            })
            .await
    }

    async fn add_to_current_amount(&self, goal_id: &str, amount: Decimal) -> Result<SavingsGoal> {
        let goal_id = goal_id.to_string();

        // Read and write happen in one writer job, so concurrent deposits
        // cannot overwrite each other.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingsGoal> {
                let row = savings_goals
                    .find(goal_id.as_str())
                    .select(SavingsGoalDB::as_select())
                    .first::<SavingsGoalDB>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!(
                            "Savings goal {} not found",
                            goal_id
                        )))
                    })?;
                let goal = SavingsGoal::try_from(row)?;
                let new_amount = goal.current_amount.checked_add(amount).ok_or_else(|| {
                    Error::Validation(ValidationError::InvalidInput(format!(
                        "Savings goal {} balance would overflow",
                        goal_id
                    )))
                })?;

                diesel::update(savings_goals.find(goal_id.as_str()))
                    .set(current_amount.eq(new_amount.to_string()))
                    .execute(conn)
                    .map_err(StorageError::from)?;

                Ok(SavingsGoal {
                    current_amount: new_amount,
                    ..goal
                })
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_database;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn goal(goal_id: &str, owner: &str) -> SavingsGoal {
        SavingsGoal {
            id: goal_id.to_string(),
            user_id: owner.to_string(),
            title: "Holiday".to_string(),
            target_amount: dec!(1000),
            current_amount: Decimal::ZERO,
            target_date: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
            description: "Two weeks in Lisbon".to_string(),
            created_at: NaiveDate::from_ymd_opt(2025, 1, 5)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_list() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = SavingsGoalRepository::new(pool, writer);
        repo.insert_savings_goal(goal("g1", "u1")).await.unwrap();
        repo.insert_savings_goal(goal("g2", "u2")).await.unwrap();

        let listed = repo.list_savings_goals("u1").unwrap();

        assert_eq!(listed, vec![goal("g1", "u1")]);
    }

    #[tokio::test]
    async fn test_deposits_accumulate() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = SavingsGoalRepository::new(pool, writer);
        repo.insert_savings_goal(goal("g1", "u1")).await.unwrap();

        repo.add_to_current_amount("g1", dec!(100.10)).await.unwrap();
        let after = repo.add_to_current_amount("g1", dec!(150.15)).await.unwrap();

        assert_eq!(after.current_amount, dec!(250.25));
        assert_eq!(repo.list_savings_goals("u1").unwrap()[0].current_amount, dec!(250.25));
    }

    #[tokio::test]
    async fn test_concurrent_deposits_are_not_lost() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = Arc::new(SavingsGoalRepository::new(pool, writer));
        repo.insert_savings_goal(goal("g1", "u1")).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..20 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.add_to_current_amount("g1", dec!(5)).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.list_savings_goals("u1").unwrap()[0].current_amount, dec!(100));
    }

    #[tokio::test]
    async fn test_unknown_goal_is_not_found() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = SavingsGoalRepository::new(pool, writer);

        let err = repo.add_to_current_amount("nope", dec!(1)).await.unwrap_err();

        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_rows_sharing_a_timestamp_keep_insertion_order() {
        let (pool, writer, _temp_dir) = test_database().await;
        let repo = SavingsGoalRepository::new(pool, writer);
        for row_id in ["z", "m", "a"] {
            repo.insert_savings_goal(goal(row_id, "u1")).await.unwrap();
        }

        let listed = repo.list_savings_goals("u1").unwrap();

        let ids: Vec<&str> = listed.iter().map(|row| row.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "m", "a"]);
    }
}
