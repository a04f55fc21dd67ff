use crate::errors::Result;
use crate::transactions::transactions_model::{NewTransaction, Transaction};
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Trait for transaction repository operations
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    /// Transactions of `user_id` whose creation timestamp lies in
    /// `[created_after, created_before]`, oldest first.
    fn list_transactions(
        &self,
        user_id: &str,
        created_after: NaiveDateTime,
        created_before: NaiveDateTime,
    ) -> Result<Vec<Transaction>>;

    /// Most recently created transactions of `user_id`, newest first.
    fn list_recent_transactions(&self, user_id: &str, limit: i64) -> Result<Vec<Transaction>>;

    async fn insert_transaction(&self, transaction: Transaction) -> Result<Transaction>;
}

/// Trait for transaction service operations
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction>;
    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>>;
}
