use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::transactions_model::{NewTransaction, Transaction};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::constants::TRANSACTION_LIST_LIMIT;
use crate::errors::Result;

pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        TransactionService { repository }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    async fn create_transaction(
        &self,
        user_id: &str,
        new_transaction: NewTransaction,
    ) -> Result<Transaction> {
        new_transaction.validate()?;
        debug!(
            "Recording {} of {} for user {}",
            new_transaction.kind, new_transaction.amount, user_id
        );

        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            kind: new_transaction.kind,
            category: new_transaction.category,
            description: new_transaction.description,
            amount: new_transaction.amount,
            date: new_transaction.date,
            created_at: Utc::now().naive_utc(),
        };
        self.repository.insert_transaction(transaction).await
    }

    fn get_transactions(&self, user_id: &str) -> Result<Vec<Transaction>> {
        self.repository
            .list_recent_transactions(user_id, TRANSACTION_LIST_LIMIT)
    }
}
