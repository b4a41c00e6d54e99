use crate::core::errors::ComandaError;
use crate::core::models::transaction::Transaction;
use async_trait::async_trait;

#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_transaction(&self, transaction: Transaction) -> Result<(), ComandaError>;
    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, ComandaError>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, ComandaError>;
    async fn get_transactions_for_period(&self, month: u32, year: i32) -> Result<Vec<Transaction>, ComandaError>;
}

pub mod in_memory;
