use crate::core::errors::ComandaError;
use crate::core::models::transaction::Transaction;
use crate::infrastructure::storage::Storage;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryStorage {
    transactions: Arc<RwLock<HashMap<String, Transaction>>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        InMemoryStorage {
            transactions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl Storage for InMemoryStorage {
    async fn save_transaction(&self, transaction: Transaction) -> Result<(), ComandaError> {
        let mut transactions = self.transactions.write().await;
        transactions.insert(transaction.id.clone(), transaction);
        Ok(())
    }

    async fn get_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, ComandaError> {
        let transactions = self.transactions.read().await;
        Ok(transactions.get(transaction_id).cloned())
    }

    async fn delete_transaction(&self, transaction_id: &str) -> Result<Option<Transaction>, ComandaError> {
        let mut transactions = self.transactions.write().await;
        Ok(transactions.remove(transaction_id))
    }

    async fn get_transactions_for_period(&self, month: u32, year: i32) -> Result<Vec<Transaction>, ComandaError> {
        let transactions = self.transactions.read().await;
        let mut period: Vec<Transaction> = transactions
            .values()
            .filter(|t| t.is_in_period(month, year))
            .cloned()
            .collect();
        period.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(period)
    }
}
