use crate::constants::{
    DEFAULT_SUMMARY_CACHE_TTL_SECS, MAX_DESCRIPTION_LENGTH, MAX_REFERENCE_YEAR, MIN_REFERENCE_YEAR,
    TRANSACTION_CREATED, TRANSACTION_DELETED, TRANSACTION_RECALCULATED, TRANSACTION_UPDATED,
};
use crate::core::calculator::RevenueSplitCalculator;
use crate::core::errors::ComandaError;
use crate::core::models::{
    AppLog, CustomRates, MonthlySummary, NewTransaction, PaymentAmounts, RateConfig, RevenueSplit, Transaction,
    UpdateTransaction, YearlySummary,
};
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::Storage;
use chrono::Utc;
use futures::future::try_join_all;
use serde_json::json;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

pub struct ComandaService<L: LoggingService, S: Storage, C: Cache> {
    storage: S,
    logging: L,
    cache: C,
    calculator: RevenueSplitCalculator,
    summary_cache_ttl: Duration,
    // Serializes read-modify-write edits so concurrent updates are not lost.
    edit_lock: Mutex<()>,
}

impl<L: LoggingService, S: Storage, C: Cache> ComandaService<L, S, C> {
    pub fn new(storage: S, logging: L, cache: C, calculator: RevenueSplitCalculator) -> Self {
        ComandaService {
            storage,
            logging,
            cache,
            calculator,
            summary_cache_ttl: Duration::from_secs(DEFAULT_SUMMARY_CACHE_TTL_SECS),
            edit_lock: Mutex::new(()),
        }
    }

    pub fn with_summary_cache_ttl(mut self, ttl: Duration) -> Self {
        self.summary_cache_ttl = ttl;
        self
    }

    pub fn rate_config(&self) -> &RateConfig {
        self.calculator.config()
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), ComandaError> {
        if value.trim().is_empty() {
            return Err(ComandaError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.chars().count() > max_length {
            return Err(ComandaError::invalid_input(
                field,
                &format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(ComandaError::invalid_input(
                field,
                &format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    fn validate_period(&self, month: u32, year: i32) -> Result<(), ComandaError> {
        if !(1..=12).contains(&month) {
            return Err(ComandaError::invalid_input(
                "reference_month",
                "Invalid Month",
                "Reference month must be between 1 and 12",
            ));
        }
        if !(MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year) {
            return Err(ComandaError::invalid_input(
                "reference_year",
                "Invalid Year",
                format!(
                    "Reference year must be between {} and {}",
                    MIN_REFERENCE_YEAR, MAX_REFERENCE_YEAR
                ),
            ));
        }
        Ok(())
    }

    /// Calculates a split and reconciles it before anything is stored.
    fn compute_split(
        &self,
        amounts: &PaymentAmounts,
        custom_rates: Option<&CustomRates>,
    ) -> Result<RevenueSplit, ComandaError> {
        let split = self.calculator.calculate(amounts, custom_rates).inspect_err(|e| {
            if e.field_error().is_some() {
                warn!("Rejected split input: {}", e);
            }
        })?;
        if let Err(e) = self.calculator.verify_integrity(amounts, &split) {
            error!("Computed split failed reconciliation: {}", e);
            return Err(e);
        }
        Ok(split)
    }

    async fn invalidate_period(&self, month: u32, year: i32) -> Result<(), ComandaError> {
        debug!("Invalidating cached summary for {:04}-{:02}", year, month);
        self.cache.invalidate_monthly_summary(month, year).await
    }

    /// Split of the given amounts without persisting anything.
    pub fn preview_split(
        &self,
        amounts: &PaymentAmounts,
        custom_rates: Option<&CustomRates>,
    ) -> Result<RevenueSplit, ComandaError> {
        self.compute_split(amounts, custom_rates)
    }

    pub async fn create_transaction(&self, new: NewTransaction) -> Result<Transaction, ComandaError> {
        self.validate_string_input("description", &new.description, MAX_DESCRIPTION_LENGTH)?;
        self.validate_period(new.reference_month, new.reference_year)?;

        let custom_rates = new.custom_rates.filter(|c| !c.is_empty());
        let split = self.compute_split(&new.amounts, custom_rates.as_ref())?;

        let now = Utc::now();
        let transaction = Transaction {
            id: Uuid::new_v4().to_string(),
            description: new.description.trim().to_string(),
            amounts: new.amounts,
            custom_rates,
            split,
            reference_month: new.reference_month,
            reference_year: new.reference_year,
            created_at: now,
            updated_at: now,
        };

        self.storage.save_transaction(transaction.clone()).await?;
        self.invalidate_period(transaction.reference_month, transaction.reference_year)
            .await?;

        info!(
            "Transaction {} created: gross {} net {}",
            transaction.id, transaction.split.gross_total, transaction.split.net_total
        );
        self.logging
            .log_action(
                TRANSACTION_CREATED,
                json!({
                    "transaction_id": transaction.id,
                    "description": transaction.description,
                    "gross_total": transaction.split.gross_total,
                    "net_total": transaction.split.net_total,
                    "custom_rates": transaction.split.rates.custom,
                    "reference_month": transaction.reference_month,
                    "reference_year": transaction.reference_year
                }),
                Some(transaction.id.as_str()),
            )
            .await?;

        Ok(transaction)
    }

    pub async fn get_transaction(&self, transaction_id: &str) -> Result<Transaction, ComandaError> {
        self.storage
            .get_transaction(transaction_id)
            .await?
            .ok_or_else(|| ComandaError::TransactionNotFound(transaction_id.to_string()))
    }

    pub async fn list_transactions(&self, month: u32, year: i32) -> Result<Vec<Transaction>, ComandaError> {
        self.validate_period(month, year)?;
        self.storage.get_transactions_for_period(month, year).await
    }

    /// Explicit edit: applies the changed inputs and recomputes the split.
    ///
    /// Edits are serialized, so each one starts from the result of the last.
    pub async fn update_transaction(
        &self,
        transaction_id: &str,
        update: UpdateTransaction,
    ) -> Result<Transaction, ComandaError> {
        let _guard = self.edit_lock.lock().await;
        let current = self.get_transaction(transaction_id).await?;

        let description = match update.description {
            Some(description) => {
                self.validate_string_input("description", &description, MAX_DESCRIPTION_LENGTH)?;
                description.trim().to_string()
            }
            None => current.description.clone(),
        };
        let amounts = update.amounts.unwrap_or(current.amounts);
        let custom_rates = match update.custom_rates {
            Some(rates) => rates.filter(|c| !c.is_empty()),
            None => current.custom_rates.clone(),
        };
        let reference_month = update.reference_month.unwrap_or(current.reference_month);
        let reference_year = update.reference_year.unwrap_or(current.reference_year);
        self.validate_period(reference_month, reference_year)?;

        let split = self.compute_split(&amounts, custom_rates.as_ref())?;

        let updated = Transaction {
            id: current.id.clone(),
            description,
            amounts,
            custom_rates,
            split,
            reference_month,
            reference_year,
            created_at: current.created_at,
            updated_at: Utc::now(),
        };

        self.storage.save_transaction(updated.clone()).await?;
        self.invalidate_period(current.reference_month, current.reference_year)
            .await?;
        if !current.is_in_period(reference_month, reference_year) {
            self.invalidate_period(reference_month, reference_year).await?;
        }

        info!("Transaction {} updated", updated.id);
        self.logging
            .log_action(
                TRANSACTION_UPDATED,
                json!({
                    "transaction_id": updated.id,
                    "previous_gross_total": current.split.gross_total,
                    "gross_total": updated.split.gross_total,
                    "previous_net_total": current.split.net_total,
                    "net_total": updated.split.net_total
                }),
                Some(updated.id.as_str()),
            )
            .await?;

        Ok(updated)
    }

    /// Recomputes the split from the stored inputs with the current rate configuration.
    pub async fn recalculate_transaction(&self, transaction_id: &str) -> Result<Transaction, ComandaError> {
        let _guard = self.edit_lock.lock().await;
        let mut transaction = self.get_transaction(transaction_id).await?;
        let previous = transaction.split.clone();

        transaction.split = self.compute_split(&transaction.amounts, transaction.custom_rates.as_ref())?;
        if transaction.split == previous {
            debug!("Transaction {} unchanged by recalculation", transaction.id);
            return Ok(transaction);
        }
        transaction.updated_at = Utc::now();

        self.storage.save_transaction(transaction.clone()).await?;
        self.invalidate_period(transaction.reference_month, transaction.reference_year)
            .await?;

        self.logging
            .log_action(
                TRANSACTION_RECALCULATED,
                json!({
                    "transaction_id": transaction.id,
                    "previous_net_total": previous.net_total,
                    "net_total": transaction.split.net_total
                }),
                Some(transaction.id.as_str()),
            )
            .await?;

        Ok(transaction)
    }

    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<Transaction, ComandaError> {
        let _guard = self.edit_lock.lock().await;
        let removed = self
            .storage
            .delete_transaction(transaction_id)
            .await?
            .ok_or_else(|| ComandaError::TransactionNotFound(transaction_id.to_string()))?;
        self.invalidate_period(removed.reference_month, removed.reference_year)
            .await?;

        info!("Transaction {} deleted", removed.id);
        self.logging
            .log_action(
                TRANSACTION_DELETED,
                json!({
                    "transaction_id": removed.id,
                    "gross_total": removed.split.gross_total
                }),
                Some(removed.id.as_str()),
            )
            .await?;

        Ok(removed)
    }

    pub async fn monthly_summary(&self, month: u32, year: i32) -> Result<MonthlySummary, ComandaError> {
        self.validate_period(month, year)?;

        if let Some(summary) = self.cache.get_monthly_summary(month, year).await? {
            debug!("Summary cache hit for {:04}-{:02}", year, month);
            return Ok(summary);
        }

        // Read before storage so a write landing mid-build keeps the result out of the cache.
        let generation = self.cache.monthly_summary_generation(month, year).await?;
        let transactions = self.storage.get_transactions_for_period(month, year).await?;
        let summary = MonthlySummary::from_transactions(month, year, &transactions);
        let cached = self
            .cache
            .save_monthly_summary(&summary, self.summary_cache_ttl, generation)
            .await?;
        if !cached {
            debug!("Summary for {:04}-{:02} changed while building, not cached", year, month);
        }
        Ok(summary)
    }

    pub async fn yearly_summary(&self, year: i32) -> Result<YearlySummary, ComandaError> {
        self.validate_period(1, year)?;
        let months = try_join_all((1..=12).map(|month| self.monthly_summary(month, year))).await?;
        Ok(YearlySummary::from_months(year, months))
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, ComandaError> {
        self.logging.get_logs().await
    }
}
