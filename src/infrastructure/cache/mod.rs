pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::ComandaError;
use crate::core::models::summary::MonthlySummary;
use async_trait::async_trait;

#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_monthly_summary(&self, month: u32, year: i32) -> Result<Option<MonthlySummary>, ComandaError>;

    /// Counter bumped by every invalidation of the month.
    async fn monthly_summary_generation(&self, month: u32, year: i32) -> Result<u64, ComandaError>;

    /// Stores the summary only if the month has not been invalidated since
    /// `generation` was read. Returns whether it was stored.
    async fn save_monthly_summary(
        &self,
        summary: &MonthlySummary,
        ttl: std::time::Duration,
        generation: u64,
    ) -> Result<bool, ComandaError>;

    async fn invalidate_monthly_summary(&self, month: u32, year: i32) -> Result<(), ComandaError>;
}
