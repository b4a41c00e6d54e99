use crate::core::errors::ComandaError;
use crate::core::models::summary::MonthlySummary;
use crate::infrastructure::cache::Cache;
use crate::infrastructure::cache::cache_keys::monthly_summary_key;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, (MonthlySummary, chrono::DateTime<chrono::Utc>)>,
    generations: HashMap<String, u64>,
}

#[derive(Clone, Default)]
pub struct InMemoryCache {
    state: Arc<RwLock<CacheState>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            state: Arc::new(RwLock::new(CacheState::default())),
        }
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_monthly_summary(&self, month: u32, year: i32) -> Result<Option<MonthlySummary>, ComandaError> {
        let state = self.state.read().await;
        let key = monthly_summary_key(month, year);
        Ok(state
            .entries
            .get(&key)
            .filter(|(_, expiry)| *expiry > chrono::Utc::now())
            .map(|(summary, _)| summary.clone()))
    }

    async fn monthly_summary_generation(&self, month: u32, year: i32) -> Result<u64, ComandaError> {
        let state = self.state.read().await;
        Ok(state
            .generations
            .get(&monthly_summary_key(month, year))
            .copied()
            .unwrap_or(0))
    }

    async fn save_monthly_summary(
        &self,
        summary: &MonthlySummary,
        ttl: std::time::Duration,
        generation: u64,
    ) -> Result<bool, ComandaError> {
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| ComandaError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        let expiry = chrono::Utc::now()
            .checked_add_signed(ttl)
            .ok_or_else(|| ComandaError::CacheError(format!("TTL of {} seconds is out of range", ttl.num_seconds())))?;

        let key = monthly_summary_key(summary.reference_month, summary.reference_year);
        let mut state = self.state.write().await;
        if state.generations.get(&key).copied().unwrap_or(0) != generation {
            return Ok(false);
        }
        state.entries.insert(key, (summary.clone(), expiry));
        Ok(true)
    }

    async fn invalidate_monthly_summary(&self, month: u32, year: i32) -> Result<(), ComandaError> {
        let key = monthly_summary_key(month, year);
        let mut state = self.state.write().await;
        state.entries.remove(&key);
        *state.generations.entry(key).or_insert(0) += 1;
        let now = chrono::Utc::now();
        state.entries.retain(|_, (_, expiry)| *expiry > now);
        Ok(())
    }
}
