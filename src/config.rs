use crate::constants::{DEFAULT_SUMMARY_CACHE_TTL_SECS, MAX_SUMMARY_CACHE_TTL_SECS};
use crate::core::models::rates::{AssistantBasis, RateConfig};
use dotenv::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub log_level: String,
    pub rates: RateConfig,
    pub summary_cache_ttl: Duration,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

/// Summary cache TTL, capped at one day.
pub fn summary_cache_ttl(secs: u64) -> Duration {
    Duration::from_secs(secs.min(MAX_SUMMARY_CACHE_TTL_SECS))
}

impl Config {
    fn from_env() -> Self {
        dotenv().ok();

        let defaults = RateConfig::default();
        Self {
            port: env_or("PORT", 3000),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            rates: RateConfig {
                debit_fee_rate: env_or("DEBIT_FEE_RATE", defaults.debit_fee_rate),
                credit_fee_rate: env_or("CREDIT_FEE_RATE", defaults.credit_fee_rate),
                studio_rate: env_or("STUDIO_RATE", defaults.studio_rate),
                professional_rate: env_or("PROFESSIONAL_RATE", defaults.professional_rate),
                assistant_rate: env_or("ASSISTANT_RATE", defaults.assistant_rate),
                assistant_basis: env_or("ASSISTANT_BASIS", AssistantBasis::default()),
            },
            summary_cache_ttl: summary_cache_ttl(env_or("SUMMARY_CACHE_TTL_SECS", DEFAULT_SUMMARY_CACHE_TTL_SECS)),
        }
    }
}

// Global static accessible everywhere
pub static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
