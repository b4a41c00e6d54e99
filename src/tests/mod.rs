mod split_proptest;
mod transaction_tests;

use crate::core::calculator::RevenueSplitCalculator;
use crate::core::models::{NewTransaction, PaymentAmounts, RateConfig};
use crate::core::services::ComandaService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> ComandaService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    create_test_service_with_storage(InMemoryStorage::new(), RateConfig::default())
}

pub fn create_test_service_with_storage(
    storage: InMemoryStorage,
    rates: RateConfig,
) -> ComandaService<InMemoryLogging, InMemoryStorage, InMemoryCache> {
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    let calculator = RevenueSplitCalculator::new(rates).expect("valid rate config");
    ComandaService::new(storage, logging, cache, calculator)
}

pub fn new_transaction(description: &str, amounts: PaymentAmounts, month: u32, year: i32) -> NewTransaction {
    NewTransaction {
        description: description.to_string(),
        amounts,
        custom_rates: None,
        reference_month: month,
        reference_year: year,
    }
}

pub fn assert_money(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {} but got {}",
        expected,
        actual
    );
}
