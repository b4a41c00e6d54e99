use comanda::api::build_app;
use comanda::config::CONFIG;
use comanda::core::calculator::RevenueSplitCalculator;
use comanda::core::services::ComandaService;
use comanda::infrastructure::{
    cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&CONFIG.log_level))
        .init();

    let calculator = RevenueSplitCalculator::new(CONFIG.rates.clone())?;
    info!(
        "Rates: debit fee {}%, credit fee {}%, studio {}%, professional {}%, assistant {}% of {}",
        CONFIG.rates.debit_fee_rate,
        CONFIG.rates.credit_fee_rate,
        CONFIG.rates.studio_rate,
        CONFIG.rates.professional_rate,
        CONFIG.rates.assistant_rate,
        CONFIG.rates.assistant_basis
    );

    let cache = InMemoryCache::new();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    let service = Arc::new(
        ComandaService::new(storage, logging, cache, calculator).with_summary_cache_ttl(CONFIG.summary_cache_ttl),
    );

    let app = build_app(service);

    let addr = SocketAddr::from(([127, 0, 0, 1], CONFIG.port));
    info!("Server running at http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
