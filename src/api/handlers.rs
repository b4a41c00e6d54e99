use crate::{
    api::models::*,
    core::{
        models::{
            AppLog, MonthlySummary, NewTransaction, RateConfig, RevenueSplit, Transaction, UpdateTransaction,
            YearlySummary,
        },
        services::ComandaService,
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage,
    },
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
};

use std::sync::Arc;

pub type AppService = ComandaService<InMemoryLogging, InMemoryStorage, InMemoryCache>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/rates", get(get_rates))
        .route("/splits/preview", post(preview_split))
        .route("/transactions", post(create_transaction).get(list_transactions))
        .route(
            "/transactions/{transaction_id}",
            get(get_transaction).put(update_transaction).delete(delete_transaction),
        )
        .route(
            "/transactions/{transaction_id}/recalculate",
            post(recalculate_transaction),
        )
        .route("/summaries/{year}", get(get_yearly_summary))
        .route("/summaries/{year}/{month}", get(get_monthly_summary))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/rates",
    responses(
        (status = 200, description = "Active default rates", body = RateConfig)
    )
)]
pub async fn get_rates(State(service): State<Arc<AppService>>) -> Json<RateConfig> {
    Json(service.rate_config().clone())
}

#[utoipa::path(
    post,
    path = "/api/splits/preview",
    request_body = PreviewSplitRequest,
    responses(
        (status = 200, description = "Computed split, nothing stored", body = RevenueSplit),
        (status = 400, description = "Invalid amounts or rates", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn preview_split(
    State(service): State<Arc<AppService>>,
    Json(req): Json<PreviewSplitRequest>,
) -> Result<Json<RevenueSplit>, ApiError> {
    let split = service.preview_split(&req.amounts, req.custom_rates.as_ref())?;
    Ok(Json(split))
}

#[utoipa::path(
    post,
    path = "/api/transactions",
    request_body = NewTransaction,
    responses(
        (status = 201, description = "Transaction created", body = Transaction),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_transaction(
    State(service): State<Arc<AppService>>,
    Json(req): Json<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let transaction = service.create_transaction(req).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

#[utoipa::path(
    get,
    path = "/api/transactions",
    params(PeriodQuery),
    responses(
        (status = 200, description = "Transactions of the month, newest first", body = [Transaction]),
        (status = 400, description = "Invalid period", body = ErrorResponse)
    )
)]
pub async fn list_transactions(
    State(service): State<Arc<AppService>>,
    Query(period): Query<PeriodQuery>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = service.list_transactions(period.month, period.year).await?;
    Ok(Json(transactions))
}

#[utoipa::path(
    get,
    path = "/api/transactions/{transaction_id}",
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Transaction found", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
pub async fn get_transaction(
    State(service): State<Arc<AppService>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = service.get_transaction(&transaction_id).await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    put,
    path = "/api/transactions/{transaction_id}",
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    request_body = UpdateTransaction,
    responses(
        (status = 200, description = "Transaction updated and split recomputed", body = Transaction),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_transaction(
    State(service): State<Arc<AppService>>,
    Path(transaction_id): Path<String>,
    Json(req): Json<UpdateTransaction>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = service.update_transaction(&transaction_id, req).await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    post,
    path = "/api/transactions/{transaction_id}/recalculate",
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 200, description = "Split recomputed with the current rates", body = Transaction),
        (status = 404, description = "Transaction not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn recalculate_transaction(
    State(service): State<Arc<AppService>>,
    Path(transaction_id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let transaction = service.recalculate_transaction(&transaction_id).await?;
    Ok(Json(transaction))
}

#[utoipa::path(
    delete,
    path = "/api/transactions/{transaction_id}",
    params(("transaction_id" = String, Path, description = "Transaction ID")),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 404, description = "Transaction not found", body = ErrorResponse)
    )
)]
pub async fn delete_transaction(
    State(service): State<Arc<AppService>>,
    Path(transaction_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_transaction(&transaction_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/summaries/{year}/{month}",
    params(
        ("year" = i32, Path, description = "Reference year"),
        ("month" = u32, Path, description = "Reference month, 1 to 12")
    ),
    responses(
        (status = 200, description = "Monthly totals", body = MonthlySummary),
        (status = 400, description = "Invalid period", body = ErrorResponse)
    )
)]
pub async fn get_monthly_summary(
    State(service): State<Arc<AppService>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthlySummary>, ApiError> {
    let summary = service.monthly_summary(month, year).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/summaries/{year}",
    params(("year" = i32, Path, description = "Reference year")),
    responses(
        (status = 200, description = "Monthly totals for the whole year", body = YearlySummary),
        (status = 400, description = "Invalid year", body = ErrorResponse)
    )
)]
pub async fn get_yearly_summary(
    State(service): State<Arc<AppService>>,
    Path(year): Path<i32>,
) -> Result<Json<YearlySummary>, ApiError> {
    let summary = service.yearly_summary(year).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application log", body = [AppLog]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
