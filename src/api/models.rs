use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::core::errors::ComandaError;
use crate::core::models::{CustomRates, PaymentAmounts};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct PreviewSplitRequest {
    pub amounts: PaymentAmounts,
    #[serde(default)]
    pub custom_rates: Option<CustomRates>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PeriodQuery {
    /// Reference month, 1 to 12
    pub month: u32,
    pub year: i32,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for ComandaError to implement IntoResponse
pub struct ApiError(pub ComandaError);

impl From<ComandaError> for ApiError {
    fn from(err: ComandaError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            ComandaError::InvalidInput(field, detail) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, detail.description),
            ),
            ComandaError::TransactionNotFound(id) => (StatusCode::NOT_FOUND, format!("Transaction {} not found", id)),
            ComandaError::IntegrityViolation(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Split integrity violation: {}", msg),
            ),
            ComandaError::StorageError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg)),
            ComandaError::LoggingError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Logging error: {}", msg)),
            ComandaError::CacheError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Cache error: {}", msg)),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
