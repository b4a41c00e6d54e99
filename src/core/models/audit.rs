use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: String,
    pub transaction_id: Option<String>,
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
