use crate::core::errors::ComandaError;
use crate::core::models::audit::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct InMemoryLogging {
    logs: Arc<RwLock<Vec<AppLog>>>,
}

impl InMemoryLogging {
    pub fn new() -> Self {
        InMemoryLogging {
            logs: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        transaction_id: Option<&str>,
    ) -> Result<(), ComandaError> {
        if !details.is_object() {
            return Err(ComandaError::LoggingError(format!(
                "Log details for {} must be a JSON object",
                action
            )));
        }
        let mut logs = self.logs.write().await;
        logs.push(AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            transaction_id: transaction_id.map(String::from),
            details,
            timestamp: chrono::Utc::now(),
        });
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, ComandaError> {
        let logs = self.logs.read().await;
        Ok(logs.clone())
    }
}
