use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

impl FieldError {
    pub fn new(field: &str, title: &str, description: impl Into<String>) -> Self {
        FieldError {
            field: field.to_string(),
            title: title.to_string(),
            description: description.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[derive(Error, Debug, Serialize)]
pub enum ComandaError {
    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1}")]
    InvalidInput(String, FieldError),

    /// Transaction with given ID not found
    #[error("Transaction {0} not found")]
    TransactionNotFound(String),

    /// Computed split failed reconciliation against its inputs
    #[error("Integrity violation: {0}")]
    IntegrityViolation(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Logging error: {0}")]
    LoggingError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}

impl ComandaError {
    pub fn invalid_input(field: &str, title: &str, description: impl Into<String>) -> Self {
        ComandaError::InvalidInput(field.to_string(), FieldError::new(field, title, description))
    }

    /// Field-level payload of a validation failure, if this is one.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            ComandaError::InvalidInput(_, field_error) => Some(field_error),
            _ => None,
        }
    }
}
