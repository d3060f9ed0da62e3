use thiserror::Error;

use crate::config::ConfigError;

/// Error type that captures expense store, storage, and aggregation failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed date `{value}` in category `{category}` at index {index}")]
    MalformedDate {
        category: String,
        index: usize,
        value: String,
    },
    #[error("Invalid amount: `{0}` is not a number")]
    InvalidAmount(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;

impl From<ConfigError> for ExpenseError {
    fn from(err: ConfigError) -> Self {
        ExpenseError::Config(err.to_string())
    }
}
