use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the catalog, form and configuration layers.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Category already exists: {0}")]
    CategoryExists(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, PickerError>;
