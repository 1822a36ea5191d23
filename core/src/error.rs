// catalog/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid product ID '{raw}': {reason}")]
    InvalidId { raw: String, reason: String },

    #[error("Storage error: {source}")]
    Storage {
        #[from]
        source: sqlx::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type CatalogResult<T, E = CatalogError> = std::result::Result<T, E>;
