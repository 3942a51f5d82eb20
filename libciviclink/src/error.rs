//! Error types for CivicLink

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CivicError>;

#[derive(Error, Debug)]
pub enum CivicError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CivicError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CivicError::InvalidInput(_) => 3,
            CivicError::Store(StoreError::Authentication(_)) => 2,
            CivicError::Store(_) => 1,
            CivicError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to write config file: {0}")]
    WriteError(std::io::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Errors surfaced by the identity/profile store.
///
/// Cloneable because submission events carry them across channels and the
/// retry loop inspects them after reporting.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Account conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl StoreError {
    /// Transient errors are worth retrying; everything else is permanent.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Network(_) | StoreError::Unavailable(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => StoreError::NotFound("row not found".to_string()),
            other => StoreError::Storage(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        StoreError::Storage(format!("migration failed: {}", e))
    }
}
