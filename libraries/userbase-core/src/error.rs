/// Core error types for Userbase
use thiserror::Error;

/// Result type alias using `UserbaseError`
pub type Result<T> = std::result::Result<T, UserbaseError>;

/// Core error type for Userbase
#[derive(Error, Debug)]
pub enum UserbaseError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl UserbaseError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for UserbaseError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
