//! Load-test failures

use thiserror::Error;
use userbase_client::ClientError;

#[derive(Error, Debug)]
pub enum LoadTestError {
    /// A request to the server failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Row count after a bulk insert did not match
    #[error("Expected {expected} users after insert, server reports {actual}")]
    CountMismatch { expected: i64, actual: i64 },

    /// A point read found no user
    #[error("User {0} not found")]
    MissingUser(i64),

    /// A point read returned a name that is null or does not mention the id
    #[error("User {id} has unexpected name {name:?}")]
    NameMismatch { id: i64, name: Option<String> },

    /// Scenario options are inconsistent
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// A worker task panicked or was cancelled
    #[error("Worker failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, LoadTestError>;
