//! Store trait for user records

use crate::error::Result;
use crate::types::{IdRange, User, UserId};
use async_trait::async_trait;

/// Durable CRUD operations on user records
///
/// Implementations own id assignment: ids are unique and increase
/// monotonically on insert. Handles are shared across requests, so every
/// method takes `&self`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user and return it with its assigned id
    async fn insert(&self, name: &str) -> Result<User>;

    /// Insert many users in a single transaction, returning the number inserted
    async fn insert_many(&self, names: &[String]) -> Result<u64>;

    /// Get every user, ordered by id
    async fn get_all(&self) -> Result<Vec<User>>;

    /// Get a user by id
    async fn get_by_id(&self, id: UserId) -> Result<Option<User>>;

    /// Total number of users
    async fn count(&self) -> Result<i64>;

    /// Users whose id falls inside `range`, ordered by id
    async fn get_range(&self, range: IdRange) -> Result<Vec<User>>;

    /// Replace the name of an existing user; `None` clears it
    ///
    /// Returns `None` when no user has the given id.
    async fn update(&self, id: UserId, name: Option<&str>) -> Result<Option<User>>;

    /// Delete a user, returning whether a row was removed
    ///
    /// Deleting an absent id is not an error.
    async fn delete(&self, id: UserId) -> Result<bool>;
}
