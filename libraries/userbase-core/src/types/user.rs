/// User domain type
use serde::{Deserialize, Serialize};

/// Server-assigned user identifier
pub type UserId = i64;

/// A stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique, auto-incremented identifier
    pub id: UserId,

    /// Display name; `None` when it was cleared with a null rename
    pub name: Option<String>,
}

impl User {
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }
}

/// Request body for creating or renaming a user
///
/// Any `id` sent by a client is accepted on the wire but never used;
/// ids are always assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPayload {
    #[serde(default)]
    pub id: Option<UserId>,

    #[serde(default)]
    pub name: Option<String>,
}

impl UserPayload {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}
