use crate::users;
use async_trait::async_trait;
use sqlx::SqlitePool;
use userbase_core::{error::Result, store::UserStore, types::*};

/// User store backed by a `SQLite` pool
///
/// Cloning is cheap: clones share the same pool.
#[derive(Clone)]
pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, name: &str) -> Result<User> {
        users::create(&self.pool, name).await
    }

    async fn insert_many(&self, names: &[String]) -> Result<u64> {
        users::create_many(&self.pool, names).await
    }

    async fn get_all(&self) -> Result<Vec<User>> {
        users::get_all(&self.pool).await
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>> {
        users::get_by_id(&self.pool, id).await
    }

    async fn count(&self) -> Result<i64> {
        users::count(&self.pool).await
    }

    async fn get_range(&self, range: IdRange) -> Result<Vec<User>> {
        users::get_range(&self.pool, range).await
    }

    async fn update(&self, id: UserId, name: Option<&str>) -> Result<Option<User>> {
        users::update_name(&self.pool, id, name).await
    }

    async fn delete(&self, id: UserId) -> Result<bool> {
        users::delete(&self.pool, id).await
    }
}
