/// Common test utilities and fixtures
use axum::Router;
use std::sync::Arc;
use tempfile::TempDir;
use userbase_server::{create_router, state::AppState};
use userbase_storage::SqliteUserStore;

/// Router backed by a fresh on-disk database
///
/// The `TempDir` must be kept alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    pub store: SqliteUserStore,
    _temp_dir: TempDir,
}

/// Create a test app with migrations applied
///
/// Uses a real SQLite file so every pooled connection shares one database.
pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = userbase_storage::create_pool(&db_url, 5)
        .await
        .expect("Failed to create pool");
    userbase_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    let store = SqliteUserStore::new(pool);
    let router = create_router(AppState::new(Arc::new(store.clone())));

    TestApp {
        router,
        store,
        _temp_dir: temp_dir,
    }
}
