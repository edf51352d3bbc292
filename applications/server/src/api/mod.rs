/// API route modules
pub mod health;
pub mod params;
pub mod users;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Build the application router
///
/// Static segments (`/users/count`, `/users/range`) take priority over
/// the `/users/:id` capture.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/count", get(users::count_users))
        .route("/users/range", get(users::get_users_range))
        .route(
            "/users/:id",
            get(users::get_user)
                .delete(users::delete_user)
                .patch(users::update_user),
        )
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .with_state(app_state)
}
