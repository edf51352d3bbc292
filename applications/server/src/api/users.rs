/// Users API routes
use crate::{
    api::params::{parse_param, required_param},
    error::{Result, ServerError},
    state::AppState,
};
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use userbase_core::{IdRange, User, UserPayload};

/// Query string for `/users/range`
///
/// Both values arrive as raw strings so parse failures map to 400
/// through [`required_param`].
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub range: Option<String>,
}

/// GET /users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.get_all().await?;
    Ok(Json(users))
}

/// GET /users/:id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let id = parse_param("id", &id)?;
    let user = app_state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("User {}", id)))?;
    Ok(Json(user))
}

/// GET /users/count
pub async fn count_users(State(app_state): State<AppState>) -> Result<Json<i64>> {
    let count = app_state.store.count().await?;
    Ok(Json(count))
}

/// GET /users/range?start=&range=
/// Users with ids in `[start, start + range - 1]`
pub async fn get_users_range(
    State(app_state): State<AppState>,
    query: std::result::Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Vec<User>>> {
    let Query(query) = query.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let start = required_param("start", query.start.as_deref())?;
    let range = required_param("range", query.range.as_deref())?;

    let users = app_state.store.get_range(IdRange::new(start, range)).await?;
    Ok(Json(users))
}

/// POST /users
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_user(
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(payload) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;
    let name = payload
        .name
        .ok_or_else(|| ServerError::BadRequest("name is required".to_string()))?;

    let user = app_state.store.insert(&name).await?;
    tracing::debug!(id = user.id, "Created user");

    Ok(StatusCode::CREATED)
}

/// DELETE /users/:id
/// Deleting an absent id still answers 200.
pub async fn delete_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<StatusCode> {
    let id = parse_param("id", &id)?;

    let removed = app_state.store.delete(id).await?;
    tracing::debug!(id, removed, "Deleted user");

    Ok(StatusCode::OK)
}

/// PATCH /users/:id
/// Only `name` is taken from the body; a null or missing name clears it.
pub async fn update_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    payload: std::result::Result<Json<UserPayload>, JsonRejection>,
) -> Result<StatusCode> {
    let id = parse_param("id", &id)?;
    let Json(payload) = payload.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    app_state
        .store
        .update(id, payload.name.as_deref())
        .await?
        .ok_or_else(|| ServerError::NotFound(format!("User {}", id)))?;

    Ok(StatusCode::OK)
}
