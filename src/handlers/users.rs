//! User CRUD handlers: create, list, read, update, delete.

use crate::error::AppError;
use crate::model::{parse_id, UserFilter, UserPatch, UserQuery};
use crate::response::{message, user_ok, users_ok};
use crate::state::AppState;
use crate::validation::UserSchema;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;

const ENTITY: &str = "User";

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(body) = body?;
    let new_user = UserSchema::validate(&body)?;
    let user = state.store.create(new_user).await?;
    tracing::info!(id = %user.id, "user created");
    Ok(user_ok(user))
}

pub async fn list(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(pairs) = query?;
    let filter = UserFilter::from_query(UserQuery::from_pairs(pairs))?;
    let users = state.store.find_many(&filter).await?;
    tracing::debug!(count = users.len(), "users listed");
    Ok(users_ok(users))
}

pub async fn read(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    let user = state
        .store
        .find_unique(id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    Ok(user_ok(user))
}

/// Replaces the fields present in the body. The id must already exist.
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    let Json(patch) = body?;
    let user = state
        .store
        .update(id, &patch)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    tracing::info!(%id, "user updated");
    Ok(user_ok(user))
}

pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id_str) = path?;
    let id = parse_id(&id_str)?;
    state
        .store
        .delete(id)
        .await?
        .ok_or(AppError::NotFound(ENTITY))?;
    tracing::info!(%id, "user deleted");
    Ok(message(StatusCode::OK, "User deleted successfully"))
}
