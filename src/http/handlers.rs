use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::instrument;

use super::state::AppState;
use crate::domain::{UserCreate, UserView};
use crate::error::UserError;
use crate::user::CreateOutcome;

/// GET /api/users/{id}
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, UserError> {
    state.users.get_user(&id).await.map(Json)
}

/// POST /api/users
///
/// A body that cannot be read as `{id, name, email}` strings is reported like
/// any other unexpected create failure.
#[instrument(skip_all)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<UserCreate>, JsonRejection>,
) -> Result<Json<Value>, UserError> {
    let Json(payload) = payload.map_err(|e| UserError::Unexpected(e.body_text()))?;

    let body = match state.users.create_user(payload).await? {
        CreateOutcome::Created { id, name } => json!({
            "message": "User created successfully",
            "id": id,
            "name": name,
        }),
        CreateOutcome::AlreadyExists => json!({ "message": "User already exists" }),
    };
    Ok(Json(body))
}
