use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::UserError;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        match self {
            // Reads never explain why they failed.
            UserError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
            other => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": other.to_string() })),
            )
                .into_response(),
        }
    }
}
