// ABOUTME: Maps post service errors onto HTTP status codes and JSON error bodies.
// ABOUTME: Storage failures are logged in full but reported to clients with a generic message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use postboard_core::PostError;

const STORAGE_MESSAGE: &str = "internal storage error";

/// Error returned by API handlers. Renders as `{"error": <message>}`.
#[derive(Debug)]
pub struct ApiError(pub PostError);

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            PostError::Validation(_) => StatusCode::BAD_REQUEST,
            PostError::NotFound(_) => StatusCode::NOT_FOUND,
            PostError::Storage(_) | PostError::IdsExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            PostError::Storage(e) => {
                tracing::error!("storage failure while handling request: {}", e);
                STORAGE_MESSAGE.to_string()
            }
            other => other.to_string(),
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
