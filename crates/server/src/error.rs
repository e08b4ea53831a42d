use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use domain::DomainError;

/// HTTP-facing error. Domain errors carry their own taxonomy; the
/// only server-level addition is the missing/unknown principal.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    Domain(DomainError),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::Domain(err) => {
                let status = match &err {
                    DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                    DomainError::Conflict(_) => StatusCode::CONFLICT,
                    DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
                    DomainError::NotFound(_) => StatusCode::NOT_FOUND,
                    DomainError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
                };
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "Repository failure");
                }
                let body = match err {
                    DomainError::Validation(fields) => {
                        json!({ "error": "validation failed", "fields": fields })
                    }
                    other => json!({ "error": other.to_string() }),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
