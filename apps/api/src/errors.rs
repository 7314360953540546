use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assist::AssistError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Content-assist credential absent. The credential-lookup mechanism is
    /// never exposed to the client.
    #[error("AI features are not available")]
    AssistUnavailable,

    #[error("Assist error: {0}")]
    Assist(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<AssistError> for AppError {
    fn from(e: AssistError) -> Self {
        match e {
            AssistError::Unavailable => AppError::AssistUnavailable,
            other => AppError::Assist(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::AssistUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "AI_UNAVAILABLE",
                "AI features are not available right now".to_string(),
            ),
            AppError::Assist(msg) => {
                tracing::error!("Assist error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "AI_ERROR",
                    "The AI service could not complete the request. Please try again.".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assist_unavailable_maps_to_503() {
        let response = AppError::from(AssistError::Unavailable).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_upstream_assist_errors_map_to_502() {
        let err = AppError::from(AssistError::Api {
            status: 429,
            message: "quota".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }
}
