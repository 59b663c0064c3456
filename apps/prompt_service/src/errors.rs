use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::renderer::RenderError;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Handlers log internal causes inside their span; bodies never carry them,
/// except the store error text on a failed health check.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store unhealthy: {0}")]
    Unhealthy(#[source] StoreError),

    #[error("Generation failed: {0}")]
    Generation(#[from] RenderError),

    #[error("Feedback failed: {0}")]
    Feedback(#[source] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Unhealthy(e) => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({ "status": "unhealthy", "error": e.to_string() }),
            ),
            AppError::Generation(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to generate prompt" }),
            ),
            AppError::Feedback(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Failed to submit feedback" }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::connection_refused;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_is_400_with_message() {
        let response = AppError::Validation("bad input".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "bad input" }));
    }

    #[tokio::test]
    async fn test_unhealthy_is_503_with_reason() {
        let err = connection_refused();
        let response = AppError::Unhealthy(err).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert_eq!(body["status"], "unhealthy");
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_generation_error_does_not_leak_details() {
        let err = RenderError::UnknownPlaceholder {
            title: "Secret Title",
            placeholder: "secret".to_string(),
        };
        let response = AppError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to generate prompt" })
        );
    }

    #[tokio::test]
    async fn test_feedback_error_is_generic_500() {
        let err = connection_refused();
        let response = AppError::Feedback(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Failed to submit feedback" })
        );
    }
}
