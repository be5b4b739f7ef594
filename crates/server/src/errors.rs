use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Errors returned by HTTP handlers, rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::NotFound(msg) | ApiError::Validation(msg) => msg,
            ApiError::Internal(msg) => {
                // cause stays in the logs
                error!(event = "request_failed", error = %msg, "internal error");
                "Internal Server Error".to_string()
            }
        };
        (status, Json(serde_json::json!({"detail": detail}))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::NotFound(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self { ApiError::Validation(r.body_text()) }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self { ApiError::Validation(r.body_text()) }
}

impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self { ApiError::Validation(r.body_text()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn render(e: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = e.into_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn liked_not_found_renders_404_detail() {
        let e: ApiError = ServiceError::not_found("Liked Companies List").into();
        let (status, body) = render(e).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"detail": "Liked Companies List not found"}));
    }

    #[tokio::test]
    async fn db_errors_are_masked_as_500() {
        let e: ApiError = ServiceError::Db("connection refused".into()).into();
        let (status, body) = render(e).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["detail"], "Internal Server Error");
    }

    #[tokio::test]
    async fn validation_renders_422() {
        let (status, body) = render(ApiError::Validation("bad uuid".into())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["detail"], "bad uuid");
    }
}
