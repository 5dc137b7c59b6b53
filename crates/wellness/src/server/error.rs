use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::WellnessError;

/// Error returned by every handler; renders as
/// `{ "ok": false, "error": { "code", "message" } }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    pub ok: bool,
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiErrorBody {
    /// `bad_request`, `not_found`, `conflict`, or `internal`.
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorResponse {
            ok: false,
            error: ApiErrorBody {
                code: self.code.to_string(),
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<WellnessError> for ApiError {
    fn from(err: WellnessError) -> Self {
        let (status, code, message) = match err {
            WellnessError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            WellnessError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            WellnessError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            WellnessError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg)
            }
        };
        Self {
            status,
            code,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn maps_domain_errors_to_status() {
        let cases = [
            (WellnessError::InvalidInput("x".into()), StatusCode::BAD_REQUEST),
            (WellnessError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (WellnessError::Conflict("x".into()), StatusCode::CONFLICT),
            (WellnessError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status(), status);
        }
    }

    #[tokio::test]
    async fn renders_error_envelope() {
        let response = ApiError::from(WellnessError::NotFound("post 9".into())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let value: serde_json::Value = serde_json::from_slice(&body).expect("json");
        let expected = serde_json::json!({
            "ok": false,
            "error": { "code": "not_found", "message": "post 9" }
        });
        assert_eq!(value, expected);
    }
}
