//! Application error type and JSON error responses.
//!
//! Both authentication failures surface to the caller as 401 responses with a
//! flat JSON body: `{"error": "<message>"}`. Failures are isolated to the
//! request that triggered them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// Authorization header absent or not of the form `Bearer <token>`.
    #[error("Missing or invalid Authorization header")]
    MalformedAuthHeader,

    /// Header well-formed but the token does not match the configured secret.
    #[error("Unauthorized")]
    InvalidToken,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedAuthHeader | Self::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn response_parts(err: AppError) -> (StatusCode, ErrorBody) {
        let response = err.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorBody = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    #[test]
    fn both_variants_map_to_401() {
        assert_eq!(
            AppError::MalformedAuthHeader.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn error_messages_are_exact() {
        assert_eq!(
            AppError::MalformedAuthHeader.to_string(),
            "Missing or invalid Authorization header"
        );
        assert_eq!(AppError::InvalidToken.to_string(), "Unauthorized");
    }

    #[tokio::test]
    async fn into_response_malformed_header() {
        let (status, body) = response_parts(AppError::MalformedAuthHeader).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Missing or invalid Authorization header");
    }

    #[tokio::test]
    async fn into_response_invalid_token() {
        let (status, body) = response_parts(AppError::InvalidToken).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.error, "Unauthorized");
    }

    #[test]
    fn error_body_serializes_flat() {
        let body = ErrorBody {
            error: "Unauthorized".to_string(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"Unauthorized"}"#);
    }
}
