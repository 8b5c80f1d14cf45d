use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::models::{MSG_INVALID_ID, MSG_NOT_FOUND, NOT_FOUND_DETAIL};
use crate::response::envelope;

/// Custom error type for API endpoints
///
/// Lookups that miss and unparsable ids answer with the usual envelope.
/// Body rejections answer in plain text, with a status that depends on
/// the endpoint that rejected the body.
#[derive(Debug)]
pub enum ApiError {
    /// Path id is not an integer
    InvalidId(String),
    /// No album with this id
    AlbumNotFound(i64),
    /// Malformed body on create (answered with 503)
    CreateBodyRejected(String),
    /// Malformed body on update
    UpdateBodyRejected(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::AlbumNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::CreateBodyRejected(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::UpdateBodyRejected(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::InvalidId(raw) => envelope(
                status,
                MSG_INVALID_ID,
                false,
                Some(format!("id must be an integer, got '{}'", raw)),
            ),
            ApiError::AlbumNotFound(id) => {
                tracing::debug!("Answering not found for album id: {}", id);
                envelope(status, MSG_NOT_FOUND, false, Some(NOT_FOUND_DETAIL))
            }
            ApiError::CreateBodyRejected(text) | ApiError::UpdateBodyRejected(text) => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                text,
            )
                .into_response(),
        }
    }
}

/// Parse an album id taken from the request path.
pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>().map_err(|_| ApiError::InvalidId(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-3").unwrap(), -3);
        assert!(matches!(parse_id("abc"), Err(ApiError::InvalidId(raw)) if raw == "abc"));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId(_))));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId(_))));
    }

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ApiError::InvalidId("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::AlbumNotFound(9).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::CreateBodyRejected("bad".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::UpdateBodyRejected("bad".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_not_found_renders_envelope() {
        let response = ApiError::AlbumNotFound(99).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            crate::response::JSON_UTF8
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "code": 404,
                "message": "Failed id was not found",
                "status": false,
                "data": "id was not found"
            })
        );
    }

    #[tokio::test]
    async fn test_body_rejection_is_plain_text() {
        let response = ApiError::CreateBodyRejected("broken".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"broken");
    }
}
