use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::models::Envelope;

pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// Render `body` as JSON with the charset-qualified content type.
pub fn json_utf8<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, JSON_UTF8)], Json(body)).into_response()
}

/// Wrap `data` in the `{code, message, status, data}` envelope.
pub fn envelope<T: Serialize>(
    status: StatusCode,
    message: &str,
    success: bool,
    data: Option<T>,
) -> Response {
    json_utf8(
        status,
        Envelope {
            code: status.as_u16(),
            message: message.to_string(),
            status: success,
            data,
        },
    )
}

/// Successful album endpoint response
pub struct ApiResponse<T> {
    status: StatusCode,
    message: &'static str,
    data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message,
            data: Some(data),
        }
    }

    pub fn created(message: &'static str, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success without a `data` field.
    pub fn ack(message: &'static str) -> Self {
        Self {
            status: StatusCode::OK,
            message,
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        envelope(self.status, self.message, true, self.data)
    }
}
