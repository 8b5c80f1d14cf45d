use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::models::AlbumInput;

/// Album body accepted as JSON or as an urlencoded form.
///
/// Requests declaring `application/x-www-form-urlencoded` are read as a
/// form; everything else, including requests without a content type, is
/// read as JSON.
#[derive(Debug)]
pub struct AlbumBody(pub AlbumInput);

/// Why an album body could not be read, as plain text
#[derive(Debug)]
pub struct BodyRejection(pub String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.0,
        )
            .into_response()
    }
}

impl<S> FromRequest<S> for AlbumBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(input) = Form::<AlbumInput>::from_request(req, state)
                .await
                .map_err(|rejection| BodyRejection(rejection.body_text()))?;
            return Ok(AlbumBody(input));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| BodyRejection(rejection.body_text()))?;
        let input = serde_json::from_slice::<AlbumInput>(&bytes)
            .map_err(|err| BodyRejection(err.to_string()))?;
        Ok(AlbumBody(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<AlbumInput, BodyRejection> {
        let mut builder = axum::http::Request::builder().method("POST").uri("/albums");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        AlbumBody::from_request(req, &()).await.map(|AlbumBody(input)| input)
    }

    #[tokio::test]
    async fn test_json_body() {
        let input = extract(
            Some("application/json"),
            r#"{"title":"X","artist":"Y","price":9.99}"#,
        )
        .await
        .unwrap();

        assert_eq!(input.title, "X");
        assert_eq!(input.artist, "Y");
        assert_eq!(input.price, 9.99);
    }

    #[tokio::test]
    async fn test_json_without_content_type() {
        let input = extract(None, r#"{"title":"X","artist":"Y","price":1}"#)
            .await
            .unwrap();
        assert_eq!(input.price, 1.0);
    }

    #[tokio::test]
    async fn test_missing_fields_default_and_id_ignored() {
        let input = extract(Some("application/json"), r#"{"id":77,"title":"Only title"}"#)
            .await
            .unwrap();

        assert_eq!(input.title, "Only title");
        assert_eq!(input.artist, "");
        assert_eq!(input.price, 0.0);
    }

    #[tokio::test]
    async fn test_form_body() {
        let input = extract(
            Some("application/x-www-form-urlencoded"),
            "title=Kind+of+Blue&artist=Miles%20Davis&price=12.5",
        )
        .await
        .unwrap();

        assert_eq!(input.title, "Kind of Blue");
        assert_eq!(input.artist, "Miles Davis");
        assert_eq!(input.price, 12.5);
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let err = extract(Some("application/json"), "{invalid json}").await.unwrap_err();
        assert!(!err.0.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_rejected() {
        let result = extract(
            Some("application/json"),
            r#"{"title":"X","artist":"Y","price":"cheap"}"#,
        )
        .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_rejection_renders_plain_text() {
        let rejection = extract(Some("application/json"), "{invalid json}")
            .await
            .unwrap_err();
        let text = rejection.0.clone();

        let response = rejection.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("text/plain")
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], text.as_bytes());
    }

    #[tokio::test]
    async fn test_bad_form_price_is_rejected() {
        let result = extract(
            Some("application/x-www-form-urlencoded"),
            "title=X&artist=Y&price=cheap",
        )
        .await;
        assert!(result.is_err());
    }
}
