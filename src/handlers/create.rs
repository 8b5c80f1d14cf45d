use crate::error::ApiError;
use crate::extract::{AlbumBody, BodyRejection};
use crate::models::{Album, AlbumInput, MSG_CREATED};
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// POST /albums handler - Create an album
///
/// The id is assigned by the store. A body that cannot be read is answered
/// with 503 and the parser's message as plain text.
#[utoipa::path(
    post,
    path = routes::ALBUMS,
    request_body = AlbumInput,
    responses(
        (status = 201, description = "Album created, wrapped in the response envelope", body = Album),
        (status = 503, description = "Malformed body", body = String, content_type = "text/plain")
    ),
    tag = "albums"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<AlbumBody, BodyRejection>,
) -> Result<ApiResponse<Album>, ApiError> {
    let AlbumBody(input) = payload.map_err(|BodyRejection(text)| {
        tracing::warn!("Rejected album body on create: {}", text);
        ApiError::CreateBodyRejected(text)
    })?;

    let album = state.store.create(input);

    tracing::info!("Created album with id: {}", album.id);
    Ok(ApiResponse::created(MSG_CREATED, album))
}
