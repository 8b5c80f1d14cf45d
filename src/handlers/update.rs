use crate::error::{ApiError, parse_id};
use crate::extract::{AlbumBody, BodyRejection};
use crate::models::{Album, AlbumInput, MSG_UPDATED};
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State};

/// PUT /albums/{id} handler - Replace an album's fields
///
/// The id in the path is kept; title, artist and price come from the body.
#[utoipa::path(
    put,
    path = routes::ALBUM_ITEM,
    params(
        ("id" = i64, Path, description = "Album id")
    ),
    request_body = AlbumInput,
    responses(
        (status = 200, description = "Album updated, wrapped in the response envelope", body = Album),
        (status = 400, description = "Id is not an integer or body is malformed"),
        (status = 404, description = "Album not found")
    ),
    tag = "albums"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    payload: Result<AlbumBody, BodyRejection>,
) -> Result<ApiResponse<Album>, ApiError> {
    let id = parse_id(&id_str)?;
    let AlbumBody(input) = payload.map_err(|BodyRejection(text)| {
        tracing::warn!("Rejected album body on update of {}: {}", id, text);
        ApiError::UpdateBodyRejected(text)
    })?;

    match state.store.update_by_id(id, input) {
        Some(album) => {
            tracing::info!("Successfully updated album with id: {}", id);
            Ok(ApiResponse::ok(MSG_UPDATED, album))
        }
        None => {
            tracing::info!("Album not found for update with id: {}", id);
            Err(ApiError::AlbumNotFound(id))
        }
    }
}
