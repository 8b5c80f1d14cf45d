use crate::error::{ApiError, parse_id};
use crate::models::MSG_DELETED;
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State};

/// DELETE /albums/{id} handler - Remove an album
///
/// The success envelope carries no `data` field.
#[utoipa::path(
    delete,
    path = routes::ALBUM_ITEM,
    params(
        ("id" = i64, Path, description = "Album id")
    ),
    responses(
        (status = 200, description = "Album deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Album not found")
    ),
    tag = "albums"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = parse_id(&id_str)?;

    if state.store.delete_by_id(id) {
        tracing::info!("Deleted album with id: {}", id);
        Ok(ApiResponse::ack(MSG_DELETED))
    } else {
        tracing::info!("Album not found for delete with id: {}", id);
        Err(ApiError::AlbumNotFound(id))
    }
}
