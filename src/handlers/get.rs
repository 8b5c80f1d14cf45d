use crate::error::{ApiError, parse_id};
use crate::models::{Album, MSG_SUCCESS};
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State};

/// GET /albums/{id} handler - Retrieve an album
#[utoipa::path(
    get,
    path = routes::ALBUM_ITEM,
    params(
        ("id" = i64, Path, description = "Album id")
    ),
    responses(
        (status = 200, description = "Album found, wrapped in the response envelope", body = Album),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Album not found")
    ),
    tag = "albums"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<ApiResponse<Album>, ApiError> {
    let id = parse_id(&id_str)?;

    match state.store.find_by_id(id) {
        Some(album) => {
            tracing::info!("Successfully retrieved album with id: {}", id);
            Ok(ApiResponse::ok(MSG_SUCCESS, album))
        }
        None => {
            tracing::info!("Album not found with id: {}", id);
            Err(ApiError::AlbumNotFound(id))
        }
    }
}
