use crate::models::{Album, MSG_SUCCESS};
use crate::response::ApiResponse;
use crate::routes;
use crate::state::AppState;
use axum::extract::State;

/// GET /albums handler - List all albums
///
/// Returns every album currently in the store, in insertion order.
#[utoipa::path(
    get,
    path = routes::ALBUMS,
    responses(
        (status = 200, description = "All albums, wrapped in the response envelope", body = [Album])
    ),
    tag = "albums"
)]
pub async fn list_handler(State(state): State<AppState>) -> ApiResponse<Vec<Album>> {
    let albums = state.store.list();
    tracing::info!("Listed {} albums", albums.len());
    ApiResponse::ok(MSG_SUCCESS, albums)
}
