use crate::models::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// The store lives in memory, so the service is healthy whenever it can
/// answer; the body also reports how many albums are held.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let albums = state.store.count();
    tracing::debug!("Health check passed ({} albums)", albums);
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            albums,
        }),
    )
}
