use utoipa::OpenApi;

use crate::handlers;
use crate::models::{Album, AlbumInput, DiscoveryResponse, HealthResponse, RouteIndex, RouteInfo};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "album-store API",
        version = "1.0.0",
        description = "In-memory album catalog with CRUD endpoints"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Album,
            AlbumInput,
            DiscoveryResponse,
            RouteIndex,
            RouteInfo,
            HealthResponse
        )
    ),
    tags(
        (name = "albums", description = "Album catalog operations"),
        (name = "health", description = "Health check operations"),
        (name = "discovery", description = "Route discovery")
    )
)]
pub struct ApiDoc;
