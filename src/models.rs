use serde::{Deserialize, Serialize};

// Envelope messages as existing clients of the service see them.
pub const MSG_SUCCESS: &str = "Successfuly";
pub const MSG_CREATED: &str = "Album created successfuly";
pub const MSG_UPDATED: &str = "Updated successfuly";
pub const MSG_DELETED: &str = "Deleted Successfuly";
pub const MSG_NOT_FOUND: &str = "Failed id was not found";
pub const MSG_INVALID_ID: &str = "Failed invalid id";
pub const NOT_FOUND_DETAIL: &str = "id was not found";

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn from_input(id: i64, input: AlbumInput) -> Self {
        Self {
            id,
            title: input.title,
            artist: input.artist,
            price: input.price,
        }
    }
}

/// Request body for create and update
///
/// Absent fields fall back to their zero value; any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(default)]
pub struct AlbumInput {
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// JSON wrapper used by every album endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub message: String,
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub albums: usize,
}

/// One entry of the discovery document
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RouteInfo {
    pub method: String,
    pub url: String,
    pub form: Option<Vec<String>>,
    pub param: String,
}

/// Routes advertised by the discovery document
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct RouteIndex {
    pub get_all: RouteInfo,
    pub create: RouteInfo,
    pub get_by_id: RouteInfo,
    pub update: RouteInfo,
    pub delete: RouteInfo,
}

/// Response type for `GET /`
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DiscoveryResponse {
    pub code: u16,
    pub message: String,
    pub url: RouteIndex,
    pub docs: String,
}
