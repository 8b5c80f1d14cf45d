use crate::models::{DiscoveryResponse, RouteIndex, RouteInfo};
use crate::response::json_utf8;
use crate::routes;
use axum::{http::StatusCode, response::Response};

fn route(method: &str, url: &str, form: bool, param: &str) -> RouteInfo {
    RouteInfo {
        method: method.to_string(),
        url: url.to_string(),
        form: form.then(|| ["title", "artist", "price"].map(String::from).to_vec()),
        param: param.to_string(),
    }
}

/// GET / handler - Discovery document listing the album routes
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Available routes", body = DiscoveryResponse)
    ),
    tag = "discovery"
)]
pub async fn index_handler() -> Response {
    let doc = DiscoveryResponse {
        code: StatusCode::OK.as_u16(),
        message: "OK".to_string(),
        url: RouteIndex {
            get_all: route("GET", routes::ALBUMS, false, ""),
            create: route("POST", routes::ALBUMS, true, ""),
            get_by_id: route("GET", "/albums/id", false, "id integer"),
            update: route("PUT", "/albums/id", true, "id integer"),
            delete: route("DELETE", "/albums/id", false, "id integer"),
        },
        docs: routes::SWAGGER_UI.to_string(),
    };
    json_utf8(StatusCode::OK, doc)
}
