// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const ALBUMS: &str = "/albums";
pub const ALBUM_ITEM: &str = "/albums/{id}";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
