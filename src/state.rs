use crate::store::AlbumStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: AlbumStore,
}
