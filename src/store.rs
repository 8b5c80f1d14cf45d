use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

use crate::models::{Album, AlbumInput};

/// How the store picks the id of a newly created album
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// `id = current count + 1`.
    ///
    /// After a delete this can hand out an id that is still in use, e.g.
    /// deleting id 2 from `[1, 2, 3]` and creating yields a second id 3.
    CountPlusOne,
    /// One past the highest id ever held by the store; ids are never reused.
    Monotonic,
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::CountPlusOne => f.write_str("count"),
            IdStrategy::Monotonic => f.write_str("monotonic"),
        }
    }
}

struct Inner {
    albums: Vec<Album>,
    strategy: IdStrategy,
    highest_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        let id = match self.strategy {
            IdStrategy::CountPlusOne => self.albums.len() as i64 + 1,
            IdStrategy::Monotonic => self.highest_id + 1,
        };
        self.highest_id = self.highest_id.max(id);
        id
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.albums.iter().position(|album| album.id == id)
    }
}

/// Shareable in-memory album store for use across async handlers
///
/// Albums are kept in insertion order. Every operation takes the lock
/// once, so a lookup and the mutation that follows it happen as one step.
/// Callers only ever receive clones.
#[derive(Clone)]
pub struct AlbumStore {
    inner: Arc<RwLock<Inner>>,
}

impl AlbumStore {
    pub fn new(albums: Vec<Album>, strategy: IdStrategy) -> Self {
        let highest_id = albums.iter().map(|album| album.id).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Inner {
                albums,
                strategy,
                highest_id,
            })),
        }
    }

    /// Store holding the three catalog albums the service starts with
    pub fn seeded(strategy: IdStrategy) -> Self {
        Self::new(seed_albums(), strategy)
    }

    pub fn list(&self) -> Vec<Album> {
        self.inner.read().albums.clone()
    }

    pub fn count(&self) -> usize {
        self.inner.read().albums.len()
    }

    pub fn create(&self, input: AlbumInput) -> Album {
        let mut inner = self.inner.write();
        let album = Album::from_input(inner.next_id(), input);
        inner.albums.push(album.clone());
        album
    }

    pub fn find_by_id(&self, id: i64) -> Option<Album> {
        let inner = self.inner.read();
        inner.position(id).map(|idx| inner.albums[idx].clone())
    }

    /// Replace title, artist and price of the first album with `id`.
    pub fn update_by_id(&self, id: i64, input: AlbumInput) -> Option<Album> {
        let mut inner = self.inner.write();
        let idx = inner.position(id)?;
        let album = Album::from_input(id, input);
        inner.albums[idx] = album.clone();
        Some(album)
    }

    /// Remove the first album with `id`. Returns `false` if none matched.
    pub fn delete_by_id(&self, id: i64) -> bool {
        let mut inner = self.inner.write();
        match inner.position(id) {
            Some(idx) => {
                inner.albums.remove(idx);
                true
            }
            None => false,
        }
    }
}

fn seed_albums() -> Vec<Album> {
    vec![
        Album {
            id: 1,
            title: "Blue Train".to_string(),
            artist: "John Coltrane".to_string(),
            price: 56.99,
        },
        Album {
            id: 2,
            title: "Jeru".to_string(),
            artist: "Gerry Mulligan".to_string(),
            price: 17.99,
        },
        Album {
            id: 3,
            title: "Sarah Vaughan and Clifford Brown".to_string(),
            artist: "Sarah Vaughan".to_string(),
            price: 39.99,
        },
    ]
}
