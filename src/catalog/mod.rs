//! Album catalog
//!
//! The catalog is the single owner of every album record. Records are kept
//! in insertion order, which is also the listing order.

use tokio::sync::RwLock;

use crate::types::{seed_albums, Album, AlbumId};
use crate::{Error, Result};

pub mod decode;

pub use decode::decode_album;

/// In-memory, append-only album store
#[derive(Debug, Default)]
pub struct AlbumCatalog {
    /// Albums in insertion order (appends serialized by the write lock)
    albums: RwLock<Vec<Album>>,
}

impl AlbumCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the given albums, in order
    pub fn with_albums(albums: Vec<Album>) -> Self {
        Self {
            albums: RwLock::new(albums),
        }
    }

    /// Create a catalog holding the startup seed records
    pub fn seeded() -> Self {
        Self::with_albums(seed_albums())
    }

    /// Snapshot of all albums in storage order
    pub async fn list(&self) -> Vec<Album> {
        self.albums.read().await.clone()
    }

    /// First album whose id matches.
    ///
    /// Ids are not unique, so under duplicates the earliest insert wins.
    pub async fn get(&self, id: AlbumId) -> Result<Album> {
        let albums = self.albums.read().await;
        albums
            .iter()
            .find(|album| album.id == id)
            .cloned()
            .ok_or(Error::AlbumNotFound(id))
    }

    /// Append an album to the end of the catalog.
    ///
    /// No uniqueness or value checks are made.
    pub async fn append(&self, album: Album) -> Album {
        let mut albums = self.albums.write().await;
        albums.push(album.clone());
        album
    }

    /// Number of stored albums
    pub async fn len(&self) -> usize {
        self.albums.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.albums.read().await.is_empty()
    }
}

/// Parse a path-supplied album id as a base-10 integer
pub fn parse_album_id(raw: &str) -> Result<AlbumId> {
    raw.parse::<AlbumId>().map_err(|source| Error::InvalidId {
        raw: raw.to_string(),
        source,
    })
}
