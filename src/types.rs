//! Core types for album-catalog

use serde::{Deserialize, Serialize};

/// Album ID type
pub type AlbumId = i64;

/// A single catalog record.
///
/// Field order here is the wire order of the JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    pub fn new(
        id: AlbumId,
        title: impl Into<String>,
        artist: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }
}

/// Records the catalog starts with.
pub fn seed_albums() -> Vec<Album> {
    vec![
        Album::new(1, "Blue Train", "John Coltrane", 56.99),
        Album::new(2, "Jeru", "Gerry Mulligan", 17.99),
        Album::new(3, "Sarah Vaughan and Clifford Brown", "Sarah Vaughan", 39.99),
    ]
}
