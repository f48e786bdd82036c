//! Album records and the storage trait.
//!
//! The game only ever consumes an album's image list. Storage backends
//! implement `AlbumStore`; `InMemoryAlbumStore` is the reference backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::ImageRef;

/// Opaque album identifier, assigned by the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AlbumId(pub u64);

impl AlbumId {
    /// Create a new album ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for AlbumId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Album({})", self.0)
    }
}

/// A named, ordered collection of images.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Store-assigned identifier.
    pub id: AlbumId,

    /// Display name (trimmed, never empty).
    pub name: String,

    /// Images in the order the user added them.
    pub images: Vec<ImageRef>,

    /// When the album was created.
    pub created_at: DateTime<Utc>,

    /// When the album was last changed.
    pub updated_at: DateTime<Utc>,

    /// Store-wide change counter at the last write; breaks timestamp ties.
    pub revision: u64,
}

/// Errors from album operations.
#[derive(Debug, Error)]
pub enum AlbumError {
    /// No album with this id.
    #[error("Album not found: {0}")]
    NotFound(AlbumId),

    /// The name was empty after trimming.
    #[error("Album name cannot be empty")]
    EmptyName,

    /// The album would have no images.
    #[error("Album must contain at least one image")]
    NoImages,

    /// Export or import failed.
    #[error("Album codec error: {0}")]
    Codec(#[from] bincode::Error),
}

/// Storage contract for albums.
///
/// Every mutation either fully applies or leaves the store unchanged.
pub trait AlbumStore {
    /// Create an album. The name is trimmed.
    fn create(&mut self, name: &str, images: Vec<ImageRef>) -> Result<Album, AlbumError>;

    /// Get an album by ID.
    fn get(&self, id: AlbumId) -> Option<&Album>;

    /// All albums, most recently updated first.
    fn list(&self) -> Vec<&Album>;

    /// Replace an album's name and images.
    fn update(&mut self, id: AlbumId, name: &str, images: Vec<ImageRef>) -> Result<Album, AlbumError>;

    /// Delete an album. Deleting a missing album is not an error.
    fn delete(&mut self, id: AlbumId) -> Option<Album>;

    /// Number of albums.
    fn count(&self) -> usize;
}

/// Check a name and image list for create/update, returning the trimmed name.
pub(crate) fn validate(name: &str, images: &[ImageRef]) -> Result<String, AlbumError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AlbumError::EmptyName);
    }
    if images.is_empty() {
        return Err(AlbumError::NoImages);
    }
    Ok(name.to_string())
}
