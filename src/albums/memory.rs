//! In-memory album store.
//!
//! Used for embedding and tests. `export`/`import` move the whole store
//! through bincode so a host can persist it however it likes.

use chrono::Utc;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::store::{validate, Album, AlbumError, AlbumId, AlbumStore};
use crate::core::ImageRef;

/// Album store backed by a hash map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InMemoryAlbumStore {
    albums: FxHashMap<AlbumId, Album>,
    next_id: u64,
    revision: u64,
}

impl InMemoryAlbumStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize every album.
    pub fn export(&self) -> Result<Vec<u8>, AlbumError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a store from `export` output.
    pub fn import(bytes: &[u8]) -> Result<Self, AlbumError> {
        Ok(bincode::deserialize(bytes)?)
    }

    fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

impl AlbumStore for InMemoryAlbumStore {
    fn create(&mut self, name: &str, images: Vec<ImageRef>) -> Result<Album, AlbumError> {
        let name = match validate(name, &images) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(error = %e, "album create rejected");
                return Err(e);
            }
        };

        self.next_id += 1;
        let id = AlbumId::new(self.next_id);
        let now = Utc::now();
        let album = Album {
            id,
            name,
            images,
            created_at: now,
            updated_at: now,
            revision: self.bump_revision(),
        };
        tracing::debug!(%id, images = album.images.len(), "album created");
        self.albums.insert(id, album.clone());
        Ok(album)
    }

    fn get(&self, id: AlbumId) -> Option<&Album> {
        self.albums.get(&id)
    }

    fn list(&self) -> Vec<&Album> {
        let mut albums: Vec<&Album> = self.albums.values().collect();
        albums.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.revision.cmp(&a.revision))
        });
        albums
    }

    fn update(&mut self, id: AlbumId, name: &str, images: Vec<ImageRef>) -> Result<Album, AlbumError> {
        if !self.albums.contains_key(&id) {
            tracing::warn!(%id, "album update on missing album");
            return Err(AlbumError::NotFound(id));
        }
        let name = match validate(name, &images) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!(%id, error = %e, "album update rejected");
                return Err(e);
            }
        };

        let revision = self.bump_revision();
        let album = self.albums.get_mut(&id).ok_or(AlbumError::NotFound(id))?;
        album.name = name;
        album.images = images;
        album.updated_at = Utc::now().max(album.created_at);
        album.revision = revision;
        tracing::debug!(%id, images = album.images.len(), "album updated");
        Ok(album.clone())
    }

    fn delete(&mut self, id: AlbumId) -> Option<Album> {
        let removed = self.albums.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "album deleted");
        }
        removed
    }

    fn count(&self) -> usize {
        self.albums.len()
    }
}
