//! Photo albums: named image lists the player can start a game from.

mod memory;
mod store;

pub use memory::InMemoryAlbumStore;
pub use store::{Album, AlbumError, AlbumId, AlbumStore};
