//! Cards - one face of a pair, plus its per-game flip state.

use serde::{Deserialize, Serialize};

use super::image::ImageRef;

/// Pair identifier. Exactly two cards in a deck share each pair id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairId(pub u32);

impl PairId {
    /// Create a new pair ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The pair id as an index into the image list the deck was built from.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// A card on the board.
///
/// A card's identity is its index in the deck. `flipped` and `matched` are
/// only ever written by the match engine.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Which pair this card belongs to.
    pub pair_id: PairId,

    /// Face image, shared with the other card of the pair.
    pub image: ImageRef,

    /// Is the card face-up? Matched cards stay face-up.
    pub flipped: bool,

    /// Has this card's pair been found?
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(pair_id: PairId, image: ImageRef) -> Self {
        Self {
            pair_id,
            image,
            flipped: false,
            matched: false,
        }
    }

    /// Can this card be turned over right now?
    #[must_use]
    pub fn is_face_down(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Do two cards form a pair?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.pair_id == other.pair_id
    }
}
