//! Deck construction: two cards per image, then a uniform shuffle.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, DeckRng, ImageRef, PairId};

/// A shuffled deck.
///
/// Invariant: for every pair id in `[0, pair_count)` exactly two cards carry
/// it. Backed by `im::Vector` so snapshots for renderers are O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    pair_count: usize,
}

impl Deck {
    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a mutable card by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate over cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Cheap copy of the cards for readers.
    #[must_use]
    pub fn snapshot(&self) -> Vector<Card> {
        self.cards.clone()
    }

    /// Board indices of the two cards of a pair, in board order.
    #[must_use]
    pub fn positions_of(&self, pair_id: PairId) -> Vec<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.pair_id == pair_id)
            .map(|(index, _)| index)
            .collect()
    }

    /// Board index of the other card of the pair at `index`.
    #[must_use]
    pub fn partner_of(&self, index: usize) -> Option<usize> {
        let pair_id = self.cards.get(index)?.pair_id;
        self.positions_of(pair_id).into_iter().find(|&i| i != index)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self {
            cards: Vector::new(),
            pair_count: 0,
        }
    }
}

/// Build a shuffled deck from one image per pair.
///
/// Pair `i` uses `images[i]`. The caller reconciles the image list to the
/// desired pair count first.
#[must_use]
pub fn build_deck(images: &[ImageRef], rng: &mut DeckRng) -> Deck {
    let mut cards = Vec::with_capacity(images.len() * 2);
    for (i, image) in images.iter().enumerate() {
        let pair_id = PairId::new(i as u32);
        cards.push(Card::new(pair_id, image.clone()));
        cards.push(Card::new(pair_id, image.clone()));
    }

    rng.shuffle(&mut cards);

    Deck {
        cards: cards.into_iter().collect(),
        pair_count: images.len(),
    }
}
