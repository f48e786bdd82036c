//! Deck builder and image reconciler.
//!
//! Both are pure functions over an injected `DeckRng`, so a fixed seed gives
//! a fixed board.
//!
//! ```
//! use pairflip::core::{DeckRng, ImageRef};
//! use pairflip::deck::{build_deck, reconcile};
//!
//! let mut rng = DeckRng::new(42);
//! let picked = vec![ImageRef::photo("cat.png"), ImageRef::photo("dog.png")];
//!
//! let images = reconcile(&picked, 3, &mut rng);
//! assert_eq!(images.len(), 3);
//! assert!(images[2].is_filler());
//!
//! let deck = build_deck(&images, &mut rng);
//! assert_eq!(deck.len(), 6);
//! ```

mod builder;
mod reconcile;

pub use builder::{build_deck, Deck};
pub use reconcile::{reconcile, reconcile_plan, Reconciliation};
