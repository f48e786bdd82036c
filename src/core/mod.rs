//! Core types: cards, image references, RNG, configuration.
//!
//! Everything here is plain data. The deck builder and the match engine are
//! built on top of these.

pub mod card;
pub mod config;
pub mod image;
pub mod rng;

pub use card::{Card, PairId};
pub use config::{Difficulty, GameConfig, MatchTiming};
pub use image::{FillerImage, ImageRef, FILLER_LABELS, FILLER_PALETTE};
pub use rng::{DeckRng, DeckRngState};
