//! # pairflip
//!
//! A matching-pairs (memory) game engine for boards built from the player's
//! own photos.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: All randomness comes from a seeded `DeckRng`.
//!    Same seed, same sample, same deal.
//!
//! 2. **No hidden time**: Settle delays are pending steps checked against an
//!    injected `Clock`. Hosts call `poll()`; tests use `ManualClock`.
//!
//! 3. **Owned instances**: Every engine and session is a plain value. Dropping
//!    one discards its pending step; nothing is process-global.
//!
//! ## Modules
//!
//! - `core`: Cards, image references, filler images, RNG, configuration
//! - `deck`: Image reconciliation and deck construction
//! - `engine`: Flip/match/mismatch state machine, clocks, notifications
//! - `albums`: Album records and storage
//! - `session`: Selection, consent-gated start, engine lifecycle

pub mod core;
pub mod deck;
pub mod engine;
pub mod albums;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Card, PairId,
    ImageRef, FillerImage,
    DeckRng, DeckRngState,
    Difficulty, GameConfig, MatchTiming,
};

pub use crate::deck::{build_deck, reconcile, reconcile_plan, Deck, Reconciliation};

pub use crate::engine::{
    column_layout_hint,
    Clock, ManualClock, SystemClock,
    EventLog, MatchEvent, MatchListener,
    MatchEngine, PendingStep, Phase, StepKind,
};

pub use crate::albums::{Album, AlbumError, AlbumId, AlbumStore, InMemoryAlbumStore};

pub use crate::session::{GameSession, SelectionStatus, SessionError, ShortfallConsent, StartOutcome};
