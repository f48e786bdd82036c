//! Session orchestration.
//!
//! Implements the caller-side policies around the engine:
//! - ask before padding a short selection with fillers
//! - load albums as selections
//! - drop the running engine on restart or return-to-title

mod game;

pub use game::{GameSession, SelectionStatus, SessionError, ShortfallConsent, StartOutcome};
