//! Match engine: flip/match/mismatch sequencing and completion detection.
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use pairflip::core::{GameConfig, ImageRef};
//! use pairflip::engine::{EventLog, ManualClock, MatchEngine, MatchEvent, Phase};
//!
//! let clock = ManualClock::new();
//! let images = vec![ImageRef::photo("beach.jpg")];
//! let mut engine = MatchEngine::new(GameConfig::new(1), images, EventLog::new(), clock.clone());
//! engine.start();
//!
//! assert!(engine.flip(0));
//! assert!(engine.flip(1));
//! assert!(engine.resolve());
//!
//! // Nothing is judged until the settle delay has passed.
//! assert!(engine.is_resolving());
//! clock.advance(Duration::from_secs(1));
//! engine.poll();
//!
//! assert_eq!(engine.phase(), Phase::Complete);
//! assert_eq!(engine.listener().events().last(), Some(&MatchEvent::Completed));
//! ```

mod clock;
mod events;
mod layout;
mod match_engine;

pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{EventLog, MatchEvent, MatchListener};
pub use layout::column_layout_hint;
pub use match_engine::{MatchEngine, PendingStep, Phase, StepKind};
