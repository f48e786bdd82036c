//! Engine notifications.
//!
//! The engine calls its `MatchListener` synchronously at the moment each
//! transition is applied. Listeners cannot call back into the engine.

use serde::{Deserialize, Serialize};

/// Receives engine notifications. Every method defaults to a no-op.
pub trait MatchListener {
    /// A card was turned face-up.
    fn on_flip(&mut self, _index: usize) {}

    /// Two face-up cards were judged a pair and marked matched.
    fn on_match(&mut self, _first: usize, _second: usize) {}

    /// Two face-up cards were judged different and turned back down.
    fn on_mismatch(&mut self, _first: usize, _second: usize) {}

    /// Every pair has been found.
    fn on_complete(&mut self) {}
}

/// Ignores every notification.
impl MatchListener for () {}

/// A notification as data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchEvent {
    /// `on_flip(index)`
    Flipped(usize),
    /// `on_match(first, second)`
    Matched(usize, usize),
    /// `on_mismatch(first, second)`
    Mismatched(usize, usize),
    /// `on_complete()`
    Completed,
}

/// Records notifications in order, for hosts that prefer to drain a queue.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<MatchEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Take all recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<MatchEvent> {
        std::mem::take(&mut self.events)
    }

    /// Count events matching a predicate.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&MatchEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl MatchListener for EventLog {
    fn on_flip(&mut self, index: usize) {
        self.events.push(MatchEvent::Flipped(index));
    }

    fn on_match(&mut self, first: usize, second: usize) {
        self.events.push(MatchEvent::Matched(first, second));
    }

    fn on_mismatch(&mut self, first: usize, second: usize) {
        self.events.push(MatchEvent::Mismatched(first, second));
    }

    fn on_complete(&mut self) {
        self.events.push(MatchEvent::Completed);
    }
}
