//! The match engine: flip sequencing, pair judgment, completion.
//!
//! ## Round lifecycle
//!
//! ```text
//! Idle --start--> AwaitingFirstFlip --flip--> AwaitingSecondFlip --flip--> AwaitingResolve
//!                        ^                                                      |
//!                        |                                                   resolve
//!                        |                                                      v
//!                        +----------- settle delay elapsed, poll ---------- Resolving
//!                                                  |
//!                                    last pair + completion delay
//!                                                  v
//!                                               Complete
//! ```
//!
//! Settle delays are pending steps checked against an injected `Clock`.
//! At most one step is pending at a time, and `reset()` or dropping the
//! engine discards it.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::clock::Clock;
use super::events::MatchListener;
use super::layout::column_layout_hint;
use crate::core::{Card, DeckRng, GameConfig, ImageRef};
use crate::deck::{build_deck, Deck};

/// Where the engine is in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Constructed, deck not dealt yet.
    Idle,
    /// No card face-up.
    AwaitingFirstFlip,
    /// One card face-up.
    AwaitingSecondFlip,
    /// Two cards face-up, waiting for the host's ready signal.
    AwaitingResolve,
    /// A pair is being judged; no flips until the settle delay passes.
    Resolving,
    /// All pairs found and the completion notification has fired.
    Complete,
}

/// What a pending step will do when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// Mark both cards matched.
    SettleMatch { first: usize, second: usize },
    /// Turn both cards back face-down.
    SettleMismatch { first: usize, second: usize },
    /// Announce completion.
    Complete,
}

/// A scheduled, cancellable transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingStep {
    /// Clock time at which the step becomes due.
    pub due: Duration,
    /// The transition to apply.
    pub kind: StepKind,
}

/// Game state machine for one board.
///
/// The engine owns the deck and is its only writer. `L` receives
/// notifications, `C` supplies time for settle delays.
pub struct MatchEngine<L, C> {
    config: GameConfig,
    images: Vec<ImageRef>,
    rng: DeckRng,
    deck: Deck,
    flipped: SmallVec<[usize; 2]>,
    matched_pairs: usize,
    phase: Phase,
    pending: Option<PendingStep>,
    listener: L,
    clock: C,
}

impl<L: MatchListener, C: Clock> MatchEngine<L, C> {
    /// Create an engine for `images`, one image per pair.
    ///
    /// The engine starts `Idle`; call [`start`](Self::start) to deal.
    ///
    /// # Panics
    ///
    /// If the config has no pairs, or `images.len()` differs from
    /// `config.pair_count`. Reconcile first.
    pub fn new(config: GameConfig, images: Vec<ImageRef>, listener: L, clock: C) -> Self {
        assert!(config.pair_count > 0, "Must have at least 1 pair");
        assert_eq!(
            images.len(),
            config.pair_count,
            "Image count must equal pair count; reconcile the images first"
        );

        let rng = DeckRng::new(config.seed).for_context("deck");
        Self {
            config,
            images,
            rng,
            deck: Deck::default(),
            flipped: SmallVec::new(),
            matched_pairs: 0,
            phase: Phase::Idle,
            pending: None,
            listener,
            clock,
        }
    }

    /// Deal a freshly shuffled deck and wait for the first flip.
    ///
    /// Any pending step is discarded first.
    pub fn start(&mut self) {
        if let Some(step) = self.pending.take() {
            tracing::debug!(kind = ?step.kind, "pending step discarded");
        }
        let mut deal_rng = self.rng.fork();
        self.deck = build_deck(&self.images, &mut deal_rng);
        self.flipped.clear();
        self.matched_pairs = 0;
        self.phase = Phase::AwaitingFirstFlip;
        tracing::info!(pairs = self.config.pair_count, seed = deal_rng.seed(), "deck dealt");
    }

    /// Reshuffle the same images and start over.
    pub fn reset(&mut self) {
        self.start();
    }

    /// Turn a card face-up.
    ///
    /// Returns `false`, changing nothing, when the engine is judging a pair,
    /// two cards are already face-up, `index` is out of range, or the card
    /// is already face-up or matched.
    pub fn flip(&mut self, index: usize) -> bool {
        if !matches!(self.phase, Phase::AwaitingFirstFlip | Phase::AwaitingSecondFlip) {
            return false;
        }
        if self.flipped.len() >= 2 {
            return false;
        }
        let Some(card) = self.deck.get_mut(index) else {
            return false;
        };
        if !card.is_face_down() {
            return false;
        }

        card.flipped = true;
        self.flipped.push(index);
        self.phase = if self.flipped.len() == 2 {
            Phase::AwaitingResolve
        } else {
            Phase::AwaitingSecondFlip
        };

        tracing::debug!(index, face_up = self.flipped.len(), "card flipped");
        self.listener.on_flip(index);
        true
    }

    /// The ready signal: judge the two face-up cards.
    ///
    /// Schedules the match or mismatch step and returns `true`. With zero
    /// delays the step is applied before this returns. Returns `false` when
    /// there is no pair waiting to be judged.
    pub fn resolve(&mut self) -> bool {
        if self.phase != Phase::AwaitingResolve || self.pending.is_some() {
            return false;
        }
        let (first, second) = (self.flipped[0], self.flipped[1]);
        let is_pair = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => return false,
        };

        self.phase = Phase::Resolving;
        let timing = self.config.timing;
        let (delay, kind) = if is_pair {
            (timing.match_delay, StepKind::SettleMatch { first, second })
        } else {
            (timing.mismatch_delay, StepKind::SettleMismatch { first, second })
        };
        tracing::debug!(first, second, is_pair, ?delay, "resolving pair");

        self.pending = Some(PendingStep {
            due: self.clock.now() + delay,
            kind,
        });
        self.poll();
        true
    }

    /// Apply every pending step whose deadline has passed.
    ///
    /// Returns the number of steps applied. A late poll can apply a match
    /// and the completion it schedules in one call.
    pub fn poll(&mut self) -> usize {
        let mut fired = 0;
        while let Some(step) = self.pending {
            if step.due > self.clock.now() {
                break;
            }
            self.pending = None;
            self.apply_step(step);
            fired += 1;
        }
        fired
    }

    /// Discard a pending judgment. Returns whether one was cancelled.
    ///
    /// A cancelled judgment leaves both cards face-up in `AwaitingResolve`,
    /// so `resolve()` can be signalled again. A pending completion is not a
    /// judgment and stays armed; only `start()`/`reset()` drop it.
    pub fn cancel_pending(&mut self) -> bool {
        match self.pending {
            Some(PendingStep { kind: StepKind::Complete, .. }) | None => false,
            Some(step) => {
                self.pending = None;
                tracing::debug!(kind = ?step.kind, "pending step cancelled");
                self.phase = Phase::AwaitingResolve;
                true
            }
        }
    }

    fn apply_step(&mut self, step: PendingStep) {
        match step.kind {
            StepKind::SettleMatch { first, second } => {
                for index in [first, second] {
                    if let Some(card) = self.deck.get_mut(index) {
                        card.matched = true;
                    }
                }
                self.matched_pairs += 1;
                self.flipped.clear();
                self.phase = Phase::AwaitingFirstFlip;
                tracing::debug!(first, second, matched = self.matched_pairs, "pair matched");
                self.listener.on_match(first, second);

                if self.is_complete() {
                    self.pending = Some(PendingStep {
                        due: step.due + self.config.timing.completion_delay,
                        kind: StepKind::Complete,
                    });
                }
            }
            StepKind::SettleMismatch { first, second } => {
                for index in [first, second] {
                    if let Some(card) = self.deck.get_mut(index) {
                        card.flipped = false;
                    }
                }
                self.flipped.clear();
                self.phase = Phase::AwaitingFirstFlip;
                tracing::debug!(first, second, "pair mismatched");
                self.listener.on_mismatch(first, second);
            }
            StepKind::Complete => {
                self.phase = Phase::Complete;
                tracing::info!(pairs = self.config.pair_count, "board complete");
                self.listener.on_complete();
            }
        }
    }

    // === Queries ===

    /// Get a card by board index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.deck.get(index)
    }

    /// Cheap copy of the whole board for rendering.
    #[must_use]
    pub fn deck_snapshot(&self) -> Vector<Card> {
        self.deck.snapshot()
    }

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Indices of face-up, unjudged cards in flip order.
    #[must_use]
    pub fn flipped_indices(&self) -> &[usize] {
        &self.flipped
    }

    /// Pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.config.pair_count
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Is a pair being judged?
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        self.phase == Phase::Resolving
    }

    /// Have all pairs been found?
    ///
    /// Becomes true as soon as the last match settles; the `Complete` phase
    /// follows after the completion delay.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase != Phase::Idle && self.matched_pairs == self.config.pair_count
    }

    /// The pending step, if any.
    #[must_use]
    pub fn pending(&self) -> Option<PendingStep> {
        self.pending
    }

    /// When the host should next call `poll()`.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.map(|step| step.due)
    }

    /// Suggested grid width for this board.
    #[must_use]
    pub fn column_count(&self) -> usize {
        column_layout_hint(self.config.pair_count)
    }

    /// The images the deck is dealt from.
    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The notification listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the listener, e.g. to drain an `EventLog`.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

impl<L, C> std::fmt::Debug for MatchEngine<L, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("pair_count", &self.config.pair_count)
            .field("phase", &self.phase)
            .field("flipped", &self.flipped)
            .field("matched_pairs", &self.matched_pairs)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
