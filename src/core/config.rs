//! Game configuration types.
//!
//! - `MatchTiming`: settle delays between the ready signal and judgment
//! - `Difficulty`: the board sizes offered to players
//! - `GameConfig`: pair count, timing and seed for one engine

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settle delays used by the match engine.
///
/// These are pacing values, not correctness values. The mismatch delay is
/// longer by default so the player can memorise both faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTiming {
    /// Pause before a matching pair is marked matched.
    pub match_delay: Duration,

    /// Pause before a mismatched pair is turned back face-down.
    pub mismatch_delay: Duration,

    /// Pause between the final match and the completion notification.
    pub completion_delay: Duration,
}

impl Default for MatchTiming {
    fn default() -> Self {
        Self {
            match_delay: Duration::from_millis(400),
            mismatch_delay: Duration::from_millis(800),
            completion_delay: Duration::from_millis(600),
        }
    }
}

impl MatchTiming {
    /// All delays zero: `resolve()` judges the pair synchronously.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            match_delay: Duration::ZERO,
            mismatch_delay: Duration::ZERO,
            completion_delay: Duration::ZERO,
        }
    }

    /// Set the match delay.
    #[must_use]
    pub fn with_match_delay(mut self, delay: Duration) -> Self {
        self.match_delay = delay;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    /// Set the completion delay.
    #[must_use]
    pub fn with_completion_delay(mut self, delay: Duration) -> Self {
        self.completion_delay = delay;
        self
    }
}

/// Board sizes offered to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// 6 cards.
    #[default]
    Easy,
    /// 12 cards.
    Medium,
    /// 20 cards.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Number of cards on the board.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Medium => 12,
            Difficulty::Hard => 20,
        }
    }

    /// Number of pairs, which is also the number of images required.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        self.card_count() / 2
    }

    /// Star rating shown next to the difficulty.
    #[must_use]
    pub const fn stars(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// The next difficulty to the right, wrapping from `Hard` to `Easy`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Medium,
            Difficulty::Medium => Difficulty::Hard,
            Difficulty::Hard => Difficulty::Easy,
        }
    }

    /// The next difficulty to the left, wrapping from `Easy` to `Hard`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Difficulty::Easy => Difficulty::Hard,
            Difficulty::Medium => Difficulty::Easy,
            Difficulty::Hard => Difficulty::Medium,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{name} ({} cards)", self.card_count())
    }
}

/// Complete configuration for one match engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of pairs on the board (at least 1).
    pub pair_count: usize,

    /// Settle delays.
    pub timing: MatchTiming,

    /// Seed for deck shuffling. Same seed, same deals.
    pub seed: u64,
}

impl GameConfig {
    /// Create a configuration for `pair_count` pairs with default timing.
    pub fn new(pair_count: usize) -> Self {
        assert!(pair_count > 0, "Must have at least 1 pair");

        Self {
            pair_count,
            timing: MatchTiming::default(),
            seed: 42,
        }
    }

    /// Create a configuration for a difficulty.
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.pair_count())
    }

    /// Set the settle delays.
    #[must_use]
    pub fn with_timing(mut self, timing: MatchTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }
}
