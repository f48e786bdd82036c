//! Game session: the glue between image selection, albums and the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::albums::{AlbumError, AlbumId, AlbumStore};
use crate::core::{DeckRng, Difficulty, GameConfig, ImageRef, MatchTiming};
use crate::deck::{reconcile, reconcile_plan, Reconciliation};
use crate::engine::{Clock, EventLog, MatchEngine, MatchListener};

/// Errors from session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The album store refused the operation.
    #[error(transparent)]
    Album(#[from] AlbumError),

    /// The album exists but holds no images.
    #[error("{0} has no images")]
    EmptyAlbum(AlbumId),

    /// The operation needs a game in progress.
    #[error("No game in progress")]
    NoGame,
}

/// Asks the player whether to pad a short selection with filler images.
pub trait ShortfallConsent {
    /// `shortfall` images are missing. Return `true` to pad and start.
    fn allow_fillers(&mut self, shortfall: usize) -> bool;
}

impl<F: FnMut(usize) -> bool> ShortfallConsent for F {
    fn allow_fillers(&mut self, shortfall: usize) -> bool {
        self(shortfall)
    }
}

/// Result of `start_game`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartOutcome {
    /// A new board was dealt.
    Started,
    /// The player declined filler images; nothing changed.
    Declined,
}

/// Selection progress against the current difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStatus {
    /// Images the board needs.
    pub required: usize,
    /// Images currently selected.
    pub selected: usize,
}

impl SelectionStatus {
    /// Enough images to start without fillers.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.selected >= self.required
    }

    /// Images still missing.
    #[must_use]
    pub fn shortfall(&self) -> usize {
        self.required.saturating_sub(self.selected)
    }
}

/// One player's session: difficulty, selected images, albums, current game.
///
/// Owns at most one engine. Starting a new game or returning to the title
/// drops the previous engine, and with it any pending settle step.
pub struct GameSession<S, C, L = EventLog> {
    store: S,
    clock: C,
    timing: MatchTiming,
    difficulty: Difficulty,
    rng: DeckRng,
    selected: Vec<ImageRef>,
    engine: Option<MatchEngine<L, C>>,
}

impl<S, C, L> GameSession<S, C, L>
where
    S: AlbumStore,
    C: Clock + Clone,
    L: MatchListener + Default,
{
    /// Create a session. `seed` drives image sampling and every deal.
    pub fn new(store: S, clock: C, seed: u64) -> Self {
        Self {
            store,
            clock,
            timing: MatchTiming::default(),
            difficulty: Difficulty::default(),
            rng: DeckRng::new(seed).for_context("session"),
            selected: Vec::new(),
            engine: None,
        }
    }

    /// Set the settle delays used by future games.
    #[must_use]
    pub fn with_timing(mut self, timing: MatchTiming) -> Self {
        self.timing = timing;
        self
    }

    // === Selection ===

    /// Current difficulty.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Change the difficulty for the next game.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Replace the selection.
    pub fn select_images(&mut self, images: Vec<ImageRef>) {
        self.selected = images;
    }

    /// Append to the selection.
    pub fn add_images(&mut self, images: impl IntoIterator<Item = ImageRef>) {
        self.selected.extend(images);
    }

    /// Remove one image from the selection. Out-of-range indices are ignored.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageRef> {
        (index < self.selected.len()).then(|| self.selected.remove(index))
    }

    /// Currently selected images.
    #[must_use]
    pub fn selected_images(&self) -> &[ImageRef] {
        &self.selected
    }

    /// How the selection compares to what the board needs.
    #[must_use]
    pub fn selection_status(&self) -> SelectionStatus {
        SelectionStatus {
            required: self.difficulty.pair_count(),
            selected: self.selected.len(),
        }
    }

    /// Load an album as the selection, sampled or padded to fit the board.
    ///
    /// Unlike `start_game`, this pads without asking: the player picked the
    /// album knowing its size.
    pub fn use_album(&mut self, id: AlbumId) -> Result<(), SessionError> {
        let album = self.store.get(id).ok_or(AlbumError::NotFound(id))?;
        if album.images.is_empty() {
            return Err(SessionError::EmptyAlbum(id));
        }

        let required = self.difficulty.pair_count();
        self.selected = reconcile(&album.images, required, &mut self.rng);
        tracing::debug!(%id, required, "album selected");
        Ok(())
    }

    // === Game lifecycle ===

    /// Reconcile the selection and deal a new board.
    ///
    /// If the selection is short, `consent` is asked first; declining
    /// returns `Declined` with the selection and any running game untouched.
    pub fn start_game(&mut self, consent: &mut impl ShortfallConsent) -> StartOutcome {
        let required = self.difficulty.pair_count();
        if let Reconciliation::Pad { shortfall } = reconcile_plan(self.selected.len(), required) {
            if !consent.allow_fillers(shortfall) {
                tracing::info!(shortfall, "filler images declined, game not started");
                return StartOutcome::Declined;
            }
        }

        let images = reconcile(&self.selected, required, &mut self.rng);
        self.selected = images.clone();

        // Drop the old engine before building the new one.
        self.engine = None;
        let config = GameConfig::for_difficulty(self.difficulty)
            .with_timing(self.timing)
            .with_seed(self.rng.fork().seed());
        let mut engine = MatchEngine::new(config, images, L::default(), self.clock.clone());
        engine.start();
        self.engine = Some(engine);

        tracing::info!(difficulty = %self.difficulty, "game started");
        StartOutcome::Started
    }

    /// Reshuffle the current board.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        let engine = self.engine.as_mut().ok_or(SessionError::NoGame)?;
        engine.reset();
        Ok(())
    }

    /// Abandon the current game and clear the selection. Any pending settle
    /// step is discarded.
    ///
    /// Returns whether a game was in progress.
    pub fn return_to_title(&mut self) -> bool {
        self.selected.clear();
        let had_game = self.engine.take().is_some();
        if had_game {
            tracing::info!("game abandoned");
        }
        had_game
    }

    /// Drive the current game's pending step. Returns the steps applied.
    pub fn poll(&mut self) -> usize {
        self.engine.as_mut().map_or(0, MatchEngine::poll)
    }

    /// The current game.
    #[must_use]
    pub fn engine(&self) -> Option<&MatchEngine<L, C>> {
        self.engine.as_ref()
    }

    /// The current game, mutably (to flip and resolve).
    pub fn engine_mut(&mut self) -> Option<&mut MatchEngine<L, C>> {
        self.engine.as_mut()
    }

    // === Albums ===

    /// The album store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The album store, mutably (for create/update/delete).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
