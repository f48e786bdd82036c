//! Match engine tests.
//!
//! These tests play whole boards through the public API:
//! - Flip sequencing and rejection rules
//! - Match, mismatch and completion notifications
//! - Settle windows driven by a manual clock
//! - Reset and cancellation

use std::time::Duration;

use pairflip::core::{GameConfig, ImageRef, MatchTiming, PairId};
use pairflip::engine::{EventLog, ManualClock, MatchEngine, MatchEvent, MatchListener, Phase};

type Engine = MatchEngine<EventLog, ManualClock>;

fn photos(n: usize) -> Vec<ImageRef> {
    (0..n).map(|i| ImageRef::photo(format!("photo-{i}.jpg"))).collect()
}

fn started(pairs: usize, timing: MatchTiming, seed: u64) -> (Engine, ManualClock) {
    let clock = ManualClock::new();
    let config = GameConfig::new(pairs).with_timing(timing).with_seed(seed);
    let mut engine = MatchEngine::new(config, photos(pairs), EventLog::new(), clock.clone());
    engine.start();
    (engine, clock)
}

/// Find the other card of the pair at `index`.
fn partner(engine: &Engine, index: usize) -> usize {
    engine.deck().partner_of(index).expect("every card has a partner")
}

/// Find a card that does not pair with `index`.
fn stranger(engine: &Engine, index: usize) -> usize {
    let pair = engine.card(index).unwrap().pair_id;
    (0..engine.deck().len())
        .find(|&i| engine.card(i).unwrap().pair_id != pair)
        .expect("board has more than one pair")
}

/// Play a perfect game: every round is a match.
#[test]
fn test_perfect_game() {
    let (mut engine, clock) = started(6, MatchTiming::default(), 7);

    for pair in 0..6u32 {
        let pos = engine.deck().positions_of(PairId::new(pair));
        assert!(engine.flip(pos[0]));
        assert!(engine.flip(pos[1]));
        assert!(engine.resolve());
        clock.advance(Duration::from_millis(400));
        engine.poll();
        assert_eq!(engine.matched_pairs(), pair as usize + 1);
    }

    assert!(engine.is_complete());
    assert_ne!(engine.phase(), Phase::Complete);
    clock.advance(Duration::from_millis(600));
    engine.poll();
    assert_eq!(engine.phase(), Phase::Complete);

    let log = engine.listener();
    assert_eq!(log.count(|e| matches!(e, MatchEvent::Flipped(_))), 12);
    assert_eq!(log.count(|e| matches!(e, MatchEvent::Matched(..))), 6);
    assert_eq!(log.count(|e| matches!(e, MatchEvent::Mismatched(..))), 0);
    assert_eq!(log.count(|e| *e == MatchEvent::Completed), 1);
    assert!(engine.deck().iter().all(|c| c.matched));
}

/// A full match round on positions 0 and 1 of a one-pair board.
#[test]
fn test_full_round_match() {
    let (mut engine, clock) = started(1, MatchTiming::default(), 1);
    assert_eq!(engine.card(0).unwrap().pair_id, engine.card(1).unwrap().pair_id);

    engine.flip(0);
    engine.flip(1);
    engine.resolve();
    clock.advance(Duration::from_millis(400));
    engine.poll();

    assert!(engine.card(0).unwrap().matched);
    assert!(engine.card(1).unwrap().matched);
    assert!(engine.flipped_indices().is_empty());
    assert_eq!(
        engine.listener().count(|e| *e == MatchEvent::Matched(0, 1)),
        1
    );
}

/// A full mismatch round.
#[test]
fn test_full_round_mismatch() {
    let (mut engine, clock) = started(4, MatchTiming::default(), 3);
    let k = stranger(&engine, 0);

    engine.flip(0);
    engine.flip(k);
    engine.resolve();
    clock.advance(Duration::from_millis(800));
    engine.poll();

    for index in [0, k] {
        let card = engine.card(index).unwrap();
        assert!(!card.flipped);
        assert!(!card.matched);
    }
    assert_eq!(
        engine.listener().events().last(),
        Some(&MatchEvent::Mismatched(0, k))
    );
    assert_eq!(engine.phase(), Phase::AwaitingFirstFlip);
}

/// Completion fires exactly once on a one-pair board.
#[test]
fn test_single_pair_completion() {
    let (mut engine, _) = started(1, MatchTiming::instant(), 5);
    engine.flip(0);
    engine.flip(1);
    engine.resolve();

    assert_eq!(engine.phase(), Phase::Complete);
    assert_eq!(engine.listener().count(|e| *e == MatchEvent::Completed), 1);

    // Nothing left to do: further calls are rejected and fire nothing.
    assert!(!engine.flip(0));
    assert!(!engine.resolve());
    assert_eq!(engine.poll(), 0);
    assert_eq!(engine.listener().count(|e| *e == MatchEvent::Completed), 1);
}

/// No flip is accepted between the second flip and the end of judgment.
#[test]
fn test_settle_window_blocks_flips() {
    let (mut engine, clock) = started(3, MatchTiming::default(), 9);
    let k = stranger(&engine, 0);
    let free = (0..6).find(|&i| i != 0 && i != k).unwrap();

    engine.flip(0);
    engine.flip(k);
    assert!(!engine.flip(free), "rejected while awaiting the ready signal");

    engine.resolve();
    for _ in 0..7 {
        clock.advance(Duration::from_millis(100));
        engine.poll();
        assert!(engine.is_resolving());
        assert!(!engine.flip(free), "rejected while resolving");
    }

    clock.advance(Duration::from_millis(100));
    engine.poll();
    assert!(!engine.is_resolving());
    assert!(engine.flip(free));
}

/// Mismatch waits longer than match with default timing.
#[test]
fn test_mismatch_settles_after_match_delay() {
    let (mut engine, clock) = started(3, MatchTiming::default(), 2);
    let k = stranger(&engine, 0);
    engine.flip(0);
    engine.flip(k);
    engine.resolve();

    clock.advance(Duration::from_millis(400));
    assert_eq!(engine.poll(), 0);
    assert!(engine.card(0).unwrap().flipped);
}

/// Rejected flips never emit notifications.
#[test]
fn test_rejections_are_silent() {
    let (mut engine, _) = started(2, MatchTiming::default(), 4);
    engine.flip(0);
    let before = engine.listener().events().len();

    assert!(!engine.flip(0));
    assert!(!engine.flip(100));
    engine.flip(partner(&engine, 0));
    assert!(!engine.flip(stranger(&engine, 0)));

    assert_eq!(engine.listener().events().len(), before + 1);
}

/// Reset mid-judgment: the stale step never touches the new deck.
#[test]
fn test_reset_during_settle_window() {
    let (mut engine, clock) = started(3, MatchTiming::default(), 6);
    let p = partner(&engine, 0);
    engine.flip(0);
    engine.flip(p);
    engine.resolve();

    clock.advance(Duration::from_millis(200));
    engine.reset();
    clock.advance(Duration::from_millis(1000));
    assert_eq!(engine.poll(), 0);

    assert_eq!(engine.matched_pairs(), 0);
    assert!(engine.deck().iter().all(|c| !c.flipped && !c.matched));
    assert!(engine.next_deadline().is_none());
}

/// Two engines with the same seed deal the same sequence of boards.
#[test]
fn test_deterministic_replay() {
    let (mut a, _) = started(5, MatchTiming::instant(), 1234);
    let (mut b, _) = started(5, MatchTiming::instant(), 1234);
    assert_eq!(a.deck_snapshot(), b.deck_snapshot());

    a.reset();
    b.reset();
    assert_eq!(a.deck_snapshot(), b.deck_snapshot());
}

/// A custom listener sees notifications in order.
#[test]
fn test_custom_listener() {
    #[derive(Default)]
    struct Score {
        matches: u32,
        misses: u32,
        done: bool,
    }

    impl MatchListener for Score {
        fn on_match(&mut self, _: usize, _: usize) {
            self.matches += 1;
        }
        fn on_mismatch(&mut self, _: usize, _: usize) {
            self.misses += 1;
        }
        fn on_complete(&mut self) {
            self.done = true;
        }
    }

    let clock = ManualClock::new();
    let config = GameConfig::new(2).with_timing(MatchTiming::instant());
    let mut engine = MatchEngine::new(config, photos(2), Score::default(), clock);
    engine.start();

    let k = (1..4)
        .find(|&i| !engine.card(i).unwrap().pairs_with(engine.card(0).unwrap()))
        .unwrap();
    engine.flip(0);
    engine.flip(k);
    engine.resolve();

    for pair in 0..2u32 {
        let pos = engine.deck().positions_of(PairId::new(pair));
        engine.flip(pos[0]);
        engine.flip(pos[1]);
        engine.resolve();
    }

    let score = engine.listener();
    assert_eq!(score.misses, 1);
    assert_eq!(score.matches, 2);
    assert!(score.done);
}

/// The renderer snapshot does not change under the reader.
#[test]
fn test_snapshot_is_stable() {
    let (mut engine, _) = started(2, MatchTiming::default(), 8);
    let before = engine.deck_snapshot();
    engine.flip(0);
    assert!(!before[0].flipped);
    assert!(engine.deck_snapshot()[0].flipped);
}
