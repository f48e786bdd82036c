//! Deck builder and reconciler properties.
//!
//! Property tests run over arbitrary seeds and sizes:
//! - Every pair id appears on exactly two cards
//! - Reconciliation always returns exactly `required` images
//! - Oversupply yields a subset, undersupply keeps the originals first

use std::collections::HashMap;

use proptest::prelude::*;

use pairflip::core::{DeckRng, FillerImage, ImageRef, PairId};
use pairflip::deck::{build_deck, reconcile, reconcile_plan, Reconciliation};

fn photos(n: usize) -> Vec<ImageRef> {
    (0..n).map(|i| ImageRef::photo(format!("img-{i}"))).collect()
}

proptest! {
    #[test]
    fn prop_every_pair_appears_twice(pairs in 1usize..40, seed in any::<u64>()) {
        let deck = build_deck(&photos(pairs), &mut DeckRng::new(seed));

        prop_assert_eq!(deck.len(), pairs * 2);
        let mut counts: HashMap<PairId, usize> = HashMap::new();
        for card in deck.iter() {
            *counts.entry(card.pair_id).or_default() += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        for pair in 0..pairs {
            prop_assert_eq!(counts.get(&PairId::new(pair as u32)).copied(), Some(2));
        }
    }

    #[test]
    fn prop_reconcile_is_length_exact(available in 0usize..30, required in 0usize..30, seed in any::<u64>()) {
        let out = reconcile(&photos(available), required, &mut DeckRng::new(seed));
        prop_assert_eq!(out.len(), required);
    }

    #[test]
    fn prop_oversupply_is_subset(extra in 1usize..20, required in 1usize..20, seed in any::<u64>()) {
        let input = photos(required + extra);
        let out = reconcile(&input, required, &mut DeckRng::new(seed));

        prop_assert!(out.iter().all(|img| input.contains(img)));
        let mut keys: Vec<String> = out.iter().map(ToString::to_string).collect();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), required);
    }

    #[test]
    fn prop_undersupply_keeps_originals(available in 0usize..15, shortfall in 1usize..20, seed in any::<u64>()) {
        let input = photos(available);
        let out = reconcile(&input, available + shortfall, &mut DeckRng::new(seed));

        prop_assert_eq!(&out[..available], &input[..]);
        prop_assert!(out[available..].iter().all(ImageRef::is_filler));
        prop_assert!(out[available..].iter().all(|img| !input.contains(img)));
    }
}

/// Oversupply: 10 images for 6 pairs.
#[test]
fn test_ten_images_six_pairs() {
    let input = photos(10);
    let out = reconcile(&input, 6, &mut DeckRng::new(42));
    assert_eq!(out.len(), 6);
    assert!(out.iter().all(|img| input.contains(img)));
    assert!(out.iter().all(|img| !img.is_filler()));
}

/// Undersupply: 2 images for 6 pairs.
#[test]
fn test_two_images_six_pairs() {
    let input = photos(2);
    let out = reconcile(&input, 6, &mut DeckRng::new(42));
    assert_eq!(out.len(), 6);
    assert_eq!(out[..2], input[..]);
    assert_eq!(out[2..], FillerImage::generate(4)[..]);
}

/// Sampling keeps duplicates the original list had.
#[test]
fn test_duplicates_in_input_survive_sampling() {
    let input = vec![ImageRef::photo("same"); 8];
    let out = reconcile(&input, 3, &mut DeckRng::new(1));
    assert_eq!(out, vec![ImageRef::photo("same"); 3]);
}

/// Fillers are distinct per index, and cycle colours every fifteen.
#[test]
fn test_many_fillers() {
    let out = reconcile(&[], 20, &mut DeckRng::new(0));
    let fillers: Vec<FillerImage> = out
        .iter()
        .map(|img| match img {
            ImageRef::Filler(f) => *f,
            ImageRef::Photo(_) => panic!("expected filler"),
        })
        .collect();

    assert_eq!(fillers[0].color(), fillers[15].color());
    assert_eq!(fillers[0].label(), fillers[15].label());
    assert_ne!(fillers[0], fillers[15]);
    assert_ne!(fillers[0].to_data_url(), fillers[15].to_data_url());
}

/// The plan matches what reconcile does.
#[test]
fn test_plan_agrees_with_reconcile() {
    assert_eq!(reconcile_plan(6, 6), Reconciliation::Exact);
    assert_eq!(reconcile_plan(10, 6), Reconciliation::Sample { drop: 4 });

    let plan = reconcile_plan(2, 6);
    assert_eq!(plan, Reconciliation::Pad { shortfall: 4 });
    let out = reconcile(&photos(2), 6, &mut DeckRng::new(0));
    assert_eq!(out.iter().filter(|i| i.is_filler()).count(), 4);
}

/// A reconciled list always builds a valid deck.
#[test]
fn test_reconcile_then_build() {
    let mut rng = DeckRng::new(77);
    for available in [0, 3, 6, 9] {
        let images = reconcile(&photos(available), 6, &mut rng);
        let deck = build_deck(&images, &mut rng);
        assert_eq!(deck.len(), 12);
        assert_eq!(deck.pair_count(), 6);
    }
}
