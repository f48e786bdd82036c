//! Image-set reconciliation.
//!
//! A player can pick any number of photos; a board needs exactly one image
//! per pair. Reconciliation turns the former into the latter:
//!
//! | supplied vs required | result                                           |
//! |----------------------|--------------------------------------------------|
//! | equal                | unchanged, order preserved                       |
//! | more                 | uniform random subset (not the first `required`) |
//! | fewer                | supplied images, then filler tiles appended      |
//!
//! Appended fillers are numbered after any filler already supplied, so a
//! padded list can be padded again without two pairs sharing a face.

use serde::{Deserialize, Serialize};

use crate::core::{DeckRng, FillerImage, ImageRef};

/// How a supplied image list will be reconciled, computed from lengths alone.
///
/// Lets a caller ask the player before padding with fillers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reconciliation {
    /// Already the right size.
    Exact,
    /// Too many images; `drop` of them will be left out.
    Sample { drop: usize },
    /// Too few images; `shortfall` fillers will be appended.
    Pad { shortfall: usize },
}

impl Reconciliation {
    /// Does this plan add filler images?
    #[must_use]
    pub fn needs_fillers(self) -> bool {
        matches!(self, Reconciliation::Pad { .. })
    }
}

/// Classify a reconciliation of `available` images against `required`.
#[must_use]
pub fn reconcile_plan(available: usize, required: usize) -> Reconciliation {
    use std::cmp::Ordering;

    match available.cmp(&required) {
        Ordering::Equal => Reconciliation::Exact,
        Ordering::Greater => Reconciliation::Sample { drop: available - required },
        Ordering::Less => Reconciliation::Pad { shortfall: required - available },
    }
}

/// Resolve `available` to exactly `required` images.
///
/// Never fails. The result length is always `required`.
#[must_use]
pub fn reconcile(available: &[ImageRef], required: usize, rng: &mut DeckRng) -> Vec<ImageRef> {
    match reconcile_plan(available.len(), required) {
        Reconciliation::Exact => available.to_vec(),
        Reconciliation::Sample { drop } => {
            tracing::debug!(available = available.len(), required, drop, "sampling images");
            rng.sample(available, required)
        }
        Reconciliation::Pad { shortfall } => {
            tracing::debug!(available = available.len(), required, shortfall, "padding with fillers");
            // Fillers already in the list keep their faces; new ones follow on.
            let next = available
                .iter()
                .filter_map(|img| match img {
                    ImageRef::Filler(filler) => Some(filler.index() + 1),
                    ImageRef::Photo(_) => None,
                })
                .max()
                .unwrap_or(0);

            let mut images = Vec::with_capacity(required);
            images.extend_from_slice(available);
            images.extend(FillerImage::generate_from(next, shortfall));
            images
        }
    }
}
