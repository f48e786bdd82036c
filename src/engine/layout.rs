//! Grid layout hint.

/// Suggested number of grid columns for a board with `pair_count` pairs.
///
/// Up to 3 pairs: 2 columns. Up to 6 pairs: 3 columns. Otherwise 4.
#[must_use]
pub const fn column_layout_hint(pair_count: usize) -> usize {
    if pair_count <= 3 {
        2
    } else if pair_count <= 6 {
        3
    } else {
        4
    }
}
