//! Property-based invariant tests for origin resolution.
//!
//! 1. Resolved coordinates always lie in `[1, extent]` for non-empty extents.
//! 2. `-k` and `extent - k + 1` resolve to the same cell when in range.
//! 3. Positive in-range coordinates resolve to themselves.
//! 4. No panics on extreme values.

use ansiterm_core::geometry::{Extent, Origin, Position, resolve_axis};
use proptest::prelude::*;

fn extent_strategy() -> impl Strategy<Value = Extent> {
    (1u16..=500, 1u16..=500).prop_map(|(cols, lines)| Extent::new(cols, lines))
}

proptest! {
    #[test]
    fn resolved_is_within_extent(
        extent in extent_strategy(),
        row in -1000i32..=1000,
        col in -1000i32..=1000,
    ) {
        let pos = extent.resolve(Origin::new(row, col));
        prop_assert!(pos.row >= 1 && pos.row <= extent.lines, "row {} outside 1..={}", pos.row, extent.lines);
        prop_assert!(pos.col >= 1 && pos.col <= extent.cols, "col {} outside 1..={}", pos.col, extent.cols);
    }
}

proptest! {
    #[test]
    fn negative_mirrors_positive(extent in 1u16..=500, k in 1u16..=500) {
        prop_assume!(k <= extent);
        prop_assert_eq!(
            resolve_axis(-i32::from(k), extent),
            extent - k + 1
        );
    }
}

proptest! {
    #[test]
    fn positive_in_range_is_identity(extent in extent_strategy(), row in 1u16..=500, col in 1u16..=500) {
        prop_assume!(row <= extent.lines && col <= extent.cols);
        prop_assert_eq!(
            extent.resolve(Origin::new(i32::from(row), i32::from(col))),
            Position::new(row, col)
        );
    }
}

proptest! {
    #[test]
    fn never_panics(value in any::<i32>(), extent in any::<u16>()) {
        let resolved = resolve_axis(value, extent);
        prop_assert!(resolved >= 1);
        prop_assert!(resolved <= extent.max(1));
    }
}
