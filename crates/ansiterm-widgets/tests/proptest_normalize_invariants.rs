//! Property-based tests for list box normalization.
//!
//! 1. Output has exactly `length` lines of exactly `width` chars.
//! 2. Normalizing twice equals normalizing once.
//! 3. Surviving content is a prefix of the input, in order.
//! 4. Drawing emits one CUP per row.

use ansiterm_core::geometry::Extent;
use ansiterm_widgets::{StaticListBox, Widget, normalize_lines};
use proptest::prelude::*;

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 éü]{0,30}", 0..20)
}

proptest! {
    #[test]
    fn shape_is_exact(mut lines in lines_strategy(), length in 0u16..15, width in 0u16..25) {
        normalize_lines(&mut lines, length, width);
        prop_assert_eq!(lines.len(), usize::from(length));
        for line in &lines {
            prop_assert_eq!(line.chars().count(), usize::from(width));
        }
    }
}

proptest! {
    #[test]
    fn idempotent(mut lines in lines_strategy(), length in 0u16..15, width in 0u16..25) {
        normalize_lines(&mut lines, length, width);
        let once = lines.clone();
        let changed = normalize_lines(&mut lines, length, width);
        prop_assert!(!changed);
        prop_assert_eq!(once, lines);
    }
}

proptest! {
    #[test]
    fn keeps_leading_content(input in lines_strategy(), length in 0u16..15, width in 0u16..25) {
        let mut lines = input.clone();
        normalize_lines(&mut lines, length, width);
        for (kept, given) in lines.iter().zip(&input) {
            let expected: String = given.chars().take(usize::from(width)).collect();
            prop_assert_eq!(kept.trim_end_matches(' '), expected.trim_end_matches(' '));
        }
    }
}

proptest! {
    #[test]
    fn draw_positions_every_row(input in lines_strategy(), length in 1u16..15, width in 1u16..25) {
        let list_box = StaticListBox::new((1, 1), length, width).with_lines(input);
        let mut out = Vec::new();
        list_box.draw(&mut out, Extent::new(80, 24)).unwrap();
        let drawn = String::from_utf8(out).unwrap();
        // Two SGR sequences for the font, one CUP per row, one reset.
        prop_assert_eq!(drawn.matches("\x1b[").count(), usize::from(length) + 3);
        prop_assert!(drawn.ends_with("\x1b[0m"));
    }
}
