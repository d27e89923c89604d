//! End-to-end screen scenarios: drawing, scrolling, and release on every
//! exit path.

use std::io::{self, Write};
use std::panic::{AssertUnwindSafe, catch_unwind};

use ansiterm::{AnyWidget, Color, Extent, Label, Screen, StaticListBox};
use proptest::prelude::*;

const RELEASE: &str = "\x1b[0m\x1b[?25h\x1b[24;1H";

fn extent() -> Extent {
    Extent::new(80, 24)
}

/// Writer that fails on its `fail_at`-th write call (0-based) and accepts
/// everything else.
struct FlakyWriter {
    data: Vec<u8>,
    writes: usize,
    fail_at: usize,
}

impl FlakyWriter {
    fn failing_at(fail_at: usize) -> Self {
        Self {
            data: Vec::new(),
            writes: 0,
            fail_at,
        }
    }

    fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }
}

impl Write for FlakyWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.writes;
        self.writes += 1;
        if n == self.fail_at {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "injected"));
        }
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Remove `ESC [ ... m` sequences.
fn strip_sgr(s: &str) -> String {
    let mut out = String::new();
    let mut rest = s;
    while let Some(start) = rest.find("\x1b[") {
        out.push_str(&rest[..start]);
        let after = &rest[start..];
        let end = after.find('m').map_or(after.len(), |i| i + 1);
        rest = &after[end..];
    }
    out.push_str(rest);
    out
}

// ============================================================================
// Drawing
// ============================================================================

#[test]
fn label_and_list_box_scenario() {
    let seed = [
        "big",
        "pigs",
        "oversized",
        "hat",
        "with",
        "too",
        "many",
        "lines",
    ];
    let mut out = Vec::new();
    {
        let mut screen = Screen::new(&mut out, extent()).unwrap();
        screen.add_widget(Label::new((3, 2), "hello")).unwrap();
        let id = screen
            .add_widget(
                StaticListBox::new((7, 33), 7, 12)
                    .with_lines(seed)
                    .with_background(Color::Blue),
            )
            .unwrap();

        let lines = screen.widget(id).and_then(AnyWidget::as_list_box).unwrap().lines();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|l| l.chars().count() == 12));
        assert_eq!(lines[0], "big         ");
        assert_eq!(lines[6], "many        ");
    }

    let out = String::from_utf8(out).unwrap();
    let last_frame = &out[out.rfind("\x1b[2J").unwrap()..];
    assert!(last_frame.starts_with("\x1b[2J\x1b[3;2H\x1b[0mhello"));
    assert!(last_frame.contains("\x1b[32;22;23;24;27;25m\x1b[44m"));
    assert!(last_frame.contains("\x1b[7;33Hbig         "));
    assert!(last_frame.contains("\x1b[13;33Hmany        "));
    assert!(!last_frame.contains("lines"));
    assert!(out.ends_with(RELEASE));
}

#[test]
fn scrolling_by_editing_lines() {
    let mut out = Vec::new();
    {
        let mut screen = Screen::new(&mut out, extent()).unwrap();
        let id = screen
            .add_widget(StaticListBox::new((1, 1), 3, 8).with_lines(["a", "b", "c"]))
            .unwrap();
        for i in 0..3 {
            screen.list_box_mut(id).unwrap().edit_lines(|lines| {
                lines.remove(0);
                lines.push(format!("and a {i}"));
            });
            screen.refresh().unwrap();
        }
        assert_eq!(
            screen.widget(id).and_then(AnyWidget::as_list_box).unwrap().lines(),
            ["and a 0 ", "and a 1 ", "and a 2 "]
        );
    }
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("\x1b[2J").count(), 4);
}

#[test]
fn negative_origin_anchors_to_bottom_right() {
    let mut out = Vec::new();
    {
        let mut screen = Screen::new(&mut out, extent()).unwrap();
        screen.add_widget(Label::new((-1, -1), "!")).unwrap();
    }
    assert!(String::from_utf8(out).unwrap().contains("\x1b[24;80H\x1b[0m!"));
}

// ============================================================================
// Release
// ============================================================================

#[test]
fn release_on_normal_scope_exit() {
    let mut out = Vec::new();
    {
        let mut screen = Screen::new(&mut out, extent()).unwrap();
        screen.refresh().unwrap();
    }
    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with(RELEASE));
    assert_eq!(out.matches(RELEASE).count(), 1);
}

#[test]
fn release_on_panic_in_body() {
    let mut out = Vec::new();
    let result: std::thread::Result<()> = catch_unwind(AssertUnwindSafe(|| {
        let mut screen = Screen::new(&mut out, extent()).unwrap();
        screen.add_widget(Label::new((2, 2), "working")).unwrap();
        panic!("body failed mid-use");
    }));
    assert!(result.is_err());

    let out = String::from_utf8(out).unwrap();
    assert!(out.ends_with(RELEASE));
    assert_eq!(out.matches(RELEASE).count(), 1);
}

#[test]
fn release_after_write_failure_mid_refresh() {
    fn body(out: &mut FlakyWriter) -> io::Result<()> {
        let mut screen = Screen::new(out, extent())?;
        screen.add_widget(Label::new((1, 1), "a"))?;
        screen.add_widget(Label::new((2, 1), "b"))?;
        Ok(())
    }

    // Writes: hide, [erase, goto, reset, text], [erase, goto, reset, ...]
    let mut out = FlakyWriter::failing_at(6);
    let err = body(&mut out).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    assert!(out.text().ends_with(RELEASE));
}

#[test]
fn finish_reports_release_failure() {
    let mut out = FlakyWriter::failing_at(1);
    let screen = Screen::new(&mut out, extent()).unwrap();
    let err = screen.finish().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    // Not retried on drop.
    assert_eq!(out.text(), "\x1b[?25l");
}

#[test]
fn failed_construction_writes_nothing_else() {
    let mut out = FlakyWriter::failing_at(0);
    assert!(Screen::new(&mut out, extent()).is_err());
    assert!(out.text().is_empty());
}

// ============================================================================
// Banner
// ============================================================================

#[test]
fn banner_visible_width_matches_viewport() {
    let mut out = Vec::new();
    let screen = Screen::new(&mut out, Extent::new(20, 5)).unwrap();
    let line = screen.banner("hi");
    assert_eq!(strip_sgr(&line), "======== hi ========");
    assert_eq!(strip_sgr(&line).chars().count(), 20);
}

proptest! {
    #[test]
    fn banner_fills_viewport(text in "[a-z ]{0,20}", cols in 0u16..200) {
        let visible = strip_sgr(&ansiterm::banner(&text, cols));
        let padded = text.chars().count() + 2;
        prop_assert_eq!(visible.chars().count(), usize::from(cols).max(padded));
        let centered = format!(" {text} ");
        prop_assert!(visible.contains(&centered));
    }
}
