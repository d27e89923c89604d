#![forbid(unsafe_code)]

//! Full-width `=` banner lines.

use ansiterm_render::{Color, Font};

/// Center `text` in a line of `=` that is `cols` characters wide.
///
/// The text gets one space of padding on each side and is styled bold green;
/// the line ends by switching back to the default font. Any extra `=` from
/// an odd split goes on the right. Text wider than `cols` is returned
/// unpadded. Nothing is written.
///
/// ```
/// let line = ansiterm::banner("hi", 20);
/// assert!(line.contains("======== hi ========"));
/// ```
#[must_use]
pub fn banner(text: &str, cols: u16) -> String {
    let cols = usize::from(cols);
    let padded = format!(" {text} ");
    let left = cols.saturating_sub(padded.chars().count()) / 2;
    let right = cols.saturating_sub(left + padded.chars().count());
    format!(
        "{}{}{padded}{}{}",
        Font::new().fg(Color::Green).bold(true).command(),
        "=".repeat(left),
        "=".repeat(right),
        Font::new().command(),
    )
}
