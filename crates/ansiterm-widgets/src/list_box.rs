#![forbid(unsafe_code)]

//! Fixed-size box of text lines.
//!
//! # Invariant
//!
//! The stored lines always number exactly `length`, and each is exactly
//! `width` characters. [`normalize_lines`] restores this after every
//! mutation:
//!
//! 1. pad with empty lines up to `length`,
//! 2. keep only the first `length` lines,
//! 3. right-pad each line with spaces and cut it to `width` characters.
//!
//! Widths count `char`s, not display columns.
//!
//! The box has no scrolling of its own. To scroll, edit the lines (drop the
//! first, push a new last) through [`StaticListBox::edit_lines`] and draw
//! again.

use std::io::{self, Write};

use ansiterm_core::geometry::{Extent, Origin};
use ansiterm_render::{Color, Command, Font};

use crate::Widget;

/// A `length` x `width` block of text lines drawn on a solid background.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticListBox {
    origin: Origin,
    length: u16,
    width: u16,
    lines: Vec<String>,
    foreground: Color,
    background: Color,
}

impl StaticListBox {
    /// An empty box: `length` lines of `width` spaces, green on default.
    pub fn new(origin: impl Into<Origin>, length: u16, width: u16) -> Self {
        let mut list_box = Self {
            origin: origin.into(),
            length,
            width,
            lines: Vec::new(),
            foreground: Color::Green,
            background: Color::Default,
        };
        list_box.normalize();
        list_box
    }

    /// Replace the initial lines.
    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_lines(lines);
        self
    }

    #[must_use]
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    #[must_use]
    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    /// The normalized lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace all lines, then normalize.
    pub fn set_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self.normalize();
    }

    /// Mutate the lines in place, then normalize.
    ///
    /// ```
    /// use ansiterm_widgets::StaticListBox;
    ///
    /// let mut log = StaticListBox::new((1, 1), 2, 4).with_lines(["a", "b"]);
    /// log.edit_lines(|lines| {
    ///     lines.remove(0);
    ///     lines.push("c".into());
    /// });
    /// assert_eq!(log.lines(), ["b   ", "c   "]);
    /// ```
    pub fn edit_lines<R>(&mut self, edit: impl FnOnce(&mut Vec<String>) -> R) -> R {
        let result = edit(&mut self.lines);
        self.normalize();
        result
    }

    fn normalize(&mut self) {
        if normalize_lines(&mut self.lines, self.length, self.width) {
            ansiterm_core::trace!(
                length = self.length,
                width = self.width,
                "list box lines normalized"
            );
        }
    }

    fn font(&self) -> Font {
        Font::new().fg(self.foreground).bg(self.background)
    }
}

impl Widget for StaticListBox {
    fn origin(&self) -> Origin {
        self.origin
    }

    fn draw(&self, out: &mut dyn Write, extent: Extent) -> io::Result<()> {
        let top_left = extent.resolve(self.origin);
        self.font().command().write_to(out)?;
        for (offset, line) in (0u16..).zip(&self.lines) {
            Command::goto_position(top_left.down(offset)).write_to(out)?;
            out.write_all(line.as_bytes())?;
        }
        Command::reset().write_to(out)?;
        out.flush()
    }
}

/// Force `lines` to exactly `length` entries of exactly `width` chars.
///
/// Returns `true` if anything had to change. Idempotent.
pub fn normalize_lines(lines: &mut Vec<String>, length: u16, width: u16) -> bool {
    let length = usize::from(length);
    let width = usize::from(width);
    let mut changed = lines.len() != length;
    lines.resize(length, String::new());
    for line in lines.iter_mut() {
        if line.chars().count() != width {
            *line = fit_width(line, width);
            changed = true;
        }
    }
    changed
}

fn fit_width(line: &str, width: usize) -> String {
    line.chars()
        .chain(std::iter::repeat(' '))
        .take(width)
        .collect()
}
