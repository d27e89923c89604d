#![forbid(unsafe_code)]

//! Immutable escape-sequence values.
//!
//! A [`Command`] is one escape sequence (or several, concatenated) whose text
//! is fixed when it is built. Constructors take typed values only, never raw
//! escape fragments. Building a command writes nothing; [`Command::put`] and
//! [`Command::write_to`] are the only paths to an output stream.
//!
//! Commands compose with plain text through ordinary string formatting:
//!
//! ```
//! use ansiterm_render::Command;
//!
//! let reset = Command::reset();
//! assert_eq!(format!("A{reset}B"), "A\x1b[0mB");
//! ```

use std::fmt;
use std::io::{self, Write};

use ansiterm_core::geometry::Position;

use crate::ansi::{self, Direction, EraseRegion};
use crate::font::Font;

/// A fixed, pre-serialized escape sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Command(String);

impl Command {
    /// Relative cursor movement. See [`Movement`] for ordering.
    #[must_use]
    pub fn move_cursor(movement: Movement) -> Self {
        let mut seq = String::new();
        for (direction, distance) in movement.steps() {
            ansi::push_move(&mut seq, direction, distance);
        }
        Self(seq)
    }

    /// Absolute positioning, 1-indexed. Not range-checked.
    #[must_use]
    pub fn goto(row: u16, col: u16) -> Self {
        let mut seq = String::new();
        ansi::push_cup(&mut seq, row, col);
        Self(seq)
    }

    /// Absolute positioning at a resolved position.
    #[must_use]
    pub fn goto_position(position: Position) -> Self {
        Self::goto(position.row, position.col)
    }

    #[must_use]
    pub fn hide_cursor() -> Self {
        Self(ansi::CURSOR_HIDE.to_string())
    }

    #[must_use]
    pub fn show_cursor() -> Self {
        Self(ansi::CURSOR_SHOW.to_string())
    }

    #[must_use]
    pub fn erase_line(region: EraseRegion) -> Self {
        let mut seq = String::new();
        ansi::push_erase_line(&mut seq, region);
        Self(seq)
    }

    #[must_use]
    pub fn erase_screen(region: EraseRegion) -> Self {
        let mut seq = String::new();
        ansi::push_erase_display(&mut seq, region);
        Self(seq)
    }

    /// All attributes off.
    #[must_use]
    pub fn reset() -> Self {
        Self(ansi::SGR_RESET.to_string())
    }

    /// Full font state: both colors and every attribute, on or off.
    #[must_use]
    pub fn font(font: &Font) -> Self {
        let mut seq = String::new();
        ansi::push_font(
            &mut seq,
            font.foreground(),
            font.background(),
            font.attributes(),
        );
        Self(seq)
    }

    /// Append another command after this one.
    #[must_use]
    pub fn then(mut self, next: &Command) -> Self {
        self.0.push_str(&next.0);
        self
    }

    /// Concatenate commands in order.
    #[must_use]
    pub fn concat<I>(commands: I) -> Self
    where
        I: IntoIterator<Item = Command>,
    {
        Self(commands.into_iter().map(|c| c.0).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Write the sequence without flushing.
    ///
    /// # Errors
    ///
    /// Propagates any write error from `out`.
    #[inline]
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.0.as_bytes())
    }

    /// Write the sequence and flush.
    ///
    /// # Errors
    ///
    /// Propagates any write or flush error from `out`.
    pub fn put<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        self.write_to(out)?;
        out.flush()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Command {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Command> for String {
    fn from(command: Command) -> Self {
        command.0
    }
}

/// Requested relative movement, one optional distance per direction.
///
/// Steps are emitted in the fixed order up, down, left, right. Opposing
/// directions are not reconciled: asking for both up and down emits both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Movement {
    pub up: Option<u16>,
    pub down: Option<u16>,
    pub left: Option<u16>,
    pub right: Option<u16>,
}

impl Movement {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            up: None,
            down: None,
            left: None,
            right: None,
        }
    }

    #[must_use]
    pub const fn up(mut self, n: u16) -> Self {
        self.up = Some(n);
        self
    }

    #[must_use]
    pub const fn down(mut self, n: u16) -> Self {
        self.down = Some(n);
        self
    }

    #[must_use]
    pub const fn left(mut self, n: u16) -> Self {
        self.left = Some(n);
        self
    }

    #[must_use]
    pub const fn right(mut self, n: u16) -> Self {
        self.right = Some(n);
        self
    }

    fn steps(self) -> impl Iterator<Item = (Direction, u16)> {
        [
            (Direction::Up, self.up),
            (Direction::Down, self.down),
            (Direction::Left, self.left),
            (Direction::Right, self.right),
        ]
        .into_iter()
        .filter_map(|(direction, distance)| distance.map(|d| (direction, d)))
    }
}
