#![forbid(unsafe_code)]

//! Font state: colors plus boolean text attributes.
//!
//! A [`Font`] always renders as a *complete* state. Attributes that are not
//! requested are explicitly switched off, so applying a font leaves the
//! terminal fully determined no matter what was written before it.

use std::io::{self, Write};

use crate::ansi;
use crate::color::Color;
use crate::command::Command;

bitflags::bitflags! {
    /// Boolean text attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attributes: u8 {
        const BOLD      = 0b0000_0001;
        const ITALIC    = 0b0000_0010;
        const UNDERLINE = 0b0000_0100;
        const REVERSE   = 0b0000_1000;
        const BLINK     = 0b0001_0000;
    }
}

/// Foreground, background and attribute flags.
///
/// Defaults to the terminal's default colors with every attribute off.
///
/// ```
/// use ansiterm_render::{Color, Font};
///
/// let font = Font::new().fg(Color::Red).bold(true);
/// assert_eq!(font.command().as_str(), "\x1b[31;1;23;24;27;25m\x1b[49m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Font {
    fg: Color,
    bg: Color,
    attrs: Attributes,
}

impl Font {
    /// Default colors, no attributes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            attrs: Attributes::empty(),
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Replace all attribute flags at once.
    #[must_use]
    pub const fn attrs(mut self, attrs: Attributes) -> Self {
        self.attrs = attrs;
        self
    }

    #[must_use]
    pub fn bold(self, on: bool) -> Self {
        self.flag(Attributes::BOLD, on)
    }

    #[must_use]
    pub fn italic(self, on: bool) -> Self {
        self.flag(Attributes::ITALIC, on)
    }

    #[must_use]
    pub fn underline(self, on: bool) -> Self {
        self.flag(Attributes::UNDERLINE, on)
    }

    #[must_use]
    pub fn reverse(self, on: bool) -> Self {
        self.flag(Attributes::REVERSE, on)
    }

    #[must_use]
    pub fn blink(self, on: bool) -> Self {
        self.flag(Attributes::BLINK, on)
    }

    fn flag(mut self, flag: Attributes, on: bool) -> Self {
        self.attrs.set(flag, on);
        self
    }

    pub const fn foreground(&self) -> Color {
        self.fg
    }

    pub const fn background(&self) -> Color {
        self.bg
    }

    pub const fn attributes(&self) -> Attributes {
        self.attrs
    }

    /// The command that applies this font.
    #[must_use]
    pub fn command(&self) -> Command {
        Command::font(self)
    }

    /// Write this font and return a guard that resets all attributes on drop.
    ///
    /// Text written through the guard is rendered in this font.
    ///
    /// # Errors
    ///
    /// Returns an error if the font sequence cannot be written.
    pub fn scoped<'a, W: Write + ?Sized>(&self, out: &'a mut W) -> io::Result<FontGuard<'a, W>> {
        self.command().write_to(out)?;
        Ok(FontGuard { out })
    }
}

/// Resets all attributes when dropped. See [`Font::scoped`].
#[derive(Debug)]
pub struct FontGuard<'a, W: Write + ?Sized> {
    out: &'a mut W,
}

impl<W: Write + ?Sized> Write for FontGuard<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write + ?Sized> Drop for FontGuard<'_, W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(ansi::SGR_RESET.as_bytes());
        let _ = self.out.flush();
    }
}
