#![forbid(unsafe_code)]

//! Single-line text label.

use std::io::{self, Write};

use ansiterm_core::geometry::{Extent, Origin};
use ansiterm_render::Command;

use crate::Widget;

/// A single line of text at a fixed origin.
///
/// The text is written as-is: it may embed font commands, and it is neither
/// wrapped nor clipped. Text longer than the remaining columns runs into
/// whatever cells the terminal puts it in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Label {
    origin: Origin,
    text: String,
}

impl Label {
    pub fn new(origin: impl Into<Origin>, text: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_origin(&mut self, origin: impl Into<Origin>) {
        self.origin = origin.into();
    }
}

impl Widget for Label {
    fn origin(&self) -> Origin {
        self.origin
    }

    fn draw(&self, out: &mut dyn Write, extent: Extent) -> io::Result<()> {
        Command::goto_position(extent.resolve(self.origin)).write_to(out)?;
        Command::reset().write_to(out)?;
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}
