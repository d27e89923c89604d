#![forbid(unsafe_code)]

//! Widgets: positioned, drawable units.
//!
//! There are exactly two kinds, [`Label`] and [`StaticListBox`]. Both draw
//! straight to an output stream: they position the cursor themselves, set
//! and reset their own attributes, and flush once at the end of `draw`.
//! No widget assumes anything about the terminal state left by the previous
//! writer.

pub mod label;
pub mod list_box;

pub use label::Label;
pub use list_box::{StaticListBox, normalize_lines};

use std::io::{self, Write};

use ansiterm_core::geometry::{Extent, Origin};

/// A positioned unit that can draw itself.
pub trait Widget {
    /// Anchor of the widget's top-left cell. May be negative.
    fn origin(&self) -> Origin;

    /// Emit positioning, attributes and content to `out`.
    ///
    /// Negative origins are resolved against `extent` here, at draw time.
    ///
    /// # Errors
    ///
    /// Propagates any write or flush error from `out`.
    fn draw(&self, out: &mut dyn Write, extent: Extent) -> io::Result<()>;
}

/// Either widget kind, for storage in a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyWidget {
    Label(Label),
    ListBox(StaticListBox),
}

impl AnyWidget {
    pub fn as_label(&self) -> Option<&Label> {
        match self {
            Self::Label(label) => Some(label),
            Self::ListBox(_) => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            Self::Label(label) => Some(label),
            Self::ListBox(_) => None,
        }
    }

    pub fn as_list_box(&self) -> Option<&StaticListBox> {
        match self {
            Self::ListBox(list_box) => Some(list_box),
            Self::Label(_) => None,
        }
    }

    pub fn as_list_box_mut(&mut self) -> Option<&mut StaticListBox> {
        match self {
            Self::ListBox(list_box) => Some(list_box),
            Self::Label(_) => None,
        }
    }
}

impl Widget for AnyWidget {
    fn origin(&self) -> Origin {
        match self {
            Self::Label(label) => label.origin(),
            Self::ListBox(list_box) => list_box.origin(),
        }
    }

    fn draw(&self, out: &mut dyn Write, extent: Extent) -> io::Result<()> {
        match self {
            Self::Label(label) => label.draw(out, extent),
            Self::ListBox(list_box) => list_box.draw(out, extent),
        }
    }
}

impl From<Label> for AnyWidget {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<StaticListBox> for AnyWidget {
    fn from(list_box: StaticListBox) -> Self {
        Self::ListBox(list_box)
    }
}
