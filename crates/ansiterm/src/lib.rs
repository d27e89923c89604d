#![forbid(unsafe_code)]

//! ansiterm public facade.
//!
//! Simple multi-line terminal output for console programs: progress lines,
//! status boxes, and banners drawn with plain ANSI escape sequences, without
//! a full TUI framework.
//!
//! ```no_run
//! use ansiterm::prelude::*;
//!
//! fn main() -> ansiterm::Result<()> {
//!     let mut screen = Screen::stdout()?;
//!     let title = screen.banner("status");
//!     screen.add_widget(Label::new((1, 1), title))?;
//!     let log = screen.add_widget(
//!         StaticListBox::new((3, 2), 5, 30).with_background(Color::Blue),
//!     )?;
//!     for i in 0..10 {
//!         if let Some(list_box) = screen.list_box_mut(log) {
//!             list_box.edit_lines(|lines| {
//!                 lines.remove(0);
//!                 lines.push(format!("step {i}"));
//!             });
//!         }
//!         screen.refresh()?;
//!     }
//!     screen.finish()?;
//!     Ok(())
//! }
//! ```

use std::fmt;

pub mod banner;
pub mod screen;

pub use banner::banner;
pub use screen::{Screen, ScreenOptions, WidgetId};

// --- Re-exports ------------------------------------------------------------

pub use ansiterm_core::geometry::{Extent, Origin, Position};
pub use ansiterm_render::{
    Attributes, Color, Command, EraseRegion, Font, FontGuard, Movement, ParseColorError,
};
pub use ansiterm_widgets::{AnyWidget, Label, StaticListBox, Widget};

pub use ansiterm_core as core;
pub use ansiterm_render as render;
pub use ansiterm_widgets as widgets;

// --- Errors ---------------------------------------------------------------

/// Top-level error type.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while writing to the output stream or querying the terminal.
    Io(std::io::Error),
    /// The viewport extent is unusable.
    Viewport(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Viewport(msg) => write!(f, "viewport: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Viewport(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for ansiterm APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AnyWidget, Color, Command, EraseRegion, Error, Extent, Font, Label, Movement, Origin,
        Result, Screen, ScreenOptions, StaticListBox, Widget, WidgetId,
    };
}
