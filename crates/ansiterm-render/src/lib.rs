#![forbid(unsafe_code)]

//! Render: escape-sequence commands, colors, and font state.

pub mod ansi;
pub mod color;
pub mod command;
pub mod font;

pub use ansi::EraseRegion;
pub use color::{Color, ParseColorError};
pub use command::{Command, Movement};
pub use font::{Attributes, Font, FontGuard};
