#![forbid(unsafe_code)]

//! Core: viewport geometry, logging, and terminal restore helpers.

pub mod geometry;
pub mod logging;
pub mod terminal_session;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, info, trace, warn};
