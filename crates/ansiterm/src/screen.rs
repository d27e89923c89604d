#![forbid(unsafe_code)]

//! Screen: a set of widgets over a fixed-size viewport.
//!
//! # Lifecycle
//!
//! 1. **Construction** hides the cursor and captures the viewport extent.
//!    The extent is never re-queried; a resize during the screen's lifetime
//!    is not noticed.
//!
//! 2. **Refresh** erases the whole screen, then draws every widget in
//!    insertion order. Later widgets win where they overlap earlier ones.
//!    Every refresh is a full repaint.
//!
//! 3. **Release** writes an attribute reset, shows the cursor, and parks it
//!    at the bottom-left cell. It runs exactly once: from
//!    [`Screen::finish`], or from `Drop` on any other exit path, including
//!    `?` returns and panics (unless `panic = "abort"`).
//!
//! # Escape Sequences Reference
//!
//! | Step | Sequence |
//! |------|----------|
//! | Construction | `CSI ? 25 l` |
//! | Refresh | `CSI 2 J`, then each widget |
//! | Release | `CSI 0 m`, `CSI ? 25 h`, `CSI lines ; 1 H` |

use std::io::{self, Stdout, Write};

use ansiterm_core::geometry::Extent;
#[cfg(unix)]
use ansiterm_core::terminal_session::SignalRestore;
use ansiterm_render::{Command, EraseRegion};
use ansiterm_widgets::{AnyWidget, Label, StaticListBox, Widget};

use crate::banner::banner;

/// Screen configuration options.
///
/// All options default to `false`.
#[derive(Debug, Clone, Default)]
pub struct ScreenOptions {
    /// Restore attributes and cursor visibility on SIGINT/SIGTERM (unix only).
    ///
    /// Installs a process-wide signal watcher for the screen's lifetime.
    /// Only useful when the output stream is the real terminal.
    pub signal_restore: bool,
}

/// Handle to a widget added to a [`Screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    /// Position in draw order.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Owns widgets and the output stream, and redraws on demand.
///
/// # Example
///
/// ```
/// use ansiterm::{Extent, Label, Screen};
///
/// let mut out = Vec::new();
/// {
///     let mut screen = Screen::new(&mut out, Extent::new(80, 24))?;
///     screen.add_widget(Label::new((3, 2), "hello"))?;
/// }
/// let out = String::from_utf8(out).unwrap();
/// assert!(out.starts_with("\x1b[?25l"));
/// assert!(out.ends_with("\x1b[0m\x1b[?25h\x1b[24;1H"));
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug)]
pub struct Screen<W: Write = Stdout> {
    out: W,
    extent: Extent,
    widgets: Vec<AnyWidget>,
    released: bool,
    #[cfg(unix)]
    signal_restore: Option<SignalRestore>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Screen<Stdout> {
    /// A screen on stdout, sized to the current terminal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Viewport`](crate::Error::Viewport) if the terminal
    /// reports a zero-sized viewport, or an I/O error if the size cannot be
    /// queried or the cursor cannot be hidden.
    pub fn stdout() -> crate::Result<Self> {
        let extent = ansiterm_core::terminal_session::viewport_extent()?;
        if extent.is_empty() {
            return Err(crate::Error::Viewport(format!(
                "terminal reports {}x{}",
                extent.cols, extent.lines
            )));
        }
        Ok(Self::new(io::stdout(), extent)?)
    }
}

impl<W: Write> Screen<W> {
    /// Create an empty screen and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the hide-cursor sequence cannot be written.
    pub fn new(out: W, extent: Extent) -> io::Result<Self> {
        Self::with_options(out, extent, Vec::new(), ScreenOptions::default())
    }

    /// Create a screen with initial widgets and hide the cursor.
    ///
    /// Nothing is drawn until the first [`refresh`](Self::refresh) or
    /// [`add_widget`](Self::add_widget).
    ///
    /// # Errors
    ///
    /// Returns an error if the signal watcher cannot be installed or the
    /// hide-cursor sequence cannot be written.
    pub fn with_options(
        mut out: W,
        extent: Extent,
        widgets: Vec<AnyWidget>,
        options: ScreenOptions,
    ) -> io::Result<Self> {
        #[cfg(unix)]
        let signal_restore = if options.signal_restore {
            Some(SignalRestore::install()?)
        } else {
            None
        };
        #[cfg(not(unix))]
        let _ = options;

        Command::hide_cursor().put(&mut out)?;
        ansiterm_core::info!(
            cols = extent.cols,
            lines = extent.lines,
            widgets = widgets.len(),
            "screen created"
        );

        Ok(Self {
            out,
            extent,
            widgets,
            released: false,
            #[cfg(unix)]
            signal_restore,
        })
    }

    /// The extent captured at construction.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Widgets in draw order.
    pub fn widgets(&self) -> &[AnyWidget] {
        &self.widgets
    }

    /// Append a widget and immediately refresh.
    ///
    /// The widget stays added even if the refresh fails.
    ///
    /// # Errors
    ///
    /// Propagates any write error from the refresh.
    pub fn add_widget(&mut self, widget: impl Into<AnyWidget>) -> io::Result<WidgetId> {
        let id = WidgetId(self.widgets.len());
        self.widgets.push(widget.into());
        ansiterm_core::debug!(index = id.0, "widget added");
        self.refresh()?;
        Ok(id)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&AnyWidget> {
        self.widgets.get(id.0)
    }

    /// Mutable access; changes show on the next refresh.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut AnyWidget> {
        self.widgets.get_mut(id.0)
    }

    pub fn label_mut(&mut self, id: WidgetId) -> Option<&mut Label> {
        self.widget_mut(id).and_then(AnyWidget::as_label_mut)
    }

    pub fn list_box_mut(&mut self, id: WidgetId) -> Option<&mut StaticListBox> {
        self.widget_mut(id).and_then(AnyWidget::as_list_box_mut)
    }

    /// Erase the screen and draw every widget in order.
    ///
    /// # Errors
    ///
    /// Stops at, and returns, the first write error.
    pub fn refresh(&mut self) -> io::Result<()> {
        let _span = ansiterm_core::debug_span!("screen.refresh", widgets = self.widgets.len())
            .entered();
        Command::erase_screen(EraseRegion::All).write_to(&mut self.out)?;
        for widget in &self.widgets {
            widget.draw(&mut self.out, self.extent)?;
        }
        self.out.flush()
    }

    /// A `=` banner line as wide as the viewport. See [`banner`].
    #[must_use]
    pub fn banner(&self, text: &str) -> String {
        banner(text, self.extent.cols)
    }

    /// Release the screen now, reporting any write error.
    ///
    /// # Errors
    ///
    /// Returns an error if the release sequence cannot be written. The
    /// release is not retried on drop.
    pub fn finish(mut self) -> io::Result<()> {
        self.release(false)
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn release(&mut self, from_drop: bool) -> io::Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;

        let restore = Command::concat([
            Command::reset(),
            Command::show_cursor(),
            Command::goto_position(self.extent.bottom_left()),
        ]);
        let result = restore.put(&mut self.out);

        #[cfg(unix)]
        drop(self.signal_restore.take());

        ansiterm_core::info!(ok = result.is_ok(), from_drop, "screen released");
        result
    }
}

impl<W: Write> Drop for Screen<W> {
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn drop(&mut self) {
        if let Err(err) = self.release(true) {
            ansiterm_core::warn!(error = %err, "screen release failed during drop");
        }
    }
}
