#![forbid(unsafe_code)]

//! Terminal-facing helpers that live outside the pure command model.
//!
//! Two collaborators sit here:
//!
//! - [`viewport_extent`] reports the current terminal size. Screens capture
//!   it once at construction and never re-query it.
//! - [`SignalRestore`] restores attributes and cursor visibility when the
//!   process is interrupted, since `Drop` does not run on SIGINT/SIGTERM.
//!
//! # Escape Sequences Reference
//!
//! The restore path emits (via Crossterm):
//!
//! | Feature | Sequence |
//! |---------|----------|
//! | Reset style | `CSI 0 m` |
//! | Show cursor | `CSI ? 25 h` |

use std::io::{self, Write};

use crate::geometry::Extent;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Query the terminal for its current size.
///
/// # Errors
///
/// Returns an error if the size cannot be determined (e.g. stdout is not a
/// terminal).
#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_extent() -> io::Result<Extent> {
    let (cols, lines) = crossterm::terminal::size()?;
    crate::debug!(cols, lines, "viewport extent queried");
    Ok(Extent::new(cols, lines))
}

/// Reset all attributes and show the cursor on stdout, ignoring failures.
///
/// This is the last-resort path for signal delivery, where no writer other
/// than stdout is reachable and nothing can be propagated.
pub fn best_effort_restore() {
    let mut stdout = io::stdout();
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = crossterm::execute!(
            stdout,
            crossterm::style::SetAttribute(crossterm::style::Attribute::Reset),
            crossterm::cursor::Show
        );
    }
    let _ = stdout.flush();
}

/// Restores the terminal on SIGINT/SIGTERM for as long as it is alive.
///
/// On a termination signal the watcher thread calls [`best_effort_restore`]
/// and exits the process with status `128 + signal`. Dropping the guard
/// unregisters the handler and joins the thread.
#[cfg(unix)]
#[derive(Debug)]
pub struct SignalRestore {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalRestore {
    /// Install the signal watcher.
    ///
    /// # Errors
    ///
    /// Returns an error if the signal handlers cannot be registered.
    pub fn install() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            for signal in signals.forever() {
                if matches!(signal, SIGINT | SIGTERM) {
                    crate::warn!(signal, "termination signal received, restoring terminal");
                    best_effort_restore();
                    std::process::exit(128 + signal);
                }
            }
        });
        crate::debug!("signal restore installed");
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalRestore {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Querying the size or delivering real signals would interfere with the
    // test runner's terminal, so only the guard's install/uninstall cycle is
    // exercised here.

    #[cfg(unix)]
    #[test]
    fn signal_restore_installs_and_uninstalls() {
        let guard = SignalRestore::install().expect("install signal watcher");
        drop(guard);
    }

    #[cfg(unix)]
    #[test]
    fn signal_restore_can_be_reinstalled() {
        let first = SignalRestore::install().expect("first install");
        drop(first);
        let second = SignalRestore::install().expect("second install");
        drop(second);
    }
}
