#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All coordinates here follow the ANSI convention: 1-indexed, `(row, col)`,
//! origin at the top-left cell.
//!
//! Widgets are anchored by an [`Origin`], whose components may be negative to
//! count from the bottom/right edge of the viewport. An origin is turned into
//! a concrete [`Position`] only at draw time, against the [`Extent`] captured
//! by the screen:
//!
//! | Input | Resolved |
//! |-------|----------|
//! | `c < 0` | `extent + c + 1` (`-1` is the last row/column) |
//! | `c == 0` | `1` |
//! | `c > 0` | `c` |
//!
//! The result is always clamped into `[1, extent]`.

/// Visible size of the terminal viewport in columns and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
    /// Number of columns.
    pub cols: u16,
    /// Number of lines (rows).
    pub lines: u16,
}

impl Extent {
    /// Create a new extent.
    #[inline]
    pub const fn new(cols: u16, lines: u16) -> Self {
        Self { cols, lines }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.cols == 0 || self.lines == 0
    }

    /// The bottom-left cell, where the cursor is parked when a screen is released.
    #[inline]
    pub const fn bottom_left(&self) -> Position {
        Position::new(max_one(self.lines), 1)
    }

    /// Resolve an origin against this extent.
    #[inline]
    pub const fn resolve(&self, origin: Origin) -> Position {
        Position::new(
            resolve_axis(origin.row, self.lines),
            resolve_axis(origin.col, self.cols),
        )
    }
}

/// A widget anchor. Negative components count back from the far edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Origin {
    /// Row; `-1` is the last line.
    pub row: i32,
    /// Column; `-1` is the last column.
    pub col: i32,
}

impl Origin {
    /// Create a new origin.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Origin {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// A concrete, 1-indexed cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: u16,
    pub col: u16,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// The position `rows` lines further down, saturating at `u16::MAX`.
    #[inline]
    pub const fn down(self, rows: u16) -> Self {
        Self::new(self.row.saturating_add(rows), self.col)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Resolve one axis of an origin against the matching extent.
///
/// The result lies in `[1, extent]`, or is `1` when `extent` is zero.
#[must_use]
pub const fn resolve_axis(value: i32, extent: u16) -> u16 {
    let extent = extent as i32;
    let raw = if value < 0 { extent + value + 1 } else { value };
    let upper = if extent < 1 { 1 } else { extent };
    let clamped = if raw < 1 {
        1
    } else if raw > upper {
        upper
    } else {
        raw
    };
    clamped as u16
}

#[inline]
const fn max_one(value: u16) -> u16 {
    if value == 0 { 1 } else { value }
}
