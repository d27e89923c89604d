#![forbid(unsafe_code)]

//! ANSI escape sequence construction.
//!
//! Pure string-building helpers for the handful of ANSI/VT100 control
//! sequences this crate speaks. No state tracking happens here; callers
//! (mostly [`Command`](crate::command::Command)) decide what to emit.
//!
//! # Sequence Reference
//!
//! | Category | Sequence | Description |
//! |----------|----------|-------------|
//! | CSI | `ESC [ n A/B/C/D` | CUU/CUD/CUF/CUB (relative move) |
//! | CSI | `ESC [ row ; col H` | CUP (Cursor Position, 1-indexed) |
//! | CSI | `ESC [ n K` | EL (Erase Line) |
//! | CSI | `ESC [ n J` | ED (Erase Display) |
//! | CSI | `ESC [ ? 25 l/h` | DECTCEM (hide/show cursor) |
//! | CSI | `ESC [ n m` | SGR (Select Graphic Rendition) |

use std::fmt::Write as FmtWrite;

use crate::color::Color;
use crate::font::Attributes;

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// SGR reset (all attributes off): `CSI 0 m`
pub const SGR_RESET: &str = "\x1b[0m";

/// Hide cursor: `CSI ? 25 l`
pub const CURSOR_HIDE: &str = "\x1b[?25l";

/// Show cursor: `CSI ? 25 h`
pub const CURSOR_SHOW: &str = "\x1b[?25h";

// =============================================================================
// SGR attribute codes
// =============================================================================

/// SGR on/off code pair for one text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SgrCodes {
    /// Enable code
    pub on: u8,
    /// Disable code
    pub off: u8,
}

impl SgrCodes {
    /// Pick the code matching the requested state.
    #[inline]
    pub const fn select(self, enabled: bool) -> u8 {
        if enabled { self.on } else { self.off }
    }
}

/// SGR codes for bold (on=1, off=22).
pub const SGR_BOLD: SgrCodes = SgrCodes { on: 1, off: 22 };
/// SGR codes for italic (on=3, off=23).
pub const SGR_ITALIC: SgrCodes = SgrCodes { on: 3, off: 23 };
/// SGR codes for underline (on=4, off=24).
pub const SGR_UNDERLINE: SgrCodes = SgrCodes { on: 4, off: 24 };
/// SGR codes for reverse video (on=7, off=27).
pub const SGR_REVERSE: SgrCodes = SgrCodes { on: 7, off: 27 };
/// SGR codes for blink (on=5, off=25).
pub const SGR_BLINK: SgrCodes = SgrCodes { on: 5, off: 25 };

/// Ordered table of (attribute, on/off codes). Emission follows this order.
pub const FLAG_TABLE: [(Attributes, SgrCodes); 5] = [
    (Attributes::BOLD, SGR_BOLD),
    (Attributes::ITALIC, SGR_ITALIC),
    (Attributes::UNDERLINE, SGR_UNDERLINE),
    (Attributes::REVERSE, SGR_REVERSE),
    (Attributes::BLINK, SGR_BLINK),
];

// =============================================================================
// Cursor movement
// =============================================================================

/// Direction of a relative cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// CUU
    Up,
    /// CUD
    Down,
    /// CUF
    Right,
    /// CUB
    Left,
}

impl Direction {
    /// Final byte of the CSI sequence.
    #[inline]
    pub const fn final_byte(self) -> char {
        match self {
            Self::Up => 'A',
            Self::Down => 'B',
            Self::Right => 'C',
            Self::Left => 'D',
        }
    }
}

/// Append a relative move: `CSI n A/B/C/D`.
///
/// The distance is always written, including zero.
pub fn push_move(out: &mut String, direction: Direction, distance: u16) {
    let _ = write!(out, "{CSI}{distance}{}", direction.final_byte());
}

/// Append CUP (Cursor Position): `CSI row ; col H`.
///
/// Row and col are already 1-indexed and are not range-checked.
pub fn push_cup(out: &mut String, row: u16, col: u16) {
    let _ = write!(out, "{CSI}{row};{col}H");
}

// =============================================================================
// Erase operations
// =============================================================================

/// Region selector shared by EL and ED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EraseRegion {
    /// Erase from cursor to end of line/screen.
    CursorToEnd = 0,
    /// Erase from start of line/screen to cursor.
    StartToCursor = 1,
    /// Erase the entire line/screen.
    All = 2,
}

impl EraseRegion {
    /// Numeric parameter from the ANSI standard.
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

/// Append EL (Erase Line): `CSI n K`.
pub fn push_erase_line(out: &mut String, region: EraseRegion) {
    let _ = write!(out, "{CSI}{}K", region.code());
}

/// Append ED (Erase Display): `CSI n J`.
pub fn push_erase_display(out: &mut String, region: EraseRegion) {
    let _ = write!(out, "{CSI}{}J", region.code());
}

// =============================================================================
// SGR font state
// =============================================================================

/// Append a complete font state: `CSI fg ; b ; i ; u ; r ; k m` then `CSI bg m`.
///
/// Every attribute in [`FLAG_TABLE`] is written as either its on or its off
/// code, so the result never depends on what the terminal had set before.
pub fn push_font(out: &mut String, fg: Color, bg: Color, attrs: Attributes) {
    let _ = write!(out, "{CSI}{}", fg.fg_code());
    for (flag, codes) in FLAG_TABLE {
        let _ = write!(out, ";{}", codes.select(attrs.contains(flag)));
    }
    out.push('m');
    let _ = write!(out, "{CSI}{}m", bg.bg_code());
}

// =============================================================================
// Tests
// =============================================================================
