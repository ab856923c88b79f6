// SPDX-License-Identifier: MIT
//
// Cell colors — the compact form that actually reaches the terminal.
//
// The clock speaks the bright half of the classic 16-color palette plus the
// terminal default. Indices are 256-color palette slots.

use std::fmt;

// ─── CellColor ───────────────────────────────────────────────────────────────

/// Compact color for a single rendered cell.
///
/// Small and `Copy`, cheap to compare. Converted to SGR codes by
/// [`ansi::fg`](crate::ansi::fg).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellColor {
    /// ANSI 256-color palette index. Indices 0–15 are the classic palette
    /// and encode to the compact 30–37 / 90–97 SGR forms.
    Ansi256(u8),

    /// Terminal default color (inherits from the user's terminal theme).
    #[default]
    Default,
}

impl CellColor {
    /// Bright black — the "gray" most themes use for muted text.
    pub const GRAY: Self = Self::Ansi256(8);
    /// Bright red.
    pub const RED: Self = Self::Ansi256(9);
    /// Bright green.
    pub const GREEN: Self = Self::Ansi256(10);
    /// Bright yellow.
    pub const YELLOW: Self = Self::Ansi256(11);
    /// Bright cyan.
    pub const CYAN: Self = Self::Ansi256(14);
    /// Bright white.
    pub const WHITE: Self = Self::Ansi256(15);

    /// Whether this is the terminal default color.
    #[inline]
    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Debug for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ansi256(idx) => write!(f, "ansi({idx})"),
            Self::Default => write!(f, "default"),
        }
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
