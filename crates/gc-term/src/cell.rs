// SPDX-License-Identifier: MIT
//
// Style — the attribute half of a rendered cell.
//
// A rendered cell is a character plus a `Style`. Characters come from the
// background grid; styles come from whichever layer wins at that position.
// Keeping the two apart means the compositor never touches escape codes —
// only the frame renderer serializes a style and a character together.

use crate::color::CellColor;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters:
    ///
    /// ```
    /// use gc_term::cell::Attr;
    ///
    /// let style = Attr::BOLD | Attr::DIM;
    /// assert!(style.contains(Attr::BOLD));
    /// assert_eq!(style.bits(), 0b11);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1 — increased intensity.
        const BOLD   = 1 << 0;
        /// SGR 2 — decreased intensity (faint).
        const DIM    = 1 << 1;
    }
}

// ─── Style ───────────────────────────────────────────────────────────────────

/// Foreground color plus text attributes for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: CellColor,
    /// Text attributes.
    pub attrs: Attr,
}

impl Style {
    /// Unstyled: terminal default color, no attributes.
    pub const PLAIN: Self = Self {
        fg: CellColor::Default,
        attrs: Attr::empty(),
    };

    /// A style with the given foreground and no attributes.
    #[inline]
    #[must_use]
    pub const fn fg(fg: CellColor) -> Self {
        Self {
            fg,
            attrs: Attr::empty(),
        }
    }

    /// Builder: add attributes.
    #[inline]
    #[must_use]
    pub const fn with_attrs(mut self, attrs: Attr) -> Self {
        self.attrs = self.attrs.union(attrs);
        self
    }

    /// Builder: add bold.
    #[inline]
    #[must_use]
    pub const fn bold(self) -> Self {
        self.with_attrs(Attr::BOLD)
    }

    /// Builder: add dim.
    #[inline]
    #[must_use]
    pub const fn dim(self) -> Self {
        self.with_attrs(Attr::DIM)
    }

    /// Whether rendering this style needs any escape codes at all.
    #[inline]
    #[must_use]
    pub const fn is_plain(self) -> bool {
        self.fg.is_default() && self.attrs.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_is_default() {
        assert_eq!(Style::PLAIN, Style::default());
        assert!(Style::PLAIN.is_plain());
    }

    #[test]
    fn builders_accumulate_attrs() {
        let s = Style::fg(CellColor::RED).bold().dim();
        assert_eq!(s.fg, CellColor::RED);
        assert!(s.attrs.contains(Attr::BOLD));
        assert!(s.attrs.contains(Attr::DIM));
        assert!(!s.is_plain());
    }

    #[test]
    fn colored_style_is_not_plain() {
        assert!(!Style::fg(CellColor::GRAY).is_plain());
    }

    #[test]
    fn attrs_only_style_is_not_plain() {
        assert!(!Style::PLAIN.bold().is_plain());
    }
}
