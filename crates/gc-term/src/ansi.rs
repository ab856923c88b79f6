// SPDX-License-Identifier: MIT
//
// ANSI escape sequence generation.
//
// Pure functions that write escape sequences to any `impl Write`. No state,
// no decisions about when to emit. This module just knows the byte-level
// encoding of every terminal command the clock needs.
//
// All cursor positions are 0-indexed in our API and converted to 1-indexed
// for the terminal (ANSI standard uses 1-based coordinates).
//
// All functions return `io::Result` propagated from the underlying writer.
// In practice they never fail when writing to `OutputBuffer` (backed by a Vec).
use std::io::{self, Write};

use crate::cell::{Attr, Style};
use crate::color::CellColor;

// ─── Cursor ──────────────────────────────────────────────────────────────────

/// Move the cursor to `(x, y)` using the CUP (Cursor Position) sequence.
///
/// Our coordinates are 0-indexed; ANSI CUP is 1-indexed.
#[inline]
pub fn cursor_to(w: &mut impl Write, x: u16, y: u16) -> io::Result<()> {
    write!(w, "\x1b[{};{}H", u32::from(y) + 1, u32::from(x) + 1)
}

/// Move the cursor to the top-left corner.
#[inline]
pub fn cursor_home(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[H")
}

/// Hide the cursor (DECTCEM reset).
#[inline]
pub fn cursor_hide(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25l")
}

/// Show the cursor (DECTCEM set).
#[inline]
pub fn cursor_show(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[?25h")
}

// ─── Screen ──────────────────────────────────────────────────────────────────

/// Clear the entire screen (ED 2).
#[inline]
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[2J")
}

/// Reset all SGR attributes to terminal defaults (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Foreground Color ────────────────────────────────────────────────────────

/// Set the foreground (text) color.
///
/// Uses compact SGR codes for standard colors (30-37, 90-97) and the
/// 256-color extended format for palette indices 16-255.
pub fn fg(w: &mut impl Write, color: CellColor) -> io::Result<()> {
    match color {
        CellColor::Default => w.write_all(b"\x1b[39m"),
        CellColor::Ansi256(idx) => {
            if idx < 8 {
                write!(w, "\x1b[{}m", 30 + u16::from(idx))
            } else if idx < 16 {
                write!(w, "\x1b[{}m", 82 + u16::from(idx))
            } else {
                write!(w, "\x1b[38;5;{idx}m")
            }
        }
    }
}

// ─── Text Attributes ─────────────────────────────────────────────────────────

/// Emit SGR codes for text attributes as a single CSI sequence.
///
/// Multiple attributes are semicolon-separated: `\x1b[1;2m` for
/// bold + dim. Does nothing if no attributes are set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    if attr.is_empty() {
        return Ok(());
    }

    let codes: Vec<&str> = [(Attr::BOLD, "1"), (Attr::DIM, "2")]
        .into_iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| code)
        .collect();

    write!(w, "\x1b[{}m", codes.join(";"))
}

// ─── Styled Output ───────────────────────────────────────────────────────────

/// Emit the SGR sequences for a full [`Style`] (attributes, then color).
///
/// Writes nothing for [`Style::PLAIN`].
pub fn style(w: &mut impl Write, style: Style) -> io::Result<()> {
    attrs(w, style.attrs)?;
    if !style.fg.is_default() {
        fg(w, style.fg)?;
    }
    Ok(())
}

/// Write one character wrapped in its own style and a trailing reset.
///
/// The result is self-contained: no SGR state leaks into whatever follows.
/// Plain characters are written bare.
pub fn styled_char(w: &mut impl Write, s: Style, ch: char) -> io::Result<()> {
    if s.is_plain() {
        let mut enc = [0u8; 4];
        return w.write_all(ch.encode_utf8(&mut enc).as_bytes());
    }
    style(w, s)?;
    let mut enc = [0u8; 4];
    w.write_all(ch.encode_utf8(&mut enc).as_bytes())?;
    reset(w)
}

/// Write a string wrapped in its own style and a trailing reset.
pub fn styled_str(w: &mut impl Write, s: Style, text: &str) -> io::Result<()> {
    if s.is_plain() {
        return w.write_all(text.as_bytes());
    }
    style(w, s)?;
    w.write_all(text.as_bytes())?;
    reset(w)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
