// SPDX-License-Identifier: MIT
//
// Frame renderer — the only place a style and a character meet.
//
// The grid supplies characters, the composition decides which layer owns
// each cell, and the palette turns layers into styles. Every cell is written
// as its own self-contained `style + char + reset` run, so a line can be
// printed anywhere without inheriting state from the line before it.
//
// A `Frame` is the finished product for one tick: placed lines plus whether
// the screen must be cleared first. Turning it into bytes is `write_to`.

use std::io::{self, Write};

use gc_term::ansi;
use gc_term::cell::Style;
use gc_term::color::CellColor;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::compose::{Accent, Composition, Layer};
use crate::grid::Grid;

// ─── Palette ─────────────────────────────────────────────────────────────────

/// Styles for each layer of the clock and each tone of the size warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub hours: Style,
    pub minutes: Style,
    pub seconds: Style,
    pub separator: Style,
    /// Halo around lit cells.
    pub border: Style,
    /// Everything else.
    pub background: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hours: Style::fg(CellColor::RED).bold(),
            minutes: Style::fg(CellColor::GREEN).bold(),
            seconds: Style::fg(CellColor::CYAN).bold(),
            separator: Style::fg(CellColor::YELLOW).bold(),
            border: Style::fg(CellColor::GRAY),
            background: Style::fg(CellColor::GRAY).dim(),
        }
    }
}

impl Palette {
    /// Style for a highlight accent.
    #[must_use]
    pub const fn accent(&self, accent: Accent) -> Style {
        match accent {
            Accent::Hours => self.hours,
            Accent::Minutes => self.minutes,
            Accent::Seconds => self.seconds,
            Accent::Separator => self.separator,
        }
    }

    /// Style for whichever layer won a cell.
    #[must_use]
    pub const fn layer(&self, layer: Layer) -> Style {
        match layer {
            Layer::Highlight(accent) => self.accent(accent),
            Layer::Border => self.border,
            Layer::Background => self.background,
        }
    }
}

// ─── Clock rendering ─────────────────────────────────────────────────────────

/// Merge the background grid with the overlay into one styled line per row.
#[must_use]
pub fn render(grid: &Grid, comp: &Composition, palette: &Palette) -> Vec<String> {
    grid.rows()
        .enumerate()
        .map(|(row, chars)| {
            // ~12 bytes of SGR per cell.
            let mut line = Vec::with_capacity(chars.len() * 16);
            for (col, &ch) in chars.iter().enumerate() {
                let style = palette.layer(comp.layer_at(row, col));
                // Writes into a Vec cannot fail.
                ansi::styled_char(&mut line, style, ch).ok();
            }
            String::from_utf8_lossy(&line).into_owned()
        })
        .collect()
}

// ─── Size warning ────────────────────────────────────────────────────────────

/// Emphasis for one line of the size warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Headline.
    Title,
    /// Current and required sizes.
    Size,
    /// Operating system line.
    System,
    /// Missing resize-notification notice.
    Notice,
    /// Everything else.
    Body,
}

impl Tone {
    /// Warning style for this tone.
    #[must_use]
    pub const fn style(self) -> Style {
        match self {
            Self::Title => Style::fg(CellColor::YELLOW).bold(),
            Self::Size => Style::fg(CellColor::RED),
            Self::System => Style::fg(CellColor::CYAN),
            Self::Notice => Style::fg(CellColor::YELLOW),
            Self::Body => Style::fg(CellColor::WHITE),
        }
    }
}

/// One line of the size warning before layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarningLine {
    pub text: String,
    pub tone: Tone,
}

impl WarningLine {
    /// A line of text with a tone.
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    /// An empty spacer line.
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            text: String::new(),
            tone: Tone::Body,
        }
    }
}

/// Cut `text` to at most `width` display columns.
#[must_use]
pub fn clip(text: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in text.char_indices() {
        used += ch.width().unwrap_or(0);
        if used > width {
            return &text[..i];
        }
    }
    text
}

/// Pad `text` on both sides to `width` display columns. Text wider than
/// that is clipped so it never wraps.
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return clip(text, width).to_owned();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// Lay the warning out in a `cols × rows` terminal: each line centered
/// horizontally, the block centered vertically. Lines past the last row are
/// dropped.
///
/// The block starts on screen row `max(1, rows/2 - n/2)`, counted from 1.
#[must_use]
pub fn render_warning(lines: &[WarningLine], cols: u16, rows: u16) -> Frame {
    let start = (usize::from(rows) / 2)
        .saturating_sub(lines.len() / 2)
        .max(1)
        - 1;

    let placed = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (start + i, line))
        .take_while(|&(row, _)| row < usize::from(rows))
        .map(|(row, line)| {
            let mut out = Vec::new();
            ansi::styled_str(&mut out, line.tone.style(), &center(&line.text, cols.into())).ok();
            #[allow(clippy::cast_possible_truncation)] // row < rows ≤ u16::MAX
            (row as u16, String::from_utf8_lossy(&out).into_owned())
        })
        .collect();

    Frame {
        clear: true,
        lines: placed,
    }
}

// ─── Frame ───────────────────────────────────────────────────────────────────

/// Everything to draw for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    /// Clear the screen before drawing.
    pub clear: bool,
    /// `(row, styled text)`, 0-indexed rows.
    pub lines: Vec<(u16, String)>,
}

impl Frame {
    /// A frame whose lines start at the top row and run down.
    #[must_use]
    pub fn from_rows(lines: Vec<String>, clear: bool) -> Self {
        let lines = (0u16..).zip(lines).collect();
        Self { clear, lines }
    }

    /// Serialize to terminal bytes: optional clear, then each line after a
    /// cursor move to its row. No newlines are written, so nothing scrolls.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails.
    pub fn write_to(&self, w: &mut impl Write) -> io::Result<()> {
        if self.clear {
            ansi::clear_screen(w)?;
        }
        for (row, text) in &self.lines {
            ansi::cursor_to(w, 0, *row)?;
            w.write_all(text.as_bytes())?;
        }
        ansi::reset(w)
    }

    /// Text of the frame with all escape sequences removed, one entry per
    /// line. Used in tests and debug logging.
    #[must_use]
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines.iter().map(|(_, text)| strip_ansi(text)).collect()
    }
}

/// Remove CSI sequences (`ESC [ … final-byte`).
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Skip '[' and parameters up to the final byte (0x40..=0x7e).
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) && c != '[' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }
    out
}

// ─── Tests ───────────────────────────────────────────────────────────────────
