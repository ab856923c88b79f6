// SPDX-License-Identifier: MIT
//
// Glyph library — fixed 11×9 bitmaps for the characters of `HH:MM:SS`.
//
// Each row is stored as the low 9 bits of a `u16`, most significant bit on
// the left, so the table below reads like the glyph it draws. The table is
// immutable static data; `pattern_for` is the only way in.

use crate::error::{ClockError, Result};

/// Glyph height in cells.
pub const GLYPH_HEIGHT: usize = 11;

/// Glyph width in cells.
pub const GLYPH_WIDTH: usize = 9;

/// A binary bitmap for one renderable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    rows: [u16; GLYPH_HEIGHT],
}

impl Glyph {
    const fn new(rows: [u16; GLYPH_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Whether the cell at `(row, col)` is lit. Out-of-extent cells are unlit.
    #[inline]
    #[must_use]
    pub const fn is_lit(&self, row: usize, col: usize) -> bool {
        if row >= GLYPH_HEIGHT || col >= GLYPH_WIDTH {
            return false;
        }
        (self.rows[row] >> (GLYPH_WIDTH - 1 - col)) & 1 == 1
    }

    /// All lit cells as `(row, col)` offsets from the glyph's top-left,
    /// in row-major order.
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..GLYPH_HEIGHT).flat_map(move |r| {
            (0..GLYPH_WIDTH)
                .filter(move |&c| self.is_lit(r, c))
                .map(move |c| (r, c))
        })
    }
}

/// Look up the glyph for `ch`.
///
/// # Errors
///
/// Returns [`ClockError::UnsupportedCharacter`] for anything outside
/// `0-9` and `:`. There is no fallback glyph.
pub fn pattern_for(ch: char) -> Result<&'static Glyph> {
    match ch {
        '0' => Ok(&DIGIT_0),
        '1' => Ok(&DIGIT_1),
        '2' => Ok(&DIGIT_2),
        '3' => Ok(&DIGIT_3),
        '4' => Ok(&DIGIT_4),
        '5' => Ok(&DIGIT_5),
        '6' => Ok(&DIGIT_6),
        '7' => Ok(&DIGIT_7),
        '8' => Ok(&DIGIT_8),
        '9' => Ok(&DIGIT_9),
        ':' => Ok(&COLON),
        other => Err(ClockError::UnsupportedCharacter(other)),
    }
}

// ─── Table ───────────────────────────────────────────────────────────────────

const DIGIT_0: Glyph = Glyph::new([
    0b111111111,
    0b111000111,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b111000111,
    0b111111111,
]);

const DIGIT_1: Glyph = Glyph::new([
    0b000111000,
    0b001111000,
    0b011011000,
    0b000011000,
    0b000011000,
    0b000011000,
    0b000011000,
    0b000011000,
    0b000011000,
    0b000011000,
    0b111111111,
]);

const DIGIT_2: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b000000011,
    0b000000011,
    0b000000111,
    0b111111110,
    0b111000000,
    0b110000000,
    0b110000000,
    0b110000011,
    0b111111111,
]);

const DIGIT_3: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b000000011,
    0b000000011,
    0b000000111,
    0b111111110,
    0b000000111,
    0b000000011,
    0b000000011,
    0b110000011,
    0b111111111,
]);

const DIGIT_4: Glyph = Glyph::new([
    0b110000111,
    0b110000111,
    0b110000111,
    0b110000111,
    0b110000111,
    0b111111111,
    0b000000111,
    0b000000111,
    0b000000111,
    0b000000111,
    0b000000111,
]);

const DIGIT_5: Glyph = Glyph::new([
    0b111111111,
    0b110000000,
    0b110000000,
    0b110000000,
    0b110000000,
    0b111111111,
    0b000000011,
    0b000000011,
    0b000000011,
    0b110000011,
    0b111111111,
]);

const DIGIT_6: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b110000000,
    0b110000000,
    0b110000000,
    0b111111111,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b111111111,
]);

const DIGIT_7: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b000000011,
    0b000000110,
    0b000001100,
    0b000011000,
    0b000110000,
    0b001100000,
    0b011000000,
    0b011000000,
    0b011000000,
]);

const DIGIT_8: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b111111111,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b111111111,
]);

const DIGIT_9: Glyph = Glyph::new([
    0b111111111,
    0b110000011,
    0b110000011,
    0b110000011,
    0b110000011,
    0b111111111,
    0b000000011,
    0b000000011,
    0b000000011,
    0b110000011,
    0b111111111,
]);

const COLON: Glyph = Glyph::new([
    0b000000000,
    0b000000000,
    0b001111100,
    0b001111100,
    0b001111100,
    0b000000000,
    0b000000000,
    0b001111100,
    0b001111100,
    0b001111100,
    0b000000000,
]);

// ─── Tests ───────────────────────────────────────────────────────────────────
