// SPDX-License-Identifier: MIT
//
// Glyph compositor — which grid cells light up for a time string.
//
// Each character of the time string is looked up in the glyph library and
// stamped at `(anchor_row, anchor_col + i * spacing)`. Lit glyph cells that
// land inside the grid become the highlight layer, tagged with the accent of
// the character's *slot* (its position in `HH:MM:SS`), not its value. Every
// in-bounds 8-neighbour of a highlight that is not itself a highlight joins
// the border layer.
//
// Nothing here knows about escape codes or terminals. Accents are tags; the
// frame renderer decides what they look like.
//
// Invariants:
//
//   - every highlight and border position is inside `[0, height) × [0, width)`
//   - highlights and border are disjoint
//   - the border is a set; shared neighbours appear once
//   - output depends only on the arguments

use std::collections::{HashMap, HashSet};

use crate::error::Result;
use crate::glyph::{self, GLYPH_WIDTH};

/// A grid position as `(row, col)`.
pub type Pos = (usize, usize);

/// Empty columns between adjacent glyphs.
pub const GUTTER: usize = 3;

/// Column advance from one glyph to the next.
pub const SPACING: usize = GLYPH_WIDTH + GUTTER;

/// Number of characters in `HH:MM:SS`.
pub const TIME_SLOTS: usize = 8;

/// Width of the full `HH:MM:SS` block: eight advances minus the trailing
/// gutter.
pub const TIME_SPAN: usize = TIME_SLOTS * SPACING - GUTTER;

// ─── Accent ──────────────────────────────────────────────────────────────────

/// Color tag for a highlighted cell, chosen by slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    /// Hour tens and units.
    Hours,
    /// The two colons.
    Separator,
    /// Minute tens and units.
    Minutes,
    /// Second tens and units.
    Seconds,
}

/// Accent for each slot of `HH:MM:SS`.
pub const SLOT_ACCENTS: [Accent; TIME_SLOTS] = [
    Accent::Hours,
    Accent::Hours,
    Accent::Separator,
    Accent::Minutes,
    Accent::Minutes,
    Accent::Separator,
    Accent::Seconds,
    Accent::Seconds,
];

impl Accent {
    /// Accent for slot `i`. Strings longer than `HH:MM:SS` cycle the table.
    #[inline]
    #[must_use]
    pub const fn for_slot(i: usize) -> Self {
        SLOT_ACCENTS[i % TIME_SLOTS]
    }
}

// ─── Layers ──────────────────────────────────────────────────────────────────

/// Highlighted cells and their accents.
pub type HighlightSet = HashMap<Pos, Accent>;

/// Halo cells around the highlights.
pub type BorderSet = HashSet<Pos>;

/// Which layer wins at a cell. Precedence: highlight > border > background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Lit glyph cell.
    Highlight(Accent),
    /// Halo cell next to a lit glyph cell.
    Border,
    /// Plain background.
    Background,
}

/// The time-dependent overlay for one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composition {
    /// Lit glyph cells.
    pub highlights: HighlightSet,
    /// Halo cells; never overlaps `highlights`.
    pub border: BorderSet,
}

impl Composition {
    /// The winning layer at `(row, col)`.
    #[must_use]
    pub fn layer_at(&self, row: usize, col: usize) -> Layer {
        if let Some(&accent) = self.highlights.get(&(row, col)) {
            Layer::Highlight(accent)
        } else if self.border.contains(&(row, col)) {
            Layer::Border
        } else {
            Layer::Background
        }
    }
}

// ─── Compose ─────────────────────────────────────────────────────────────────

/// Compute the highlight and border layers for `time` anchored at
/// `(anchor_row, anchor_col)` on a `width × height` grid.
///
/// Cells that fall outside the grid are clipped one by one; a block wider
/// than the grid yields partial glyphs, never an error.
///
/// # Errors
///
/// Returns [`ClockError::UnsupportedCharacter`](crate::error::ClockError)
/// if `time` contains anything outside `0-9` and `:`, even when that
/// character would land off-grid.
pub fn compose(
    time: &str,
    anchor_row: usize,
    anchor_col: usize,
    width: usize,
    height: usize,
    spacing: usize,
) -> Result<Composition> {
    let highlights = highlight_cells(time, anchor_row, anchor_col, width, height, spacing)?;
    let border = border_cells(&highlights, width, height);
    Ok(Composition { highlights, border })
}

fn highlight_cells(
    time: &str,
    anchor_row: usize,
    anchor_col: usize,
    width: usize,
    height: usize,
    spacing: usize,
) -> Result<HighlightSet> {
    let mut highlights = HighlightSet::new();

    for (i, ch) in time.chars().enumerate() {
        let glyph = glyph::pattern_for(ch)?;
        let accent = Accent::for_slot(i);
        let left = anchor_col.saturating_add(i.saturating_mul(spacing));

        for (r, c) in glyph.lit_cells() {
            let row = anchor_row.saturating_add(r);
            let col = left.saturating_add(c);
            if row < height && col < width {
                highlights.insert((row, col), accent);
            }
        }
    }

    Ok(highlights)
}

fn border_cells(highlights: &HighlightSet, width: usize, height: usize) -> BorderSet {
    let mut border = BorderSet::new();

    for &(row, col) in highlights.keys() {
        for (nr, nc) in neighbours(row, col) {
            if nr < height && nc < width && !highlights.contains_key(&(nr, nc)) {
                border.insert((nr, nc));
            }
        }
    }

    border
}

/// The 8-connected neighbours of `(row, col)` that don't underflow.
fn neighbours(row: usize, col: usize) -> impl Iterator<Item = Pos> {
    const OFFSETS: [(isize, isize); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];

    OFFSETS.into_iter().filter_map(move |(dr, dc)| {
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClockError;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn cols_of(comp: &Composition, accent: Accent) -> (usize, usize) {
        let cols = comp
            .highlights
            .iter()
            .filter(|(_, a)| **a == accent)
            .map(|((_, c), _)| *c);
        let min = cols.clone().min().unwrap();
        let max = cols.max().unwrap();
        (min, max)
    }

    // ── Constants ────────────────────────────────────────────────────

    #[test]
    fn spacing_and_span() {
        assert_eq!(SPACING, 12);
        assert_eq!(TIME_SPAN, 93);
    }

    #[test]
    fn slot_accents() {
        assert_eq!(Accent::for_slot(0), Accent::Hours);
        assert_eq!(Accent::for_slot(1), Accent::Hours);
        assert_eq!(Accent::for_slot(2), Accent::Separator);
        assert_eq!(Accent::for_slot(5), Accent::Separator);
        assert_eq!(Accent::for_slot(3), Accent::Minutes);
        assert_eq!(Accent::for_slot(4), Accent::Minutes);
        assert_eq!(Accent::for_slot(6), Accent::Seconds);
        assert_eq!(Accent::for_slot(7), Accent::Seconds);
    }

    // ── Placement ────────────────────────────────────────────────────

    #[test]
    fn first_digit_occupies_its_box() {
        let comp = compose("12:30:45", 5, 10, 120, 30, SPACING).unwrap();
        let one: Vec<Pos> = comp
            .highlights
            .iter()
            .filter(|&(&(_, c), _)| c < 10 + GLYPH_WIDTH)
            .map(|(&p, _)| p)
            .collect();
        assert!(!one.is_empty());
        assert!(one.iter().all(|&(r, c)| (5..=15).contains(&r) && (10..=18).contains(&c)));
        // The base of the '1' spans the full glyph width on the last row.
        for c in 10..=18 {
            assert_eq!(comp.highlights.get(&(15, c)), Some(&Accent::Hours));
        }
    }

    #[test]
    fn colon_slot_two_placement() {
        let comp = compose("12:30:45", 5, 10, 120, 30, SPACING).unwrap();
        let left = 10 + 2 * SPACING;
        assert_eq!(left, 34);
        // Colon dots span glyph columns 2..=6 → grid columns 36..=40,
        // inside the 34..=42 box.
        let colon: Vec<Pos> = comp
            .highlights
            .iter()
            .filter(|&(&(_, c), _)| (34..=42).contains(&c))
            .map(|(&p, _)| p)
            .collect();
        assert_eq!(colon.len(), 30);
        assert!(comp.highlights.contains_key(&(5 + 2, 36)));
        assert!(comp.highlights.contains_key(&(5 + 9, 40)));
        assert!(!comp.highlights.contains_key(&(5, 34)));
    }

    #[test]
    fn both_colons_share_an_accent() {
        let comp = compose("12:30:45", 0, 0, 200, 20, SPACING).unwrap();
        let first = comp.highlights.get(&(2, 2 * SPACING + 2));
        let second = comp.highlights.get(&(2, 5 * SPACING + 2));
        assert_eq!(first, Some(&Accent::Separator));
        assert_eq!(second, Some(&Accent::Separator));
    }

    #[test]
    fn accent_follows_slot_not_value() {
        // Same digit in hour, minute, second slots → three accents.
        let comp = compose("88:88:88", 0, 0, 200, 20, SPACING).unwrap();
        assert_eq!(comp.highlights.get(&(0, 0)), Some(&Accent::Hours));
        assert_eq!(comp.highlights.get(&(0, 3 * SPACING)), Some(&Accent::Minutes));
        assert_eq!(comp.highlights.get(&(0, 6 * SPACING)), Some(&Accent::Seconds));
    }

    #[test]
    fn slots_do_not_overlap() {
        let comp = compose("88:88:88", 1, 1, 200, 20, SPACING).unwrap();
        let (h_min, h_max) = cols_of(&comp, Accent::Hours);
        let (m_min, m_max) = cols_of(&comp, Accent::Minutes);
        let (s_min, _) = cols_of(&comp, Accent::Seconds);
        assert!(h_min == 1 && h_max < m_min);
        assert!(m_max < s_min);
    }

    // ── Border ───────────────────────────────────────────────────────

    #[test]
    fn border_surrounds_single_glyph() {
        let comp = compose("8", 1, 1, 20, 20, SPACING).unwrap();
        // Corners just outside the 11×9 box.
        assert!(comp.border.contains(&(0, 0)));
        assert!(comp.border.contains(&(12, 10)));
        // Inside the upper loop of '8', just below the top bar.
        assert!(comp.border.contains(&(1 + 1, 1 + 2)));
        // Centre of the upper loop touches nothing.
        assert_eq!(comp.layer_at(1 + 2, 1 + 4), Layer::Background);
        // Far away is background.
        assert_eq!(comp.layer_at(19, 19), Layer::Background);
    }

    #[test]
    fn border_clipped_at_origin() {
        let comp = compose("0", 0, 0, 20, 20, SPACING).unwrap();
        assert!(comp.border.iter().all(|&(r, c)| r < 20 && c < 20));
        assert!(comp.border.contains(&(11, 0)));
    }

    #[test]
    fn layer_precedence() {
        let comp = compose("1", 0, 0, 20, 20, SPACING).unwrap();
        assert_eq!(comp.layer_at(0, 3), Layer::Highlight(Accent::Hours));
        assert_eq!(comp.layer_at(0, 2), Layer::Border);
        assert_eq!(comp.layer_at(0, 12), Layer::Background);
    }

    // ── Clipping and errors ──────────────────────────────────────────

    #[test]
    fn wide_block_is_clipped_not_rejected() {
        let comp = compose("12:30:45", 5, 10, 40, 30, SPACING).unwrap();
        assert!(comp.highlights.keys().all(|&(_, c)| c < 40));
        assert!(!comp.highlights.is_empty());
    }

    #[test]
    fn block_entirely_off_grid_is_empty() {
        let comp = compose("12:30:45", 50, 50, 40, 30, SPACING).unwrap();
        assert!(comp.highlights.is_empty());
        assert!(comp.border.is_empty());
    }

    #[test]
    fn huge_anchor_does_not_overflow() {
        let comp = compose("12:30:45", usize::MAX, usize::MAX, 40, 30, SPACING).unwrap();
        assert!(comp.highlights.is_empty());
    }

    #[test]
    fn unsupported_character_fails() {
        let err = compose("12-30-45", 0, 0, 120, 30, SPACING).unwrap_err();
        assert!(matches!(err, ClockError::UnsupportedCharacter('-')));
    }

    #[test]
    fn unsupported_character_fails_even_off_grid() {
        assert!(compose("1x", 100, 100, 10, 10, SPACING).is_err());
    }

    #[test]
    fn empty_time_string_is_empty_composition() {
        assert_eq!(
            compose("", 0, 0, 10, 10, SPACING).unwrap(),
            Composition::default()
        );
    }

    // ── Properties ───────────────────────────────────────────────────

    fn time_string() -> impl Strategy<Value = String> {
        (0u32..24, 0u32..60, 0u32..60).prop_map(|(h, m, s)| format!("{h:02}:{m:02}:{s:02}"))
    }

    proptest! {
        #[test]
        fn prop_all_positions_in_bounds(
            time in time_string(),
            anchor_row in 0usize..40,
            anchor_col in 0usize..160,
            width in 1usize..160,
            height in 1usize..40,
        ) {
            let comp = compose(&time, anchor_row, anchor_col, width, height, SPACING).unwrap();
            for &(r, c) in comp.highlights.keys().chain(comp.border.iter()) {
                prop_assert!(r < height && c < width);
            }
        }

        #[test]
        fn prop_layers_disjoint(
            time in time_string(),
            anchor_row in 0usize..20,
            anchor_col in 0usize..40,
        ) {
            let comp = compose(&time, anchor_row, anchor_col, 140, 40, SPACING).unwrap();
            for pos in &comp.border {
                prop_assert!(!comp.highlights.contains_key(pos));
            }
        }

        #[test]
        fn prop_border_touches_a_highlight(
            time in time_string(),
            anchor_row in 0usize..10,
            anchor_col in 0usize..20,
        ) {
            let comp = compose(&time, anchor_row, anchor_col, 130, 30, SPACING).unwrap();
            for &(r, c) in &comp.border {
                prop_assert!(neighbours(r, c).any(|p| comp.highlights.contains_key(&p)));
            }
        }

        #[test]
        fn prop_compose_is_deterministic(
            time in time_string(),
            anchor_row in 0usize..20,
            anchor_col in 0usize..40,
            spacing in 9usize..16,
        ) {
            let a = compose(&time, anchor_row, anchor_col, 150, 35, spacing).unwrap();
            let b = compose(&time, anchor_row, anchor_col, 150, 35, spacing).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
