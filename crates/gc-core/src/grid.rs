// SPDX-License-Identifier: MIT
//
// Background grid — the filler text tiled over every cell of the display.
//
// Flat `Vec<char>` with row-major indexing: `index = row * width + col`.
// Rows are contiguous, so the frame renderer's left-to-right scan is linear.
//
// Tiling: one cursor walks the filler text for the whole grid, wrapping to
// the start when it runs off the end. The cursor does not restart per row,
// and a text that ends exactly on the last cell simply wraps for the next
// build — every cell is always populated.

use crate::error::{ClockError, Result};

/// A `height × width` grid of display characters.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    /// `(width, height)`.
    #[inline]
    #[must_use]
    pub const fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// One row's characters. Empty slice past the last row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[char] {
        if row < self.height {
            &self.cells[row * self.width..(row + 1) * self.width]
        } else {
            &[]
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // `chunks_exact(0)` panics; a zero-width grid has no visible rows.
        self.cells.chunks_exact(self.width.max(1))
    }

    /// One row as a `String` (handy for tests and debugging).
    #[must_use]
    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().collect()
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Tile `filler` over a `width × height` grid, row-major, wrapping.
///
/// Deterministic for identical inputs. Cell `k` (row-major) holds
/// `filler[k % len]`, counting in `char`s. A zero dimension yields an
/// empty grid.
///
/// # Errors
///
/// Returns [`ClockError::EmptySource`] if `filler` is empty — tiling an
/// empty source would never make progress.
pub fn build_grid(filler: &str, width: usize, height: usize) -> Result<Grid> {
    let source: Vec<char> = filler.chars().collect();
    if source.is_empty() {
        return Err(ClockError::EmptySource);
    }

    let total = width * height;
    let mut cells = Vec::with_capacity(total);
    let mut cursor = 0;
    for _ in 0..total {
        cells.push(source[cursor]);
        cursor += 1;
        if cursor == source.len() {
            cursor = 0;
        }
    }

    log::debug!(
        "built {width}x{height} grid from {} chars of filler",
        source.len()
    );

    Ok(Grid {
        width,
        height,
        cells,
    })
}

// ─── Tests ───────────────────────────────────────────────────────────────────
