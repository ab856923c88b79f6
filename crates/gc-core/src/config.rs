// SPDX-License-Identifier: MIT
//
// Clock configuration.
//
// Fixed at startup. The only knobs that matter are the grid dimensions —
// the minimum terminal size and the margin carved off each axis — plus
// the tick period and the floor length the background text is grown to.

use std::time::Duration;

use gc_term::terminal::Size;

/// Minimum terminal width (columns) for the clock to draw.
pub const MIN_WIDTH: u16 = 100;

/// Minimum terminal height (rows) for the clock to draw.
pub const MIN_HEIGHT: u16 = 25;

/// Timing and sizing configuration for the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockConfig {
    /// Smallest terminal the clock will draw in. Anything smaller shows the
    /// size warning instead.
    pub min_size: Size,

    /// Cells subtracted from each terminal axis to get the grid size.
    ///
    /// Leaves room for the cursor on the last line so the final row never
    /// scrolls the screen.
    pub margin: u16,

    /// Time between frames.
    pub tick: Duration,

    /// Length the background text is grown to before tiling.
    pub filler_floor: usize,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            min_size: Size::new(MIN_WIDTH, MIN_HEIGHT),
            margin: 2,
            tick: Duration::from_secs(1),
            filler_floor: 20_000,
        }
    }
}

impl ClockConfig {
    /// Grid dimensions `(width, height)` for a terminal of `size`.
    ///
    /// Saturates at zero; callers only build grids for adequate sizes.
    #[must_use]
    pub const fn grid_dims(&self, size: Size) -> (usize, usize) {
        (
            size.cols.saturating_sub(self.margin) as usize,
            size.rows.saturating_sub(self.margin) as usize,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClockConfig::default();
        assert_eq!(config.min_size, Size::new(100, 25));
        assert_eq!(config.margin, 2);
        assert_eq!(config.tick, Duration::from_secs(1));
        assert_eq!(config.filler_floor, 20_000);
    }

    #[test]
    fn grid_dims_subtract_margin() {
        let config = ClockConfig::default();
        assert_eq!(config.grid_dims(Size::new(120, 30)), (118, 28));
    }

    #[test]
    fn grid_dims_saturate() {
        let config = ClockConfig::default();
        assert_eq!(config.grid_dims(Size::new(1, 0)), (0, 0));
    }
}
