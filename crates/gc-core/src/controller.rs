// SPDX-License-Identifier: MIT
//
// Adaptation controller — decides, once per tick, what the screen shows.
//
// Two states:
//
//   Inadequate → terminal below the minimum; no grid, size warning shown.
//   Adequate   → grid current; clock composited over it.
//
// The grid is the expensive part (it re-tiles the whole background), so it
// is built only when entering `Adequate` and when a resize has been signalled
// *and* the grid dimensions actually changed. Without async resize
// notification every tick counts as "maybe resized", which turns the signal
// check into a cheap dimension comparison.
//
// Everything time-dependent (highlights, border) is recomputed every tick.

use gc_term::terminal::{self, Size};

use crate::compose::{self, SPACING, TIME_SPAN};
use crate::config::ClockConfig;
use crate::error::{ClockError, Result};
use crate::frame::{self, Frame, Palette, Tone, WarningLine};
use crate::grid::{self, Grid};
use crate::source::{self, TextSource};

// ─── State ───────────────────────────────────────────────────────────────────

/// Whether the terminal is large enough to draw the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// Size meets the minimum; grid is current.
    Adequate,
    /// Size below the minimum; warning shown, no grid.
    Inadequate,
}

/// Grid size and where the `HH:MM:SS` block sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: usize,
    pub height: usize,
    pub anchor_row: usize,
    pub anchor_col: usize,
}

impl Viewport {
    /// Center the time block on a `width × height` grid, keeping at least
    /// 5 columns on the left and 1 row on top.
    #[must_use]
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            anchor_row: (height / 2).saturating_sub(5).max(1),
            anchor_col: (width.saturating_sub(TIME_SPAN) / 2).max(5),
        }
    }
}

// ─── Controller ──────────────────────────────────────────────────────────────

/// Per-tick state machine driving grid rebuilds and frame composition.
pub struct Controller {
    config: ClockConfig,
    palette: Palette,
    filler: String,
    /// Whether resize notifications arrive asynchronously. When `false`,
    /// every tick re-checks the size.
    resize_notify: bool,
    state: DisplayState,
    grid: Option<Grid>,
    viewport: Option<Viewport>,
    rebuilds: u64,
}

impl Controller {
    /// Create a controller over already-prepared filler text.
    ///
    /// Starts `Inadequate`; the first adequate tick always builds the grid.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::EmptySource`] if `filler` is empty.
    pub fn new(config: ClockConfig, filler: String, resize_notify: bool) -> Result<Self> {
        if filler.is_empty() {
            return Err(ClockError::EmptySource);
        }
        Ok(Self {
            config,
            palette: Palette::default(),
            filler,
            resize_notify,
            state: DisplayState::Inadequate,
            grid: None,
            viewport: None,
            rebuilds: 0,
        })
    }

    /// Create a controller, pulling and preparing filler from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::EmptySource`] if the source yields no text.
    pub fn from_source<S: TextSource + ?Sized>(
        config: ClockConfig,
        source: &S,
        resize_notify: bool,
    ) -> Result<Self> {
        let filler = source::prepare_filler(source, config.filler_floor)?;
        Self::new(config, filler, resize_notify)
    }

    /// Current display state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> DisplayState {
        self.state
    }

    /// The current background grid, if adequate.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// How many times the grid has been built.
    #[inline]
    #[must_use]
    pub const fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    /// Advance one tick.
    ///
    /// `size` is the current terminal size, `resized` whether a resize was
    /// signalled since the last tick, and `time` the `HH:MM:SS` to draw.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::UnsupportedCharacter`] if `time` holds anything
    /// other than digits and colons.
    pub fn tick(&mut self, size: Size, resized: bool, time: &str) -> Result<Frame> {
        if !size.covers(self.config.min_size) {
            if self.state == DisplayState::Adequate {
                log::debug!("terminal shrank to {}x{}, showing warning", size.cols, size.rows);
            }
            self.state = DisplayState::Inadequate;
            self.grid = None;
            self.viewport = None;
            return Ok(frame::render_warning(
                &self.warning_lines(size),
                size.cols,
                size.rows,
            ));
        }

        let resized = resized || !self.resize_notify;
        let (width, height) = self.config.grid_dims(size);
        let rebuild = match &self.grid {
            None => true,
            Some(grid) => resized && grid.dims() != (width, height),
        };

        if rebuild {
            self.grid = Some(grid::build_grid(&self.filler, width, height)?);
            self.viewport = Some(Viewport::centered(width, height));
            self.rebuilds += 1;
            log::debug!("grid rebuilt at {width}x{height} (#{})", self.rebuilds);
        }
        self.state = DisplayState::Adequate;

        let (Some(grid), Some(view)) = (&self.grid, self.viewport) else {
            return Ok(Frame::default());
        };

        let comp = compose::compose(
            time,
            view.anchor_row,
            view.anchor_col,
            view.width,
            view.height,
            SPACING,
        )?;
        let lines = frame::render(grid, &comp, &self.palette);
        Ok(Frame::from_rows(lines, rebuild))
    }

    /// Lines of the size warning for a terminal of `size`.
    #[must_use]
    pub fn warning_lines(&self, size: Size) -> Vec<WarningLine> {
        let min = self.config.min_size;
        let mut lines = vec![
            WarningLine::blank(),
            WarningLine::new("⚠  TERMINAL TOO SMALL  ⚠", Tone::Title),
            WarningLine::blank(),
            WarningLine::new(format!("Current size: {} x {}", size.cols, size.rows), Tone::Size),
            WarningLine::new(
                format!("Required minimum: {} x {}", min.cols, min.rows),
                Tone::Size,
            ),
            WarningLine::new(
                format!("Operating System: {}", terminal::os_name()),
                Tone::System,
            ),
            WarningLine::blank(),
        ];

        if !self.resize_notify {
            lines.extend([
                WarningLine::new("⚠  Auto-resize detection not supported on this OS", Tone::Notice),
                WarningLine::new(
                    "Manual terminal refresh may be needed after resizing",
                    Tone::Notice,
                ),
                WarningLine::blank(),
            ]);
        }

        lines.extend([
            WarningLine::blank(),
            WarningLine::new("Please resize your terminal window", Tone::Body),
            WarningLine::new("to view the ASCII clock properly.", Tone::Body),
            WarningLine::blank(),
            WarningLine::new("The clock will appear automatically", Tone::Body),
            WarningLine::new("when the terminal size is adequate.", Tone::Body),
            WarningLine::blank(),
        ]);
        lines
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
