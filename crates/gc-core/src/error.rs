// SPDX-License-Identifier: MIT
//
// Error taxonomy for the clock engine.
//
// Only genuinely fatal conditions live here. A failed terminal size query is
// recovered in `gc_term::terminal::query_size`, and a too-small terminal is a
// display state (`controller::DisplayState::Inadequate`), not an error.

use std::io;

/// Errors produced by the clock engine.
#[derive(thiserror::Error, Debug)]
pub enum ClockError {
    /// A character outside `0-9` and `:` was asked to render as a glyph.
    #[error("no glyph for character {0:?}")]
    UnsupportedCharacter(char),

    /// The background text provider returned an empty string.
    #[error("background text is empty")]
    EmptySource,

    /// A built-in text pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing a frame to the terminal failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Result alias for clock engine operations.
pub type Result<T> = std::result::Result<T, ClockError>;
