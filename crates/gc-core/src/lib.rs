//! # gc-core — the clock engine behind glyph-clock
//!
//! Renders the time as block-digit art over a tiled background of arbitrary
//! text, adapting to the terminal size every tick.
//!
//! # Pipeline
//!
//! ```text
//! TextSource ──prepare──▶ filler text
//!     │
//!     ▼
//! controller.rs: size check → (maybe) rebuild grid → compose → render
//!     │                         │                     │          │
//!     │                     grid.rs            compose.rs    frame.rs
//!     │                  (tile filler)      (glyph.rs lookups,  (layer
//!     │                                      highlight + halo)  precedence)
//!     ▼
//! Frame ──write_to──▶ terminal
//! ```
//!
//! The compositor works in tags (`Accent`, `Layer`); only `frame` knows about
//! escape codes, and only the binary touches the real terminal.

// Grid math mixes usize cell indices with u16 terminal sizes.
#![allow(clippy::cast_possible_truncation)]
// Module-qualified names (`grid::Grid`, `frame::Frame`) read better here.
#![allow(clippy::module_name_repetitions)]

pub mod compose;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod glyph;
pub mod grid;
pub mod source;

pub use config::ClockConfig;
pub use controller::{Controller, DisplayState};
pub use error::{ClockError, Result};
