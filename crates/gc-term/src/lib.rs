// SPDX-License-Identifier: MIT
//
// gc-term — Terminal plumbing for glyph-clock.
//
// Everything the clock needs from the terminal and nothing more: ANSI
// escape encoding, a compact cell style, a frame output buffer, size
// queries with a fixed fallback, a screen guard that always gives the
// cursor back, and the async resize/shutdown flags set from signal
// handlers. No raw mode, no input parsing — the clock only draws.

pub mod ansi;
pub mod cell;
pub mod color;
pub mod output;
pub mod signal;
pub mod terminal;
