// SPDX-License-Identifier: MIT
//
// Frame output buffering.
//
// A clock frame is a few thousand styled characters. Every escape and glyph
// for the tick is gathered here and handed to the terminal in one write, so
// the screen never shows a half-drawn second.

use std::io::{self, Write};

/// Worst-case bytes for one styled cell: fg + attrs + char + reset.
const BYTES_PER_CELL: usize = 24;

/// Floor for the initial allocation.
const MIN_CAPACITY: usize = 16_384;

/// Accumulates one frame of terminal bytes and writes it out in one go.
#[derive(Debug)]
pub struct OutputBuffer {
    buf: Vec<u8>,
    frames: u64,
}

impl OutputBuffer {
    /// Create a buffer large enough for a fully styled `cols × rows` frame.
    #[must_use]
    pub fn for_size(cols: u16, rows: u16) -> Self {
        let cells = usize::from(cols) * usize::from(rows);
        Self {
            buf: Vec::with_capacity((cells * BYTES_PER_CELL).max(MIN_CAPACITY)),
            frames: 0,
        }
    }

    /// Frames flushed so far.
    #[inline]
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Write the pending frame to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to stdout fails.
    pub fn flush_stdout(&mut self) -> io::Result<usize> {
        let mut stdout = io::stdout().lock();
        self.flush_to(&mut stdout)
    }

    /// Write the pending frame to `w` and return how many bytes went out.
    /// An empty buffer writes nothing and does not count as a frame.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `w` fails. The pending bytes are kept
    /// so the caller may retry.
    pub fn flush_to(&mut self, w: &mut impl Write) -> io::Result<usize> {
        if self.buf.is_empty() {
            return Ok(0);
        }
        w.write_all(&self.buf)?;
        w.flush()?;
        let written = self.buf.len();
        self.buf.clear();
        self.frames += 1;
        Ok(written)
    }
}

impl Write for OutputBuffer {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    // Bytes only leave through flush_stdout / flush_to.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
