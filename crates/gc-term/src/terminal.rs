// SPDX-License-Identifier: MIT
//
// Terminal control — size queries, platform identification, and RAII cleanup.
//
// Safety: This module necessarily uses `unsafe` for ioctl (TIOCGWINSZ) and
// raw fd writes. These are the standard POSIX interfaces for terminal
// control — there is no safe alternative. Each unsafe block is minimal.
#![allow(unsafe_code)]
//
// The clock never enters raw mode: Ctrl-C must still reach us as SIGINT.
// What it does own is cursor visibility and the screen contents, and both
// must be put back on every exit path. `Terminal` restores them on drop,
// and a panic hook writes a pre-built restore sequence straight to fd 1 so
// a panic mid-frame (while stdout is locked) cannot leave the cursor hidden.

use std::io::{self, Write};
use std::sync::Once;

use crate::ansi;

// ─── Size ───────────────────────────────────────────────────────────────────

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    /// Number of columns (width in character cells).
    pub cols: u16,
    /// Number of rows (height in character cells).
    pub rows: u16,
}

impl Size {
    /// Size used when the terminal cannot be queried.
    pub const FALLBACK: Self = Self { cols: 80, rows: 24 };

    /// Construct a size.
    #[inline]
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Whether both dimensions are at least those of `min`.
    #[inline]
    #[must_use]
    pub const fn covers(self, min: Self) -> bool {
        self.cols >= min.cols && self.rows >= min.rows
    }
}

// ─── Terminal Queries ───────────────────────────────────────────────────────

/// Query the current terminal size via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
#[must_use]
pub fn probe_size() -> Option<Size> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(Size {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

/// Query the console size through crossterm.
///
/// Returns `None` if there is no console or it reports a zero dimension.
#[cfg(not(unix))]
#[must_use]
pub fn probe_size() -> Option<Size> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => Some(Size { cols, rows }),
        Ok(_) => None,
        Err(e) => {
            log::debug!("console size query failed: {e}");
            None
        }
    }
}

/// Query the terminal size, substituting [`Size::FALLBACK`] on failure.
///
/// A failed query is recovered here and never surfaced to the caller.
#[must_use]
pub fn query_size() -> Size {
    probe_size().unwrap_or_else(|| {
        log::debug!("terminal size query failed, using {:?}", Size::FALLBACK);
        Size::FALLBACK
    })
}

/// Human-readable operating system name for diagnostics.
#[must_use]
pub fn os_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Darwin",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
}

// ─── Panic-Safe Terminal Restore ────────────────────────────────────────────

/// Terminal restore sequence for emergency use: reset SGR attributes, then
/// show the cursor.
const EMERGENCY_RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";

/// Panic hook guard — ensures the hook is installed at most once per process.
static PANIC_HOOK_INSTALLED: Once = Once::new();

/// Install a panic hook that restores the cursor before printing the error.
fn install_panic_hook() {
    PANIC_HOOK_INSTALLED.call_once(|| {
        let original = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            emergency_restore();
            original(info);
        }));
    });
}

/// Write the restore sequence directly to stdout's file descriptor.
///
/// Bypasses Rust's `io::stdout()` lock to avoid deadlocking if the panic
/// occurred while the lock was held (e.g., mid-frame flush).
fn emergency_restore() {
    #[cfg(unix)]
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            EMERGENCY_RESTORE.as_ptr().cast::<libc::c_void>(),
            EMERGENCY_RESTORE.len(),
        );
    }

    #[cfg(not(unix))]
    {
        let _ = io::stdout().write_all(EMERGENCY_RESTORE);
        let _ = io::stdout().flush();
    }
}

// ─── Terminal ───────────────────────────────────────────────────────────────

/// Terminal handle with RAII cleanup.
///
/// [`enter`](Self::enter) hides the cursor and clears the screen;
/// [`leave`](Self::leave) resets attributes, clears, and shows the cursor
/// again. Dropping an entered handle leaves automatically.
///
/// ```no_run
/// use gc_term::terminal::Terminal;
///
/// let mut term = Terminal::new();
/// term.enter()?;
/// // ... draw frames ...
/// // Cursor restored automatically on drop.
/// # Ok::<(), std::io::Error>(())
/// ```
pub struct Terminal {
    size: Size,
    active: bool,
}

impl Terminal {
    /// Create a terminal handle and query the current size.
    ///
    /// Does **not** touch the screen — call [`enter`](Self::enter) for that.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: query_size(),
            active: false,
        }
    }

    /// Last queried terminal size.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Re-query the terminal size from the OS and cache it.
    pub fn refresh_size(&mut self) -> Size {
        self.size = query_size();
        self.size
    }

    /// Take over the screen: hide the cursor and clear.
    ///
    /// Idempotent: calling `enter()` while already active is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal output fails.
    pub fn enter(&mut self) -> io::Result<()> {
        if self.active {
            return Ok(());
        }

        install_panic_hook();

        #[cfg(windows)]
        if !crossterm::ansi_support::supports_ansi() {
            log::warn!("console does not report ANSI escape support");
        }

        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::cursor_hide(&mut lock)?;
        ansi::clear_screen(&mut lock)?;
        ansi::cursor_home(&mut lock)?;
        lock.flush()?;

        self.active = true;
        Ok(())
    }

    /// Give the screen back: reset attributes, clear, show the cursor.
    ///
    /// Idempotent: calling `leave()` while inactive is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal output fails.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        let stdout = io::stdout();
        let mut lock = stdout.lock();
        ansi::reset(&mut lock)?;
        ansi::clear_screen(&mut lock)?;
        ansi::cursor_home(&mut lock)?;
        ansi::cursor_show(&mut lock)?;
        lock.flush()?;

        self.active = false;
        Ok(())
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if self.active {
            let _ = self.leave();
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Size ──────────────────────────────────────────────────────────

    #[test]
    fn size_covers_minimum() {
        let min = Size::new(100, 25);
        assert!(Size::new(100, 25).covers(min));
        assert!(Size::new(150, 40).covers(min));
        assert!(!Size::new(79, 24).covers(min));
        assert!(!Size::new(99, 40).covers(min));
        assert!(!Size::new(200, 24).covers(min));
    }

    #[test]
    fn fallback_is_80_by_24() {
        assert_eq!(Size::FALLBACK, Size::new(80, 24));
    }

    // ── Queries ───────────────────────────────────────────────────────

    #[test]
    fn probe_size_does_not_panic() {
        let _ = probe_size();
    }

    #[test]
    fn query_size_is_never_zero() {
        let s = query_size();
        assert!(s.cols > 0);
        assert!(s.rows > 0);
    }

    #[cfg(not(unix))]
    #[test]
    fn console_size_comes_from_the_console() {
        match crossterm::terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => {
                assert_eq!(probe_size(), Some(Size::new(cols, rows)));
                assert_eq!(query_size(), Size::new(cols, rows));
            }
            _ => assert_eq!(probe_size(), None),
        }
    }

    #[test]
    fn os_name_is_not_empty() {
        assert!(!os_name().is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn os_name_linux() {
        assert_eq!(os_name(), "Linux");
    }

    // ── Emergency restore sequence ────────────────────────────────────

    #[test]
    fn emergency_restore_shows_cursor_last() {
        let s = std::str::from_utf8(EMERGENCY_RESTORE).unwrap();
        assert!(s.starts_with("\x1b[0m"));
        assert!(s.ends_with("\x1b[?25h"));
    }

    // ── Terminal struct ───────────────────────────────────────────────

    #[test]
    fn terminal_new_is_inactive() {
        let term = Terminal::new();
        assert!(!term.active);
        assert!(term.size().cols > 0);
    }

    #[test]
    fn terminal_enter_leave_cycle() {
        let mut term = Terminal::new();
        term.enter().unwrap();
        assert!(term.active);
        term.enter().unwrap();
        assert!(term.active);
        term.leave().unwrap();
        assert!(!term.active);
        term.leave().unwrap();
        assert!(!term.active);
    }

    #[test]
    fn terminal_drop_after_enter() {
        let mut term = Terminal::new();
        term.enter().unwrap();
        drop(term);
    }

    #[test]
    fn terminal_refresh_size() {
        let mut term = Terminal::new();
        let s = term.refresh_size();
        assert_eq!(s, term.size());
    }
}
