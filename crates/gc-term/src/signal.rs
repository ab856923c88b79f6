// SPDX-License-Identifier: MIT
#![allow(unsafe_code)]
//
// Asynchronous notifications — terminal resize and shutdown requests.
//
// Each notification is a single `AtomicBool` slot. Signal handlers only
// ever store `true`; the main loop reads-and-clears with `swap(false)` once
// per tick. Writing to an atomic is one of the few operations permitted
// inside a signal handler, so nothing else is touched from that context.
//
// Platforms without SIGWINCH report `false` from `install_resize_handler`
// and the caller is expected to fall back to polling the size every tick.

use std::sync::atomic::{AtomicBool, Ordering};

// ─── Flags ───────────────────────────────────────────────────────────────────

/// Set by the SIGWINCH handler. Read-and-cleared by [`take_resize`].
static RESIZED: AtomicBool = AtomicBool::new(false);

/// Set by the SIGINT/SIGTERM handler. Read by [`shutdown_requested`].
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// Read and clear the resize flag.
///
/// Returns `true` if at least one resize arrived since the last call.
#[inline]
pub fn take_resize() -> bool {
    RESIZED.swap(false, Ordering::Relaxed)
}

/// Raise the resize flag by hand (same effect as a SIGWINCH).
#[cfg(test)]
fn notify_resize() {
    RESIZED.store(true, Ordering::Relaxed);
}

/// Whether an interrupt or termination request has arrived.
#[inline]
#[must_use]
pub fn shutdown_requested() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

/// Request shutdown by hand (same effect as a SIGINT).
#[cfg(test)]
fn request_shutdown() {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[cfg(unix)]
extern "C" fn sigwinch_handler(_sig: libc::c_int) {
    RESIZED.store(true, Ordering::Relaxed);
}

#[cfg(unix)]
extern "C" fn shutdown_handler(_sig: libc::c_int) {
    SHUTDOWN.store(true, Ordering::Relaxed);
}

/// Install `handler` for `sig` with `SA_RESTART`. Returns `false` on failure.
#[cfg(unix)]
fn install(sig: libc::c_int, handler: extern "C" fn(libc::c_int)) -> bool {
    unsafe {
        let mut sa: libc::sigaction = std::mem::zeroed();
        sa.sa_sigaction = handler as *const () as usize;
        sa.sa_flags = libc::SA_RESTART;
        libc::sigemptyset(&raw mut sa.sa_mask);
        libc::sigaction(sig, &raw const sa, std::ptr::null_mut()) == 0
    }
}

/// Install the SIGWINCH handler.
///
/// Returns whether asynchronous resize notification is available. When it
/// is not, the caller must poll the terminal size every tick.
#[cfg(unix)]
pub fn install_resize_handler() -> bool {
    let ok = install(libc::SIGWINCH, sigwinch_handler);
    log::debug!("SIGWINCH handler installed: {ok}");
    ok
}

#[cfg(not(unix))]
pub fn install_resize_handler() -> bool {
    log::debug!("no resize notification on this platform, polling");
    false
}

/// Install SIGINT and SIGTERM handlers that raise the shutdown flag.
///
/// Without these the default disposition would kill the process with the
/// cursor still hidden. Returns whether both handlers are in place.
#[cfg(unix)]
pub fn install_shutdown_handler() -> bool {
    let int = install(libc::SIGINT, shutdown_handler);
    let term = install(libc::SIGTERM, shutdown_handler);
    log::debug!("shutdown handlers installed: SIGINT={int} SIGTERM={term}");
    int && term
}

/// Install Ctrl-C and termination handlers that raise the shutdown flag.
#[cfg(not(unix))]
pub fn install_shutdown_handler() -> bool {
    use signal_hook::consts::{SIGINT, SIGTERM};

    let mut ok = true;
    for sig in [SIGINT, SIGTERM] {
        // The action only stores to an atomic.
        let registered = unsafe {
            signal_hook::low_level::register(sig, || SHUTDOWN.store(true, Ordering::Relaxed))
        };
        if let Err(e) = registered {
            log::debug!("signal {sig} handler not installed: {e}");
            ok = false;
        }
    }
    ok
}

// ─── Tests ───────────────────────────────────────────────────────────────────
