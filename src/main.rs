// SPDX-License-Identifier: MIT
//
// glyph-clock — a live block-digit clock drawn over its own source code.
//
// This is the main binary that wires together the two crates:
//
//   gc-term → terminal size, escape output, resize/shutdown signals
//   gc-core → grid tiling, glyph compositing, frame rendering, state machine
//
// One tick per second:
//
//   signals → size query → controller.tick → frame → output buffer → stdout
//
// Exit paths: SIGINT/SIGTERM end the loop normally (exit 0). Any error
// restores the terminal, prints a short diagnostic, and exits 1.

mod source;

use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use chrono::Local;
use log::{debug, error, info, warn};

use gc_core::source::Minifier;
use gc_core::{ClockConfig, Controller};
use gc_term::output::OutputBuffer;
use gc_term::signal;
use gc_term::terminal::{self, Terminal};

use crate::source::OwnSource;

/// Longest uninterrupted sleep; bounds how long a shutdown request waits.
const SLEEP_SLICE: Duration = Duration::from_millis(50);

// ─── Loop ───────────────────────────────────────────────────────────────────

/// Run ticks until a shutdown is requested.
fn run(term: &mut Terminal, clock: &mut Controller, tick: Duration) -> anyhow::Result<()> {
    let initial = term.size();
    let mut out = OutputBuffer::for_size(initial.cols, initial.rows);

    while !signal::shutdown_requested() {
        let started = Instant::now();

        let resized = signal::take_resize();
        let size = term.refresh_size();
        let now = Local::now().format("%H:%M:%S").to_string();

        let frame = clock
            .tick(size, resized, &now)
            .with_context(|| format!("composing frame for {now}"))?;
        frame.write_to(&mut out)?;
        out.flush_stdout().context("writing frame to terminal")?;

        sleep_until(started + tick);
    }

    info!("shutdown requested after {} frames", out.frames());
    Ok(())
}

/// Sleep until `deadline`, waking early if shutdown is requested.
fn sleep_until(deadline: Instant) {
    loop {
        if signal::shutdown_requested() {
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::sleep((deadline - now).min(SLEEP_SLICE));
    }
}

/// Build the controller and terminal, then run the loop.
fn start(term: &mut Terminal) -> anyhow::Result<()> {
    let config = ClockConfig::default();
    let resize_notify = signal::install_resize_handler();
    if !signal::install_shutdown_handler() {
        warn!("interrupt handler not installed; Ctrl-C may leave the cursor hidden");
    }

    let minifier = Minifier::new().context("compiling source minifier")?;
    let mut clock = Controller::from_source(config, &OwnSource::new(minifier), resize_notify)
        .context("preparing background text")?;
    debug!(
        "min size {}x{}, resize notification: {resize_notify}",
        config.min_size.cols, config.min_size.rows
    );

    term.enter().context("taking over the terminal")?;
    run(term, &mut clock, config.tick)
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_micros()
        .init();

    let mut term = Terminal::new();
    let result = start(&mut term);

    // Restore before printing anything so the message lands on a sane screen.
    let restored = term.leave();

    match (result, restored) {
        (Ok(()), Ok(())) => ExitCode::SUCCESS,
        (Err(e), _) => {
            error!("fatal: {e:#}");
            eprintln!("Error: {e:#}");
            eprintln!("OS: {}", terminal::os_name());
            eprintln!("Please check terminal compatibility and try again.");
            ExitCode::FAILURE
        }
        (Ok(()), Err(e)) => {
            eprintln!("Error: failed to restore terminal: {e}");
            eprintln!("OS: {}", terminal::os_name());
            ExitCode::FAILURE
        }
    }
}
