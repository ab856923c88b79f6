// SPDX-License-Identifier: MIT
//
// End-to-end scenarios through the public API: filler in, frames out.

use gc_core::compose::{self, Accent, SPACING};
use gc_core::grid::build_grid;
use gc_core::source::StaticText;
use gc_core::{ClockConfig, ClockError, Controller, DisplayState};
use gc_term::terminal::Size;
use pretty_assertions::assert_eq;

#[test]
fn two_letter_filler_tiles_across_rows() {
    let grid = build_grid("AB", 120, 30).unwrap();
    let row = "AB".repeat(60);
    assert_eq!(grid.row_string(0), row);
    assert_eq!(grid.row_string(1), row);
}

#[test]
fn time_block_lands_at_anchor() {
    let comp = compose::compose("12:30:45", 5, 10, 120, 30, SPACING).unwrap();

    // '1' sits in rows 5..=15, columns 10..=18.
    let one: Vec<_> = comp.highlights.keys().filter(|&&(_, c)| c <= 18).collect();
    assert!(one.iter().all(|&&(r, c)| (5..=15).contains(&r) && c >= 10));
    assert!(one.iter().any(|&&(_, c)| c == 10));
    assert!(one.iter().any(|&&(_, c)| c == 18));

    // Slot 2 (colon) sits in columns 34..=42.
    let colon: Vec<_> = comp
        .highlights
        .iter()
        .filter(|(_, a)| **a == Accent::Separator)
        .map(|(p, _)| *p)
        .filter(|&(_, c)| c < 46)
        .collect();
    assert!(!colon.is_empty());
    assert!(colon.iter().all(|&(_, c)| (34..=42).contains(&c)));
}

#[test]
fn small_terminal_shows_warning_and_no_grid() {
    let mut clock =
        Controller::from_source(ClockConfig::default(), &StaticText("fn main() {}".into()), true)
            .unwrap();

    let frame = clock.tick(Size::new(79, 24), false, "09:15:00").unwrap();

    assert_eq!(clock.state(), DisplayState::Inadequate);
    assert!(clock.grid().is_none());
    let text = frame.plain_lines().join("\n");
    assert!(text.contains("79 x 24"));
    assert!(text.contains("100 x 25"));
    assert!(frame.lines.iter().all(|&(row, _)| row < 24));
}

#[test]
fn resize_between_ticks_rebuilds_exactly_once() {
    let mut clock =
        Controller::from_source(ClockConfig::default(), &StaticText("let x = 1;".into()), true)
            .unwrap();

    clock.tick(Size::new(120, 30), false, "23:59:58").unwrap();
    assert_eq!(clock.rebuilds(), 1);

    let frame = clock.tick(Size::new(150, 40), true, "23:59:59").unwrap();
    assert_eq!(clock.rebuilds(), 2);
    assert!(frame.clear);
    assert_eq!(frame.lines.len(), 38);

    for second in 0..5 {
        let frame = clock
            .tick(Size::new(150, 40), false, &format!("00:00:0{second}"))
            .unwrap();
        assert!(!frame.clear);
    }
    assert_eq!(clock.rebuilds(), 2);
}

#[test]
fn frames_cover_the_grid_with_filler_text() {
    let mut clock =
        Controller::new(ClockConfig::default(), "xyz".into(), true).unwrap();
    let frame = clock.tick(Size::new(102, 27), false, "10:10:10").unwrap();

    let plain = frame.plain_lines();
    assert_eq!(plain.len(), 25);
    assert!(plain.iter().all(|line| line.chars().count() == 100));
    assert_eq!(&plain[0][..6], "xyzxyz");
    // Row 1 continues where row 0 left off (100 % 3 == 1).
    assert_eq!(&plain[1][..3], "yzx");
}

#[test]
fn empty_source_is_rejected() {
    let err = Controller::from_source(ClockConfig::default(), &StaticText(String::new()), true)
        .err()
        .unwrap();
    assert!(matches!(err, ClockError::EmptySource));
}
