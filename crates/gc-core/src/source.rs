// SPDX-License-Identifier: MIT
//
// Background text — where the filler comes from and how it is prepared.
//
// The engine only asks a `TextSource` for a string. How that string was made
// (embedded source code, a file, a constant) is the provider's business.
// Before tiling, the text is normalized so that every character occupies
// exactly one terminal column, then grown by self-doubling to a floor length
// so a typical grid is covered without wrapping.

use regex::{Captures, Regex};
use unicode_width::UnicodeWidthChar;

use crate::error::{ClockError, Result};

// ─── TextSource ──────────────────────────────────────────────────────────────

/// Something that can supply background filler text.
pub trait TextSource {
    /// The raw filler text. May be any length, including empty (which the
    /// engine rejects).
    fn background_text(&self) -> String;
}

/// A fixed string as a text source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticText(pub String);

impl TextSource for StaticText {
    fn background_text(&self) -> String {
        self.0.clone()
    }
}

// ─── Minifier ────────────────────────────────────────────────────────────────

/// Collapses Rust source into a single line of code without comments.
///
/// Line comments (including doc comments) and block comments are removed,
/// every line is trimmed, blank lines are dropped, and the survivors are
/// joined with single spaces. String and char literals are matched first
/// and kept as they are, so `"http://x"` survives. Raw strings are not
/// recognized.
#[derive(Debug, Clone)]
pub struct Minifier {
    lexemes: Regex,
}

/// Lexemes the minifier recognizes, in match priority order. Literals are
/// kept; comments are dropped.
const LEXEMES: &str = concat!(
    r#""(?:[^"\\]|\\(?s:.))*""#,
    "|",
    r"'(?:[^'\\\n]|\\x[0-9a-fA-F]{2}|\\u\{[0-9a-fA-F]{1,6}\}|\\.)'",
    "|",
    r"(?s:/\*.*?\*/)",
    "|",
    r"//[^\n]*",
);

impl Minifier {
    /// Compile the lexeme pattern.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Pattern`] if the pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            lexemes: Regex::new(LEXEMES)?,
        })
    }

    /// Minify `source`.
    #[must_use]
    pub fn minify(&self, source: &str) -> String {
        let stripped = self.lexemes.replace_all(source, |caps: &Captures<'_>| {
            let lexeme = &caps[0];
            let kept = if lexeme.starts_with('/') { "" } else { lexeme };
            kept.to_owned()
        });
        stripped
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

// ─── Preparation ─────────────────────────────────────────────────────────────

/// Replace every character that is not exactly one column wide (controls,
/// tabs, wide CJK, zero-width marks) with a space.
#[must_use]
pub fn single_width(text: &str) -> String {
    text.chars()
        .map(|c| if !c.is_control() && c.width() == Some(1) { c } else { ' ' })
        .collect()
}

/// Grow `text` to at least `floor` characters by repeatedly appending a
/// space and a copy of itself. Empty text is returned unchanged.
#[must_use]
pub fn grow(mut text: String, floor: usize) -> String {
    let mut len = text.chars().count();
    if len == 0 {
        return text;
    }
    while len < floor {
        let copy = text.clone();
        text.push(' ');
        text.push_str(&copy);
        len = len * 2 + 1;
    }
    text
}

/// Fetch, normalize, and grow the filler from `source`.
///
/// # Errors
///
/// Returns [`ClockError::EmptySource`] if the provider yields no text.
pub fn prepare_filler<S: TextSource + ?Sized>(source: &S, floor: usize) -> Result<String> {
    let text = single_width(&source.background_text());
    if text.is_empty() {
        return Err(ClockError::EmptySource);
    }
    let text = grow(text, floor);
    log::debug!("prepared {} chars of background text", text.chars().count());
    Ok(text)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
