// SPDX-License-Identifier: MIT
//
// The clock's own source code as background text.
//
// The engine sources are compiled into the binary and minified on startup,
// so the clock draws itself over the code that draws it. Nothing is read
// from disk at runtime.

use gc_core::source::{Minifier, TextSource};

/// Source files embedded at build time, in pipeline order.
const EMBEDDED: &[&str] = &[
    include_str!("main.rs"),
    include_str!("../crates/gc-core/src/controller.rs"),
    include_str!("../crates/gc-core/src/grid.rs"),
    include_str!("../crates/gc-core/src/compose.rs"),
    include_str!("../crates/gc-core/src/frame.rs"),
];

/// Text source backed by the clock's own minified source.
pub struct OwnSource {
    minifier: Minifier,
}

impl OwnSource {
    /// Wrap a compiled minifier.
    pub const fn new(minifier: Minifier) -> Self {
        Self { minifier }
    }
}

impl TextSource for OwnSource {
    fn background_text(&self) -> String {
        EMBEDDED
            .iter()
            .map(|src| self.minifier.minify(src))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn own() -> OwnSource {
        OwnSource::new(Minifier::new().unwrap())
    }

    #[test]
    fn own_source_is_not_empty() {
        assert!(!own().background_text().is_empty());
    }

    #[test]
    fn own_source_is_one_line_without_comments() {
        let text = own().background_text();
        assert!(!text.contains('\n'));
        assert!(!text.contains("SPDX-License-Identifier"));
        assert!(text.contains("fn main"));
    }
}
