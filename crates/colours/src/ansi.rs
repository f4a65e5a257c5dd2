// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence removal.
//!
//! Recognises the single-character "Fe" escapes (`ESC @` through `ESC _`,
//! excluding `ESC [`) and full CSI sequences (`ESC [`, parameter bytes
//! `0x30-0x3F`, intermediate bytes `0x20-0x2F`, one final byte `0x40-0x7E`).
//! Anything else, including a CSI cut off before its final byte, is left alone.

use regex::Regex;
use std::sync::LazyLock;

/// Matches one Fe escape or one complete CSI sequence.
///
/// The pattern is a constant, so construction cannot fail at runtime.
static ANSI_ESCAPE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])").expect("ANSI escape pattern is invalid")
});

/// Remove every ANSI escape sequence from `text`.
///
/// Matches are found left to right without overlap and deleted whole; all
/// other characters, newlines included, come through unchanged and in order.
/// A single pass is made: deleting a sequence can leave a stray ESC next to
/// text that now reads as a sequence, and that new sequence is kept.
pub fn remove_ansi(text: &str) -> String {
    ANSI_ESCAPE.replace_all(text, "").into_owned()
}

/// Whether `text` contains at least one ANSI escape sequence.
pub fn contains_ansi(text: &str) -> bool {
    ANSI_ESCAPE.is_match(text)
}

/// Every escape sequence in `text`, paired with the byte offset it starts at.
pub fn find_sequences(text: &str) -> Vec<(usize, &str)> {
    ANSI_ESCAPE
        .find_iter(text)
        .map(|m| (m.start(), m.as_str()))
        .collect()
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod tests;
