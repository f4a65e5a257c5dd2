// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Highlighting of error names in free text.

use regex::Regex;
use std::io::Write;
use std::sync::LazyLock;

use crate::colour::Colour;
use crate::console::{Console, ConsoleError};

/// A word containing "error" in any case, with an optional trailing colon.
static ERROR_WORD: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(?i)\w*error\w*:?").expect("error word pattern is invalid")
});

/// Wrap every error-like word in bold red tags.
///
/// ```
/// use colours::red_error;
///
/// assert_eq!(
///     red_error("This is a ValueError."),
///     "This is a [bold red]ValueError[/bold red]."
/// );
/// ```
pub fn red_error(text: &str) -> String {
    ERROR_WORD
        .replace_all(text, |caps: &regex::Captures<'_>| Colour::BoldRed.wrap(&caps[0]))
        .into_owned()
}

/// Number of error-like words [`red_error`] would highlight in `text`.
pub fn count_errors(text: &str) -> usize {
    ERROR_WORD.find_iter(text).count()
}

/// Highlight `text`, print it to `console` and return the highlighted markup.
pub fn print_red_error<W: Write>(
    console: &mut Console<W>,
    text: &str,
) -> Result<String, ConsoleError> {
    let highlighted = red_error(text);
    console.print([highlighted.as_str()])?;
    Ok(highlighted)
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod tests;
