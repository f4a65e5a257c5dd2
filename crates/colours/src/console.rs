// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Print-style output of markup to a writer.

use std::io::{self, IsTerminal, Write};

use thiserror::Error;

use crate::markup::{render, MarkupError};

/// Errors that can occur while printing markup.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Invalid markup: {0}")]
    Markup(#[from] MarkupError),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// When to emit ANSI styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Style only when writing to a terminal, honouring `NO_COLOR` and `FORCE_COLOR`.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Decide whether to style output given whether the target is a terminal.
    pub fn should_style(self, is_terminal: bool) -> bool {
        self.resolve(
            is_terminal,
            std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
            std::env::var_os("FORCE_COLOR").is_some_and(|v| !v.is_empty()),
        )
    }

    fn resolve(self, is_terminal: bool, no_color: bool, force_color: bool) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto if force_color => true,
            ColorChoice::Auto => is_terminal && !no_color,
        }
    }
}

/// Separator and terminator for [`Console::print_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    pub sep: String,
    pub end: String,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            sep: " ".to_string(),
            end: "\n".to_string(),
        }
    }
}

/// Renders markup items and writes them out, styled or plain.
#[derive(Debug)]
pub struct Console<W> {
    writer: W,
    styled: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout, styled according to `choice` and whether stdout is a terminal.
    pub fn stdout(choice: ColorChoice) -> Self {
        let stdout = io::stdout();
        let styled = choice.should_style(stdout.is_terminal());
        Self::new(stdout, styled)
    }
}

impl<W: Write> Console<W> {
    /// Wrap `writer`; `styled` selects ANSI output over plain text.
    pub fn new(writer: W, styled: bool) -> Self {
        Self { writer, styled }
    }

    /// Whether markup is rendered with ANSI styling.
    pub fn is_styled(&self) -> bool {
        self.styled
    }

    /// Consume the console and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Render each item, join with spaces and end with a newline.
    pub fn print<I, T>(&mut self, items: I) -> Result<(), ConsoleError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        self.print_with(items, &PrintOptions::default())
    }

    /// Like [`Console::print`] with a custom separator and terminator.
    ///
    /// Each item is rendered on its own, so a tag cannot span two items. All
    /// items are rendered before anything is written.
    pub fn print_with<I, T>(&mut self, items: I, options: &PrintOptions) -> Result<(), ConsoleError>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let rendered = items
            .into_iter()
            .map(|item| render(item.as_ref(), self.styled))
            .collect::<Result<Vec<_>, _>>()?;
        let mut line = rendered.join(options.sep.as_str());
        line.push_str(&options.end);
        self.writer.write_all(line.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Write text as-is, without markup rendering.
    pub fn write_raw(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.writer.write_all(text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "console_tests.rs"]
mod tests;
