// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.
//!
//! Each command writes through a [`Console`] so tests can run it against an
//! in-memory buffer.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use colours::{count_errors, find_sequences, print_red_error, red_error, remove_ansi};
use colours::{ColorChoice, Colour, Console, ConsoleError, PrintOptions};
use thiserror::Error;

use crate::cli::{Cli, Command};
use crate::output_diagnostic::{print_verbose, print_warning};

/// Errors that can occur while running a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl CommandError {
    /// Whether the error is stdout being closed by its reader.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            CommandError::Io(e) | CommandError::Console(ConsoleError::Io(e)) => {
                e.kind() == io::ErrorKind::BrokenPipe
            }
            _ => false,
        }
    }
}

/// A strip run failed on one side of the copy.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("read failed: {0}")]
    Read(#[source] io::Error),

    #[error(transparent)]
    Write(#[from] ConsoleError),
}

impl StripError {
    /// Attach the input's path to read failures.
    fn at(self, path: &Path) -> CommandError {
        match self {
            StripError::Read(source) => CommandError::Read {
                path: path.to_path_buf(),
                source,
            },
            StripError::Write(e) => CommandError::Console(e),
        }
    }
}

/// Counts from a strip run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StripStats {
    pub lines: usize,
    pub sequences: usize,
    /// Lines that were not valid UTF-8
    pub lossy_lines: usize,
}

impl StripStats {
    fn add(&mut self, other: StripStats) {
        self.lines += other.lines;
        self.sequences += other.sequences;
        self.lossy_lines += other.lossy_lines;
    }
}

/// Run the parsed command against stdout (and stdin for `strip`).
pub fn run(cli: &Cli) -> Result<(), CommandError> {
    let mut console = Console::stdout(ColorChoice::from(cli.color));

    match &cli.command {
        Command::Strip { files } => {
            let stats = strip_files(files, &mut console)?;
            if stats.lossy_lines > 0 {
                print_warning(format_args!(
                    "{} lines were not valid UTF-8; invalid bytes were replaced",
                    stats.lossy_lines
                ));
            }
            if cli.verbose {
                print_verbose(format_args!(
                    "removed {} escape sequences from {} lines",
                    stats.sequences, stats.lines
                ));
            }
        }
        Command::Wrap { colour, text } => wrap(*colour, text, &mut console)?,
        Command::Print {
            colour,
            sep,
            no_newline,
            text,
        } => {
            let options = PrintOptions {
                sep: sep.clone(),
                end: if *no_newline { String::new() } else { "\n".to_string() },
            };
            print(*colour, text, &options, &mut console)?;
        }
        Command::RedError { display, text } => {
            highlight(text, *display, &mut console)?;
            if cli.verbose {
                print_verbose(format_args!(
                    "highlighted {} error words",
                    count_errors(text)
                ));
            }
        }
        Command::List => list(&mut console)?,
    }
    console.flush()?;
    Ok(())
}

/// Strip every line read from `input` and write it to `console` unrendered.
///
/// Escape sequences never span a newline, so working a line at a time gives the
/// same result as stripping the whole input at once. Invalid UTF-8 is replaced
/// with U+FFFD.
pub fn strip<R: BufRead, W: Write>(
    mut input: R,
    console: &mut Console<W>,
) -> Result<StripStats, StripError> {
    let mut stats = StripStats::default();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf).map_err(StripError::Read)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        stats.lines += 1;
        if matches!(line, Cow::Owned(_)) {
            stats.lossy_lines += 1;
        }
        stats.sequences += find_sequences(&line).len();
        console.write_raw(&remove_ansi(&line))?;
    }
    Ok(stats)
}

/// Strip each file in turn; no files, or `-`, means stdin.
pub fn strip_files<W: Write>(
    files: &[PathBuf],
    console: &mut Console<W>,
) -> Result<StripStats, CommandError> {
    let stdin = Path::new("-");
    if files.is_empty() {
        return strip(io::stdin().lock(), console).map_err(|e| e.at(stdin));
    }

    let mut total = StripStats::default();
    for path in files {
        let stats = if path == stdin {
            strip(io::stdin().lock(), console).map_err(|e| e.at(stdin))?
        } else {
            let file = File::open(path).map_err(|source| CommandError::Read {
                path: path.clone(),
                source,
            })?;
            strip(BufReader::new(file), console).map_err(|e| e.at(path))?
        };
        total.add(stats);
    }
    Ok(total)
}

/// Write each text wrapped in `colour`'s tags, one per line.
pub fn wrap<W: Write>(
    colour: Colour,
    text: &[String],
    console: &mut Console<W>,
) -> Result<(), CommandError> {
    for item in text {
        console.write_raw(&colour.wrap(item))?;
        console.write_raw("\n")?;
    }
    Ok(())
}

/// Render the texts as markup, each wrapped in `colour` when one is given.
pub fn print<W: Write>(
    colour: Option<Colour>,
    text: &[String],
    options: &PrintOptions,
    console: &mut Console<W>,
) -> Result<(), CommandError> {
    match colour {
        Some(colour) => console.print_with(text.iter().map(|t| colour.wrap(t)), options)?,
        None => console.print_with(text, options)?,
    }
    Ok(())
}

/// Highlight error names; render them when `display` is set, else print the markup.
pub fn highlight<W: Write>(
    text: &str,
    display: bool,
    console: &mut Console<W>,
) -> Result<String, CommandError> {
    if display {
        return Ok(print_red_error(console, text)?);
    }
    let markup = red_error(text);
    console.write_raw(&markup)?;
    console.write_raw("\n")?;
    Ok(markup)
}

/// One line per colour: name, markup and a rendered sample.
pub fn list<W: Write>(console: &mut Console<W>) -> Result<(), CommandError> {
    for colour in Colour::ALL {
        let line = format!(
            "{:<8} {:<20} {}",
            colour.name(),
            colour.markup(),
            colour.wrap("sample")
        );
        console.print([line])?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
