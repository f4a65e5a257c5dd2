// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use colours::{ColorChoice, Colour};

/// Colour markup and ANSI escape utilities
#[derive(Parser, Debug)]
#[command(name = "colours", version, about = "Colour markup and ANSI escape utilities")]
pub struct Cli {
    /// When to style output
    #[arg(long, value_enum, global = true, env = "COLOURS_COLOR", default_value = "auto")]
    pub color: CliColorChoice,

    /// Report what each command did on stderr
    #[arg(short, long, global = true, env = "COLOURS_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Remove ANSI escape sequences from files (or stdin) and write the text to stdout
    Strip {
        /// Files to read; `-` or no files reads stdin
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Print each text wrapped in colour markup tags, without rendering
    Wrap {
        /// Colour name, e.g. `red` or `RED` for bold
        colour: Colour,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Render markup text to stdout
    Print {
        /// Wrap every text in this colour first
        #[arg(short, long)]
        colour: Option<Colour>,

        /// Separator between texts
        #[arg(long, default_value = " ")]
        sep: String,

        /// Do not end the output with a newline
        #[arg(short = 'n', long)]
        no_newline: bool,

        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Highlight error names in bold red markup
    RedError {
        /// Render the highlighted text instead of printing the markup
        #[arg(long)]
        display: bool,

        text: String,
    },

    /// List every colour with its markup and a sample
    List,
}

/// CLI-friendly colour choice enum
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CliColorChoice {
    /// Style when writing to a terminal
    #[default]
    Auto,
    /// Always style
    Always,
    /// Never style
    Never,
}

impl From<CliColorChoice> for ColorChoice {
    fn from(choice: CliColorChoice) -> Self {
        match choice {
            CliColorChoice::Auto => ColorChoice::Auto,
            CliColorChoice::Always => ColorChoice::Always,
            CliColorChoice::Never => ColorChoice::Never,
        }
    }
}

/// Exit status for an argument error: 0 for `--help` and `--version`, 1 otherwise.
pub fn parse_error_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
