// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output to stderr.
//!
//! Only the label is coloured, and only when stderr is a terminal and
//! `NO_COLOR` is not set.

use std::io::{self, IsTerminal, Write};

use colours::markup::render;
use colours::{ColorChoice, Colour};

fn stderr_styled() -> bool {
    ColorChoice::Auto.should_style(io::stderr().is_terminal())
}

/// Print an error message to stderr.
pub fn print_error(msg: impl std::fmt::Display) {
    write_error(&mut io::stderr(), msg, stderr_styled());
}

/// Print a warning message to stderr.
pub fn print_warning(msg: impl std::fmt::Display) {
    write_warning(&mut io::stderr(), msg, stderr_styled());
}

/// Print a `--verbose` progress message to stderr.
pub fn print_verbose(msg: impl std::fmt::Display) {
    write_verbose(&mut io::stderr(), msg, stderr_styled());
}

fn write_error<W: Write>(writer: &mut W, msg: impl std::fmt::Display, styled: bool) {
    write_labelled(writer, Colour::BoldRed, "Error:", msg, styled);
}

fn write_warning<W: Write>(writer: &mut W, msg: impl std::fmt::Display, styled: bool) {
    write_labelled(writer, Colour::BoldYellow, "Warning:", msg, styled);
}

fn write_verbose<W: Write>(writer: &mut W, msg: impl std::fmt::Display, styled: bool) {
    write_labelled(writer, Colour::Blue, "colours:", msg, styled);
}

fn write_labelled<W: Write>(
    writer: &mut W,
    colour: Colour,
    label: &str,
    msg: impl std::fmt::Display,
    styled: bool,
) {
    let label = render(&colour.wrap(label), styled).unwrap_or_else(|_| label.to_string());
    let _ = writeln!(writer, "{} {}", label, msg);
}

#[cfg(test)]
#[path = "output_diagnostic_tests.rs"]
mod tests;
