// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simplified colours for terminal applications.
//!
//! Wraps text in named colour markup tags, highlights error names, renders the
//! markup to ANSI-styled output and strips ANSI escape sequences back out.
//!
//! ```
//! use colours::{remove_ansi, Colour};
//!
//! assert_eq!(Colour::Red.wrap("hello"), "[red]hello[/red]");
//! assert_eq!(remove_ansi("\x1b[31mhello\x1b[0m"), "hello");
//! ```

pub mod ansi;
pub mod colour;
pub mod console;
pub mod highlight;
pub mod markup;

pub use ansi::{contains_ansi, find_sequences, remove_ansi};
pub use colour::{Color, Colour, ParseColourError};
pub use console::{ColorChoice, Console, ConsoleError, PrintOptions};
pub use highlight::{count_errors, print_red_error, red_error};
pub use markup::{MarkupError, Paint, Segment, Style};
