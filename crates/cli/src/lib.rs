// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command line front end for the `colours` crate.
//!
//! Strips ANSI escape sequences from files or stdin, wraps text in colour
//! markup, renders markup to the terminal and highlights error names.

pub mod cli;
pub mod commands;
pub mod output_diagnostic;
