// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `colours` binary entry point.

use std::process::ExitCode;

use clap::Parser;

use colours_cli::cli::{parse_error_status, Cli};
use colours_cli::commands;
use colours_cli::output_diagnostic::print_error;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_error_status(&e));
        }
    };

    match commands::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Downstream reader went away (e.g. `| head`); nothing left to report
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            print_error(e);
            ExitCode::FAILURE
        }
    }
}
