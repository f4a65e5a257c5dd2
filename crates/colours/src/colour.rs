// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named colour styles and the markup tags they wrap text in.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use thiserror::Error;

use crate::console::{ColorChoice, Console, ConsoleError};

/// A named text style.
///
/// Lower-case names (`red`, `orange`, ...) are the normal colours; upper-case
/// names (`RED`, `ORANGE`, ...) are their bold counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Default,
    BoldRed,
    BoldOrange,
    BoldYellow,
    BoldGreen,
    BoldBlue,
    BoldPurple,
}

/// American English alias.
pub type Color = Colour;

/// Returned when a colour name is not one of [`Colour::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown colour '{0}'")]
pub struct ParseColourError(pub String);

impl Colour {
    /// Every colour in declaration order.
    pub const ALL: [Colour; 13] = [
        Colour::Red,
        Colour::Orange,
        Colour::Yellow,
        Colour::Green,
        Colour::Blue,
        Colour::Purple,
        Colour::Default,
        Colour::BoldRed,
        Colour::BoldOrange,
        Colour::BoldYellow,
        Colour::BoldGreen,
        Colour::BoldBlue,
        Colour::BoldPurple,
    ];

    /// The style written inside the markup tags.
    pub fn markup(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Orange => "orange1",
            Colour::Yellow => "yellow",
            Colour::Green => "green",
            Colour::Blue => "deep_sky_blue1",
            Colour::Purple => "magenta",
            Colour::Default => "default",
            Colour::BoldRed => "bold red",
            Colour::BoldOrange => "bold orange1",
            Colour::BoldYellow => "bold yellow",
            Colour::BoldGreen => "bold green",
            Colour::BoldBlue => "bold deep_sky_blue1",
            Colour::BoldPurple => "bold magenta",
        }
    }

    /// The name this colour is looked up by.
    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Orange => "orange",
            Colour::Yellow => "yellow",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Purple => "purple",
            Colour::Default => "default",
            Colour::BoldRed => "RED",
            Colour::BoldOrange => "ORANGE",
            Colour::BoldYellow => "YELLOW",
            Colour::BoldGreen => "GREEN",
            Colour::BoldBlue => "BLUE",
            Colour::BoldPurple => "PURPLE",
        }
    }

    /// Wrap `text` in this colour's opening and closing tags.
    ///
    /// ```
    /// use colours::Colour;
    ///
    /// assert_eq!(Colour::Red.wrap("hello"), "[red]hello[/red]");
    /// assert_eq!(Colour::BoldRed.wrap(42), "[bold red]42[/bold red]");
    /// ```
    pub fn wrap(self, text: impl fmt::Display) -> String {
        let style = self.markup();
        format!("[{style}]{text}[/{style}]")
    }

    /// Print each argument wrapped in this colour to stdout.
    pub fn print<I, T>(self, args: I) -> Result<(), ConsoleError>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let mut console = Console::stdout(ColorChoice::Auto);
        self.print_to(&mut console, args)
    }

    /// Print each argument wrapped in this colour to `console`.
    pub fn print_to<W, I, T>(self, console: &mut Console<W>, args: I) -> Result<(), ConsoleError>
    where
        W: Write,
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        console.print(args.into_iter().map(|arg| self.wrap(arg)))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.markup())
    }
}

impl FromStr for Colour {
    type Err = ParseColourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colour::ALL
            .into_iter()
            .find(|colour| colour.name() == s)
            .ok_or_else(|| ParseColourError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "colour_tests.rs"]
mod tests;
