// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markup rendering.
//!
//! Turns bracketed style tags into ANSI SGR sequences:
//!
//! ```text
//! [bold red]failed[/bold red] after [green]3[/] tries
//! ```
//!
//! A tag is `[`, then content starting with a lowercase letter, `#` or `/`,
//! then `]`. Other brackets are plain text. `[/]` closes the innermost open
//! tag, `[/name]` the innermost tag opened as `[name]`. A backslash before a
//! tag keeps it literal; `\\` before a tag is one literal backslash.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Optional escaping backslashes (group 1) and the tag content (group 2).
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"(\\*)\[([a-z#/][^\[\]]*)\]").expect("markup tag pattern is invalid")
});

/// Errors from unbalanced closing tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("closing tag '[/{tag}]' at position {position} doesn't match any open tag")]
    UnmatchedClose { tag: String, position: usize },

    #[error("closing tag '[/]' at position {position} has nothing to close")]
    NothingToClose { position: usize },
}

/// A foreground or background colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// The terminal's default colour: SGR 39 / 49
    Default,
    /// One of the eight standard colours: SGR 30-37 / 40-47
    Standard(u8),
    /// Bright variant of a standard colour: SGR 90-97 / 100-107
    Bright(u8),
    /// 256-colour palette index: SGR 38;5;N / 48;5;N
    Indexed(u8),
    /// 24-bit colour: SGR 38;2;R;G;B / 48;2;R;G;B
    Rgb(u8, u8, u8),
}

const STANDARD_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Paint {
    /// Parse a colour name, `color(N)` or `#rrggbb`.
    pub fn parse(word: &str) -> Option<Paint> {
        if word == "default" {
            return Some(Paint::Default);
        }
        if let Some(index) = standard_index(word) {
            return Some(Paint::Standard(index));
        }
        if let Some(index) = word.strip_prefix("bright_").and_then(standard_index) {
            return Some(Paint::Bright(index));
        }
        match word {
            "orange1" => return Some(Paint::Indexed(214)),
            "deep_sky_blue1" => return Some(Paint::Indexed(39)),
            _ => {}
        }
        if let Some(index) = word
            .strip_prefix("color(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return index.parse().ok().map(Paint::Indexed);
        }
        let hex = word.strip_prefix('#')?;
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Paint::Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    fn foreground(self) -> String {
        match self {
            Paint::Default => "39".to_string(),
            Paint::Standard(n) => (30 + n).to_string(),
            Paint::Bright(n) => (90 + n).to_string(),
            Paint::Indexed(n) => format!("38;5;{}", n),
            Paint::Rgb(r, g, b) => format!("38;2;{};{};{}", r, g, b),
        }
    }

    fn background(self) -> String {
        match self {
            Paint::Default => "49".to_string(),
            Paint::Standard(n) => (40 + n).to_string(),
            Paint::Bright(n) => (100 + n).to_string(),
            Paint::Indexed(n) => format!("48;5;{}", n),
            Paint::Rgb(r, g, b) => format!("48;2;{};{};{}", r, g, b),
        }
    }
}

fn standard_index(word: &str) -> Option<u8> {
    STANDARD_NAMES
        .iter()
        .position(|name| *name == word)
        .map(|i| i as u8)
}

/// Text attributes and colours in force for a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub reverse: bool,
    pub strike: bool,
    pub fg: Option<Paint>,
    pub bg: Option<Paint>,
}

impl Style {
    /// Parse a tag's style words, e.g. `bold red on white`.
    ///
    /// Returns `None` when any word is not understood.
    pub fn parse(definition: &str) -> Option<Style> {
        let mut style = Style::default();
        let mut words = definition.split_whitespace();
        let mut seen = false;
        while let Some(word) = words.next() {
            seen = true;
            match word {
                "bold" | "b" => style.bold = true,
                "dim" | "d" => style.dim = true,
                "italic" | "i" => style.italic = true,
                "underline" | "u" => style.underline = true,
                "reverse" | "r" => style.reverse = true,
                "strike" | "s" => style.strike = true,
                "on" => style.bg = Some(Paint::parse(words.next()?)?),
                _ => style.fg = Some(Paint::parse(word)?),
            }
        }
        seen.then_some(style)
    }

    /// Layer `other` on top of `self`; its colours win where set.
    pub fn combine(self, other: Style) -> Style {
        Style {
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            reverse: self.reverse || other.reverse,
            strike: self.strike || other.strike,
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
        }
    }

    /// True when no attribute or colour is set.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// SGR parameters, e.g. `1;31` for bold red.
    pub fn sgr(&self) -> String {
        let flags = [
            (self.bold, "1"),
            (self.dim, "2"),
            (self.italic, "3"),
            (self.underline, "4"),
            (self.reverse, "7"),
            (self.strike, "9"),
        ];
        let mut codes: Vec<String> = flags
            .into_iter()
            .filter(|(on, _)| *on)
            .map(|(_, code)| code.to_string())
            .collect();
        codes.extend(self.fg.map(Paint::foreground));
        codes.extend(self.bg.map(Paint::background));
        codes.join(";")
    }
}

/// A run of text and the style it is shown in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    fn render_into(&self, out: &mut String, styled: bool) {
        if styled && !self.style.is_plain() {
            out.push_str("\x1b[");
            out.push_str(&self.style.sgr());
            out.push('m');
            out.push_str(&self.text);
            out.push_str("\x1b[0m");
        } else {
            out.push_str(&self.text);
        }
    }
}

/// An open tag: its normalised content and the style it parsed to, if any.
struct OpenTag {
    name: String,
    style: Option<Style>,
}

fn normalize(tag: &str) -> String {
    tag.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn current_style(stack: &[OpenTag]) -> Style {
    stack
        .iter()
        .filter_map(|tag| tag.style)
        .fold(Style::default(), Style::combine)
}

fn flush(segments: &mut Vec<Segment>, text: &mut String, stack: &[OpenTag]) {
    if text.is_empty() {
        return;
    }
    let style = current_style(stack);
    match segments.last_mut() {
        Some(last) if last.style == style => last.text.push_str(text),
        _ => segments.push(Segment {
            text: text.clone(),
            style,
        }),
    }
    text.clear();
}

/// Split markup into styled segments.
///
/// Tags still open at the end of the input are closed implicitly.
pub fn parse(markup: &str) -> Result<Vec<Segment>, MarkupError> {
    let mut segments = Vec::new();
    let mut stack: Vec<OpenTag> = Vec::new();
    let mut text = String::new();
    let mut last_end = 0;

    for cap in TAG.captures_iter(markup) {
        let (Some(whole), Some(slashes), Some(tag)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            continue;
        };
        text.push_str(&markup[last_end..whole.start()]);
        last_end = whole.end();

        let backslashes = slashes.as_str().len();
        text.push_str(&"\\".repeat(backslashes / 2));
        if backslashes % 2 == 1 {
            // Escaped: the bracket and everything up to `]` is literal
            text.push_str(&markup[slashes.end()..whole.end()]);
            continue;
        }

        flush(&mut segments, &mut text, &stack);
        let position = slashes.end();
        match tag.as_str().strip_prefix('/') {
            Some(closing) => {
                let closing = normalize(closing);
                if closing.is_empty() {
                    if stack.pop().is_none() {
                        return Err(MarkupError::NothingToClose { position });
                    }
                } else {
                    let index = stack
                        .iter()
                        .rposition(|open| open.name == closing)
                        .ok_or_else(|| MarkupError::UnmatchedClose {
                            tag: closing.clone(),
                            position,
                        })?;
                    stack.remove(index);
                }
            }
            None => stack.push(OpenTag {
                name: normalize(tag.as_str()),
                style: Style::parse(tag.as_str()),
            }),
        }
    }

    text.push_str(&markup[last_end..]);
    flush(&mut segments, &mut text, &stack);
    Ok(segments)
}

/// Render markup as ANSI-styled text, or as plain text when `styled` is false.
///
/// ```
/// use colours::markup::render;
///
/// assert_eq!(render("[bold red]x[/bold red]", true).unwrap(), "\x1b[1;31mx\x1b[0m");
/// assert_eq!(render("[bold red]x[/bold red]", false).unwrap(), "x");
/// ```
pub fn render(markup: &str, styled: bool) -> Result<String, MarkupError> {
    let mut out = String::with_capacity(markup.len());
    for segment in parse(markup)? {
        segment.render_into(&mut out, styled);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
