// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::ansi::remove_ansi;
use crate::colour::Colour;
use proptest::prelude::*;
use rstest::rstest;
use yare::parameterized;

fn styled(markup: &str) -> String {
    render(markup, true).unwrap()
}

fn plain(markup: &str) -> String {
    render(markup, false).unwrap()
}

// =============================================================================
// Paint / Style parsing
// =============================================================================

#[rstest]
#[case("default", Paint::Default)]
#[case("red", Paint::Standard(1))]
#[case("white", Paint::Standard(7))]
#[case("bright_black", Paint::Bright(0))]
#[case("orange1", Paint::Indexed(214))]
#[case("deep_sky_blue1", Paint::Indexed(39))]
#[case("color(200)", Paint::Indexed(200))]
#[case("#ff8000", Paint::Rgb(255, 128, 0))]
fn parses_paint(#[case] word: &str, #[case] expected: Paint) {
    assert_eq!(Paint::parse(word), Some(expected));
}

#[rstest]
#[case("orange")]
#[case("bright_orange1")]
#[case("color(300)")]
#[case("color(x)")]
#[case("#12345g")]
#[case("#+f0000")]
#[case("#fff")]
fn rejects_paint(#[case] word: &str) {
    assert_eq!(Paint::parse(word), None);
}

#[test]
fn parses_attributes_and_colours() {
    let style = Style::parse("bold underline red on white").unwrap();
    assert!(style.bold);
    assert!(style.underline);
    assert!(!style.italic);
    assert_eq!(style.fg, Some(Paint::Standard(1)));
    assert_eq!(style.bg, Some(Paint::Standard(7)));
}

#[parameterized(
    empty = { "" },
    dangling_on = { "bold on" },
    unknown_word = { "bold wobbly" },
    unknown_background = { "on nothing" },
)]
fn rejects_style(definition: &str) {
    assert_eq!(Style::parse(definition), None);
}

#[parameterized(
    bold_red = { "bold red", "1;31" },
    every_flag = { "b d i u r s", "1;2;3;4;7;9" },
    background = { "on white", "47" },
    bright_background = { "on bright_red", "101" },
    indexed = { "orange1", "38;5;214" },
    truecolour = { "#d77757 on #000000", "38;2;215;119;87;48;2;0;0;0" },
    defaults = { "default on default", "39;49" },
)]
fn sgr_codes(definition: &str, expected: &str) {
    assert_eq!(Style::parse(definition).unwrap().sgr(), expected);
}

#[test]
fn combine_overrides_colours_and_merges_flags() {
    let base = Style::parse("bold red on white").unwrap();
    let top = Style::parse("italic blue").unwrap();
    let combined = base.combine(top);
    assert!(combined.bold && combined.italic);
    assert_eq!(combined.fg, Some(Paint::Standard(4)));
    assert_eq!(combined.bg, Some(Paint::Standard(7)));
}

// =============================================================================
// Rendering
// =============================================================================

#[test]
fn plain_text_passes_through() {
    assert_eq!(styled("Hello, world!"), "Hello, world!");
    assert_eq!(plain("Hello, world!"), "Hello, world!");
}

#[test]
fn empty_markup_has_no_segments() {
    assert!(parse("").unwrap().is_empty());
    assert_eq!(styled(""), "");
}

#[test]
fn single_tag() {
    assert_eq!(styled("[red]hi[/red]"), "\x1b[31mhi\x1b[0m");
    assert_eq!(plain("[red]hi[/red]"), "hi");
}

#[test]
fn nested_tags_combine() {
    assert_eq!(
        styled("[bold]a[red]b[/red]c[/bold]"),
        "\x1b[1ma\x1b[0m\x1b[1;31mb\x1b[0m\x1b[1mc\x1b[0m"
    );
}

#[test]
fn inner_colour_wins() {
    assert_eq!(styled("[red][blue]x"), "\x1b[34mx\x1b[0m");
}

#[test]
fn bare_close_pops_innermost() {
    assert_eq!(styled("[green]x[/]y"), "\x1b[32mx\x1b[0my");
}

#[test]
fn close_out_of_order() {
    let segments = parse("[red][bold]x[/red]y[/bold]z").unwrap();
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].style, Style::parse("bold red").unwrap());
    assert_eq!(segments[1].text, "y");
    assert_eq!(segments[1].style, Style::parse("bold").unwrap());
    assert!(segments[2].style.is_plain());
}

#[test]
fn unclosed_tag_runs_to_end() {
    assert_eq!(styled("[blue]open"), "\x1b[34mopen\x1b[0m");
}

#[test]
fn closing_tag_whitespace_is_normalised() {
    assert_eq!(styled("[bold  red]x[/bold red]"), "\x1b[1;31mx\x1b[0m");
}

#[test]
fn adjacent_segments_with_same_style_merge() {
    let segments = parse("[red]a[/red][red]b[/red]").unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "ab");
}

#[parameterized(
    numbers = { "[1, 2, 3]" },
    index = { "list[0]" },
    capitalised = { "[Red]x" },
    unterminated = { "[red" },
    space_first = { "[ red]" },
)]
fn non_tags_are_literal(markup: &str) {
    assert_eq!(styled(markup), markup);
}

#[test]
fn unknown_style_is_dropped() {
    assert_eq!(styled("[wobbly]x[/wobbly]"), "x");
}

#[test]
fn escaped_tag_is_literal() {
    assert_eq!(styled(r"\[red]x"), "[red]x");
}

#[test]
fn escaped_backslash_keeps_tag() {
    assert_eq!(plain(r"\\[red]x[/red]"), r"\x");
    assert_eq!(styled(r"\\[red]x[/red]"), "\\\x1b[31mx\x1b[0m");
}

#[test]
fn wrapped_colours_render() {
    assert_eq!(styled(&Colour::Orange.wrap("o")), "\x1b[38;5;214mo\x1b[0m");
    assert_eq!(styled(&Colour::BoldBlue.wrap("b")), "\x1b[1;38;5;39mb\x1b[0m");
    assert_eq!(styled(&Colour::Purple.wrap("p")), "\x1b[35mp\x1b[0m");
    assert_eq!(styled(&Colour::Default.wrap("d")), "\x1b[39md\x1b[0m");
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unmatched_close_reports_position() {
    let err = parse("ok [/red]").unwrap_err();
    assert_eq!(
        err,
        MarkupError::UnmatchedClose {
            tag: "red".to_string(),
            position: 3
        }
    );
    assert_eq!(
        err.to_string(),
        "closing tag '[/red]' at position 3 doesn't match any open tag"
    );
}

#[test]
fn bare_close_with_nothing_open() {
    assert_eq!(
        parse("a[/]").unwrap_err(),
        MarkupError::NothingToClose { position: 1 }
    );
}

#[test]
fn close_must_match_whole_tag() {
    assert!(matches!(
        parse("[bold]x[/bold red]"),
        Err(MarkupError::UnmatchedClose { .. })
    ));
}

// =============================================================================
// Properties
// =============================================================================

fn piece() -> impl Strategy<Value = (Option<usize>, String)> {
    (
        proptest::option::of(0..Colour::ALL.len()),
        "[a-zA-Z0-9 .,:!]{0,10}",
    )
}

proptest! {
    #[test]
    fn stripping_rendered_markup_gives_plain_render(pieces in prop::collection::vec(piece(), 0..8)) {
        let markup: String = pieces
            .iter()
            .map(|(colour, text)| match colour {
                Some(i) => Colour::ALL[*i].wrap(text),
                None => text.clone(),
            })
            .collect();
        let text: String = pieces.iter().map(|(_, text)| text.as_str()).collect();

        let plain = render(&markup, false).unwrap();
        prop_assert_eq!(&plain, &text);
        prop_assert_eq!(remove_ansi(&render(&markup, true).unwrap()), plain);
    }
}
