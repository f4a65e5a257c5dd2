// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use rstest::rstest;

#[test]
fn markup_payloads() {
    assert_eq!(Colour::Red.markup(), "red");
    assert_eq!(Colour::BoldRed.markup(), "bold red");
    assert_eq!(Colour::Default.markup(), "default");
    assert_eq!(Colour::Blue.markup(), "deep_sky_blue1");
}

#[test]
fn wrap_adds_matching_tags() {
    assert_eq!(Colour::Red.wrap("hello"), "[red]hello[/red]");
    assert_eq!(
        Colour::BoldBlue.wrap("world"),
        "[bold deep_sky_blue1]world[/bold deep_sky_blue1]"
    );
}

#[test]
fn wrap_empty_text() {
    assert_eq!(Colour::Green.wrap(""), "[green][/green]");
}

#[test]
fn color_is_an_alias() {
    let colour: Color = Colour::Purple;
    assert_eq!(colour, Colour::Purple);
}

#[test]
fn display_writes_the_payload() {
    assert_eq!(Colour::BoldOrange.to_string(), "bold orange1");
}

#[rstest]
#[case("red", Colour::Red)]
#[case("orange", Colour::Orange)]
#[case("blue", Colour::Blue)]
#[case("purple", Colour::Purple)]
#[case("default", Colour::Default)]
#[case("RED", Colour::BoldRed)]
#[case("YELLOW", Colour::BoldYellow)]
#[case("GREEN", Colour::BoldGreen)]
fn parses_names(#[case] name: &str, #[case] expected: Colour) {
    assert_eq!(name.parse::<Colour>().unwrap(), expected);
}

#[rstest]
#[case("Red")]
#[case("magenta")]
#[case("DEFAULT")]
#[case("")]
fn rejects_unknown_names(#[case] name: &str) {
    let err = name.parse::<Colour>().unwrap_err();
    assert_eq!(err, ParseColourError(name.to_string()));
    assert_eq!(err.to_string(), format!("unknown colour '{}'", name));
}

#[test]
fn every_name_round_trips() {
    for colour in Colour::ALL {
        assert_eq!(colour.name().parse::<Colour>().unwrap(), colour);
    }
}

#[test]
fn bold_variants_prefix_their_normal_colour() {
    let pairs = Colour::ALL[..6].iter().zip(&Colour::ALL[7..]);
    for (normal, bold) in pairs {
        assert_eq!(bold.markup(), format!("bold {}", normal.markup()));
        assert_eq!(bold.name(), normal.name().to_uppercase());
    }
}

#[test]
fn print_to_wraps_each_argument() {
    let mut console = Console::new(Vec::new(), false);
    Colour::Green.print_to(&mut console, ["success", "again"]).unwrap();
    let output = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(output, "success again\n");
}

#[test]
fn print_to_styled_console() {
    let mut console = Console::new(Vec::new(), true);
    Colour::BoldRed.print_to(&mut console, ["boom"]).unwrap();
    let output = String::from_utf8(console.into_inner()).unwrap();
    assert_eq!(output, "\x1b[1;31mboom\x1b[0m\n");
}
