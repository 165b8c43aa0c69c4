//! Conversion inside `--name: value;` declarations.

use tint_color::convert_color;
use tint_core::ColorFormat::{self, Auto, Hex, Oklch, Rgb};

fn convert(input: &str, target: ColorFormat) -> String {
    convert_color(input, Auto, target, false, false)
        .unwrap_or_else(|| panic!("{input} did not convert"))
}

#[test]
fn envelope_and_alpha_preserved() {
    assert_eq!(
        convert("--destructive-foreground: oklch(0.93 0.03 25/70%);", Rgb),
        "--destructive-foreground: rgb(252 225 222 / 70%);"
    );
    assert_eq!(
        convert("--my-fancy-color: oklch(0.93 0.03 25/70%);", Rgb),
        "--my-fancy-color: rgb(252 225 222 / 70%);"
    );

    let hover = convert("--button-hover: hsl(220 100% 50% / 50%);", Rgb);
    assert_eq!(hover, "--button-hover: rgb(0 85 255 / 50%);");

    let text = convert("--text-primary: rgb(33 33 33 / 80%);", Oklch);
    assert!(text.starts_with("--text-primary: oklch("), "{text}");
    assert!(text.ends_with("/ 80%);"), "{text}");
}

#[test]
fn legacy_alpha_in_variable() {
    let out = convert("--primary: rgb(0, 0, 255, 0.5);", Oklch);
    assert_eq!(out, "--primary: oklch(0.45 0.31 264 / 50%);");
}

#[test]
fn hex_target_in_variable() {
    assert_eq!(
        convert("--button-color: oklch(0.7 0.2 240 / 50%);", Hex),
        "--button-color: #00a9ff80;"
    );
    let oklab = convert("--button-color: oklab(0.7 0.0 0.2 / 50%);", Hex);
    assert!(oklab.starts_with("--button-color: #"));
    assert!(oklab.ends_with("80;"), "{oklab}");
}

#[test]
fn commas_in_variable() {
    assert_eq!(
        convert_color("--primary: rgb(0 0 255);", Auto, Rgb, false, true).as_deref(),
        Some("--primary: rgb(0, 0, 255);")
    );
}

#[test]
fn missing_semicolon_stays_missing() {
    assert_eq!(convert("--primary: #0000ff", Rgb), "--primary: rgb(0 0 255)");
}

#[test]
fn raw_hsl_variable() {
    assert_eq!(convert("--background: 0 0% 100%;", Hex), "--background: #ffffff;");
}

#[test]
fn invalid_value_in_variable_fails() {
    assert_eq!(convert_color("--x: nonsense;", Auto, Rgb, false, false), None);
}
