//! The engine against substitute `ColorMath` implementations.
//!
//! The engine owns the text; the math only answers validity, parse and
//! transform questions. These mocks pin down that split.

use std::sync::atomic::{AtomicUsize, Ordering};

use tint_color::{ColorMath, Converter, CssColorMath, OutputStyle};
use tint_core::{
    ColorError, ColorFormat::{self, Auto, Hex, Hsl, Oklch, Rgb}, ColorResult, Oklch as Lch,
    ParsedColor, Rgb as RgbColor,
};

/// Default math, but refuses slash alpha and the legacy `rgba`/`hsla` names.
struct StrictMath;

impl ColorMath for StrictMath {
    fn is_valid(&self, text: &str) -> bool {
        let lower = text.to_ascii_lowercase();
        !lower.contains('/')
            && !lower.starts_with("rgba")
            && !lower.starts_with("hsla")
            && CssColorMath.is_valid(text)
    }

    fn parse(&self, text: &str, hint: ColorFormat) -> ColorResult<ParsedColor> {
        CssColorMath.parse(text, hint)
    }

    fn transform(&self, color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor> {
        CssColorMath.transform(color, target)
    }
}

/// Parses everything to one color and never converts it.
struct FixedMath {
    color: ParsedColor,
    parses: AtomicUsize,
}

impl FixedMath {
    fn new(color: impl Into<ParsedColor>) -> Self {
        Self {
            color: color.into(),
            parses: AtomicUsize::new(0),
        }
    }
}

impl ColorMath for FixedMath {
    fn is_valid(&self, _text: &str) -> bool {
        true
    }

    fn parse(&self, _text: &str, _hint: ColorFormat) -> ColorResult<ParsedColor> {
        self.parses.fetch_add(1, Ordering::SeqCst);
        Ok(self.color)
    }

    fn transform(&self, color: ParsedColor, _target: ColorFormat) -> ColorResult<ParsedColor> {
        Ok(color)
    }
}

/// Parses fine, transform always fails.
struct BrokenTransform;

impl ColorMath for BrokenTransform {
    fn is_valid(&self, text: &str) -> bool {
        CssColorMath.is_valid(text)
    }

    fn parse(&self, text: &str, hint: ColorFormat) -> ColorResult<ParsedColor> {
        CssColorMath.parse(text, hint)
    }

    fn transform(&self, color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor> {
        Err(ColorError::UnsupportedConversion {
            from: color.format(),
            to: target,
        })
    }
}

// ============================================================================
// Detector fallbacks
// ============================================================================

#[test]
fn percent_alpha_rewrite_rescues_detection() {
    let conv = Converter::with_math(StrictMath);
    assert_eq!(conv.detect("oklch(0.7 0.2 240 / 50%)"), Some(Oklch));
    assert_eq!(conv.detect("rgb(0 128 255 / 40%)"), Some(Rgb));
}

#[test]
fn legacy_alpha_rewrite_rescues_detection() {
    let conv = Converter::with_math(StrictMath);
    assert_eq!(conv.detect("rgba(255, 0, 0, 0.5)"), Some(Rgb));
    assert_eq!(conv.detect("hsla(220, 100%, 50%, 0.75)"), Some(Hsl));
}

#[test]
fn fallbacks_give_up_cleanly() {
    let conv = Converter::with_math(StrictMath);
    // percent rewrite keeps the `hsla` name; no comma for the legacy rewrite
    assert_eq!(conv.detect("hsla(220 100% 50% / 50%)"), None);
    assert_eq!(conv.detect("rgb(1 2 3 / 0.5)"), None);
}

#[test]
fn strict_math_still_converts() {
    let conv = Converter::with_math(StrictMath);
    let out = conv.convert("oklch(0.7 0.2 240 / 50%)", Auto, Hex, OutputStyle::default());
    assert_eq!(out.as_deref(), Some("#00a9ff80"));
}

// ============================================================================
// Engine owns formatting
// ============================================================================

#[test]
fn output_follows_math_result() {
    let math = FixedMath::new(RgbColor::new(10.0, 20.0, 30.0));
    let conv = Converter::with_math(&math);

    let out = conv.convert("1 2 3", Rgb, Rgb, OutputStyle::new(false, true));
    assert_eq!(out.as_deref(), Some("rgb(10, 20, 30)"));

    let out = conv.convert("1 2 3", Rgb, Hex, OutputStyle::default());
    assert_eq!(out.as_deref(), Some("#0a141e"));
    assert_eq!(math.parses.load(Ordering::SeqCst), 2);
}

#[test]
fn string_alpha_fills_missing_parser_alpha() {
    // parser reports no alpha; the text has one
    let math = FixedMath::new(RgbColor::new(255.0, 0.0, 0.0));
    let conv = Converter::with_math(&math);
    let out = conv.convert("rgb(1 2 3 / 40%)", Rgb, Rgb, OutputStyle::default());
    assert_eq!(out.as_deref(), Some("rgb(255 0 0 / 40%)"));
}

#[test]
fn validation_runs_before_parse() {
    let math = FixedMath::new(RgbColor::new(0.0, 0.0, 0.0));
    let conv = Converter::with_math(&math);
    assert_eq!(conv.convert("hsl(10 20%)", Hsl, Rgb, OutputStyle::default()), None);
    assert_eq!(conv.convert("#12345", Hex, Rgb, OutputStyle::default()), None);
    assert_eq!(math.parses.load(Ordering::SeqCst), 0);
}

#[test]
fn non_rgb_for_hex_target_fails() {
    let math = FixedMath::new(Lch::new(0.5, 0.1, 20.0));
    let conv = Converter::with_math(&math);
    let err = conv
        .try_convert("1 2 3", Oklch, Hex, OutputStyle::default())
        .unwrap_err();
    assert_eq!(
        err,
        ColorError::UnsupportedConversion {
            from: Oklch,
            to: Hex
        }
    );
}

#[test]
fn transform_error_isolated_per_line() {
    let conv = Converter::with_math(BrokenTransform);
    assert_eq!(conv.convert("#fff", Auto, Rgb, OutputStyle::default()), None);

    let results = conv.process("#fff\nnot a color", Auto, Rgb, OutputStyle::default());
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.converted.is_none()));
    assert_eq!(results[0].detected_format, Some(Hex));
}
