//! # tint-color
//!
//! Color notation engine: detect, validate, convert and re-serialize colors
//! written as HEX, HSL, OKLAB, OKLCH or RGB.
//!
//! # Quick Start
//!
//! ```rust
//! use tint_color::{convert_color, detect_color_format, process_multi_line_input, reassemble};
//! use tint_core::ColorFormat;
//!
//! assert_eq!(detect_color_format("oklch(0.7 0.2 240)"), Some(ColorFormat::Oklch));
//!
//! let hex = convert_color("oklch(0.7 0.2 240 / 50%)", ColorFormat::Auto, ColorFormat::Hex, false, false);
//! assert_eq!(hex.as_deref(), Some("#00a9ff80"));
//!
//! let css = "--destructive-foreground: oklch(0.93 0.03 25/70%);";
//! let rgb = convert_color(css, ColorFormat::Auto, ColorFormat::Rgb, false, false);
//! assert_eq!(rgb.as_deref(), Some("--destructive-foreground: rgb(252 225 222 / 70%);"));
//!
//! let lines = process_multi_line_input("#fff\n  #000", ColorFormat::Auto, ColorFormat::Rgb, false, true);
//! assert_eq!(reassemble(&lines), "rgb(255, 255, 255)\n  rgb(0, 0, 0)");
//! ```
//!
//! # Architecture
//!
//! ```text
//!  line ──► css_var ──► detect ──► alpha ──► validate ──► ColorMath ──► formatter
//!          (envelope)  (format)   (extract,   (component   (parse +       (hex / fn /
//!                                  rewrite)    count)       transform)     simplified)
//! ```
//!
//! - [`css_var`] - `--name: value;` envelopes
//! - [`detect`] - Format detection and raw HSL expansion
//! - [`alpha`] - Alpha extraction and notation rewrites
//! - [`validate`] - Component-count gate
//! - [`formatter`] - Output serialization and rounding
//! - [`Converter`] - The pipeline, generic over [`ColorMath`]
//! - [`LineResult`] - Per-line outcome of multi-line processing
//!
//! The engine never fails loudly: every public conversion returns `Option`,
//! and the reason for a `None` is logged at debug level through `tracing`.
//! [`Converter::try_convert`] exposes the underlying [`ColorError`].
//!
//! # Feature Flags
//!
//! - `rayon` (default) - [`Converter::process_par`] and
//!   [`process_multi_line_input_par`]
//!
//! # Dependencies
//!
//! - [`tint-core`] - Formats, component types, errors
//! - [`tint-math`] - Default [`ColorMath`] implementation
//! - [`regex`] - Notation rewrites
//! - [`tracing`] - Diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod alpha;
pub mod css_var;
pub mod detect;
pub mod formatter;
pub mod validate;

mod convert;
mod lines;

pub use convert::Converter;
pub use css_var::CssVariable;
pub use formatter::{OutputStyle, format_color, format_hex};
pub use lines::{LineResult, reassemble};
pub use validate::validate_component_count;

pub use tint_core::{ColorError, ColorFormat, ColorResult, ParsedColor};
pub use tint_math::{ColorMath, CssColorMath};

/// Detects the notation of a single line.
///
/// Accepts CSS variable declarations and raw HSL (`220 100% 50%`). Returns
/// `None` for anything unrecognized.
pub fn detect_color_format(line: &str) -> Option<ColorFormat> {
    Converter::new().detect(line)
}

/// Converts one color (or `--name: color;` declaration) between notations.
///
/// `source` may be [`ColorFormat::Auto`]; `target` must be concrete.
/// Returns `None` on any failure.
pub fn convert_color(
    input: &str,
    source: ColorFormat,
    target: ColorFormat,
    simplified: bool,
    use_commas: bool,
) -> Option<String> {
    Converter::new().convert(input, source, target, OutputStyle::new(simplified, use_commas))
}

/// Converts each line of `text` independently.
///
/// Always returns exactly one result per `\n`-separated line.
pub fn process_multi_line_input(
    text: &str,
    source: ColorFormat,
    target: ColorFormat,
    simplified: bool,
    use_commas: bool,
) -> Vec<LineResult> {
    Converter::new().process(text, source, target, OutputStyle::new(simplified, use_commas))
}

/// Parallel [`process_multi_line_input`] on the global rayon pool.
#[cfg(feature = "rayon")]
pub fn process_multi_line_input_par(
    text: &str,
    source: ColorFormat,
    target: ColorFormat,
    simplified: bool,
    use_commas: bool,
) -> Vec<LineResult> {
    Converter::new().process_par(text, source, target, OutputStyle::new(simplified, use_commas))
}
