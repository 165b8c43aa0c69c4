//! Single-value conversion.

use std::borrow::Cow;

use tint_core::{ColorError, ColorFormat, ColorResult, ParsedColor};
use tint_math::{ColorMath, CssColorMath};
use tracing::{debug, trace};

use crate::alpha::{extract_alpha, extract_hex_alpha, normalize_percent_alpha};
use crate::css_var::CssVariable;
use crate::detect::{detect_format, expand_raw_hsl};
use crate::formatter::{OutputStyle, format_color, format_hex};
use crate::validate::{numeric_component_count, validate_component_count};

/// Conversion engine parameterized by its color math.
///
/// The engine owns everything textual: CSS variable envelopes, alpha
/// notations, validation, detection and output formatting. Parsing and
/// colorspace transforms are delegated to `M`.
///
/// # Example
///
/// ```rust
/// use tint_color::{Converter, OutputStyle};
/// use tint_core::ColorFormat;
///
/// let conv = Converter::new();
/// let out = conv.convert("oklch(0.7 0.2 240)", ColorFormat::Auto, ColorFormat::Hex, OutputStyle::default());
/// assert_eq!(out.as_deref(), Some("#00a9ff"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Converter<M = CssColorMath> {
    math: M,
}

impl Converter<CssColorMath> {
    /// Converter backed by [`CssColorMath`].
    pub const fn new() -> Self {
        Self { math: CssColorMath }
    }
}

impl<M: ColorMath> Converter<M> {
    /// Converter backed by a custom [`ColorMath`].
    pub const fn with_math(math: M) -> Self {
        Self { math }
    }

    /// The color math in use.
    pub fn math(&self) -> &M {
        &self.math
    }

    /// Detects the notation of `line`. See [`detect_format`].
    pub fn detect(&self, line: &str) -> Option<ColorFormat> {
        detect_format(&self.math, line)
    }

    /// [`detect`](Self::detect) as a `Result`.
    ///
    /// # Errors
    ///
    /// [`ColorError::Undetected`] if no notation matches.
    pub fn try_detect(&self, line: &str) -> ColorResult<ColorFormat> {
        self.detect(line).ok_or(ColorError::Undetected)
    }

    /// Converts `input`, returning `None` on any failure.
    ///
    /// Failures are logged at debug level.
    pub fn convert(
        &self,
        input: &str,
        source: ColorFormat,
        target: ColorFormat,
        style: OutputStyle,
    ) -> Option<String> {
        match self.try_convert(input, source, target, style) {
            Ok(out) => Some(out),
            Err(err) => {
                debug!(
                    input,
                    %source,
                    %target,
                    syntax = err.is_syntax(),
                    error = %err,
                    "convert failed"
                );
                None
            }
        }
    }

    /// Converts `input` from `source` to `target`.
    ///
    /// A `--name: value;` declaration is converted in place. With an `Auto`
    /// source the format is detected, falling back to hex.
    ///
    /// # Errors
    ///
    /// - [`ColorError::UnsupportedConversion`] if `target` is `Auto`
    /// - [`ColorError::ArityMismatch`] if the value has the wrong number of components
    /// - any error from [`ColorMath::parse`] or [`ColorMath::transform`]
    pub fn try_convert(
        &self,
        input: &str,
        source: ColorFormat,
        target: ColorFormat,
        style: OutputStyle,
    ) -> ColorResult<String> {
        trace!(input, %source, %target, "convert");
        if !target.is_concrete() {
            return Err(ColorError::UnsupportedConversion { from: source, to: target });
        }

        let (var, value) = CssVariable::split(input);
        let (value, source): (Cow<'_, str>, _) = match expand_raw_hsl(value) {
            Some(expanded) if source == ColorFormat::Auto => (expanded.into(), ColorFormat::Hsl),
            Some(expanded) => (expanded.into(), source),
            None => (value.into(), source),
        };

        let string_alpha = extract_alpha(&value);
        let value = normalize_percent_alpha(&value).into_owned();

        let source = match source {
            ColorFormat::Auto => self.detect(&value).unwrap_or(ColorFormat::Hex),
            s => s,
        };

        if !validate_component_count(&value, source) {
            return Err(ColorError::ArityMismatch {
                format: source,
                found: numeric_component_count(&value),
            });
        }

        let parsed = self.math.parse(&value, source)?;
        let alpha = reconcile_alpha(&parsed, string_alpha, source, &value);
        let color = self.math.transform(parsed, target)?.with_alpha(alpha);
        trace!(?color, "convert::transformed");

        let out = match (target, color) {
            (ColorFormat::Hex, ParsedColor::Rgb(rgb)) => format_hex(&rgb),
            (ColorFormat::Hex, other) => {
                return Err(ColorError::UnsupportedConversion {
                    from: other.format(),
                    to: ColorFormat::Hex,
                });
            }
            (_, color) => format_color(&color, style),
        };

        Ok(match var {
            Some(var) => var.wrap(&out),
            None => out,
        })
    }
}

/// Picks the alpha for the output color.
///
/// The parser's own alpha wins; otherwise the one read from the text. A hex
/// source reporting no alpha (or exactly 1) is rechecked against its digits.
fn reconcile_alpha(
    parsed: &ParsedColor,
    string_alpha: Option<f64>,
    source: ColorFormat,
    value: &str,
) -> Option<f64> {
    let alpha = parsed.alpha().or(string_alpha);
    if source == ColorFormat::Hex && alpha.is_none_or(|a| a == 1.0) {
        return extract_hex_alpha(value).or(alpha);
    }
    alpha
}
