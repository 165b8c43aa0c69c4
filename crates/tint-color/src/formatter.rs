//! Serialization of converted colors.
//!
//! | Format | Components                  | Rounding                    |
//! |--------|-----------------------------|-----------------------------|
//! | hex    | `#rrggbb[aa]`, lowercase    | channels to nearest integer |
//! | rgb    | `r g b`                     | nearest integer             |
//! | hsl    | `h s% l%`                   | nearest integer             |
//! | oklab  | `l a b`                     | two decimals                |
//! | oklch  | `l c h`                     | two, two, integer hue       |
//!
//! Visible alpha is appended as ` / P%` in every non-hex format, with commas
//! or without.

use tint_core::{ParsedColor, Rgb};

use crate::alpha::{alpha_to_hex, decimal_to_percent};

/// Output options for non-hex formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputStyle {
    /// Emit bare components without the function wrapper.
    pub simplified: bool,
    /// Separate components with `, ` instead of a space.
    pub use_commas: bool,
}

impl OutputStyle {
    /// Creates a style.
    pub const fn new(simplified: bool, use_commas: bool) -> Self {
        Self {
            simplified,
            use_commas,
        }
    }

    fn separator(self) -> &'static str {
        if self.use_commas { ", " } else { " " }
    }
}

/// Rounds halves toward positive infinity: `2.5 -> 3`, `-2.5 -> -2`.
#[inline]
pub(crate) fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn integer(v: f64) -> String {
    format!("{}", round_half_up(v) as i64)
}

fn fixed2(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0 + 0.0;
    format!("{rounded:.2}")
}

fn alpha_suffix(visible: Option<f64>) -> String {
    match visible {
        Some(a) => format!(" / {}%", decimal_to_percent(a)),
        None => String::new(),
    }
}

/// Serializes `color` in its own family (never hex).
///
/// ```rust
/// use tint_color::{format_color, OutputStyle};
/// use tint_core::{ParsedColor, Rgb};
///
/// let red = ParsedColor::from(Rgb::new(255.0, 0.0, 0.0));
/// assert_eq!(format_color(&red, OutputStyle::default()), "rgb(255 0 0)");
/// assert_eq!(format_color(&red, OutputStyle::new(false, true)), "rgb(255, 0, 0)");
/// assert_eq!(format_color(&red, OutputStyle::new(true, false)), "255 0 0");
/// ```
pub fn format_color(color: &ParsedColor, style: OutputStyle) -> String {
    let [x, y, z] = match color {
        ParsedColor::Hsl(c) => [
            integer(c.h),
            format!("{}%", integer(c.s)),
            format!("{}%", integer(c.l)),
        ],
        ParsedColor::Rgb(c) => [integer(c.r), integer(c.g), integer(c.b)],
        ParsedColor::Oklab(c) => [fixed2(c.l), fixed2(c.a), fixed2(c.b)],
        ParsedColor::Oklch(c) => [fixed2(c.l), fixed2(c.c), integer(c.h)],
    };
    let sep = style.separator();
    let body = format!("{x}{sep}{y}{sep}{z}{}", alpha_suffix(color.visible_alpha()));

    if style.simplified {
        body
    } else {
        format!("{}({body})", color.format())
    }
}

/// Serializes RGB as lowercase `#rrggbb`, plus `aa` when alpha is visible
/// and does not encode as `ff`.
///
/// ```rust
/// use tint_color::format_hex;
/// use tint_core::Rgb;
///
/// assert_eq!(format_hex(&Rgb::new(0.0, 169.06, 255.0)), "#00a9ff");
/// assert_eq!(format_hex(&Rgb { alpha: Some(0.5), ..Rgb::new(0.0, 169.06, 255.0) }), "#00a9ff80");
/// ```
pub fn format_hex(rgb: &Rgb) -> String {
    let byte = |v: f64| round_half_up(v).clamp(0.0, 255.0) as u8;
    let mut out = format!("#{:02x}{:02x}{:02x}", byte(rgb.r), byte(rgb.g), byte(rgb.b));
    if let Some(byte) = tint_core::visible_alpha(rgb.alpha).map(alpha_to_hex) {
        if byte != "ff" {
            out.push_str(&byte);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::{Hsl, Oklab, Oklch};

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(0.49), 0.0);
    }

    #[test]
    fn test_hsl() {
        let c = ParsedColor::from(Hsl::new(220.4, 99.6, 50.5));
        assert_eq!(format_color(&c, OutputStyle::default()), "hsl(220 100% 51%)");
        assert_eq!(format_color(&c, OutputStyle::new(true, true)), "220, 100%, 51%");
    }

    #[test]
    fn test_oklab_negative_zero() {
        let c = ParsedColor::from(Oklab::new(0.999_999, -0.000_01, 0.0));
        assert_eq!(format_color(&c, OutputStyle::default()), "oklab(1.00 0.00 0.00)");
    }

    #[test]
    fn test_oklch() {
        let c = ParsedColor::from(Oklch::new(0.627_96, 0.257_7, 29.23));
        assert_eq!(format_color(&c, OutputStyle::default()), "oklch(0.63 0.26 29)");
    }

    #[test]
    fn test_alpha_suffix() {
        let c = ParsedColor::from(Rgb::new(252.0, 225.0, 222.0)).with_alpha(Some(0.7));
        assert_eq!(format_color(&c, OutputStyle::default()), "rgb(252 225 222 / 70%)");
        assert_eq!(
            format_color(&c, OutputStyle::new(false, true)),
            "rgb(252, 225, 222 / 70%)"
        );

        // opaque and fully transparent alpha are omitted
        let opaque = c.with_alpha(Some(1.0));
        assert_eq!(format_color(&opaque, OutputStyle::default()), "rgb(252 225 222)");
        let clear = c.with_alpha(Some(0.0));
        assert_eq!(format_color(&clear, OutputStyle::default()), "rgb(252 225 222)");
    }

    #[test]
    fn test_hex_clamps_and_lowercases() {
        assert_eq!(format_hex(&Rgb::new(300.0, -4.0, 170.0)), "#ff00aa");
        let faded = Rgb {
            alpha: Some(170.0 / 255.0),
            ..Rgb::new(255.0, 0.0, 0.0)
        };
        assert_eq!(format_hex(&faded), "#ff0000aa");
    }

    #[test]
    fn test_hex_drops_opaque_byte() {
        let nearly = Rgb {
            alpha: Some(0.999),
            ..Rgb::new(255.0, 0.0, 0.0)
        };
        assert_eq!(format_hex(&nearly), "#ff0000");
        let fe = Rgb {
            alpha: Some(254.0 / 255.0),
            ..Rgb::new(255.0, 0.0, 0.0)
        };
        assert_eq!(format_hex(&fe), "#ff0000fe");
    }
}
