//! Alpha notation helpers.
//!
//! Alpha shows up in five textual shapes:
//!
//! | Shape                  | Example                     |
//! |------------------------|-----------------------------|
//! | 8-digit hex tail       | `#FF0000AA`                 |
//! | 4-digit hex nibble     | `#F008` (`8` -> `0x88`)     |
//! | slash percentage       | `oklch(0.93 0.03 25 / 70%)` |
//! | trailing decimal       | `rgba(255, 0, 0, 0.25)`     |
//! | slash decimal          | `rgb(255 0 0 / 0.5)`        |
//!
//! The structured parser does not surface alpha uniformly for every shape, so
//! [`extract_alpha`] reads it from the text independently.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tint_core::ColorFormat;

use crate::formatter::round_half_up;
use crate::validate::numeric_component_count;

fn slash_percent_tail() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"/\s*(\d+(?:\.\d+)?)%\)$").expect("slash percent regex"))
}

fn decimal_tail() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,\s/](\d*\.\d+|\d+)\)$").expect("decimal tail regex"))
}

fn percent_alpha_fn() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(oklch|oklab|rgba?|hsla?)\((.+?)\s*/\s*(\d+(?:\.\d+)?)%\)$")
            .expect("percent alpha regex")
    })
}

fn legacy_alpha_fn() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^(rgba?|hsla?)\((.+?),\s*(\d*\.\d+|\d+)\)$").expect("legacy alpha regex")
    })
}

/// Converts one or two hex digits to an alpha in `[0, 1]`.
///
/// A single digit is doubled first, as in `#RGBA`.
///
/// # Example
///
/// ```rust
/// use tint_color::alpha::hex_to_alpha;
///
/// assert_eq!(hex_to_alpha("AA"), Some(170.0 / 255.0));
/// assert_eq!(hex_to_alpha("8"), Some(136.0 / 255.0));
/// assert_eq!(hex_to_alpha("zz"), None);
/// ```
pub fn hex_to_alpha(digits: &str) -> Option<f64> {
    let byte = match digits.len() {
        1 => u8::from_str_radix(&digits.repeat(2), 16).ok()?,
        2 => u8::from_str_radix(digits, 16).ok()?,
        _ => return None,
    };
    Some(f64::from(byte) / 255.0)
}

/// Converts an alpha in `[0, 1]` to two lowercase hex digits (clamped).
///
/// ```rust
/// use tint_color::alpha::alpha_to_hex;
///
/// assert_eq!(alpha_to_hex(0.5), "80");
/// assert_eq!(alpha_to_hex(0.4), "66");
/// assert_eq!(alpha_to_hex(7.0), "ff");
/// ```
pub fn alpha_to_hex(alpha: f64) -> String {
    let byte = round_half_up(alpha.clamp(0.0, 1.0) * 255.0) as u8;
    format!("{byte:02x}")
}

/// `70` -> `0.7`.
#[inline]
pub fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// `0.666` -> `67`. Rounds half up.
#[inline]
pub fn decimal_to_percent(alpha: f64) -> i64 {
    round_half_up(alpha * 100.0) as i64
}

/// Alpha carried by a `#RRGGBBAA` or `#RGBA` literal.
pub fn extract_hex_alpha(value: &str) -> Option<f64> {
    let body = value.strip_prefix('#')?;
    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match body.len() {
        8 => hex_to_alpha(&body[6..8]),
        4 => hex_to_alpha(&body[3..4]),
        _ => None,
    }
}

/// Reads an alpha straight from the color text.
///
/// Checked in order:
/// 1. hex alpha (`#RRGGBBAA`, `#RGBA`)
/// 2. slash percentage (`... / 70%)`)
/// 3. a trailing bare decimal `<= 1`, only when the text has four numeric
///    components and no `%` anywhere
pub fn extract_alpha(value: &str) -> Option<f64> {
    if value.starts_with('#') {
        return extract_hex_alpha(value);
    }

    if let Some(caps) = slash_percent_tail().captures(value) {
        return caps[1].parse().ok().map(percent_to_decimal);
    }

    if value.contains('%') || numeric_component_count(value) != 4 {
        return None;
    }
    decimal_tail()
        .captures(value)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .filter(|&a| a <= 1.0)
}

/// Rewrites `fmt(values / P%)` as `fmt(values P/100)`.
///
/// Returns the format named by the function along with the rewritten text,
/// or `None` if the text has no percentage alpha.
///
/// ```rust
/// use tint_color::alpha::rewrite_percent_alpha;
/// use tint_core::ColorFormat;
///
/// let (format, text) = rewrite_percent_alpha("oklch(0.93 0.03 25/70%)").unwrap();
/// assert_eq!(format, ColorFormat::Oklch);
/// assert_eq!(text, "oklch(0.93 0.03 25 0.7)");
/// ```
pub fn rewrite_percent_alpha(value: &str) -> Option<(ColorFormat, String)> {
    let caps = percent_alpha_fn().captures(value)?;
    let format = caps[1].parse().ok()?;
    let percent: f64 = caps[3].parse().ok()?;
    let rewritten = format!("{}({} {})", &caps[1], &caps[2], percent_to_decimal(percent));
    Some((format, rewritten))
}

/// Rewrites legacy `fmt(v1, v2, v3, A)` as `base(v1 v2 v3, A)`.
///
/// `rgba`/`hsla` collapse to `rgb`/`hsl`.
pub fn rewrite_legacy_alpha(value: &str) -> Option<(ColorFormat, String)> {
    let caps = legacy_alpha_fn().captures(value)?;
    let format: ColorFormat = caps[1].parse().ok()?;
    let rewritten = format!("{}({}, {})", format, caps[2].replace(',', " "), &caps[3]);
    Some((format, rewritten))
}

/// Percentage alpha in decimal form, leaving any other text untouched.
pub fn normalize_percent_alpha(value: &str) -> Cow<'_, str> {
    match rewrite_percent_alpha(value) {
        Some((_, rewritten)) => Cow::Owned(rewritten),
        None => Cow::Borrowed(value),
    }
}
