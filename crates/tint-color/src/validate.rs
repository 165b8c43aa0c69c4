//! Component-count validation.
//!
//! Runs before the structured parser so that a truncated value such as
//! `hsl(10 20%)` is rejected even if the parser would tolerate it.

use std::sync::OnceLock;

use regex::Regex;
use tint_core::ColorFormat;

fn function_prefix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^(hsl|rgb|oklab|oklch)a?\s*\(").expect("function prefix regex"))
}

fn separators() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,/]+").expect("separator regex"))
}

/// Accepted component counts for `format`.
///
/// `Auto` also allows a single token.
pub fn expected_counts(format: ColorFormat) -> &'static [usize] {
    match format {
        ColorFormat::Auto => &[1, 3, 4],
        _ => &[3, 4],
    }
}

/// Number of numeric tokens inside a color value.
///
/// The function prefix and closing parenthesis are stripped, the remainder is
/// split on whitespace, commas and slashes, and tokens are counted if they
/// read as a number once a trailing `%` or `deg` is removed.
///
/// ```rust
/// use tint_color::validate::numeric_component_count;
///
/// assert_eq!(numeric_component_count("rgba(255, 0, 0, 0.5)"), 4);
/// assert_eq!(numeric_component_count("hsl(10 20%)"), 2);
/// assert_eq!(numeric_component_count("oklch(0.7 0.2 240deg / 50%)"), 4);
/// ```
pub fn numeric_component_count(value: &str) -> usize {
    let body = function_prefix().replace(value.trim(), "");
    let body = body.trim().trim_end_matches(')').trim();
    separators()
        .split(body)
        .filter(|token| is_numeric_token(token))
        .count()
}

fn is_numeric_token(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    let number = lower.trim_end_matches('%').trim_end_matches("deg");
    number.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_hex_literal(value: &str) -> bool {
    let body = value.strip_prefix('#').unwrap_or(value);
    matches!(body.len(), 3 | 4 | 6 | 8) && body.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Checks that `value` has a plausible number of components for `format`.
///
/// Hex values must be 3, 4, 6 or 8 hex digits with an optional `#`. Every
/// other format needs 3 or 4 numeric components. `Auto` also accepts a hex
/// literal or a single number.
pub fn validate_component_count(value: &str, format: ColorFormat) -> bool {
    let value = value.trim();
    match format {
        ColorFormat::Hex => return is_hex_literal(value),
        ColorFormat::Auto if is_hex_literal(value) => return true,
        _ => {}
    }
    expected_counts(format).contains(&numeric_component_count(value))
}
