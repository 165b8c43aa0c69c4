//! Format detection for a single line of text.
//!
//! # Pipeline
//!
//! ```text
//! line -> trim -> unwrap --var: ...; -> expand raw HSL
//!      -> ColorMath::is_valid ?
//!           no  -> retry with percent alpha rewritten  -> format of the function
//!               -> retry with legacy alpha rewritten   -> format of the function
//!               -> None
//!           yes -> classify
//! ```
//!
//! Classification is purely textual and first match wins:
//!
//! 1. starts with `#`, or is 3-8 bare hex digits -> `Hex`
//! 2. starts with `hsl`, or is unprefixed and contains `%` -> `Hsl`
//! 3. starts with `oklab` / `oklch` / `rgb`
//! 4. three bare numbers -> [`infer_bare_triple`]

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use tint_core::ColorFormat;
use tint_math::ColorMath;
use tracing::trace;

use crate::alpha::{rewrite_legacy_alpha, rewrite_percent_alpha};
use crate::css_var::CssVariable;

fn raw_hsl() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+\.?\d*)\s+(\d+\.?\d*)%\s+(\d+\.?\d*)%$").expect("raw hsl regex")
    })
}

fn raw_hsl_alpha() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(\d+\.?\d*)\s+(\d+\.?\d*)%\s+(\d+\.?\d*)%\s*/\s*(\d+(?:\.\d+)?)%$")
            .expect("raw hsl alpha regex")
    })
}

fn bare_hex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9a-fA-F]{3,8}$").expect("bare hex regex"))
}

/// Wraps space-separated HSL (`220 100% 50%`) in `hsl(...)`.
///
/// An optional `/ P%` alpha is kept. Returns `None` for anything else.
///
/// ```rust
/// use tint_color::detect::expand_raw_hsl;
///
/// assert_eq!(expand_raw_hsl("220 100% 50%").as_deref(), Some("hsl(220 100% 50%)"));
/// assert_eq!(
///     expand_raw_hsl("220 100% 50% / 40%").as_deref(),
///     Some("hsl(220 100% 50% / 40%)")
/// );
/// assert_eq!(expand_raw_hsl("220 100 50"), None);
/// ```
pub fn expand_raw_hsl(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(caps) = raw_hsl().captures(value) {
        return Some(format!("hsl({} {}% {}%)", &caps[1], &caps[2], &caps[3]));
    }
    raw_hsl_alpha().captures(value).map(|caps| {
        format!(
            "hsl({} {}% {}% / {}%)",
            &caps[1], &caps[2], &caps[3], &caps[4]
        )
    })
}

/// Guesses the family of three bare numbers.
///
/// | first value | second value         | all within `[0, 255]` | result  |
/// |-------------|----------------------|-----------------------|---------|
/// | in `[0, 1]` | `< 0` or `> 0.4`     | -                     | `Oklab` |
/// | in `[0, 1]` | in `[0, 0.4]`        | -                     | `Oklch` |
/// | otherwise   | -                    | yes                   | `Rgb`   |
/// | otherwise   | -                    | no                    | `None`  |
///
/// OKLAB and OKLCH overlap heavily (`0.5 0.1 0.2` is valid as either). The
/// rule above prefers OKLCH whenever the second value could be a chroma, so
/// pass an explicit source format when the notation is known.
pub fn infer_bare_triple(values: [f64; 3]) -> Option<ColorFormat> {
    let [first, second, _] = values;
    if (0.0..=1.0).contains(&first) {
        if !(0.0..=0.4).contains(&second) {
            return Some(ColorFormat::Oklab);
        }
        return Some(ColorFormat::Oklch);
    }
    if values.iter().all(|v| (0.0..=255.0).contains(v)) {
        return Some(ColorFormat::Rgb);
    }
    None
}

fn bare_triple(value: &str) -> Option<ColorFormat> {
    let mut numbers = [0.0; 3];
    let mut tokens = value.split_whitespace();
    for slot in &mut numbers {
        *slot = tokens.next()?.parse::<f64>().ok().filter(|v| v.is_finite())?;
    }
    if tokens.next().is_some() {
        return None;
    }
    infer_bare_triple(numbers)
}

/// Maps an already-validated value to its format by its textual shape.
pub fn classify(value: &str) -> Option<ColorFormat> {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();
    let prefixed = lower.contains('(');

    if lower.starts_with('#') || bare_hex().is_match(&lower) {
        return Some(ColorFormat::Hex);
    }
    if lower.starts_with("hsl") || (!prefixed && lower.contains('%') && !lower.contains("rgb")) {
        return Some(ColorFormat::Hsl);
    }
    if lower.starts_with("oklab") {
        return Some(ColorFormat::Oklab);
    }
    if lower.starts_with("oklch") {
        return Some(ColorFormat::Oklch);
    }
    if lower.starts_with("rgb") {
        return Some(ColorFormat::Rgb);
    }
    if prefixed {
        return None;
    }
    bare_triple(&lower)
}

/// Detects the notation of `line` using `math` as the validity oracle.
///
/// Returns `None` when nothing recognizable is found. Never fails.
pub fn detect_format<M: ColorMath>(math: &M, line: &str) -> Option<ColorFormat> {
    let (_, value) = CssVariable::split(line);
    if value.is_empty() {
        return None;
    }
    let value: Cow<'_, str> = match expand_raw_hsl(value) {
        Some(expanded) => Cow::Owned(expanded),
        None => Cow::Borrowed(value),
    };

    if !math.is_valid(&value) {
        let rewritten = rewrite_percent_alpha(&value)
            .filter(|(_, text)| math.is_valid(text))
            .or_else(|| rewrite_legacy_alpha(&value).filter(|(_, text)| math.is_valid(text)));
        if let Some((format, text)) = rewritten {
            trace!(value = %value, rewritten = %text, %format, "detect::fallback");
            return Some(format);
        }
        trace!(value = %value, "detect::invalid");
        return None;
    }

    let format = classify(&value);
    trace!(value = %value, ?format, "detect::classify");
    format
}
