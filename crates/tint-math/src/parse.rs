//! CSS color syntax.
//!
//! Accepted inputs:
//!
//! - Hex: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (the `#` is optional when the
//!   caller asks for hex or leaves the format open)
//! - Functions: `rgb()`, `rgba()`, `hsl()`, `hsla()`, `oklab()`, `oklch()`
//! - Bare component lists such as `255 0 0` or `0.7 0.2 240`, read as the
//!   hinted format
//!
//! Arguments may be separated by whitespace, commas, a slash, or any mix of
//! them. Three numbers are the color, a fourth is alpha (`0.5` or `50%`).
//!
//! | Component                 | Plain      | `%`            | `deg` |
//! |---------------------------|------------|----------------|-------|
//! | RGB channel               | 0-255      | 100% = 255     | no    |
//! | HSL saturation/lightness  | 0-100      | as is          | no    |
//! | OK lightness              | 0-1        | / 100          | no    |
//! | OKLAB a/b, OKLCH chroma   | as is      | 100% = 0.4     | no    |
//! | Hue                       | degrees    | no             | yes   |
//! | Alpha                     | 0-1        | / 100          | no    |

use tint_core::{ColorError, ColorFormat, ColorResult, ParsedColor, Rgb};

use crate::transform::transform;

/// 100% of OKLAB a/b and OKLCH chroma, per CSS Color 4.
const OK_CHROMA_PERCENT_REF: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Unit {
    None,
    Percent,
    Degrees,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    value: f64,
    unit: Unit,
}

/// Parses `text` and returns it in the family named by `hint`.
///
/// With [`ColorFormat::Auto`] the color keeps the family of its own notation;
/// a concrete hint converts it (`Hex` yields RGB components). Bare component
/// lists need a concrete hint.
///
/// # Example
///
/// ```rust
/// use tint_core::{ColorFormat, ParsedColor};
/// use tint_math::parse::parse_css;
///
/// let c = parse_css("rgba(255, 0, 0, 0.25)", ColorFormat::Auto).unwrap();
/// assert_eq!(c.format(), ColorFormat::Rgb);
/// assert_eq!(c.alpha(), Some(0.25));
///
/// let c = parse_css("0.7 0.2 240", ColorFormat::Oklch).unwrap();
/// assert_eq!(c.components(), [0.7, 0.2, 240.0]);
/// ```
pub fn parse_css(text: &str, hint: ColorFormat) -> ColorResult<ParsedColor> {
    let s = text.trim().to_ascii_lowercase();
    if s.is_empty() {
        return Err(ColorError::syntax("empty color string"));
    }

    let color: ParsedColor = if let Some(body) = s.strip_prefix('#') {
        parse_hex(body)?.into()
    } else if let Some((name, args)) = split_function(&s) {
        let family = function_family(name)
            .ok_or_else(|| ColorError::syntax(format!("unknown color function '{name}'")))?;
        build(family, &tokenize(args)?)?
    } else if hint == ColorFormat::Hex || (hint == ColorFormat::Auto && is_hex_body(&s)) {
        parse_hex(&s)?.into()
    } else if hint.is_concrete() {
        build(hint, &tokenize(&s)?)?
    } else {
        return Err(ColorError::syntax(format!("'{s}' needs a format hint")));
    };

    match hint {
        ColorFormat::Auto => Ok(color),
        target => transform(color, target),
    }
}

/// Returns true if `text` is a color this module can parse, or a bare list
/// of three or four numeric components.
pub fn is_valid_color(text: &str) -> bool {
    if parse_css(text, ColorFormat::Auto).is_ok() {
        return true;
    }
    let s = text.trim();
    !s.contains('(')
        && !s.starts_with('#')
        && tokenize(s).is_ok_and(|tokens| matches!(tokens.len(), 3 | 4))
}

/// True for 3, 4, 6 or 8 hex digits (no `#`).
pub fn is_hex_body(s: &str) -> bool {
    matches!(s.len(), 3 | 4 | 6 | 8) && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a hex color body (without `#`).
///
/// The allowed formats are:
/// * RGB
/// * RGBA
/// * RRGGBB
/// * RRGGBBAA
///
/// Short forms double each digit (`f` -> `ff`).
fn parse_hex(body: &str) -> ColorResult<Rgb> {
    if !is_hex_body(body) {
        return Err(ColorError::syntax(format!("invalid hex color '#{body}'")));
    }

    let digits: Vec<u8> = match body.len() {
        3 | 4 => body.bytes().flat_map(|b| [b, b]).collect(),
        _ => body.bytes().collect(),
    };
    let byte = |i: usize| -> ColorResult<f64> {
        let pair = std::str::from_utf8(&digits[i * 2..i * 2 + 2])
            .map_err(|_| ColorError::syntax("invalid hex digits"))?;
        u8::from_str_radix(pair, 16)
            .map(f64::from)
            .map_err(|_| ColorError::syntax("invalid hex digits"))
    };

    let alpha = if digits.len() == 8 { Some(byte(3)? / 255.0) } else { None };
    Ok(Rgb {
        r: byte(0)?,
        g: byte(1)?,
        b: byte(2)?,
        alpha,
    })
}

/// Splits `name(args)` into its parts.
fn split_function(s: &str) -> Option<(&str, &str)> {
    let open = s.find('(')?;
    let args = s[open + 1..].strip_suffix(')')?;
    Some((s[..open].trim_end(), args))
}

fn function_family(name: &str) -> Option<ColorFormat> {
    match name {
        "rgb" | "rgba" => Some(ColorFormat::Rgb),
        "hsl" | "hsla" => Some(ColorFormat::Hsl),
        "oklab" => Some(ColorFormat::Oklab),
        "oklch" => Some(ColorFormat::Oklch),
        _ => None,
    }
}

fn tokenize(args: &str) -> ColorResult<Vec<Token>> {
    args.split(|c: char| c.is_whitespace() || c == ',' || c == '/')
        .filter(|t| !t.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(tok: &str) -> ColorResult<Token> {
    let (num, unit) = if let Some(n) = tok.strip_suffix('%') {
        (n, Unit::Percent)
    } else if let Some(n) = tok.strip_suffix("deg") {
        (n, Unit::Degrees)
    } else {
        (tok, Unit::None)
    };

    let value: f64 = num
        .parse()
        .map_err(|_| ColorError::syntax(format!("invalid number '{tok}'")))?;
    if !value.is_finite() {
        return Err(ColorError::syntax(format!("non-finite number '{tok}'")));
    }
    Ok(Token { value, unit })
}

fn build(family: ColorFormat, tokens: &[Token]) -> ColorResult<ParsedColor> {
    if !matches!(tokens.len(), 3 | 4) {
        return Err(ColorError::ArityMismatch {
            format: family,
            found: tokens.len(),
        });
    }
    let alpha = tokens.get(3).map(alpha_value).transpose()?;
    let [x, y, z] = [tokens[0], tokens[1], tokens[2]];

    let components = match family {
        ColorFormat::Rgb | ColorFormat::Hex => {
            [channel("red", x)?, channel("green", y)?, channel("blue", z)?]
        }
        ColorFormat::Hsl => [
            hue(x)?,
            percentage("saturation", y)?,
            percentage("lightness", z)?,
        ],
        ColorFormat::Oklab => [ok_lightness(x)?, ok_axis("a", y)?, ok_axis("b", z)?],
        ColorFormat::Oklch => [
            ok_lightness(x)?,
            in_range("chroma", ok_axis("chroma", y)?, 0.0, f64::MAX)?,
            hue(z)?,
        ],
        ColorFormat::Auto => [x.value, y.value, z.value],
    };
    ParsedColor::from_components(family, components, alpha)
        .ok_or_else(|| ColorError::syntax("bare components need a format hint"))
}

#[inline]
fn in_range(component: &'static str, value: f64, lo: f64, hi: f64) -> ColorResult<f64> {
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange { component, value })
    }
}

fn no_degrees(component: &'static str, t: Token) -> ColorResult<()> {
    if t.unit == Unit::Degrees {
        return Err(ColorError::syntax(format!("{component} cannot be in degrees")));
    }
    Ok(())
}

fn alpha_value(t: &Token) -> ColorResult<f64> {
    no_degrees("alpha", *t)?;
    let v = if t.unit == Unit::Percent { t.value / 100.0 } else { t.value };
    in_range("alpha", v, 0.0, 1.0)
}

fn channel(component: &'static str, t: Token) -> ColorResult<f64> {
    no_degrees(component, t)?;
    let v = if t.unit == Unit::Percent { t.value / 100.0 * 255.0 } else { t.value };
    in_range(component, v, 0.0, 255.0)
}

fn percentage(component: &'static str, t: Token) -> ColorResult<f64> {
    no_degrees(component, t)?;
    in_range(component, t.value, 0.0, 100.0)
}

fn hue(t: Token) -> ColorResult<f64> {
    if t.unit == Unit::Percent {
        return Err(ColorError::syntax("hue cannot be a percentage"));
    }
    Ok(t.value)
}

fn ok_lightness(t: Token) -> ColorResult<f64> {
    no_degrees("lightness", t)?;
    let v = if t.unit == Unit::Percent { t.value / 100.0 } else { t.value };
    in_range("lightness", v, 0.0, 1.0)
}

fn ok_axis(component: &'static str, t: Token) -> ColorResult<f64> {
    no_degrees(component, t)?;
    Ok(if t.unit == Unit::Percent {
        t.value / 100.0 * OK_CHROMA_PERCENT_REF
    } else {
        t.value
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint_core::{Hsl, Oklab};

    fn rgb(text: &str) -> Rgb {
        match parse_css(text, ColorFormat::Auto).unwrap() {
            ParsedColor::Rgb(c) => c,
            other => panic!("expected rgb, got {other:?}"),
        }
    }

    #[test]
    fn test_hex_forms() {
        let c = rgb("#ff0000");
        assert_eq!((c.r, c.g, c.b, c.alpha), (255.0, 0.0, 0.0, None));

        let c = rgb("#F008");
        assert_eq!((c.r, c.g, c.b), (255.0, 0.0, 0.0));
        assert_eq!(c.alpha, Some(136.0 / 255.0));

        let c = rgb("#FF0000AA");
        assert_eq!(c.alpha, Some(170.0 / 255.0));

        let c = rgb("0af");
        assert_eq!((c.r, c.g, c.b), (0.0, 170.0, 255.0));

        assert!(parse_css("#12345", ColorFormat::Auto).is_err());
        assert!(parse_css("#ggg", ColorFormat::Auto).is_err());
    }

    #[test]
    fn test_separators_and_alpha() {
        for text in [
            "rgb(255 0 0 / 50%)",
            "rgb(255 0 0/50%)",
            "rgb(255, 0, 0, 0.5)",
            "rgba(255,0,0,.5)",
            "rgb(255 0 0 0.5)",
        ] {
            let c = rgb(text);
            assert_eq!((c.r, c.g, c.b), (255.0, 0.0, 0.0), "{text}");
            assert_eq!(c.alpha, Some(0.5), "{text}");
        }
    }

    #[test]
    fn test_units() {
        let c = rgb("rgb(100% 0% 50%)");
        assert_eq!(c.r, 255.0);
        assert_eq!(c.b, 127.5);

        let c = parse_css("oklch(70% 50% 240deg)", ColorFormat::Auto).unwrap();
        let [l, ch, h] = c.components();
        assert!((l - 0.7).abs() < 1e-12);
        assert!((ch - 0.2).abs() < 1e-12);
        assert_eq!(h, 240.0);

        let c = parse_css("HSL(220 100% 50%)", ColorFormat::Auto).unwrap();
        assert_eq!(c, ParsedColor::Hsl(Hsl::new(220.0, 100.0, 50.0)));
    }

    #[test]
    fn test_ranges() {
        assert!(matches!(
            parse_css("rgb(300 0 0)", ColorFormat::Auto),
            Err(ColorError::OutOfRange { component: "red", .. })
        ));
        assert!(parse_css("hsl(10 120% 50%)", ColorFormat::Auto).is_err());
        assert!(parse_css("oklch(1.5 0.1 20)", ColorFormat::Auto).is_err());
        assert!(parse_css("oklch(0.5 -0.1 20)", ColorFormat::Auto).is_err());
        assert!(parse_css("rgb(0 0 0 / 2)", ColorFormat::Auto).is_err());
        assert!(parse_css("rgb(0 0 0 / nan)", ColorFormat::Auto).is_err());
        assert!(parse_css("oklab(0.5 -0.2 0.3)", ColorFormat::Auto).is_ok());
    }

    #[test]
    fn test_arity() {
        assert!(matches!(
            parse_css("hsl(10 20%)", ColorFormat::Auto),
            Err(ColorError::ArityMismatch { format: ColorFormat::Hsl, found: 2 })
        ));
        assert!(parse_css("rgb(1 2 3 4 5)", ColorFormat::Auto).is_err());
    }

    #[test]
    fn test_bare_components_need_hint() {
        assert!(parse_css("0.5 0.1 0.2", ColorFormat::Auto).is_err());
        let c = parse_css("0.5 0.1 0.2", ColorFormat::Oklab).unwrap();
        assert_eq!(c, ParsedColor::Oklab(Oklab::new(0.5, 0.1, 0.2)));
    }

    #[test]
    fn test_hint_converts_family() {
        let c = parse_css("rgb(255 0 0)", ColorFormat::Hsl).unwrap();
        assert_eq!(c.format(), ColorFormat::Hsl);

        let c = parse_css("#00ff00", ColorFormat::Hex).unwrap();
        assert_eq!(c.format(), ColorFormat::Rgb);
    }

    #[test]
    fn test_is_valid_color() {
        assert!(is_valid_color("#abc"));
        assert!(is_valid_color("oklch(0.93 0.03 25/70%)"));
        assert!(is_valid_color("0.5 -0.1 0.1"));
        assert!(is_valid_color("255 128 0"));
        assert!(!is_valid_color("hsl(10 20%)"));
        assert!(!is_valid_color("hello"));
        assert!(!is_valid_color("10 20"));
        assert!(!is_valid_color("cmyk(0 0 0 0)"));
        assert!(!is_valid_color(""));
    }
}
