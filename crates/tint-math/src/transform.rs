//! Transforms between component families.
//!
//! ```text
//!        HSL
//!         |
//!  hex - RGB - OKLAB - OKLCH
//! ```
//!
//! Gamma-encoded RGB is the hub. OKLAB <-> OKLCH is converted directly so the
//! pair never passes through the sRGB gamut clamp. Alpha rides along
//! unchanged.

use tint_core::prelude::*;

use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::oklab::{oklab_to_oklch, oklab_to_rgb, oklch_to_oklab, rgb_to_oklab};

/// Converts `color` into the family of `target`.
///
/// `Hex` targets yield RGB components; same-family transforms return the
/// input untouched.
///
/// # Errors
///
/// [`ColorError::UnsupportedConversion`] for an `Auto` target.
///
/// # Example
///
/// ```rust
/// use tint_core::{ColorFormat, Oklch, ParsedColor};
/// use tint_math::transform::transform;
///
/// let lch = ParsedColor::from(Oklch::new(0.93, 0.03, 25.0));
/// let rgb = transform(lch, ColorFormat::Rgb).unwrap();
/// let [r, g, b] = rgb.components().map(f64::round);
/// assert_eq!([r, g, b], [252.0, 225.0, 222.0]);
/// ```
pub fn transform(color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor> {
    let target = match target {
        ColorFormat::Hex => ColorFormat::Rgb,
        ColorFormat::Auto => {
            return Err(ColorError::UnsupportedConversion {
                from: color.format(),
                to: target,
            });
        }
        t => t,
    };

    if color.format() == target {
        return Ok(color);
    }

    let out = match (color, target) {
        (ParsedColor::Oklab(c), ColorFormat::Oklch) => oklab_to_oklch(&c).into(),
        (ParsedColor::Oklch(c), ColorFormat::Oklab) => oklch_to_oklab(&c).into(),
        (c, t) => from_rgb(to_rgb(&c), t),
    };
    Ok(out)
}

/// Any color to gamma-encoded RGB.
pub fn to_rgb(color: &ParsedColor) -> Rgb {
    match color {
        ParsedColor::Hsl(c) => hsl_to_rgb(c),
        ParsedColor::Rgb(c) => *c,
        ParsedColor::Oklab(c) => oklab_to_rgb(c),
        ParsedColor::Oklch(c) => oklab_to_rgb(&oklch_to_oklab(c)),
    }
}

fn from_rgb(rgb: Rgb, target: ColorFormat) -> ParsedColor {
    match target {
        ColorFormat::Hsl => rgb_to_hsl(&rgb).into(),
        ColorFormat::Oklab => rgb_to_oklab(&rgb).into(),
        ColorFormat::Oklch => oklab_to_oklch(&rgb_to_oklab(&rgb)).into(),
        ColorFormat::Rgb | ColorFormat::Hex | ColorFormat::Auto => rgb.into(),
    }
}
