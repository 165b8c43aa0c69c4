//! Parsed color component sets.
//!
//! A [`ParsedColor`] is one of four concrete component sets. Hex has no set of
//! its own: a hex literal is an encoding of [`Rgb`] channels.
//!
//! | Set       | Components                     | Ranges                         |
//! |-----------|--------------------------------|--------------------------------|
//! | [`Hsl`]   | hue, saturation, lightness     | 0-360 deg, 0-100 %, 0-100 %    |
//! | [`Rgb`]   | red, green, blue               | 0-255 (may be fractional)      |
//! | [`Oklab`] | lightness, a, b                | 0-1, about -0.4..0.4           |
//! | [`Oklch`] | lightness, chroma, hue         | 0-1, 0..about 0.4, degrees     |
//!
//! All four carry an optional alpha in `[0, 1]`.

use crate::ColorFormat;

/// Alpha values at or below this are treated as "no alpha".
pub const TRANSPARENT_ALPHA: f64 = 0.001;

/// Alpha values above this round to an opaque 100% and are treated as absent.
pub const OPAQUE_ALPHA: f64 = 0.999;

/// Returns the alpha only when it is distinguishable from "unspecified".
///
/// Near-opaque values (above [`OPAQUE_ALPHA`]) and near-zero values (at or
/// below [`TRANSPARENT_ALPHA`]) both yield `None`.
///
/// # Example
///
/// ```rust
/// use tint_core::visible_alpha;
///
/// assert_eq!(visible_alpha(None), None);
/// assert_eq!(visible_alpha(Some(0.999)), Some(0.999));
/// assert_eq!(visible_alpha(Some(0.9995)), None);
/// assert_eq!(visible_alpha(Some(0.001)), None);
/// ```
#[inline]
pub fn visible_alpha(alpha: Option<f64>) -> Option<f64> {
    alpha.filter(|&a| a > TRANSPARENT_ALPHA && a <= OPAQUE_ALPHA)
}

#[inline]
fn clamp_alpha(alpha: Option<f64>) -> Option<f64> {
    alpha.filter(|a| a.is_finite()).map(|a| a.clamp(0.0, 1.0))
}

/// HSL components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0-360
    pub h: f64,
    /// Saturation in percent, 0-100
    pub s: f64,
    /// Lightness in percent, 0-100
    pub l: f64,
    /// Optional alpha, 0-1
    pub alpha: Option<f64>,
}

/// Gamma-encoded sRGB components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red, 0-255
    pub r: f64,
    /// Green, 0-255
    pub g: f64,
    /// Blue, 0-255
    pub b: f64,
    /// Optional alpha, 0-1
    pub alpha: Option<f64>,
}

/// OKLAB components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness, 0-1
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
    /// Optional alpha, 0-1
    pub alpha: Option<f64>,
}

/// OKLCH components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Perceptual lightness, 0-1
    pub l: f64,
    /// Chroma, 0 to about 0.4
    pub c: f64,
    /// Hue in degrees
    pub h: f64,
    /// Optional alpha, 0-1
    pub alpha: Option<f64>,
}

impl Hsl {
    /// Creates an opaque HSL color.
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l, alpha: None }
    }
}

impl Rgb {
    /// Creates an opaque RGB color.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, alpha: None }
    }
}

impl Oklab {
    /// Creates an opaque OKLAB color.
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b, alpha: None }
    }
}

impl Oklch {
    /// Creates an opaque OKLCH color.
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h, alpha: None }
    }
}

/// A color parsed into one of the four component sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedColor {
    /// HSL components
    Hsl(Hsl),
    /// RGB components (also the decoded form of hex)
    Rgb(Rgb),
    /// OKLAB components
    Oklab(Oklab),
    /// OKLCH components
    Oklch(Oklch),
}

impl ParsedColor {
    /// Builds a color of the given format from three components.
    ///
    /// `Hex` yields RGB components; `Auto` yields `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::{ColorFormat, ParsedColor};
    ///
    /// let c = ParsedColor::from_components(ColorFormat::Oklch, [0.7, 0.2, 240.0], Some(0.5)).unwrap();
    /// assert_eq!(c.format(), ColorFormat::Oklch);
    /// assert_eq!(c.alpha(), Some(0.5));
    /// ```
    pub fn from_components(format: ColorFormat, c: [f64; 3], alpha: Option<f64>) -> Option<Self> {
        let alpha = clamp_alpha(alpha);
        let [x, y, z] = c;
        let color = match format {
            ColorFormat::Hsl => Self::Hsl(Hsl { h: x, s: y, l: z, alpha }),
            ColorFormat::Rgb | ColorFormat::Hex => Self::Rgb(Rgb { r: x, g: y, b: z, alpha }),
            ColorFormat::Oklab => Self::Oklab(Oklab { l: x, a: y, b: z, alpha }),
            ColorFormat::Oklch => Self::Oklch(Oklch { l: x, c: y, h: z, alpha }),
            ColorFormat::Auto => return None,
        };
        Some(color)
    }

    /// Component family of this color. Never `Hex` or `Auto`.
    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::Hsl(_) => ColorFormat::Hsl,
            Self::Rgb(_) => ColorFormat::Rgb,
            Self::Oklab(_) => ColorFormat::Oklab,
            Self::Oklch(_) => ColorFormat::Oklch,
        }
    }

    /// The three non-alpha components in notation order.
    pub const fn components(&self) -> [f64; 3] {
        match self {
            Self::Hsl(c) => [c.h, c.s, c.l],
            Self::Rgb(c) => [c.r, c.g, c.b],
            Self::Oklab(c) => [c.l, c.a, c.b],
            Self::Oklch(c) => [c.l, c.c, c.h],
        }
    }

    /// Alpha, if one was parsed or attached.
    pub const fn alpha(&self) -> Option<f64> {
        match self {
            Self::Hsl(c) => c.alpha,
            Self::Rgb(c) => c.alpha,
            Self::Oklab(c) => c.alpha,
            Self::Oklch(c) => c.alpha,
        }
    }

    /// Returns the same components with `alpha` attached (clamped to `[0, 1]`).
    ///
    /// Passing `None` removes any alpha.
    #[must_use]
    pub fn with_alpha(self, alpha: Option<f64>) -> Self {
        let alpha = clamp_alpha(alpha);
        match self {
            Self::Hsl(c) => Self::Hsl(Hsl { alpha, ..c }),
            Self::Rgb(c) => Self::Rgb(Rgb { alpha, ..c }),
            Self::Oklab(c) => Self::Oklab(Oklab { alpha, ..c }),
            Self::Oklch(c) => Self::Oklch(Oklch { alpha, ..c }),
        }
    }

    /// Alpha filtered through [`visible_alpha`].
    #[inline]
    pub fn visible_alpha(&self) -> Option<f64> {
        visible_alpha(self.alpha())
    }
}

impl From<Hsl> for ParsedColor {
    fn from(c: Hsl) -> Self {
        Self::Hsl(c)
    }
}

impl From<Rgb> for ParsedColor {
    fn from(c: Rgb) -> Self {
        Self::Rgb(c)
    }
}

impl From<Oklab> for ParsedColor {
    fn from(c: Oklab) -> Self {
        Self::Oklab(c)
    }
}

impl From<Oklch> for ParsedColor {
    fn from(c: Oklch) -> Self {
        Self::Oklch(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_alpha_bounds() {
        assert_eq!(visible_alpha(Some(0.0)), None);
        assert_eq!(visible_alpha(Some(0.001)), None);
        assert_eq!(visible_alpha(Some(0.0011)), Some(0.0011));
        assert_eq!(visible_alpha(Some(0.5)), Some(0.5));
        assert_eq!(visible_alpha(Some(0.999)), Some(0.999));
        assert_eq!(visible_alpha(Some(0.9991)), None);
        assert_eq!(visible_alpha(Some(0.99995)), None);
        assert_eq!(visible_alpha(Some(1.0)), None);
    }

    #[test]
    fn test_with_alpha_replaces_and_clamps() {
        let c = ParsedColor::from(Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(c.alpha(), None);

        let c = c.with_alpha(Some(0.4));
        assert_eq!(c.alpha(), Some(0.4));
        assert_eq!(c.components(), [255.0, 0.0, 0.0]);

        assert_eq!(c.with_alpha(Some(3.0)).alpha(), Some(1.0));
        assert_eq!(c.with_alpha(Some(f64::NAN)).alpha(), None);
        assert_eq!(c.with_alpha(None).alpha(), None);
    }

    #[test]
    fn test_from_components() {
        let c = ParsedColor::from_components(ColorFormat::Hex, [1.0, 2.0, 3.0], None).unwrap();
        assert_eq!(c.format(), ColorFormat::Rgb);
        assert!(ParsedColor::from_components(ColorFormat::Auto, [0.0; 3], None).is_none());

        let c = ParsedColor::from_components(ColorFormat::Hsl, [220.0, 100.0, 50.0], Some(0.75)).unwrap();
        assert_eq!(c, ParsedColor::Hsl(Hsl { h: 220.0, s: 100.0, l: 50.0, alpha: Some(0.75) }));
    }
}
