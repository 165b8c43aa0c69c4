//! # tint-math
//!
//! Color math for tint: CSS color parsing and colorspace transforms.
//!
//! The conversion engine (`tint-color`) treats this crate as a trusted
//! collaborator behind the [`ColorMath`] trait. It asks three questions and
//! never looks inside the answers' math:
//!
//! - is this text a color at all? ([`ColorMath::is_valid`])
//! - what are its components? ([`ColorMath::parse`])
//! - what are they in another notation? ([`ColorMath::transform`])
//!
//! [`CssColorMath`] is the default implementation. Tests of the engine can
//! swap in a table-driven mock instead.
//!
//! # Architecture
//!
//! ```text
//!                 CssColorMath
//!                      |
//!        +-------------+-------------+
//!        |                           |
//!      parse                     transform
//!        |                           |
//!        |             +------+------+------+
//!        |             |      |             |
//!        +----------> hsl   oklab  -----> srgb
//!                              (glam DMat3)
//! ```
//!
//! # Usage
//!
//! ```rust
//! use tint_core::ColorFormat;
//! use tint_math::{ColorMath, CssColorMath};
//!
//! let math = CssColorMath;
//! assert!(math.is_valid("oklch(0.7 0.2 240)"));
//!
//! let lch = math.parse("oklch(0.7 0.2 240)", ColorFormat::Oklch).unwrap();
//! let rgb = math.transform(lch, ColorFormat::Rgb).unwrap();
//! assert_eq!(rgb.format(), ColorFormat::Rgb);
//! ```
//!
//! # Dependencies
//!
//! - [`tint-core`] - Component types and errors
//! - [`glam`] - f64 matrices for the OKLAB transforms

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod hsl;
pub mod oklab;
pub mod parse;
pub mod srgb;
pub mod transform;

use tint_core::{ColorFormat, ColorResult, ParsedColor};

/// Stateless colorspace capability consumed by the conversion engine.
///
/// Implementations must be pure: the same inputs always give the same
/// outputs, and no call may panic.
pub trait ColorMath: Send + Sync {
    /// Returns true if `text` is syntactically a color of some kind.
    fn is_valid(&self, text: &str) -> bool;

    /// Parses `text` into the component family named by `hint`.
    ///
    /// A `Hex` hint yields RGB components; an `Auto` hint keeps the family of
    /// the notation itself.
    fn parse(&self, text: &str, hint: ColorFormat) -> ColorResult<ParsedColor>;

    /// Converts `color` into the component family of `target`.
    fn transform(&self, color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor>;
}

impl<T: ColorMath + ?Sized> ColorMath for &T {
    fn is_valid(&self, text: &str) -> bool {
        (**self).is_valid(text)
    }

    fn parse(&self, text: &str, hint: ColorFormat) -> ColorResult<ParsedColor> {
        (**self).parse(text, hint)
    }

    fn transform(&self, color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor> {
        (**self).transform(color, target)
    }
}

/// Default [`ColorMath`]: CSS Color 4 syntax, sRGB, HSL, OKLAB, OKLCH.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorMath;

impl ColorMath for CssColorMath {
    fn is_valid(&self, text: &str) -> bool {
        parse::is_valid_color(text)
    }

    fn parse(&self, text: &str, hint: ColorFormat) -> ColorResult<ParsedColor> {
        parse::parse_css(text, hint)
    }

    fn transform(&self, color: ParsedColor, target: ColorFormat) -> ColorResult<ParsedColor> {
        transform::transform(color, target)
    }
}
