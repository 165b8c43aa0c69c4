//! sRGB gamma encoding, used at the edge of every OKLAB conversion.
//!
//! Channels arrive as 0-255 text values; OKLAB works on linear light. The two
//! helpers at the bottom move whole triples across that boundary.

/// Gamma-encoded `[0, 1]` to linear light.
///
/// ```rust
/// use tint_math::srgb::eotf;
///
/// assert_eq!(eotf(0.0), 0.0);
/// assert!((eotf(0.5) - 0.214).abs() < 0.001);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    const KNEE: f64 = 0.04045;
    if v <= KNEE {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Linear light to gamma-encoded `[0, 1]`. Out-of-gamut input is not
/// clamped here.
#[inline]
pub fn oetf(l: f64) -> f64 {
    const KNEE: f64 = 0.003_130_8;
    if l <= KNEE {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes 0-255 sRGB channels to linear [0, 1].
#[inline]
pub fn decode_channels(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(|v| eotf(v / 255.0))
}

/// Encodes linear channels to 0-255 sRGB, clamped into gamut.
#[inline]
pub fn encode_channels(linear: [f64; 3]) -> [f64; 3] {
    linear.map(|v| (oetf(v) * 255.0).clamp(0.0, 255.0))
}
