//! HSL <-> RGB.
//!
//! HSL is a cylindrical rearrangement of gamma-encoded sRGB, so these
//! conversions work directly on 0-255 channels with no transfer function.

use tint_core::{Hsl, Rgb};

/// Gamma-encoded RGB (0-255) to HSL (degrees, percent, percent).
pub fn rgb_to_hsl(rgb: &Rgb) -> Hsl {
    let r = rgb.r / 255.0;
    let g = rgb.g / 255.0;
    let b = rgb.b / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    if d == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l: l * 100.0, alpha: rgb.alpha };
    }

    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
        alpha: rgb.alpha,
    }
}

/// HSL to gamma-encoded RGB (0-255). Channels are not rounded.
pub fn hsl_to_rgb(hsl: &Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: (r + m) * 255.0,
        g: (g + m) * 255.0,
        b: (b + m) * 255.0,
        alpha: hsl.alpha,
    }
}
