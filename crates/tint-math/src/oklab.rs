//! OKLAB and OKLCH.
//!
//! OKLAB is built on linear sRGB in two matrix steps with a cube root between
//! them:
//!
//! ```text
//! linear sRGB --M1--> LMS --cbrt--> LMS' --M2--> Lab
//! ```
//!
//! OKLCH is the polar form of OKLAB: `C = hypot(a, b)`, `H = atan2(b, a)`.
//!
//! Matrices are written row-major and applied to column vectors, matching the
//! published reference (Ottosson, "A perceptual color space for image
//! processing", 2020).

use glam::{DMat3, DVec3};
use tint_core::{Oklab, Oklch, Rgb};

use crate::srgb;

/// Chroma below which a color is treated as achromatic and gets hue 0.
pub const ACHROMATIC_CHROMA: f64 = 1e-4;

/// Linear sRGB to LMS.
const M1: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Non-linear LMS' to Lab.
const M2: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// Lab to non-linear LMS'.
const M2_INV: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS to linear sRGB.
const M1_INV: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Builds a glam matrix from row-major rows.
#[inline]
fn from_rows(rows: &[[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols_array_2d(rows).transpose()
}

/// Converts linear sRGB to OKLAB `[L, a, b]`.
pub fn linear_srgb_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let lms = from_rows(&M1) * DVec3::from_array(rgb);
    let lms_ = DVec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    (from_rows(&M2) * lms_).to_array()
}

/// Converts OKLAB `[L, a, b]` to linear sRGB. Output may leave [0, 1].
pub fn oklab_to_linear_srgb(lab: [f64; 3]) -> [f64; 3] {
    let lms_ = from_rows(&M2_INV) * DVec3::from_array(lab);
    let lms = lms_ * lms_ * lms_;
    (from_rows(&M1_INV) * lms).to_array()
}

/// Gamma-encoded RGB (0-255) to OKLAB.
pub fn rgb_to_oklab(rgb: &Rgb) -> Oklab {
    let [l, a, b] = linear_srgb_to_oklab(srgb::decode_channels([rgb.r, rgb.g, rgb.b]));
    Oklab { l, a, b, alpha: rgb.alpha }
}

/// OKLAB to gamma-encoded RGB (0-255), clamped into the sRGB gamut.
pub fn oklab_to_rgb(lab: &Oklab) -> Rgb {
    let [r, g, b] = srgb::encode_channels(oklab_to_linear_srgb([lab.l, lab.a, lab.b]));
    Rgb { r, g, b, alpha: lab.alpha }
}

/// OKLAB to its polar form.
pub fn oklab_to_oklch(lab: &Oklab) -> Oklch {
    let c = lab.a.hypot(lab.b);
    let h = if c < ACHROMATIC_CHROMA {
        0.0
    } else {
        lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0)
    };
    Oklch { l: lab.l, c, h, alpha: lab.alpha }
}

/// OKLCH to rectangular OKLAB.
pub fn oklch_to_oklab(lch: &Oklch) -> Oklab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Oklab {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
        alpha: lch.alpha,
    }
}
