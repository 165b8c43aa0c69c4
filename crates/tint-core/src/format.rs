//! Color notation identifiers.
//!
//! [`ColorFormat`] names the five textual notations tint converts between,
//! plus [`ColorFormat::Auto`], which is only ever a *request*: "detect the
//! source notation for me". A detected or stored format is never `Auto`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ColorError;

/// Supported color notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    /// `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA`.
    Hex,
    /// `hsl(H S% L%)`, hue in degrees, saturation/lightness in percent.
    Hsl,
    /// `oklab(L a b)`.
    Oklab,
    /// `oklch(L C H)`.
    Oklch,
    /// `rgb(R G B)`, channels 0-255.
    Rgb,
    /// Detect the source notation (request-time only).
    Auto,
}

impl ColorFormat {
    /// The five concrete notations, in display order.
    pub const CONCRETE: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Hsl,
        ColorFormat::Oklab,
        ColorFormat::Oklch,
        ColorFormat::Rgb,
    ];

    /// Lowercase name, also the CSS function name for functional notations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Hsl => "hsl",
            Self::Oklab => "oklab",
            Self::Oklch => "oklch",
            Self::Rgb => "rgb",
            Self::Auto => "auto",
        }
    }

    /// Returns false only for [`ColorFormat::Auto`].
    #[inline]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Self::Auto)
    }

    /// Short human description, used by `tint formats`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Hex => "#RGB, #RGBA, #RRGGBB, #RRGGBBAA",
            Self::Hsl => "hsl(H S% L% / A), hsla(), or raw `H S% L%`",
            Self::Oklab => "oklab(L a b / A) or bare `L a b`",
            Self::Oklch => "oklch(L C H / A) or bare `L C H`",
            Self::Rgb => "rgb(R G B / A), rgba(), or bare `R G B`",
            Self::Auto => "detect the source notation",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorFormat {
    type Err = ColorError;

    /// Parses a format name, case-insensitively. Legacy `rgba`/`hsla` map to
    /// their base notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" | "#" => Ok(Self::Hex),
            "hsl" | "hsla" => Ok(Self::Hsl),
            "oklab" => Ok(Self::Oklab),
            "oklch" => Ok(Self::Oklch),
            "rgb" | "rgba" => Ok(Self::Rgb),
            "auto" => Ok(Self::Auto),
            other => Err(ColorError::syntax(format!("unknown color format '{other}'"))),
        }
    }
}
