//! Error types for color conversion.
//!
//! # Overview
//!
//! The [`ColorError`] enum covers every way a single line can fail to convert:
//! - the format could not be detected
//! - the component count does not fit the claimed format
//! - the text is not valid color syntax, or a component is out of range
//! - a transform between two formats is not wired up
//!
//! None of these are fatal. The engine reports them as "no conversion" for the
//! affected line and keeps going.
//!
//! # Usage
//!
//! ```rust
//! use tint_core::{ColorError, ColorFormat, ColorResult};
//!
//! fn require_three(found: usize) -> ColorResult<()> {
//!     if found != 3 {
//!         return Err(ColorError::ArityMismatch {
//!             format: ColorFormat::Rgb,
//!             found,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_three(2).is_err());
//! ```

use thiserror::Error;

use crate::ColorFormat;

/// Result type alias using [`ColorError`] as the error type.
pub type ColorResult<T> = Result<T, ColorError>;

/// Errors that can occur while detecting, parsing or converting a color.
///
/// # Categories
///
/// - **Detection**: [`Undetected`](ColorError::Undetected)
/// - **Arity**: [`ArityMismatch`](ColorError::ArityMismatch)
/// - **Syntax**: [`InvalidSyntax`](ColorError::InvalidSyntax), [`OutOfRange`](ColorError::OutOfRange)
/// - **Transforms**: [`UnsupportedConversion`](ColorError::UnsupportedConversion)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// The input does not look like any supported notation.
    #[error("unable to detect color format")]
    Undetected,

    /// Number of numeric components does not match the claimed format.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tint_core::{ColorError, ColorFormat};
    ///
    /// let err = ColorError::ArityMismatch { format: ColorFormat::Hsl, found: 2 };
    /// assert_eq!(err.to_string(), "hsl expects 3 or 4 components, found 2");
    /// ```
    #[error("{format} expects 3 or 4 components, found {found}")]
    ArityMismatch {
        /// Format the components were checked against
        format: ColorFormat,
        /// Number of numeric components found
        found: usize,
    },

    /// Text is not valid color syntax.
    #[error("invalid color syntax: {0}")]
    InvalidSyntax(String),

    /// A component parsed but lies outside its allowed range.
    #[error("{component} out of range: {value}")]
    OutOfRange {
        /// Component name (`red`, `saturation`, `alpha`, ...)
        component: &'static str,
        /// Offending value
        value: f64,
    },

    /// Transform between two formats is not supported.
    #[error("unsupported conversion: {from} -> {to}")]
    UnsupportedConversion {
        /// Source format
        from: ColorFormat,
        /// Target format
        to: ColorFormat,
    },
}

impl ColorError {
    /// Shorthand for [`ColorError::InvalidSyntax`].
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::InvalidSyntax(msg.into())
    }

    /// Returns true for errors caused by malformed input text.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::InvalidSyntax(_) | Self::OutOfRange { .. })
    }
}
