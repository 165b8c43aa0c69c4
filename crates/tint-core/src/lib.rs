//! # tint-core
//!
//! Core types for converting textual color notations.
//!
//! This crate provides the foundational types used throughout tint:
//!
//! - [`ColorFormat`] - The five notations (plus the request-only `Auto`)
//! - [`ParsedColor`] - Tagged union over [`Hsl`], [`Rgb`], [`Oklab`], [`Oklch`]
//! - [`ColorError`] - Failure modes of detection, validation, parsing and transforms
//!
//! ## Crate Structure
//!
//! This crate is the foundation of tint and has no internal dependencies:
//!
//! ```text
//! tint-core (this crate)
//!    ^
//!    |
//!    +-- tint-math  (parser + colorspace transforms)
//!    +-- tint-color (detection, conversion, formatting engine)
//!    +-- tint-cli   (command line)
//! ```
//!
//! ## Alpha
//!
//! Every component set carries an optional alpha in `[0, 1]`. Whether an alpha
//! is worth rendering is decided in one place, [`visible_alpha`]:
//!
//! ```rust
//! use tint_core::visible_alpha;
//!
//! assert_eq!(visible_alpha(Some(0.5)), Some(0.5));
//! assert_eq!(visible_alpha(Some(1.0)), None);    // opaque
//! assert_eq!(visible_alpha(Some(0.0005)), None); // transparent noise
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod format;

pub use color::*;
pub use error::*;
pub use format::*;

/// Prelude module for convenient imports.
///
/// ```
/// use tint_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::{Hsl, Oklab, Oklch, ParsedColor, Rgb, visible_alpha};
    pub use crate::error::{ColorError, ColorResult};
    pub use crate::format::ColorFormat;
}
