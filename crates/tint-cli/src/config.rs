//! YAML defaults for the convert command.
//!
//! ```yaml
//! from: auto
//! to: oklch
//! simplified: false
//! commas: true
//! ```
//!
//! Every key is optional. Command-line flags take precedence.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tint_core::ColorFormat;
use tracing::debug;

/// Defaults loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Source notation.
    pub from: Option<ColorFormat>,
    /// Target notation.
    pub to: Option<ColorFormat>,
    /// Bare components.
    pub simplified: bool,
    /// Comma separators.
    pub commas: bool,
}

impl Settings {
    /// Parses settings from YAML text. An empty document gives the defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Invalid config")
    }

    /// Loads settings from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let settings = Self::from_yaml(&text)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), ?settings, "config loaded");
        Ok(settings)
    }
}
