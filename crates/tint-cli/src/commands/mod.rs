//! CLI command implementations

pub mod convert;
pub mod detect;
pub mod formats;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Collects input lines: arguments first, then `file`, then stdin.
pub fn read_input(colors: &[String], file: Option<&Path>) -> Result<String> {
    if !colors.is_empty() {
        return Ok(colors.join("\n"));
    }

    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    Ok(normalize_newlines(text))
}

/// CRLF to LF, so Windows files do not leave `\r` on every value.
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
