//! Formats command

use anyhow::Result;
use tint_core::ColorFormat;

pub fn run() -> Result<()> {
    for format in std::iter::once(ColorFormat::Auto).chain(ColorFormat::CONCRETE) {
        println!("{:<6} {}", format.as_str(), format.description());
    }
    Ok(())
}
