//! Convert command

use crate::ConvertArgs;
use crate::config::Settings;
use anyhow::{Result, bail};
use tint_color::{LineResult, OutputStyle, reassemble};
use tint_core::ColorFormat;
use tracing::{debug, info};

/// Conversion options after merging flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub source: ColorFormat,
    pub target: ColorFormat,
    pub style: OutputStyle,
}

/// Flags win over `settings`; the source defaults to `auto`.
pub fn resolve(args: &ConvertArgs, settings: &Settings) -> Result<Options> {
    let source = args.from.or(settings.from).unwrap_or(ColorFormat::Auto);
    let Some(target) = args.to.or(settings.to) else {
        bail!("No target format: pass --to or set `to` in the config");
    };
    if !target.is_concrete() {
        bail!("Target format must be one of hex, hsl, oklab, oklch, rgb (got {target})");
    }

    Ok(Options {
        source,
        target,
        style: OutputStyle::new(
            args.simplified || settings.simplified,
            args.commas || settings.commas,
        ),
    })
}

/// Reassembled output ending in exactly one newline.
fn render_text(results: &[LineResult]) -> String {
    let mut out = reassemble(results);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

pub fn run(args: ConvertArgs, settings: &Settings, verbose: u8) -> Result<()> {
    let opts = resolve(&args, settings)?;
    let text = super::read_input(&args.colors, args.file.as_deref())?;
    debug!(?opts, bytes = text.len(), "convert");

    let results = tint_color::process_multi_line_input_par(
        &text,
        opts.source,
        opts.target,
        opts.style.simplified,
        opts.style.use_commas,
    );

    let converted = results.iter().filter(|r| r.is_converted()).count();
    info!(lines = results.len(), converted, target = %opts.target, "convert done");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print!("{}", render_text(&results));
    }

    if verbose > 0 {
        eprintln!("{}/{} lines converted to {}", converted, results.len(), opts.target);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(from: Option<ColorFormat>, to: Option<ColorFormat>) -> ConvertArgs {
        ConvertArgs {
            colors: vec![],
            file: None,
            from,
            to,
            simplified: false,
            commas: false,
            json: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let settings = Settings {
            from: Some(ColorFormat::Hex),
            to: Some(ColorFormat::Rgb),
            simplified: true,
            commas: false,
        };
        let mut a = args(None, Some(ColorFormat::Oklch));
        a.commas = true;

        let opts = resolve(&a, &settings).unwrap();
        assert_eq!(opts.source, ColorFormat::Hex);
        assert_eq!(opts.target, ColorFormat::Oklch);
        assert_eq!(opts.style, OutputStyle::new(true, true));
    }

    #[test]
    fn test_defaults() {
        let opts = resolve(&args(None, Some(ColorFormat::Hex)), &Settings::default()).unwrap();
        assert_eq!(opts.source, ColorFormat::Auto);
        assert_eq!(opts.style, OutputStyle::default());
    }

    #[test]
    fn test_target_required_and_concrete() {
        assert!(resolve(&args(None, None), &Settings::default()).is_err());
        assert!(resolve(&args(None, Some(ColorFormat::Auto)), &Settings::default()).is_err());
    }

    #[test]
    fn test_render_text_single_trailing_newline() {
        let rgb = |text: &str| {
            tint_color::process_multi_line_input(text, ColorFormat::Auto, ColorFormat::Rgb, false, false)
        };
        assert_eq!(render_text(&rgb("#fff\n#000\n")), "rgb(255 255 255)\nrgb(0 0 0)\n");
        assert_eq!(render_text(&rgb("#fff")), "rgb(255 255 255)\n");
    }
}
