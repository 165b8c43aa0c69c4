//! Detect command

use crate::DetectArgs;
use anyhow::Result;
use serde::Serialize;
use tint_color::Converter;
use tint_core::ColorFormat;
use tracing::trace;

#[derive(Debug, Serialize)]
struct Detection<'a> {
    line: &'a str,
    format: Option<ColorFormat>,
}

pub fn run(args: DetectArgs, verbose: u8) -> Result<()> {
    let text = super::read_input(&args.colors, args.file.as_deref())?;
    let conv = Converter::new();

    let detections: Vec<Detection<'_>> = text
        .split('\n')
        .map(|line| {
            let format = conv
                .try_detect(line)
                .inspect_err(|err| trace!(line, %err, "detect"))
                .ok();
            Detection { line, format }
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&detections)?);
        return Ok(());
    }

    for d in &detections {
        let name = d.format.map_or("-", ColorFormat::as_str);
        if verbose > 0 {
            println!("{name:<6} {}", d.line);
        } else {
            println!("{name}");
        }
    }
    Ok(())
}
