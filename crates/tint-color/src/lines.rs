//! Line-by-line conversion of multi-line text.
//!
//! Each line is converted independently; one bad line never affects another.
//! Results come back in input order, one per line (an empty input is one
//! empty line).

use serde::Serialize;
use tint_core::ColorFormat;
use tint_math::ColorMath;
use tracing::debug;

use crate::convert::Converter;
use crate::formatter::OutputStyle;

/// Outcome of converting one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    /// The line exactly as given.
    pub original: String,
    /// The converted line, leading whitespace preserved, or `None` on failure.
    pub converted: Option<String>,
    /// Format detected for the line (only when the source was `Auto`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_format: Option<ColorFormat>,
}

impl LineResult {
    /// The converted text, or the original line if conversion failed.
    pub fn output(&self) -> &str {
        self.converted.as_deref().unwrap_or(&self.original)
    }

    /// True if the line was converted.
    pub fn is_converted(&self) -> bool {
        self.converted.is_some()
    }
}

/// Joins line outputs back into a document with `\n`.
///
/// Failed lines are emitted unchanged.
pub fn reassemble(results: &[LineResult]) -> String {
    results
        .iter()
        .map(LineResult::output)
        .collect::<Vec<_>>()
        .join("\n")
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

impl<M: ColorMath> Converter<M> {
    /// Converts one line, keeping its indentation.
    pub fn process_line(
        &self,
        line: &str,
        source: ColorFormat,
        target: ColorFormat,
        style: OutputStyle,
    ) -> LineResult {
        let detected_format = match source {
            ColorFormat::Auto => self.detect(line),
            _ => None,
        };
        let converted = self
            .convert(line, source, target, style)
            .map(|out| format!("{}{out}", leading_whitespace(line)));

        LineResult {
            original: line.to_string(),
            converted,
            detected_format,
        }
    }

    /// Converts every `\n`-separated line of `text`.
    pub fn process(
        &self,
        text: &str,
        source: ColorFormat,
        target: ColorFormat,
        style: OutputStyle,
    ) -> Vec<LineResult> {
        let results: Vec<_> = text
            .split('\n')
            .map(|line| self.process_line(line, source, target, style))
            .collect();
        log_summary(&results);
        results
    }

    /// Parallel [`process`](Self::process). Output order matches input order.
    #[cfg(feature = "rayon")]
    pub fn process_par(
        &self,
        text: &str,
        source: ColorFormat,
        target: ColorFormat,
        style: OutputStyle,
    ) -> Vec<LineResult> {
        use rayon::prelude::*;

        let lines: Vec<&str> = text.split('\n').collect();
        let results: Vec<_> = lines
            .par_iter()
            .map(|line| self.process_line(line, source, target, style))
            .collect();
        log_summary(&results);
        results
    }
}

fn log_summary(results: &[LineResult]) {
    let converted = results.iter().filter(|r| r.is_converted()).count();
    debug!(lines = results.len(), converted, "processed lines");
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX: ColorFormat = ColorFormat::Hex;
    const AUTO: ColorFormat = ColorFormat::Auto;

    #[test]
    fn test_line_count_and_order() {
        let text = "#ff0000\nnot a color\n\n  rgb(0 0 255)";
        let results = Converter::new().process(text, AUTO, ColorFormat::Rgb, OutputStyle::default());
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].converted.as_deref(), Some("rgb(255 0 0)"));
        assert_eq!(results[1].converted, None);
        assert_eq!(results[2].converted, None);
        assert_eq!(results[3].converted.as_deref(), Some("  rgb(0 0 255)"));
        for (r, line) in results.iter().zip(text.split('\n')) {
            assert_eq!(r.original, line);
        }
    }

    #[test]
    fn test_empty_input() {
        let results = Converter::new().process("", AUTO, HEX, OutputStyle::default());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].original, "");
        assert_eq!(results[0].converted, None);
    }

    #[test]
    fn test_tabs_preserved() {
        let results = Converter::new().process("\t#FFF", AUTO, HEX, OutputStyle::default());
        assert_eq!(results[0].converted.as_deref(), Some("\t#ffffff"));
    }

    #[test]
    fn test_detected_format_only_for_auto() {
        let conv = Converter::new();
        let auto = conv.process_line("rgb(1 2 3)", AUTO, HEX, OutputStyle::default());
        assert_eq!(auto.detected_format, Some(ColorFormat::Rgb));
        let fixed = conv.process_line("rgb(1 2 3)", ColorFormat::Rgb, HEX, OutputStyle::default());
        assert_eq!(fixed.detected_format, None);
    }

    #[test]
    fn test_reassemble_keeps_failures() {
        let text = "/* palette */\n#000\n";
        let results = Converter::new().process(text, AUTO, ColorFormat::Rgb, OutputStyle::default());
        assert_eq!(reassemble(&results), "/* palette */\nrgb(0 0 0)\n");
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_matches_sequential() {
        let text = (0..64)
            .map(|i| format!("rgb({i} {} 10)", 255 - i))
            .collect::<Vec<_>>()
            .join("\n");
        let conv = Converter::new();
        let style = OutputStyle::new(false, true);
        assert_eq!(
            conv.process(&text, AUTO, ColorFormat::Oklch, style),
            conv.process_par(&text, AUTO, ColorFormat::Oklch, style)
        );
    }
}
