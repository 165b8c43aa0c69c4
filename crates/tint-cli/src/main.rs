//! tint - color notation converter
//!
//! Converts colors between HEX, HSL, OKLAB, OKLCH and RGB, one per line,
//! including inside CSS custom-property declarations.

use anyhow::{Context, Result, anyhow};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tint_core::ColorFormat;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "tint")]
#[command(author, version, about = "Convert colors between HEX, HSL, OKLAB, OKLCH and RGB")]
#[command(long_about = "
Converts color values between notations, line by line.
Lines that are not colors pass through unchanged.

Examples:
  tint convert '#ff0000' --to oklch          # oklch(0.63 0.26 29)
  tint convert 'oklch(0.7 0.2 240 / 50%)' --to hex
  tint convert -f theme.css --to rgb --commas
  cat theme.css | tint convert --to hsl --json
  tint detect '220 100% 50%' 'rgb(0 0 0)'
  tint formats
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Write log output to a file instead of stderr
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// YAML file with default conversion options
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert colors to another notation
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Print the detected notation of each line
    #[command(visible_alias = "d")]
    Detect(DetectArgs),

    /// List supported notations
    Formats,
}

#[derive(Args)]
struct ConvertArgs {
    /// Colors to convert, one per argument (reads --file or stdin if none)
    colors: Vec<String>,

    /// Read lines from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Source notation: auto, hex, hsl, oklab, oklch, rgb
    #[arg(long)]
    from: Option<ColorFormat>,

    /// Target notation: hex, hsl, oklab, oklch, rgb
    #[arg(long)]
    to: Option<ColorFormat>,

    /// Print bare components without the function wrapper
    #[arg(short, long)]
    simplified: bool,

    /// Separate components with commas
    #[arg(long)]
    commas: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DetectArgs {
    /// Colors to inspect, one per argument (reads --file or stdin if none)
    colors: Vec<String>,

    /// Read lines from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// `RUST_LOG` wins; otherwise `-v` picks the level.
fn init_logging(verbose: u8, log: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let guard = match log {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            Some(guard)
        }
        None => {
            builder
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to initialize logging: {e}"))?;
            None
        }
    };
    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(cli.verbose, cli.log.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let settings = match &cli.config {
        Some(path) => config::Settings::load(path)?,
        None => config::Settings::default(),
    };

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, &settings, cli.verbose),
        Commands::Detect(args) => commands::detect::run(args, cli.verbose),
        Commands::Formats => commands::formats::run(),
    }
}
