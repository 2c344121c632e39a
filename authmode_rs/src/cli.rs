//! Command-line surface: argument definitions and the top-level run.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, warn};

use crate::colors::Painter;
use crate::config::AuthModeConfig;
use crate::runner::process_files;
use crate::types::{ColorMode, Direction};

/// Convert AuthenticationMode in JSON files
#[derive(Parser, Debug, Clone)]
#[command(name = "authmode")]
#[command(version, about)]
pub struct Cli {
    /// Specify the conversion direction
    #[arg(long, value_enum)]
    pub direction: Direction,

    /// Directory to scan for JSON files
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Exit with status 1 when any file is unreadable, invalid or cannot be written
    #[arg(long)]
    pub strict: bool,

    /// Colorize output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Log level for diagnostics on stderr
    #[arg(
        long,
        default_value = "warn",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: String,
}

/// Scan `cli.root` and rewrite files. Per-file problems never surface here;
/// only an unusable root is an error.
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let metadata = std::fs::metadata(&cli.root)
        .with_context(|| format!("cannot access scan root {}", cli.root.display()))?;
    if !metadata.is_dir() {
        bail!("scan root {} is not a directory", cli.root.display());
    }

    let config = AuthModeConfig::load(&cli.root);
    debug!(?config, "loaded configuration");

    let painter = Painter::new(cli.color);
    let summary = process_files(&cli.root, cli.direction, &config, &painter);

    let strict = cli.strict || config.strict;
    if strict && summary.failures() > 0 {
        warn!(failures = summary.failures(), "strict mode: some files failed");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
