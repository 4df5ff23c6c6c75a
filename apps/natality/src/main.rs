//! natality CLI
//!
//! Reads a pregnancy extract, splits live births into first babies and
//! others, and prints the weight comparison and pregnancy-length modes.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use natality::report::write_report;
use natality::{explore, load_birth_frames, NatalityConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "natality")]
#[command(about = "Exploratory statistics on birth records: first babies vs. others")]
#[command(version)]
struct Cli {
    /// Pregnancy extract (CSV or TSV)
    data: PathBuf,

    /// TOML config file (defaults match the NSFG pregnancy file)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ranked pregnancy lengths to print
    #[arg(long)]
    top: Option<usize>,

    /// Print results as pretty JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip cleaning of birth-weight codes
    #[arg(long)]
    no_clean: bool,

    /// Log verbosity level (trace, debug, info, warn, error); RUST_LOG overrides
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(cli.log_level).into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run(&cli) {
        tracing::error!("{}", err);
        return Err(err);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => NatalityConfig::load(path)?,
        None => NatalityConfig::default(),
    };
    if let Some(top) = cli.top {
        config.report.top_modes = top;
    }
    if cli.no_clean {
        config.cleaning.enabled = false;
    }
    config.validate()?;

    let frames = load_birth_frames(&cli.data, &config)?;
    let exploration = explore(&frames, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &exploration)?;
        writeln!(out)?;
    } else {
        write_report(&mut out, &exploration, &program_name())?;
    }
    out.flush()?;

    Ok(())
}

/// File name of the running binary, for the completion line
fn program_name() -> String {
    std::env::args()
        .next()
        .as_deref()
        .and_then(|arg| Path::new(arg).file_name())
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| "natality".to_string())
}
