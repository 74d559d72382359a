//! rsb-report - phonetic error reports for RSB speech-in-noise tests

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use rsb_report::{execute, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configuration first: it may set the log level
    let config = cli.load_config().context("Failed to load configuration")?;
    let level = cli.log_level(&config)?;

    // Initialize logging (stderr, so reports can be piped)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📋 rsb-report v{}", env!("CARGO_PKG_VERSION"));
    debug!("Configuration: {}", config.config_path.display());

    let output = execute(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
