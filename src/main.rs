//! gesture-ip - mid-air IPv4 entry
//!
//! Entry point for the command-line binary.

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use gesture_ip::cli::{execute, Cli};
use gesture_ip::config::AppConfig;
use gesture_ip::logging::{effective_level, init_logging};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::resolve(cli.config.as_deref())?;
    init_logging(effective_level(&config.logging.level, cli.verbose))?;
    debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli.command, &config, &mut out)
}
