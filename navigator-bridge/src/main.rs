use anyhow::{Context, Result};
use clap::Parser;

use navigator_bridge::cli::Cli;
use navigator_bridge::{shell, util};

fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_tracing(cli.debug);
    util::install_panic_hook();

    tracing::info!(debug = cli.debug, "=== Rusty Navigator Starting ===");

    let config = cli.resolve_config().context("Failed to resolve config")?;
    shell::run(config, cli.debug)
}
