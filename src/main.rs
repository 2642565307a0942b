//! headsync - reconcile <title> and <meta> tags for a simulated navigation.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use headsync::{config::MetaConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = MetaConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Render { args } => cli::render::render_head(&config, args),
        Commands::Check => cli::check::check_config(&config),
    }
}
