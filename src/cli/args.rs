//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Route-driven <title> and <meta> reconciler
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: meta.toml)
    #[arg(short = 'C', long, global = true, default_value = "meta.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Navigate to URLs and print the resulting head tags
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: RenderArgs,
    },

    /// Load and validate the config file
    #[command(visible_alias = "c")]
    Check,
}

/// Render command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// URL to navigate to, in order (repeatable; default: /)
    #[arg(short, long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Print JSON instead of HTML
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_args() {
        let cli = Cli::parse_from(["headsync", "render", "-u", "/a", "--url", "/b", "--json"]);
        let Commands::Render { args } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.urls, ["/a", "/b"]);
        assert!(args.json);
        assert_eq!(cli.config, PathBuf::from("meta.toml"));
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::parse_from(["headsync", "check", "-C", "site/meta.toml", "-v"]);
        assert!(matches!(cli.command, Commands::Check));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/meta.toml"));
    }
}
