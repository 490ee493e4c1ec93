//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Waypost navigation data generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Project root directory
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name (default: waypost.toml)
    #[arg(short = 'C', long, default_value = "waypost.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Resolve all links and write the navigation manifest
    Emit {
        /// Write the manifest to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Validate the config and the assembled navigation data
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_emit() {
        let cli = Cli::parse_from(["waypost", "emit", "--output", "nav.json", "--compact"]);
        match cli.command {
            Commands::Emit { output, compact } => {
                assert_eq!(output, Some(PathBuf::from("nav.json")));
                assert!(compact);
            }
            Commands::Check => panic!("expected emit"),
        }
    }

    #[test]
    fn test_parse_check_with_root_and_config() {
        let cli = Cli::parse_from(["waypost", "--root", "/srv/site", "-C", "nav.toml", "check"]);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/site")));
        assert_eq!(cli.config, PathBuf::from("nav.toml"));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_default_config_name() {
        let cli = Cli::parse_from(["waypost", "check"]);
        assert_eq!(cli.config, PathBuf::from("waypost.toml"));
    }
}
