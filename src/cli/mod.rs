//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Waymark using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Waymark - geocache catalog export tool
#[derive(Parser, Debug)]
#[command(name = "waymark")]
#[command(version, about, long_about = None)]
#[command(author = "Waymark Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "waymark.toml", env = "WAYMARK_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WAYMARK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the catalog to the map application
    Export(commands::export::ExportArgs),

    /// Validate configuration and catalog without exporting
    Validate(commands::validate::ValidateArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["waymark", "export"]);
        assert_eq!(cli.config, "waymark.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["waymark", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["waymark", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate() {
        let cli = Cli::parse_from(["waymark", "validate"]);
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn test_cli_parse_export_flags() {
        let cli = Cli::parse_from(["waymark", "export", "--dry-run", "--no-waypoints"]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.dry_run);
                assert!(args.no_waypoints);
            }
            other => panic!("expected export command, got {other:?}"),
        }
    }
}
