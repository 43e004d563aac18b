// Waymark - Geocache catalog export tool
// Copyright (c) 2026 Waymark Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use waymark::cli::{Cli, Commands};
use waymark::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    let log_level = cli.log_level.as_deref().unwrap_or("info");
    if let Err(e) = init_logging(log_level) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(5);
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Waymark - geocache catalog export tool"
    );

    let result = match &cli.command {
        Commands::Export(args) => args.execute(&cli.config),
        Commands::Validate(args) => args.execute(&cli.config),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }
}
