//! WebLoader CLI - ordered, deduplicated web asset collections
//!
//! Usage: webloader [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list     Print the collection described by the manifest
//!   check    Verify that every manifest entry exists
//!   resolve  Canonicalize paths against the root

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = commands::load_manifest(cli.manifest.as_deref(), cli.root.as_deref())?;
    webloader::logging::init_with_config(&loaded.manifest.logging, cli.verbose);

    for warning in &loaded.warnings {
        eprintln!("warning: {}", warning);
    }

    match &cli.command {
        Commands::List => commands::cmd_list(&loaded, cli.json),
        Commands::Check => {
            if !commands::cmd_check(&loaded, cli.json)? {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::Resolve { paths } => commands::cmd_resolve(&loaded, paths, cli.json),
    }
}
