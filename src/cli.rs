use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// WebLoader - ordered, deduplicated web asset collections
#[derive(Parser, Debug)]
#[command(name = "webloader")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the collection manifest (defaults to ./webloader.toml if present)
    #[arg(short, long, global = true)]
    pub manifest: Option<PathBuf>,

    /// Root directory for relative paths (overrides manifest and WEBLOADER_ROOT)
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the files, watch files and remote files of the manifest
    List,

    /// Verify that every manifest entry exists (exits non-zero otherwise)
    Check,

    /// Resolve paths against the root and print their canonical form
    Resolve {
        /// Paths to resolve
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
