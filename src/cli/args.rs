use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bundlelens",
    version,
    about = "Recover readable source and module structure from string-wrapped JavaScript bundles"
)]
pub struct Args {
    /// Settings file to use instead of the default location
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a bundle from a file or URL and write its artifacts
    Decode {
        /// Path or http(s) URL of the bundle
        location: String,

        /// Directory to write artifacts into (defaults to the bundle's directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Skip the gist upload even when configured
        #[arg(long)]
        no_upload: bool,
    },

    /// Compare the cached bundle against the published one
    Compare {
        /// URL to compare against (defaults to the configured bundle_url)
        #[arg(long)]
        url: Option<String>,
    },

    /// Fetch the published bundle and decode it when it changed
    Sync {
        /// URL to fetch (defaults to the configured bundle_url)
        #[arg(long)]
        url: Option<String>,

        /// Directory to write artifacts into (defaults to the cache directory)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Decode even when the cached copy is identical
        #[arg(long)]
        force: bool,

        /// Skip the gist upload even when configured
        #[arg(long)]
        no_upload: bool,
    },

    /// Show the settings location, writing a default template if missing
    Config,
}
