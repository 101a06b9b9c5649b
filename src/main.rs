use anyhow::Result;
use clap::Parser;

use bundlelens::cli::{self, Args, Command};
use bundlelens::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.settings.as_deref())?;

    match args.command {
        Command::Decode {
            location,
            out_dir,
            no_upload,
        } => cli::run_decode(&location, out_dir.as_deref(), no_upload, &settings).await,
        Command::Compare { url } => cli::run_compare(url.as_deref(), &settings).await,
        Command::Sync {
            url,
            out_dir,
            force,
            no_upload,
        } => cli::run_sync(url.as_deref(), out_dir.as_deref(), force, no_upload, &settings).await,
        Command::Config => cli::run_config(args.settings.as_deref()),
    }
}
