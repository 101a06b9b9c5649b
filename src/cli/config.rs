use anyhow::Result;
use console::{style, Emoji};
use std::path::Path;

use crate::config::{self, Settings};

static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

/// Show the settings location; write a default template on first run.
pub fn run_config(path: Option<&Path>) -> Result<()> {
    let path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(config::settings_path);

    if path.exists() {
        println!("{}Settings file:", INFO);
        println!("  {}", style(path.display()).green());
        return Ok(());
    }

    Settings::write_template(&path)?;
    println!("{}No settings file found; wrote a default template to:", INFO);
    println!("  {}", style(path.display()).green());
    println!();
    println!("Set bundle_url to enable `compare` and `sync`, and github_token");
    println!("and gist_id plus per-artifact gist toggles to enable uploads.");

    Ok(())
}
