use anyhow::{Context, Result};
use console::{style, Emoji};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ArtifactConfig, Settings};
use crate::emit::{self, Artifacts};
use crate::{decode, fetch, upload};

static FETCHING: Emoji<'_, '_> = Emoji("🌐 ", "");
static SUCCESS: Emoji<'_, '_> = Emoji("✅ ", "");
static UPLOAD: Emoji<'_, '_> = Emoji("☁️  ", "");

pub async fn run_decode(
    location: &str,
    out_dir: Option<&Path>,
    no_upload: bool,
    settings: &Settings,
) -> Result<()> {
    let pb = spinner(format!("{}Fetching {}...", FETCHING, location));
    let raw = fetch::fetch(location).await?;
    pb.finish_and_clear();

    let (base_name, dir) = output_target(location, out_dir);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    if fetch::is_remote(location) {
        // Keep the raw bundle next to the artifacts, as fetched.
        let path = dir.join(&base_name);
        fs::write(&path, &raw).with_context(|| format!("writing {}", path.display()))?;
        println!("  wrote {}", style(path.display()).dim());
    }

    process(&raw, &dir, &base_name, no_upload, settings).await
}

/// Decode raw bundle text and hand every artifact to its configured sinks.
pub(crate) async fn process(
    raw: &str,
    dir: &Path,
    base_name: &str,
    no_upload: bool,
    settings: &Settings,
) -> Result<()> {
    let pb = spinner("Decoding...".to_string());
    let decoded = decode::decode(raw)?;
    let artifacts = emit::render(&decoded);
    pb.finish_and_clear();

    println!(
        "{}Decoded {} modules from {} bytes of source",
        SUCCESS,
        style(decoded.graph.len()).green(),
        style(decoded.source.len()).cyan()
    );

    for (config, content) in paired(&artifacts, settings) {
        if !config.file || config.suffix.is_empty() {
            continue;
        }
        let path = dir.join(format!("{}{}", base_name, config.suffix));
        fs::write(&path, content).with_context(|| format!("writing {}", path.display()))?;
        println!("  wrote {}", style(path.display()).dim());
    }

    if !no_upload && settings.gist_ready() {
        let files: Vec<(String, String)> = paired(&artifacts, settings)
            .into_iter()
            .filter(|(config, _)| config.gist && !config.gist_name.is_empty())
            .map(|(config, content)| (config.gist_name.clone(), content.to_string()))
            .collect();

        if !files.is_empty() {
            println!("{}Updating gist...", UPLOAD);
            let token = settings.github_token.as_deref().unwrap_or_default();
            let gist_id = settings.gist_id.as_deref().unwrap_or_default();
            upload::update_gist(token, gist_id, files).await?;
        }
    }

    Ok(())
}

/// Each artifact with its sink configuration, in emission order.
fn paired<'a>(
    artifacts: &'a Artifacts,
    settings: &'a Settings,
) -> [(&'a ArtifactConfig, &'a str); 4] {
    [
        (&settings.source, artifacts.pretty_source.as_str()),
        (&settings.module_table, artifacts.module_table.as_str()),
        (&settings.structure, artifacts.index.as_str()),
        (&settings.structure_help, artifacts.index_help),
    ]
}

/// Base name the artifact suffixes append to, and the output directory.
fn output_target(location: &str, out_dir: Option<&Path>) -> (String, PathBuf) {
    if fetch::is_remote(location) {
        let dir = out_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        (fetch::remote_file_name(location), dir)
    } else {
        let path = Path::new(location);
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("bundle.js")
            .to_string();
        let dir = out_dir
            .map(Path::to_path_buf)
            .or_else(|| path.parent().map(Path::to_path_buf))
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from("."));
        (name, dir)
    }
}

pub(crate) fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_target_local() {
        let (name, dir) = output_target("bundles/engine.js", None);
        assert_eq!(name, "engine.js");
        assert_eq!(dir, PathBuf::from("bundles"));

        let (name, dir) = output_target("engine.js", None);
        assert_eq!(name, "engine.js");
        assert_eq!(dir, PathBuf::from("."));
    }

    #[test]
    fn test_output_target_remote() {
        let (name, dir) = output_target("https://example.com/a/engine.js", None);
        assert_eq!(name, "engine.js");
        assert_eq!(dir, PathBuf::from("."));

        let (_, dir) = output_target("https://example.com/a/engine.js", Some(Path::new("out")));
        assert_eq!(dir, PathBuf::from("out"));
    }
}
