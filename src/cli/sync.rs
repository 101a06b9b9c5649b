use anyhow::{bail, Context, Result};
use console::{style, Emoji};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::decode::{process, spinner};
use crate::config::{self, Settings};
use crate::fetch;

static COMPARE: Emoji<'_, '_> = Emoji("🔁 ", "");
static FETCHING: Emoji<'_, '_> = Emoji("🌐 ", "");

pub async fn run_compare(url: Option<&str>, settings: &Settings) -> Result<()> {
    let url = resolve_url(url, settings)?;

    let pb = spinner(format!("{}Fetching {}...", FETCHING, url));
    let remote = fetch::fetch_url(&url).await?;
    pb.finish_and_clear();

    let cache = cached_bundle_path(&url);
    match fs::read_to_string(&cache) {
        Ok(cached) if digest(&cached) == digest(&remote) => {
            println!("{}Cached and online versions are the same", COMPARE);
        }
        Ok(_) => {
            println!("{}Cached and online versions are different", COMPARE);
        }
        Err(_) => {
            println!(
                "{}No cached copy at {} yet; run `bundlelens sync`",
                COMPARE,
                style(cache.display()).dim()
            );
        }
    }

    Ok(())
}

pub async fn run_sync(
    url: Option<&str>,
    out_dir: Option<&Path>,
    force: bool,
    no_upload: bool,
    settings: &Settings,
) -> Result<()> {
    let url = resolve_url(url, settings)?;

    let pb = spinner(format!("{}Fetching {}...", FETCHING, url));
    let remote = fetch::fetch_url(&url).await?;
    pb.finish_and_clear();

    let cache = cached_bundle_path(&url);
    let unchanged = fs::read_to_string(&cache)
        .map(|cached| digest(&cached) == digest(&remote))
        .unwrap_or(false);

    if unchanged && !force {
        println!("{}Bundle unchanged; nothing to do", COMPARE);
        return Ok(());
    }

    if let Some(parent) = cache.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(&cache, &remote).with_context(|| format!("writing {}", cache.display()))?;
    println!("  cached {}", style(cache.display()).dim());

    let dir = out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(config::cache_dir);
    fs::create_dir_all(&dir).with_context(|| format!("creating {}", dir.display()))?;

    let base_name = fetch::remote_file_name(&url);
    process(&remote, &dir, &base_name, no_upload, settings).await
}

fn resolve_url(url: Option<&str>, settings: &Settings) -> Result<String> {
    match url.or(settings.bundle_url.as_deref()) {
        Some(url) => Ok(url.to_string()),
        None => bail!("no bundle URL given; pass --url or set bundle_url in the settings file"),
    }
}

fn cached_bundle_path(url: &str) -> PathBuf {
    config::cache_dir().join(fetch::remote_file_name(url))
}

fn digest(text: &str) -> String {
    Sha256::digest(text.as_bytes())
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url_precedence() {
        let mut settings = Settings::default();
        settings.bundle_url = Some("https://example.com/engine.js".to_string());

        assert_eq!(
            resolve_url(None, &settings).unwrap(),
            "https://example.com/engine.js"
        );
        assert_eq!(
            resolve_url(Some("https://other.test/x.js"), &settings).unwrap(),
            "https://other.test/x.js"
        );
        assert!(resolve_url(None, &Settings::default()).is_err());
    }

    #[test]
    fn test_digest_distinguishes_content() {
        assert_eq!(digest("abc"), digest("abc"));
        assert_ne!(digest("abc"), digest("abd"));
        assert_eq!(digest("abc").len(), 64);
    }
}
