//! Raw input acquisition: a location is either an http(s) URL or a local
//! file path. Transport concerns (and any retrying) stay here, outside the
//! decode core.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;

static REMOTE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").unwrap());

/// Whether `location` names a remote bundle.
pub fn is_remote(location: &str) -> bool {
    REMOTE_RE.is_match(location)
}

/// Fetch the full bundle text from a URL or read it from disk.
pub async fn fetch(location: &str) -> Result<String> {
    if is_remote(location) {
        fetch_url(location).await
    } else {
        fs::read_to_string(location).with_context(|| format!("reading {}", location))
    }
}

/// Fetch the bundle text over HTTP.
pub async fn fetch_url(url: &str) -> Result<String> {
    let response = reqwest::get(url)
        .await
        .with_context(|| format!("fetching {}", url))?
        .error_for_status()
        .with_context(|| format!("fetching {}", url))?;
    let body = response.text().await.context("reading response body")?;
    Ok(body)
}

/// File name to store a fetched bundle under, taken from the URL's last
/// path segment.
pub fn remote_file_name(url: &str) -> String {
    let tail = url.rsplit('/').next().unwrap_or("");
    let name = tail.split('?').next().unwrap_or("");
    if name.is_empty() {
        "bundle.js".to_string()
    } else {
        name.to_string()
    }
}
