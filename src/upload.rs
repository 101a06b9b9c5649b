//! Pushes gist-enabled artifacts to the GitHub gist API in one update.

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

const GIST_API: &str = "https://api.github.com/gists";

#[derive(Serialize)]
struct GistUpdate {
    description: String,
    files: BTreeMap<String, GistFile>,
}

#[derive(Serialize)]
struct GistFile {
    content: String,
}

/// Replace the gist's files with the given (name, content) pairs and stamp
/// the description with the upload time.
pub async fn update_gist(token: &str, gist_id: &str, files: Vec<(String, String)>) -> Result<()> {
    let body = GistUpdate {
        description: format!(
            "Decoded bundle (as of {})",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ),
        files: files
            .into_iter()
            .map(|(name, content)| (name, GistFile { content }))
            .collect(),
    };

    let client = reqwest::Client::new();
    client
        .patch(format!("{}/{}", GIST_API, gist_id))
        .header(reqwest::header::USER_AGENT, "bundlelens")
        .header(reqwest::header::ACCEPT, "application/vnd.github+json")
        .bearer_auth(token)
        .json(&body)
        .send()
        .await
        .context("sending gist update")?
        .error_for_status()
        .context("gist update rejected")?;

    Ok(())
}
