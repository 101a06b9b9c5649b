//! Operator settings: which artifacts go where.
//!
//! Settings are an explicit value loaded once and passed into the I/O
//! layer; the decode core takes no configuration at all. The file lives
//! under the platform config directory as JSON.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const SETTINGS_FILE: &str = "settings.json";
const APP_DIR: &str = "bundlelens";

/// Where one artifact goes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ArtifactConfig {
    /// Write the artifact next to the bundle file.
    pub file: bool,
    /// Include the artifact in the gist upload.
    pub gist: bool,
    /// Suffix appended to the bundle name for the local file.
    pub suffix: String,
    /// File name inside the gist.
    pub gist_name: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            file: true,
            gist: false,
            suffix: String::new(),
            gist_name: String::new(),
        }
    }
}

impl ArtifactConfig {
    fn named(suffix: &str, gist_name: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
            gist_name: gist_name.to_string(),
            ..Self::default()
        }
    }
}

/// All operator settings, per artifact plus upload credentials.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Bundle URL used by `sync` and `compare` when none is given.
    pub bundle_url: Option<String>,
    /// GitHub token for gist uploads.
    pub github_token: Option<String>,
    /// Gist to update with the artifacts.
    pub gist_id: Option<String>,
    /// Pretty-printed recovered source.
    pub source: ArtifactConfig,
    /// Raw extracted module table.
    pub module_table: ArtifactConfig,
    /// Rendered reverse alias index.
    pub structure: ArtifactConfig,
    /// Static description of the index format.
    pub structure_help: ArtifactConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bundle_url: None,
            github_token: None,
            gist_id: None,
            source: ArtifactConfig::named("-decoded.js", "decoded.js"),
            module_table: ArtifactConfig::named("-modules.js", "modules.js"),
            structure: ArtifactConfig::named("-structure.json", "structure.json"),
            structure_help: ArtifactConfig::named("-structure-help.md", "structure-help.md"),
        }
    }
}

impl Settings {
    /// Load settings from `path`, or from the default location when no
    /// path is given. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(settings_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(&path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing settings from {}", path.display()))
    }

    /// Write a default settings template to `path`.
    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&Self::default())?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    /// Whether gist uploads are fully configured.
    pub fn gist_ready(&self) -> bool {
        self.github_token.is_some() && self.gist_id.is_some()
    }
}

/// Default settings file location.
pub fn settings_path() -> PathBuf {
    config_dir().join(SETTINGS_FILE)
}

fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// Directory holding cached bundle copies for `compare`/`sync`.
pub fn cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}
