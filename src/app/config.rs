use crate::app::cli::Cli;
use crate::app::scanner::compile_pattern;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const MANIFEST_NAME: &str = "scan.toml";

/// The content-scan manifest: which files the class scanner should read,
/// plus the two tool-defined extension points.
///
/// Field order keeps plain values ahead of the `theme` table so the TOML
/// serializer never has to emit a value after a table header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns relative to the project root. The matched set is the
    /// union over all patterns; order only matters for readability.
    pub content: Vec<String>,

    /// Plugin references. Their shape is defined by the consuming tool, so
    /// they are kept as opaque values rather than a guessed schema.
    pub plugins: Vec<toml::Value>,

    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme overrides keyed by theme-key. Empty means "use tool defaults".
    pub extend: toml::Table,
}

impl ScanConfig {
    /// The manifest `--init` writes, mirroring the stock setup: every
    /// template under ./templates is scanned.
    pub fn starter() -> Self {
        Self {
            content: vec!["./templates/**/*.{html,jinja,js}".to_string()],
            ..Self::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("Failed to parse scan manifest")
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize scan manifest")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .context(format!("Failed to read manifest at {:?}", path))?;
        Self::from_toml_str(&raw)
    }

    /// Checks that every content pattern is a syntactically valid glob.
    /// An empty pattern list is valid but useless, so it only warns.
    pub fn validate(&self) -> Result<()> {
        if self.content.is_empty() {
            log::warn!("💡 Tip: the manifest has no content patterns; nothing will match.");
        }
        for pattern in &self.content {
            if pattern.trim().is_empty() {
                bail!("Empty content pattern in manifest");
            }
            compile_pattern(pattern)?;
        }
        Ok(())
    }
}

/// Resolves the effective manifest: explicit --config path, then ./scan.toml
/// under the root, then the user-level fallback, then the starter defaults.
/// CLI --content patterns are appended afterwards.
pub fn resolve_config(cli: &Cli, root: &Path) -> Result<ScanConfig> {
    let mut config = match &cli.config {
        Some(path) => ScanConfig::load(path)?,
        None => load_default_locations(root)?,
    };

    config.content = merge_patterns(config.content, cli.content.clone());
    Ok(config)
}

fn load_default_locations(root: &Path) -> Result<ScanConfig> {
    let local = root.join(MANIFEST_NAME);
    if local.exists() {
        return ScanConfig::load(&local);
    }

    if let Some(home) = dirs::home_dir() {
        let fallback = home
            .join(".config")
            .join("content_scan")
            .join(MANIFEST_NAME);
        if fallback.exists() {
            return ScanConfig::load(&fallback);
        }
    }

    log::debug!("No manifest found, using the starter defaults");
    Ok(ScanConfig::starter())
}

fn merge_patterns(manifest_vec: Vec<String>, cli_vec: Option<Vec<String>>) -> Vec<String> {
    let mut combined = manifest_vec;
    if let Some(mut cli_items) = cli_vec {
        combined.append(&mut cli_items);
    }
    // Deduplicate while keeping order
    let mut seen = HashSet::new();
    combined.retain(|item| seen.insert(item.clone()));
    combined
}
