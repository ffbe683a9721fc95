use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/dsguard/config.toml`.
///
/// Every field has a default, so an empty or partial file is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DsguardConfig {
    /// Dataset directory, relative to the dataset root.
    pub data_dir: String,
    /// Checksum manifest file name, relative to the dataset root.
    pub manifest_file: String,
    /// File extensions (without dot, matched case-insensitively) tracked in the manifest.
    pub include_extensions: Vec<String>,
    /// Read buffer size used when hashing files.
    pub chunk_size_bytes: usize,
    /// Raw table row count below which the validator warns.
    pub min_raw_rows: usize,
    /// Maximum number of offending rows quoted in a failure message.
    pub sample_limit: usize,
    /// Treat validation warnings as failures (exit 1 after all checks ran).
    pub strict_warnings: bool,
}

impl Default for DsguardConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
            manifest_file: "checksums.sha256".to_string(),
            include_extensions: vec!["csv".into(), "parquet".into(), "json".into()],
            chunk_size_bytes: 1024 * 1024,
            min_raw_rows: 1000,
            sample_limit: 5,
            strict_warnings: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsguard")?;
    Ok(xdg_dirs.get_config_home().join("dsguard").join("config.toml"))
}

/// Load configuration from the XDG config dir, falling back to defaults if no file exists.
pub fn load_or_default() -> Result<DsguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(DsguardConfig::default());
    }
    load_from_path(&path)
}

/// Load configuration from an explicit path. A malformed file is an error.
pub fn load_from_path(path: &Path) -> Result<DsguardConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: DsguardConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
