//! SHA-256 manifest for the dataset payload.
//!
//! `generate` hashes every tracked file under the data directory and writes
//! `checksums.sha256` at the dataset root; `verify` recomputes the same
//! manifest in memory and compares it with the persisted one. Paths in the
//! manifest are relative to the dataset root and always use `/`.

mod hash;
mod manifest;
mod scan;
mod verify;

pub use hash::sha256_path;
pub use manifest::{parse_manifest, read_manifest, Manifest, ManifestEntry};
pub use scan::{collect_data_files, TrackedFile};
pub use verify::{compare, VerifyReport};

use crate::config::DsguardConfig;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Where the checksum tool looks for data and writes its manifest.
#[derive(Debug, Clone)]
pub struct ChecksumLayout {
    /// Dataset root; manifest paths are relative to this.
    pub root: PathBuf,
    /// Directory scanned for tracked files.
    pub data_dir: PathBuf,
    /// Persisted manifest location.
    pub manifest_path: PathBuf,
    pub extensions: Vec<String>,
    pub chunk_size: usize,
}

impl ChecksumLayout {
    pub fn from_config(root: &Path, cfg: &DsguardConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            data_dir: root.join(&cfg.data_dir),
            manifest_path: root.join(&cfg.manifest_file),
            extensions: cfg.include_extensions.clone(),
            chunk_size: cfg.chunk_size_bytes,
        }
    }
}

/// Hash every tracked file and return the manifest without persisting it.
///
/// Fails if the data directory is missing or holds no tracked files.
pub fn build_manifest(layout: &ChecksumLayout) -> Result<Manifest> {
    let files = collect_data_files(&layout.root, &layout.data_dir, &layout.extensions)?;
    if files.is_empty() {
        bail!(
            "no dataset files found under {}",
            layout.data_dir.display()
        );
    }
    tracing::debug!(count = files.len(), "hashing dataset files");
    Manifest::from_files(&files, layout.chunk_size)
}

/// Build the manifest and overwrite the persisted one.
pub fn generate(layout: &ChecksumLayout) -> Result<Manifest> {
    let manifest = build_manifest(layout)?;
    manifest.write(&layout.manifest_path)?;
    tracing::info!(
        entries = manifest.len(),
        "wrote manifest {}",
        layout.manifest_path.display()
    );
    Ok(manifest)
}

/// Recompute the manifest and compare it with the persisted one (absent = empty).
pub fn verify(layout: &ChecksumLayout) -> Result<VerifyReport> {
    let current = build_manifest(layout)?;
    let persisted = read_manifest(&layout.manifest_path)?;
    let report = compare(&current, persisted.as_ref());
    tracing::info!(
        mismatched = report.mismatched.len(),
        untracked = report.untracked.len(),
        extra = report.extra.len(),
        manifest_missing = report.manifest_missing,
        "verified manifest {}",
        layout.manifest_path.display()
    );
    Ok(report)
}
