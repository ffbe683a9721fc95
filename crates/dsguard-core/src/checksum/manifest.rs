//! Manifest rendering, parsing, and persistence.
//!
//! Line format: `<64 hex digest><two spaces><relative path>`, one entry per
//! tracked file, sorted by path, trailing newline.

use super::hash::sha256_path;
use super::scan::TrackedFile;
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub digest: String,
    pub path: String,
}

/// Freshly computed manifest, in the order files were enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Hash each file; `files` is expected to be sorted already.
    pub fn from_files(files: &[TrackedFile], chunk_size: usize) -> Result<Self> {
        let mut entries = Vec::with_capacity(files.len());
        for file in files {
            let digest = sha256_path(&file.path, chunk_size)?;
            tracing::trace!(path = %file.rel, %digest, "hashed");
            entries.push(ManifestEntry {
                digest,
                path: file.rel.clone(),
            });
        }
        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Digest for a relative path, if tracked.
    pub fn digest_for(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .map(|e| e.digest.as_str())
    }

    /// Manifest file contents.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.entries.len() * 96);
        for e in &self.entries {
            out.push_str(&e.digest);
            out.push_str("  ");
            out.push_str(&e.path);
            out.push('\n');
        }
        out
    }

    /// Write the manifest, replacing any existing file.
    ///
    /// Contents go to `<path>.part` first and are renamed into place, so the
    /// manifest on disk is always complete.
    pub fn write(&self, path: &Path) -> Result<()> {
        let tmp = part_path(path);
        fs::write(&tmp, self.render()).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
        Ok(())
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut o = path.as_os_str().to_owned();
    o.push(".part");
    PathBuf::from(o)
}

/// Parse manifest text into `path -> digest`.
///
/// Blank lines and lines with fewer than two fields are skipped; a later line
/// for the same path wins.
pub fn parse_manifest(text: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        let (Some(digest), Some(path)) = (fields.next(), fields.next()) else {
            continue;
        };
        map.insert(path.to_string(), digest.to_string());
    }
    map
}

/// Read a persisted manifest; `Ok(None)` if the file does not exist.
pub fn read_manifest(path: &Path) -> Result<Option<BTreeMap<String, String>>> {
    if !path.exists() {
        return Ok(None);
    }
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    Ok(Some(parse_manifest(&text)))
}
