//! Recursive enumeration of tracked dataset files.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// A file selected for the manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    /// Location on disk.
    pub path: PathBuf,
    /// Path relative to the dataset root, `/`-separated.
    pub rel: String,
}

/// Walk `data_dir` and return every file whose extension is in `extensions`
/// (case-insensitive), sorted by relative path.
pub fn collect_data_files(
    root: &Path,
    data_dir: &Path,
    extensions: &[String],
) -> Result<Vec<TrackedFile>> {
    if !data_dir.is_dir() {
        bail!("data folder not found: {}", data_dir.display());
    }

    let mut files = Vec::new();
    let mut pending = vec![data_dir.to_path_buf()];
    while let Some(dir) = pending.pop() {
        let entries =
            fs::read_dir(&dir).with_context(|| format!("read dir {}", dir.display()))?;
        for entry in entries {
            let entry = entry.with_context(|| format!("read dir {}", dir.display()))?;
            let path = entry.path();
            let file_type = entry
                .file_type()
                .with_context(|| format!("stat {}", path.display()))?;
            // Symlinked directories are not descended into; symlinked files are hashed.
            if file_type.is_dir() {
                pending.push(path);
            } else if path.is_file() && has_tracked_extension(&path, extensions) {
                let rel = relative_posix(root, &path)?;
                files.push(TrackedFile { path, rel });
            }
        }
    }

    files.sort_by(|a, b| a.rel.cmp(&b.rel));
    Ok(files)
}

fn has_tracked_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| extensions.iter().any(|want| want.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// `path` relative to `root`, joined with `/` regardless of platform.
fn relative_posix(root: &Path, path: &Path) -> Result<String> {
    let rel = path
        .strip_prefix(root)
        .with_context(|| format!("{} is not under {}", path.display(), root.display()))?;
    let mut parts = Vec::new();
    for component in rel.components() {
        if let Component::Normal(part) = component {
            let part = part
                .to_str()
                .with_context(|| format!("non UTF-8 file name: {}", path.display()))?;
            parts.push(part);
        }
    }
    Ok(parts.join("/"))
}
