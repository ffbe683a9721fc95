//! Comparison of a fresh manifest against the persisted one.

use super::manifest::Manifest;
use std::collections::BTreeMap;

/// Differences found by `verify`. Each list is sorted by path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Tracked in both, digests differ.
    pub mismatched: Vec<String>,
    /// On disk but absent from the persisted manifest.
    pub untracked: Vec<String>,
    /// In the persisted manifest but no longer on disk.
    pub extra: Vec<String>,
    /// No persisted manifest, or one without entries.
    pub manifest_missing: bool,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.mismatched.is_empty()
            && self.untracked.is_empty()
            && self.extra.is_empty()
            && !self.manifest_missing
    }
}

pub fn compare(current: &Manifest, persisted: Option<&BTreeMap<String, String>>) -> VerifyReport {
    let empty = BTreeMap::new();
    let persisted = persisted.unwrap_or(&empty);

    let mut report = VerifyReport {
        manifest_missing: persisted.is_empty(),
        ..VerifyReport::default()
    };

    for entry in current.entries() {
        match persisted.get(&entry.path) {
            Some(digest) if *digest == entry.digest => {}
            Some(_) => report.mismatched.push(entry.path.clone()),
            None => report.untracked.push(entry.path.clone()),
        }
    }

    report.extra = persisted
        .keys()
        .filter(|path| current.digest_for(path).is_none())
        .cloned()
        .collect();

    report.mismatched.sort();
    report.untracked.sort();
    report
}
