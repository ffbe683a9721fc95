//! `make-checksums` – write or verify the checksum manifest.

use anyhow::Result;
use dsguard_core::checksum::{self, ChecksumLayout, VerifyReport};
use dsguard_core::config::DsguardConfig;
use std::path::Path;

/// Paths quoted per category when verification fails.
const REPORT_SAMPLE: usize = 5;

pub fn run_generate(root: &Path, cfg: &DsguardConfig) -> Result<()> {
    let layout = ChecksumLayout::from_config(root, cfg);
    let manifest = checksum::generate(&layout)?;
    println!(
        "Wrote {} with {} entries",
        cfg.manifest_file,
        manifest.len()
    );
    Ok(())
}

/// Returns Ok(false) when the manifest does not match the data files.
pub fn run_verify(root: &Path, cfg: &DsguardConfig) -> Result<bool> {
    let layout = ChecksumLayout::from_config(root, cfg);
    let report = checksum::verify(&layout)?;
    if report.is_clean() {
        println!("{} matches current data files", cfg.manifest_file);
        return Ok(true);
    }
    for line in describe(&report, &cfg.manifest_file) {
        println!("{line}");
    }
    Ok(false)
}

fn sample(paths: &[String]) -> String {
    let shown: Vec<&str> = paths
        .iter()
        .take(REPORT_SAMPLE)
        .map(String::as_str)
        .collect();
    if paths.len() > REPORT_SAMPLE {
        format!("{}, ...", shown.join(", "))
    } else {
        shown.join(", ")
    }
}

fn describe(report: &VerifyReport, manifest_file: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if report.manifest_missing {
        lines.push(format!("{manifest_file} is missing or empty"));
    }
    if !report.mismatched.is_empty() {
        lines.push(format!(
            "Mismatched checksums for {} files (example: {})",
            report.mismatched.len(),
            sample(&report.mismatched)
        ));
    }
    if !report.untracked.is_empty() && !report.manifest_missing {
        lines.push(format!(
            "Files not listed in {manifest_file}: {} (example: {})",
            report.untracked.len(),
            sample(&report.untracked)
        ));
    }
    if !report.extra.is_empty() {
        lines.push(format!(
            "Extra entries in {manifest_file}: {} (example: {})",
            report.extra.len(),
            sample(&report.extra)
        ));
    }
    lines.push(format!(
        "{manifest_file} does not match current data files."
    ));
    lines.push("Re-generate with: make-checksums".to_string());
    lines
}
