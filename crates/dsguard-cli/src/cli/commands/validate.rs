//! `validate-dataset` – run the dataset checks and report.

use anyhow::Result;
use dsguard_core::config::DsguardConfig;
use dsguard_core::validate::{DatasetFiles, Validator};
use std::path::Path;

/// Returns Ok(false) when a check failed (or warnings were raised in strict mode).
pub fn run_validate(root: &Path, cfg: &DsguardConfig) -> Result<bool> {
    let files = DatasetFiles::from_root(root, cfg);
    let mut validator = Validator::new(&files, cfg);
    let result = validator.run();

    for w in validator.warnings() {
        println!("warning: {w}");
    }

    match result {
        Ok(()) => {
            println!("Dataset validation passed.");
            Ok(true)
        }
        Err(failure) => {
            eprintln!("validation failed: {failure}");
            Ok(false)
        }
    }
}
