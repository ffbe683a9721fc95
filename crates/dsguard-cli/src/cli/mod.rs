//! CLI for the dataset checksum and validation tools.

mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use dsguard_core::config::{self, DsguardConfig};
use std::path::PathBuf;

use commands::{run_generate, run_validate, run_verify};

/// Everything passed or verified.
pub const EXIT_OK: i32 = 0;
/// Checksums differ or a validation check failed.
pub const EXIT_FAILED: i32 = 1;
/// The tool could not run (missing data dir, unreadable config, I/O error).
pub const EXIT_FATAL: i32 = 2;

/// Generate or verify `checksums.sha256` for the dataset files.
#[derive(Debug, Parser)]
#[command(name = "make-checksums")]
#[command(about = "Generate/verify SHA-256 checksums for dataset files", long_about = None)]
pub struct ChecksumsCli {
    /// Verify the existing manifest instead of writing it.
    #[arg(long)]
    pub check: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Schema, range, and key checks over the dataset CSV files.
#[derive(Debug, Parser)]
#[command(name = "validate-dataset")]
#[command(about = "Lightweight schema and range validation for the dataset", long_about = None)]
pub struct ValidateCli {
    /// Exit non-zero if any warning was raised.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, clap::Args)]
pub struct CommonArgs {
    /// Dataset root containing the data directory (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Config file to use instead of ~/.config/dsguard/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CommonArgs {
    fn resolve(&self) -> Result<(PathBuf, DsguardConfig)> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => std::env::current_dir().context("current directory")?,
        };
        let cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_default()?,
        };
        tracing::debug!(root = %root.display(), "loaded config: {:?}", cfg);
        Ok((root, cfg))
    }
}

impl ChecksumsCli {
    /// Parse args, run, and return the process exit code.
    pub fn run_from_args() -> i32 {
        Self::parse().run()
    }

    pub fn run(&self) -> i32 {
        let result = self.common.resolve().and_then(|(root, cfg)| {
            if self.check {
                run_verify(&root, &cfg)
            } else {
                run_generate(&root, &cfg).map(|()| true)
            }
        });
        match result {
            Ok(true) => EXIT_OK,
            Ok(false) => EXIT_FAILED,
            Err(err) => {
                eprintln!("make-checksums error: {:#}", err);
                EXIT_FATAL
            }
        }
    }
}

impl ValidateCli {
    /// Parse args, run, and return the process exit code.
    pub fn run_from_args() -> i32 {
        Self::parse().run()
    }

    pub fn run(&self) -> i32 {
        let result = self.common.resolve().and_then(|(root, mut cfg)| {
            cfg.strict_warnings |= self.strict;
            run_validate(&root, &cfg)
        });
        match result {
            Ok(true) => EXIT_OK,
            Ok(false) => EXIT_FAILED,
            Err(err) => {
                eprintln!("validate-dataset error: {:#}", err);
                EXIT_FATAL
            }
        }
    }
}

#[cfg(test)]
mod tests;
