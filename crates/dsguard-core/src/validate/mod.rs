//! Schema, range, and key checks over the published dataset.
//!
//! Checks run in a fixed order. A fatal violation stops the run with a
//! [`CheckFailure`]; advisory findings are collected as [`Warning`]s and the
//! run continues.

mod checks;
mod dates;
mod error;
mod layout;

pub use checks::{
    check_country_codes, check_dates, check_files_exist, check_in_range, check_nonnegative,
    check_required_columns, check_row_count, check_schema_drift, check_unique,
    check_value_domain,
};
pub use dates::{parse_date, year_month};
pub use error::CheckFailure;
pub use layout::{
    DatasetFiles, COUNTRY_PLATFORM_FILE, DICT_FILE, ML_FILE, MONTHLY_FILE, RAW_FILE,
    TOP_CREATORS_FILE, TOP_HASHTAGS_FILE,
};

use crate::config::DsguardConfig;
use crate::table::Table;
use std::fmt;
use std::path::Path;

pub const ALLOWED_PLATFORMS: &[&str] = &["TikTok", "YouTube"];

pub const NONNEGATIVE_COLUMNS: &[&str] = &[
    "views",
    "likes",
    "comments",
    "shares",
    "saves",
    "dislikes",
    "creator_avg_views",
    "engagement_total",
];

pub const HOUR_COLUMN: &str = "upload_hour";

pub const RATE_COLUMNS: &[&str] = &[
    "engagement_rate",
    "comment_ratio",
    "share_rate",
    "save_rate",
    "like_rate",
    "dislike_rate",
    "completion_rate",
    "engagement_like_rate",
    "engagement_comment_rate",
    "engagement_share_rate",
];

/// Engagement per 1000 views; a count ratio, not a rate.
pub const PER_MILLE_COLUMN: &str = "engagement_per_1k";

pub const DATE_COLUMN: &str = "publish_date_approx";
pub const YEAR_MONTH_COLUMN: &str = "year_month";
pub const ROW_ID_COLUMN: &str = "row_id";

pub const ML_REQUIRED_COLUMNS: &[&str] = &[
    "trend_label",
    "platform",
    "category",
    "like_rate",
    "comment_rate",
    "share_rate",
];
pub const ML_LABEL_COLUMN: &str = "trend_label";
pub const ALLOWED_LABELS: &[&str] = &["rising", "stable", "declining", "seasonal"];

/// Advisory finding; reported, never fatal (unless strict mode is on).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub table: String,
    pub message: String,
}

impl Warning {
    pub fn new(table: &Table, message: String) -> Self {
        Self {
            table: table.name().to_string(),
            message,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.table, self.message)
    }
}

/// All dataset tables, parsed.
struct Tables {
    raw: Table,
    ml: Table,
    monthly: Table,
    country_platform: Table,
    dictionary: Table,
}

/// Runs the checks and keeps the warnings raised along the way.
pub struct Validator<'a> {
    files: &'a DatasetFiles,
    cfg: &'a DsguardConfig,
    warnings: Vec<Warning>,
}

impl<'a> Validator<'a> {
    pub fn new(files: &'a DatasetFiles, cfg: &'a DsguardConfig) -> Self {
        Self {
            files,
            cfg,
            warnings: Vec::new(),
        }
    }

    /// Warnings raised so far; still populated when `run` returns an error.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    fn warn(&mut self, warning: Option<Warning>) {
        if let Some(w) = warning {
            tracing::warn!(table = %w.table, "{}", w.message);
            self.warnings.push(w);
        }
    }

    fn load(&self, name: &str, path: &Path) -> Result<Table, CheckFailure> {
        Table::from_path(name, path).map_err(|e| CheckFailure::Unreadable {
            table: name.to_string(),
            path: self.files.display(path),
            reason: format!("{e:#}"),
        })
    }

    fn load_all(&self) -> Result<Tables, CheckFailure> {
        let f = self.files;
        let tables = Tables {
            raw: self.load("raw", &f.raw)?,
            ml: self.load("ml", &f.ml)?,
            monthly: self.load("monthly", &f.monthly)?,
            country_platform: self.load("country_platform", &f.country_platform)?,
            dictionary: self.load("dictionary", &f.dictionary)?,
        };
        // Only checked for being well-formed CSV.
        self.load("top_hashtags", &f.top_hashtags)?;
        self.load("top_creators", &f.top_creators)?;
        Ok(tables)
    }

    /// Run every check in order. Stops at the first fatal violation.
    pub fn run(&mut self) -> Result<(), CheckFailure> {
        let limit = self.cfg.sample_limit;

        check_files_exist(
            self.files
                .required()
                .into_iter()
                .map(|(_, p)| (self.files.display(p), p)),
        )?;
        let t = self.load_all()?;
        tracing::debug!(raw_rows = t.raw.row_count(), "tables loaded");

        self.warn(check_row_count(&t.raw, self.cfg.min_raw_rows));

        let drift = check_schema_drift(&t.raw, &t.dictionary)?;
        self.warn(drift);

        for table in [&t.raw, &t.monthly, &t.country_platform] {
            check_country_codes(table, limit)?;
        }

        check_value_domain(&t.raw, "platform", ALLOWED_PLATFORMS)?;
        check_unique(&t.raw, &[ROW_ID_COLUMN])?;
        check_nonnegative(&t.raw, NONNEGATIVE_COLUMNS, limit)?;

        check_in_range(&t.raw, HOUR_COLUMN, 0.0, 23.0, limit)?;
        for column in RATE_COLUMNS {
            check_in_range(&t.raw, column, 0.0, 1.0, limit)?;
        }
        check_in_range(&t.raw, PER_MILLE_COLUMN, 0.0, 1000.0, limit)?;

        let dates = check_dates(&t.raw, DATE_COLUMN, YEAR_MONTH_COLUMN, limit)?;
        self.warn(dates);

        check_required_columns(&t.ml, ML_REQUIRED_COLUMNS)?;
        check_value_domain(&t.ml, ML_LABEL_COLUMN, ALLOWED_LABELS)?;

        check_unique(&t.country_platform, &["country", "platform"])?;

        if self.cfg.strict_warnings && !self.warnings.is_empty() {
            return Err(CheckFailure::StrictWarnings {
                count: self.warnings.len(),
            });
        }
        tracing::info!(warnings = self.warnings.len(), "dataset validation passed");
        Ok(())
    }
}
