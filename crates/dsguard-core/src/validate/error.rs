//! Fatal validation failures.

use thiserror::Error;

/// A violated check that invalidates the dataset. The run stops at the first one.
#[derive(Debug, Error)]
pub enum CheckFailure {
    #[error("missing file(s): {}", .paths.join(", "))]
    MissingFiles { paths: Vec<String> },

    #[error("{table}: cannot read {path}: {reason}")]
    Unreadable {
        table: String,
        path: String,
        reason: String,
    },

    #[error("{table}: {context} missing columns: {columns:?}")]
    MissingColumns {
        table: String,
        context: &'static str,
        columns: Vec<String>,
    },

    #[error("{table}: country must be uppercase ISO-2. Sample: {sample}")]
    CountryFormat { table: String, sample: String },

    #[error("{table}: unexpected {column} values: {values:?}")]
    UnexpectedValues {
        table: String,
        column: String,
        values: Vec<String>,
    },

    #[error("{table}: duplicate ({}) rows found", .columns.join(", "))]
    DuplicateKey { table: String, columns: Vec<String> },

    #[error("{table}: negative values found in columns: {columns:?}")]
    Negative { table: String, columns: Vec<String> },

    #[error("{table}: {column} has non-numeric values. Sample: {sample}")]
    NonNumeric {
        table: String,
        column: String,
        sample: String,
    },

    #[error("{table}: {column} out of range [{lo}, {hi}]. Sample: {sample}")]
    OutOfRange {
        table: String,
        column: String,
        lo: f64,
        hi: f64,
        sample: String,
    },

    #[error("{table}: {column} has un-parseable values. Sample: {sample}")]
    UnparseableDates {
        table: String,
        column: String,
        sample: String,
    },

    #[error("{count} warning(s) raised in strict mode")]
    StrictWarnings { count: usize },
}
