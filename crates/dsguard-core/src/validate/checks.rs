//! Individual dataset checks. Each one is independent: fatal violations come
//! back as `Err(CheckFailure)`, advisory ones as `Some(Warning)`.

use super::dates::{parse_date, year_month};
use super::error::CheckFailure;
use super::Warning;
use crate::table::{Cell, Table};
use std::collections::BTreeSet;
use std::path::Path;

/// Column name lists quoted in messages are cut to this many entries.
const MAX_LISTED_COLUMNS: usize = 10;

pub fn check_files_exist<'a, I>(files: I) -> Result<(), CheckFailure>
where
    I: IntoIterator<Item = (String, &'a Path)>,
{
    let missing: Vec<String> = files
        .into_iter()
        .filter(|(_, path)| !path.exists())
        .map(|(shown, _)| shown)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckFailure::MissingFiles { paths: missing })
    }
}

pub fn check_row_count(table: &Table, min_rows: usize) -> Option<Warning> {
    let n = table.row_count();
    (n < min_rows).then(|| Warning::new(table, format!("unusually small row count: {n}")))
}

/// Every column named in the dictionary's `column` field must exist in `raw`.
/// Columns of `raw` the dictionary does not list are only a warning.
pub fn check_schema_drift(raw: &Table, dictionary: &Table) -> Result<Option<Warning>, CheckFailure> {
    let Some(dict_col) = dictionary.column("column") else {
        return Err(CheckFailure::MissingColumns {
            table: dictionary.name().to_string(),
            context: "required",
            columns: vec!["column".to_string()],
        });
    };
    let expected: BTreeSet<&str> = dict_col.values().filter(|v| !v.is_empty()).collect();
    let actual: BTreeSet<&str> = raw.column_names().iter().map(String::as_str).collect();

    let missing: Vec<String> = expected
        .difference(&actual)
        .take(MAX_LISTED_COLUMNS)
        .map(|c| c.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(CheckFailure::MissingColumns {
            table: raw.name().to_string(),
            context: "data dictionary",
            columns: missing,
        });
    }

    let extra: Vec<&str> = actual
        .difference(&expected)
        .take(MAX_LISTED_COLUMNS)
        .copied()
        .collect();
    Ok((!extra.is_empty()).then(|| {
        Warning::new(
            raw,
            format!("extra columns not in data dictionary: {extra:?}"),
        )
    }))
}

fn is_iso2_upper(v: &str) -> bool {
    v.chars().count() == 2 && v.to_uppercase() == v
}

/// `country` (when present) must be exactly two uppercase characters.
pub fn check_country_codes(table: &Table, sample_limit: usize) -> Result<(), CheckFailure> {
    let bad = table.rows_where("country", |v| !is_iso2_upper(v));
    if bad.is_empty() {
        return Ok(());
    }
    Err(CheckFailure::CountryFormat {
        table: table.name().to_string(),
        sample: table.sample(&bad, &["country"], sample_limit),
    })
}

/// Values of `column` (when present) must come from `allowed`.
pub fn check_value_domain(
    table: &Table,
    column: &str,
    allowed: &[&str],
) -> Result<(), CheckFailure> {
    let Some(col) = table.column(column) else {
        return Ok(());
    };
    let unexpected: BTreeSet<&str> = col.values().filter(|v| !allowed.contains(v)).collect();
    if unexpected.is_empty() {
        return Ok(());
    }
    Err(CheckFailure::UnexpectedValues {
        table: table.name().to_string(),
        column: column.to_string(),
        values: unexpected.into_iter().map(str::to_string).collect(),
    })
}

/// The key formed by `columns` must be unique. Skipped if any column is absent.
pub fn check_unique(table: &Table, columns: &[&str]) -> Result<(), CheckFailure> {
    if table.duplicated(columns) {
        return Err(CheckFailure::DuplicateKey {
            table: table.name().to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
        });
    }
    Ok(())
}

/// Rows of a numeric column whose value satisfies `pred`. Missing cells never match;
/// text that is not a number fails the check.
fn numeric_rows_where<F>(
    table: &Table,
    column: &str,
    sample_limit: usize,
    pred: F,
) -> Result<Vec<usize>, CheckFailure>
where
    F: Fn(f64) -> bool,
{
    let Some(col) = table.column(column) else {
        return Ok(Vec::new());
    };
    let mut hits = Vec::new();
    let mut non_numeric = Vec::new();
    for (i, cell) in col.cells().enumerate() {
        match cell {
            Cell::Missing => {}
            Cell::Number(v) => {
                if pred(v) {
                    hits.push(i);
                }
            }
            Cell::Text => non_numeric.push(i),
        }
    }
    if !non_numeric.is_empty() {
        return Err(CheckFailure::NonNumeric {
            table: table.name().to_string(),
            column: col.name().to_string(),
            sample: table.sample(&non_numeric, &[col.name()], sample_limit),
        });
    }
    Ok(hits)
}

/// None of the present `columns` may hold a negative value.
pub fn check_nonnegative(
    table: &Table,
    columns: &[&str],
    sample_limit: usize,
) -> Result<(), CheckFailure> {
    let mut bad = Vec::new();
    for column in columns {
        if !numeric_rows_where(table, column, sample_limit, |v| v < 0.0)?.is_empty() {
            bad.push(column.to_string());
        }
    }
    if bad.is_empty() {
        return Ok(());
    }
    Err(CheckFailure::Negative {
        table: table.name().to_string(),
        columns: bad,
    })
}

/// `column` (when present) must lie in `[lo, hi]`.
pub fn check_in_range(
    table: &Table,
    column: &str,
    lo: f64,
    hi: f64,
    sample_limit: usize,
) -> Result<(), CheckFailure> {
    let bad = numeric_rows_where(table, column, sample_limit, |v| v < lo || v > hi)?;
    if bad.is_empty() {
        return Ok(());
    }
    Err(CheckFailure::OutOfRange {
        table: table.name().to_string(),
        column: column.to_string(),
        lo,
        hi,
        sample: table.sample(&bad, &[column], sample_limit),
    })
}

/// Every `date_column` value must be a calendar date. If `year_month_column` is
/// present too, rows whose `YYYY-MM` projection disagrees with it are counted
/// into a warning.
pub fn check_dates(
    table: &Table,
    date_column: &str,
    year_month_column: &str,
    sample_limit: usize,
) -> Result<Option<Warning>, CheckFailure> {
    let Some(dates) = table.column(date_column) else {
        return Ok(None);
    };
    let parsed: Vec<_> = dates.values().map(parse_date).collect();

    let unparseable: Vec<usize> = parsed
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_none())
        .map(|(i, _)| i)
        .collect();
    if !unparseable.is_empty() {
        return Err(CheckFailure::UnparseableDates {
            table: table.name().to_string(),
            column: date_column.to_string(),
            sample: table.sample(&unparseable, &[date_column], sample_limit),
        });
    }

    let Some(stored) = table.column(year_month_column) else {
        return Ok(None);
    };
    let mismatches = parsed
        .iter()
        .zip(stored.values())
        .filter(|(d, ym)| d.map(year_month).as_deref() != Some(*ym))
        .count();
    Ok((mismatches > 0).then(|| {
        Warning::new(
            table,
            format!("{year_month_column} mismatches {date_column} in {mismatches} rows"),
        )
    }))
}

/// All of `required` must be columns of `table`.
pub fn check_required_columns(table: &Table, required: &[&str]) -> Result<(), CheckFailure> {
    let missing: BTreeSet<&str> = required
        .iter()
        .copied()
        .filter(|c| !table.has_column(c))
        .collect();
    if missing.is_empty() {
        return Ok(());
    }
    Err(CheckFailure::MissingColumns {
        table: table.name().to_string(),
        context: "required",
        columns: missing.into_iter().map(str::to_string).collect(),
    })
}
