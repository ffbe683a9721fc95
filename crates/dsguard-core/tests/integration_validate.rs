//! Integration test: full validation runs against on-disk fixtures.

mod common;

use common::dataset::{Dataset, DICT_CSV, ML_CSV, RAW_CSV};
use dsguard_core::validate::{
    CheckFailure, Validator, COUNTRY_PLATFORM_FILE, DICT_FILE, ML_FILE, MONTHLY_FILE, RAW_FILE,
    TOP_CREATORS_FILE,
};

fn run(ds: &Dataset) -> (Result<(), CheckFailure>, Vec<String>) {
    let cfg = ds.config();
    let files = ds.files(&cfg);
    let mut v = Validator::new(&files, &cfg);
    let result = v.run();
    let warnings = v.warnings().iter().map(|w| w.to_string()).collect();
    (result, warnings)
}

#[test]
fn valid_dataset_passes_without_warnings() {
    let ds = Dataset::valid();
    let (result, warnings) = run(&ds);
    assert!(result.is_ok(), "{result:?}");
    assert!(warnings.is_empty(), "{warnings:?}");
}

#[test]
fn default_row_floor_only_warns() {
    let ds = Dataset::valid();
    let cfg = dsguard_core::config::DsguardConfig::default();
    let files = ds.files(&cfg);
    let mut v = Validator::new(&files, &cfg);
    assert!(v.run().is_ok());
    assert_eq!(v.warnings().len(), 1);
    assert_eq!(
        v.warnings()[0].to_string(),
        "raw: unusually small row count: 3"
    );
}

#[test]
fn strict_mode_turns_warnings_into_failure() {
    let ds = Dataset::valid();
    let cfg = dsguard_core::config::DsguardConfig {
        strict_warnings: true,
        ..Default::default()
    };
    let files = ds.files(&cfg);
    let mut v = Validator::new(&files, &cfg);
    let err = v.run().unwrap_err();
    assert!(matches!(err, CheckFailure::StrictWarnings { count: 1 }));
}

#[test]
fn missing_required_file_is_fatal() {
    let ds = Dataset::valid();
    ds.remove(TOP_CREATORS_FILE);
    let (result, _) = run(&ds);
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "missing file(s): data/top_creators_impact_2025.csv"
    );
}

#[test]
fn broken_csv_is_fatal() {
    let ds = Dataset::valid();
    ds.write(MONTHLY_FILE, "year_month,country,views\n2025-01,US\n");
    let (result, _) = run(&ds);
    assert!(matches!(
        result,
        Err(CheckFailure::Unreadable { ref table, .. }) if table == "monthly"
    ));
}

#[test]
fn dictionary_column_missing_from_raw_is_named() {
    let ds = Dataset::valid();
    let dict = format!("{DICT_CSV}saves,Save count\n");
    ds.write(DICT_FILE, &dict);
    let (result, _) = run(&ds);
    let err = result.unwrap_err();
    assert!(matches!(err, CheckFailure::MissingColumns { .. }));
    assert!(err.to_string().contains("saves"), "{err}");
}

#[test]
fn raw_column_missing_from_dictionary_is_a_warning() {
    let ds = Dataset::valid();
    let dict: String = DICT_CSV
        .lines()
        .filter(|l| !l.starts_with("category,"))
        .map(|l| format!("{l}\n"))
        .collect();
    ds.write(DICT_FILE, &dict);
    let (result, warnings) = run(&ds);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("category"));
}

#[test]
fn duplicate_row_id_is_fatal() {
    let ds = Dataset::valid();
    let raw = format!("{RAW_CSV}3,TikTok,BR,Comedy,1,0,0,0,1,0,0,0,2025-03-30,2025-03\n");
    ds.write(RAW_FILE, &raw);
    let (result, _) = run(&ds);
    assert!(matches!(
        result,
        Err(CheckFailure::DuplicateKey { ref columns, .. }) if columns == &["row_id"]
    ));
}

#[test]
fn rate_out_of_range_cites_column_and_sample() {
    let ds = Dataset::valid();
    let raw = RAW_CSV.replace(",0.115,", ",1.5,");
    ds.write(RAW_FILE, &raw);
    let (result, _) = run(&ds);
    let err = result.unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("engagement_rate"), "{msg}");
    assert!(msg.contains(r#"[{"engagement_rate":1.5}]"#), "{msg}");
}

#[test]
fn lowercase_country_in_aggregate_is_fatal() {
    let ds = Dataset::valid();
    ds.write(
        COUNTRY_PLATFORM_FILE,
        "country,platform,views\nUS,TikTok,1\nde,YouTube,2\n",
    );
    let (result, _) = run(&ds);
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("country_platform: country"));
}

#[test]
fn unknown_platform_is_fatal() {
    let ds = Dataset::valid();
    ds.write(RAW_FILE, &RAW_CSV.replace(",YouTube,", ",Vine,"));
    let (result, _) = run(&ds);
    assert!(matches!(
        result,
        Err(CheckFailure::UnexpectedValues { ref column, .. }) if column == "platform"
    ));
}

#[test]
fn year_month_drift_warns_but_passes() {
    let ds = Dataset::valid();
    ds.write(RAW_FILE, &RAW_CSV.replace("2025-02-14,2025-02", "2025-02-14,2025-05"));
    let (result, warnings) = run(&ds);
    assert!(result.is_ok(), "{result:?}");
    assert_eq!(
        warnings,
        vec!["raw: year_month mismatches publish_date_approx in 1 rows"]
    );
}

#[test]
fn unexpected_ml_label_is_fatal() {
    let ds = Dataset::valid();
    ds.write(ML_FILE, &ML_CSV.replace("seasonal", "viral"));
    let (result, _) = run(&ds);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), r#"ml: unexpected trend_label values: ["viral"]"#);
}

#[test]
fn duplicate_country_platform_pair_is_fatal() {
    let ds = Dataset::valid();
    ds.write(
        COUNTRY_PLATFORM_FILE,
        "country,platform,views\nUS,TikTok,1\nUS,TikTok,2\n",
    );
    let (result, _) = run(&ds);
    assert!(matches!(result, Err(CheckFailure::DuplicateKey { .. })));
}

#[test]
fn first_fatal_check_wins() {
    let ds = Dataset::valid();
    // Both a schema break and a range break; schema drift runs first.
    let dict = format!("{DICT_CSV}saves,Save count\n");
    ds.write(DICT_FILE, &dict);
    ds.write(RAW_FILE, &RAW_CSV.replace(",0.115,", ",1.5,"));
    let (result, _) = run(&ds);
    assert!(matches!(result, Err(CheckFailure::MissingColumns { .. })));
}
