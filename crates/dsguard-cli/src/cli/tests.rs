use super::*;
use std::path::Path;

#[test]
fn checksums_default_generates() {
    let cli = ChecksumsCli::try_parse_from(["make-checksums"]).unwrap();
    assert!(!cli.check);
    assert!(cli.common.root.is_none());
    assert!(cli.common.config.is_none());
}

#[test]
fn checksums_check_flag() {
    let cli = ChecksumsCli::try_parse_from(["make-checksums", "--check"]).unwrap();
    assert!(cli.check);
}

#[test]
fn checksums_root_and_config() {
    let cli = ChecksumsCli::try_parse_from([
        "make-checksums",
        "--root",
        "/srv/dataset",
        "--config",
        "dsguard.toml",
    ])
    .unwrap();
    assert_eq!(cli.common.root.as_deref(), Some(Path::new("/srv/dataset")));
    assert_eq!(cli.common.config.as_deref(), Some(Path::new("dsguard.toml")));
}

#[test]
fn checksums_rejects_positional_args() {
    assert!(ChecksumsCli::try_parse_from(["make-checksums", "extra"]).is_err());
}

#[test]
fn validate_default_is_not_strict() {
    let cli = ValidateCli::try_parse_from(["validate-dataset"]).unwrap();
    assert!(!cli.strict);
}

#[test]
fn validate_strict_flag() {
    let cli = ValidateCli::try_parse_from(["validate-dataset", "--strict"]).unwrap();
    assert!(cli.strict);
}

#[test]
fn validate_rejects_check_flag() {
    assert!(ValidateCli::try_parse_from(["validate-dataset", "--check"]).is_err());
}

#[test]
fn checksums_exit_codes() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    let root = dir.path().to_str().unwrap();
    let cfg = config.to_str().unwrap();

    let generate =
        ChecksumsCli::try_parse_from(["make-checksums", "--root", root, "--config", cfg]).unwrap();
    assert_eq!(generate.run(), EXIT_FATAL, "no data dir yet");

    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::write(dir.path().join("data").join("t.csv"), "x").unwrap();
    let check = ChecksumsCli::try_parse_from([
        "make-checksums",
        "--check",
        "--root",
        root,
        "--config",
        cfg,
    ])
    .unwrap();
    assert_eq!(check.run(), EXIT_FAILED, "no manifest yet");
    assert_eq!(generate.run(), EXIT_OK);
    assert_eq!(check.run(), EXIT_OK);
}

#[test]
fn validate_missing_files_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    let cli = ValidateCli::try_parse_from([
        "validate-dataset",
        "--root",
        dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(cli.run(), EXIT_FAILED);
}

#[test]
fn validate_unreadable_table_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    for name in [
        "youtube_shorts_tiktok_trends_2025_ml.csv",
        "monthly_trends_2025.csv",
        "country_platform_summary_2025.csv",
        "top_hashtags_2025.csv",
        "top_creators_impact_2025.csv",
        "DATA_DICTIONARY.csv",
    ] {
        std::fs::write(data.join(name), "column\nx\n").unwrap();
    }
    // Ragged record: the raw table exists but does not parse.
    std::fs::write(
        data.join("youtube_shorts_tiktok_trends_2025.csv"),
        "row_id,platform\n1\n",
    )
    .unwrap();

    let cli = ValidateCli::try_parse_from([
        "validate-dataset",
        "--root",
        dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(cli.run(), EXIT_FAILED);
}

#[test]
fn validate_malformed_config_exit_code() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "sample_limit = \"five\"").unwrap();
    let cli = ValidateCli::try_parse_from([
        "validate-dataset",
        "--root",
        dir.path().to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ])
    .unwrap();
    assert_eq!(cli.run(), EXIT_FATAL);
}
