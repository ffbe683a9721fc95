use crate::config::DsguardConfig;
use std::path::{Path, PathBuf};

pub const RAW_FILE: &str = "youtube_shorts_tiktok_trends_2025.csv";
pub const ML_FILE: &str = "youtube_shorts_tiktok_trends_2025_ml.csv";
pub const MONTHLY_FILE: &str = "monthly_trends_2025.csv";
pub const COUNTRY_PLATFORM_FILE: &str = "country_platform_summary_2025.csv";
pub const TOP_HASHTAGS_FILE: &str = "top_hashtags_2025.csv";
pub const TOP_CREATORS_FILE: &str = "top_creators_impact_2025.csv";
pub const DICT_FILE: &str = "DATA_DICTIONARY.csv";

/// Fixed input files of the validator, resolved under `<root>/<data_dir>`.
#[derive(Debug, Clone)]
pub struct DatasetFiles {
    pub root: PathBuf,
    pub raw: PathBuf,
    pub ml: PathBuf,
    pub monthly: PathBuf,
    pub country_platform: PathBuf,
    pub top_hashtags: PathBuf,
    pub top_creators: PathBuf,
    pub dictionary: PathBuf,
}

impl DatasetFiles {
    pub fn from_root(root: &Path, cfg: &DsguardConfig) -> Self {
        let data = root.join(&cfg.data_dir);
        Self {
            root: root.to_path_buf(),
            raw: data.join(RAW_FILE),
            ml: data.join(ML_FILE),
            monthly: data.join(MONTHLY_FILE),
            country_platform: data.join(COUNTRY_PLATFORM_FILE),
            top_hashtags: data.join(TOP_HASHTAGS_FILE),
            top_creators: data.join(TOP_CREATORS_FILE),
            dictionary: data.join(DICT_FILE),
        }
    }

    /// Every required file, labelled with its table name, in check order.
    pub fn required(&self) -> [(&'static str, &Path); 7] {
        [
            ("raw", self.raw.as_path()),
            ("ml", self.ml.as_path()),
            ("monthly", self.monthly.as_path()),
            ("country_platform", self.country_platform.as_path()),
            ("top_hashtags", self.top_hashtags.as_path()),
            ("top_creators", self.top_creators.as_path()),
            ("dictionary", self.dictionary.as_path()),
        ]
    }

    /// Path shown in messages: relative to the root when possible.
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
