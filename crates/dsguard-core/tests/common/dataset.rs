//! Writes a small, valid dataset layout into a temp dir.

#![allow(dead_code)]

use dsguard_core::config::DsguardConfig;
use dsguard_core::validate::{
    DatasetFiles, COUNTRY_PLATFORM_FILE, DICT_FILE, ML_FILE, MONTHLY_FILE, RAW_FILE,
    TOP_CREATORS_FILE, TOP_HASHTAGS_FILE,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const RAW_CSV: &str = "\
row_id,platform,country,category,views,likes,comments,shares,upload_hour,engagement_rate,like_rate,engagement_per_1k,publish_date_approx,year_month
1,TikTok,US,Music,1000,100,10,5,0,0.115,0.1,115,2025-01-03,2025-01
2,YouTube,DE,Gaming,2000,50,4,1,23,0.0275,0.025,27.5,2025-02-14,2025-02
3,TikTok,BR,Comedy,500,0,0,0,12,0,0,0,2025-03-30,2025-03
";

pub const DICT_CSV: &str = "\
column,description
row_id,Row identifier
platform,Source platform
country,ISO-2 country code
category,Content category
views,View count
likes,Like count
comments,Comment count
shares,Share count
upload_hour,Hour of upload (0-23)
engagement_rate,Engagement rate
like_rate,Likes per view
engagement_per_1k,Engagements per 1000 views
publish_date_approx,Approximate publish date
year_month,Publish year-month
";

pub const ML_CSV: &str = "\
trend_label,platform,category,like_rate,comment_rate,share_rate
rising,TikTok,Music,0.1,0.01,0.005
stable,YouTube,Gaming,0.025,0.002,0.0005
seasonal,TikTok,Comedy,0,0,0
";

pub const MONTHLY_CSV: &str = "\
year_month,country,views
2025-01,US,1000
2025-02,DE,2000
";

pub const COUNTRY_PLATFORM_CSV: &str = "\
country,platform,views
US,TikTok,1000
DE,YouTube,2000
BR,TikTok,500
";

pub const TOP_HASHTAGS_CSV: &str = "hashtag,uses\n#music,10\n";
pub const TOP_CREATORS_CSV: &str = "creator,impact\nalice,0.9\n";

pub struct Dataset {
    dir: TempDir,
}

impl Dataset {
    /// Empty root with no `data/` directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().expect("tempdir"),
        }
    }

    /// Root with every required file, all checks passing.
    pub fn valid() -> Self {
        let ds = Self::empty();
        ds.write(RAW_FILE, RAW_CSV);
        ds.write(ML_FILE, ML_CSV);
        ds.write(MONTHLY_FILE, MONTHLY_CSV);
        ds.write(COUNTRY_PLATFORM_FILE, COUNTRY_PLATFORM_CSV);
        ds.write(TOP_HASHTAGS_FILE, TOP_HASHTAGS_CSV);
        ds.write(TOP_CREATORS_FILE, TOP_CREATORS_CSV);
        ds.write(DICT_FILE, DICT_CSV);
        ds
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    /// Write `contents` to `data/<rel>`, creating parent dirs.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.data_dir().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).expect("create dirs");
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn remove(&self, rel: &str) {
        fs::remove_file(self.data_dir().join(rel)).expect("remove fixture");
    }

    /// Config with the row-count floor lowered to fit the fixture.
    pub fn config(&self) -> DsguardConfig {
        DsguardConfig {
            min_raw_rows: 1,
            ..DsguardConfig::default()
        }
    }

    pub fn files(&self, cfg: &DsguardConfig) -> DatasetFiles {
        DatasetFiles::from_root(self.root(), cfg)
    }
}
