//! 詳細表示用の整形
//!
//! Web画面とCLIの両方で同じ表示になるよう、ラベル・"N/A"表記・
//! 画像URLの組み立てをここにまとめる。

use crate::record::{self, Record};
use serde::Serialize;

/// 値がない項目の表示
pub const NOT_AVAILABLE: &str = "N/A";

pub const NO_RESULTS_MESSAGE: &str = "No results found.";

pub const MULTIPLE_RESULTS_HEADING: &str = "Multiple results found. Please select:";

pub fn or_not_available(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// 画像ファイルの相対パスをアセットベースと結合
///
/// 絶対URLはそのまま返す。ファイルの存在は確認しない。
pub fn image_url(base: &str, image_file: &str) -> String {
    if image_file.starts_with("http://") || image_file.starts_with("https://") {
        return image_file.to_string();
    }

    let base = base.trim_end_matches('/');
    let file = image_file.trim_start_matches('/');
    format!("{}/{}", base, file)
}

/// 詳細パネルの内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDetail {
    pub title: String,
    pub rows: Vec<(&'static str, String)>,
    pub image_url: Option<String>,
    pub image_alt: String,
}

impl RecordDetail {
    pub fn from_record(record: &Record, image_base: &str) -> Self {
        let field = |value: &Option<String>| or_not_available(value.as_deref()).to_string();

        Self {
            title: format!("Gravestone Information for {}", record.display_name()),
            rows: vec![
                (record::SECTION, field(&record.section)),
                (record::ROW_AREA, field(&record.row_area)),
                (record::POSITION, field(&record.position)),
                (record::BIRTH_DATE, field(&record.birth_date)),
                (record::DEATH_DATE, field(&record.death_date)),
            ],
            image_url: record
                .image_file
                .as_deref()
                .map(|file| image_url(image_base, file)),
            image_alt: record.display_name(),
        }
    }
}
