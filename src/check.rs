//! データ点検モジュール
//!
//! 検索に引っかからないレコード（姓名なし）と、画像ファイルが
//! 見つからないレコードを報告する。

use grave_finder_common::RecordStore;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub total: usize,
    /// 姓・名ともに空のレコード位置
    pub unnamed: Vec<usize>,
    /// 画像ファイル未指定のレコード位置
    pub without_image: Vec<usize>,
    /// 画像ファイルが存在しないレコード（位置, ファイル名）
    pub missing_images: Vec<(usize, String)>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.unnamed.is_empty() && self.missing_images.is_empty()
    }
}

/// データを点検（image_dir指定時のみ画像の存在を確認）
pub fn check_store(store: &RecordStore, image_dir: Option<&Path>) -> CheckReport {
    let mut report = CheckReport {
        total: store.len(),
        ..Default::default()
    };

    for (i, record) in store.records().iter().enumerate() {
        if record.first_name.is_none() && record.last_name.is_none() {
            report.unnamed.push(i);
        }

        match (&record.image_file, image_dir) {
            (None, _) => report.without_image.push(i),
            (Some(file), Some(dir)) => {
                if !dir.join(file.trim_start_matches('/')).is_file() {
                    report.missing_images.push((i, file.clone()));
                }
            }
            (Some(_), None) => {}
        }
    }

    report
}

/// 点検結果を表示
pub fn print_report(store: &RecordStore, report: &CheckReport) {
    println!("レコード数: {}", report.total);

    if !report.unnamed.is_empty() {
        println!("⚠ 姓名のないレコード: {}件", report.unnamed.len());
        for &i in &report.unnamed {
            println!("  #{}", i + 1);
        }
    }

    if !report.without_image.is_empty() {
        println!("- 画像未指定: {}件", report.without_image.len());
    }

    if !report.missing_images.is_empty() {
        println!("⚠ 画像ファイルが見つかりません: {}件", report.missing_images.len());
        for (i, file) in &report.missing_images {
            let name = store
                .get(*i)
                .map(|r| r.display_name())
                .unwrap_or_default();
            println!("  #{} {} ({})", i + 1, name, file);
        }
    }

    if report.is_clean() {
        println!("✔ 問題は見つかりませんでした");
    }
}
