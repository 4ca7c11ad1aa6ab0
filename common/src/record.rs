//! レコードストアモジュール
//!
//! 墓所データ（表形式エクスポート）を読み込み、メモリ上に保持する。
//! 列は位置ではなくヘッダー名で対応付けるため、列の並び替えに影響されない。

use crate::error::{Error, Result};
use crate::matcher;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

pub const FIRST_NAME: &str = "First Name";
pub const LAST_NAME: &str = "Last Name";
pub const SECTION: &str = "Section";
pub const ROW_AREA: &str = "Row/Area";
pub const POSITION: &str = "Position";
pub const BIRTH_DATE: &str = "Birth Date";
pub const DEATH_DATE: &str = "Death Date";
pub const IMAGE_FILE: &str = "Image File";

/// 1人分の墓石情報
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Record {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// 区画
    pub section: Option<String>,
    /// 列/エリア
    pub row_area: Option<String>,
    /// 位置
    pub position: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    /// 墓石写真（アセットベースからの相対パス）
    pub image_file: Option<String>,
}

impl Record {
    /// 姓名を連結した表示名（候補リストのラベル）
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            "(unnamed)".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// 既知の項目がすべて空
    pub fn is_blank(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.section.is_none()
            && self.row_area.is_none()
            && self.position.is_none()
            && self.birth_date.is_none()
            && self.death_date.is_none()
            && self.image_file.is_none()
    }
}

/// ヘッダー名→列位置の対応表
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    first_name: Option<usize>,
    last_name: Option<usize>,
    section: Option<usize>,
    row_area: Option<usize>,
    position: Option<usize>,
    birth_date: Option<usize>,
    death_date: Option<usize>,
    image_file: Option<usize>,
}

impl ColumnMap {
    /// ヘッダー行から対応表を作成
    ///
    /// 列名は完全一致（空白・大文字小文字も区別）。未知の列は無視し、
    /// 同名の列が複数ある場合は先頭を採用する。
    pub fn from_headers<S: AsRef<str>>(headers: &[S]) -> Result<Self> {
        if headers.is_empty() {
            return Err(Error::EmptySource);
        }

        let mut columns = Self::default();
        for (index, name) in headers.iter().enumerate() {
            if let Some(slot) = columns.slot_mut(name.as_ref()) {
                if slot.is_none() {
                    *slot = Some(index);
                }
            }
        }

        if columns.is_unrecognized() {
            let header_line = headers
                .iter()
                .map(|h| h.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            log::warn!("no known column in header row: {}", header_line);
            return Err(Error::UnrecognizedHeader(header_line));
        }

        Ok(columns)
    }

    /// 1行分のセルをRecordに変換（空セル・欠損列はNone）
    pub fn record<S: AsRef<str>>(&self, fields: &[S]) -> Record {
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| fields.get(i))
                .map(|value| value.as_ref().trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        Record {
            first_name: cell(self.first_name),
            last_name: cell(self.last_name),
            section: cell(self.section),
            row_area: cell(self.row_area),
            position: cell(self.position),
            birth_date: cell(self.birth_date),
            death_date: cell(self.death_date),
            image_file: cell(self.image_file),
        }
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<usize>> {
        match name {
            FIRST_NAME => Some(&mut self.first_name),
            LAST_NAME => Some(&mut self.last_name),
            SECTION => Some(&mut self.section),
            ROW_AREA => Some(&mut self.row_area),
            POSITION => Some(&mut self.position),
            BIRTH_DATE => Some(&mut self.birth_date),
            DEATH_DATE => Some(&mut self.death_date),
            IMAGE_FILE => Some(&mut self.image_file),
            _ => None,
        }
    }

    fn is_unrecognized(&self) -> bool {
        *self == Self::default()
    }
}

/// 読み込み済みレコード全体（読み込み後は不変）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// CSVファイルから読み込み
    pub fn from_csv(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// CSV文字列から読み込み
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_reader(content.as_bytes())
    }

    /// CSVリーダーから読み込み
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let columns = ColumnMap::from_headers(&headers)?;

        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row?;
            rows.push(columns.record(&row.iter().collect::<Vec<_>>()));
        }

        Ok(Self::collect(rows))
    }

    /// ヘッダー行とデータ行から構築（Excel等、CSV以外の表形式用）
    pub fn from_rows<H, S, I>(headers: &[H], rows: I) -> Result<Self>
    where
        H: AsRef<str>,
        S: AsRef<str>,
        I: IntoIterator<Item = Vec<S>>,
    {
        let columns = ColumnMap::from_headers(headers)?;
        let records = rows.into_iter().map(|row| columns.record(&row)).collect();
        Ok(Self::collect(records))
    }

    fn collect(rows: Vec<Record>) -> Self {
        let total = rows.len();
        let records: Vec<Record> = rows.into_iter().filter(|r| !r.is_blank()).collect();

        log::debug!(
            "loaded {} records ({} blank rows skipped)",
            records.len(),
            total - records.len()
        );

        Self { records }
    }

    /// 全レコードを取得
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 検索語にマッチするレコード（データ順）
    pub fn search(&self, query: &str) -> Vec<&Record> {
        matcher::find_matches(&self.records, query)
    }
}

impl From<Vec<Record>> for RecordStore {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}
