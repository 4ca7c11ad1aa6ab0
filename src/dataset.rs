//! データファイル読み込み
//!
//! 拡張子で形式を判定する。Excel系はcalamineで先頭シートを読み、
//! 1行目をヘッダーとしてRecordStoreに渡す。それ以外はCSVとして読む。

use crate::error::{GraveFinderError, Result};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use grave_finder_common::RecordStore;
use std::path::Path;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "ods"];

pub fn load_store(path: &Path) -> Result<RecordStore> {
    if !path.exists() {
        return Err(GraveFinderError::DatasetNotFound(path.display().to_string()));
    }

    let store = if is_workbook(path) {
        load_workbook(path)?
    } else {
        RecordStore::from_csv(path)?
    };

    log::debug!("{}: {} records", path.display(), store.len());
    Ok(store)
}

fn is_workbook(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| WORKBOOK_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn load_workbook(path: &Path) -> Result<RecordStore> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| GraveFinderError::Workbook(e.to_string()))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| GraveFinderError::Workbook("シートがありません".into()))?
        .map_err(|e| GraveFinderError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(row) => row.iter().map(cell_text).collect(),
        None => return Err(grave_finder_common::Error::EmptySource.into()),
    };
    let body = rows.map(|row| row.iter().map(cell_text).collect::<Vec<_>>());

    Ok(RecordStore::from_rows(&headers, body)?)
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        // 日付セルはシリアル値ではなく YYYY-MM-DD で扱う
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_date()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| cell.to_string()),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_workbook() {
        assert!(is_workbook(Path::new("graves.xlsx")));
        assert!(is_workbook(Path::new("graves.XLSX")));
        assert!(is_workbook(Path::new("graves.ods")));
        assert!(!is_workbook(Path::new("graves.csv")));
        assert!(!is_workbook(Path::new("graves")));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("North".into())), "North");
        assert_eq!(cell_text(&Data::Float(12.0)), "12");
        assert_eq!(cell_text(&Data::Int(7)), "7");
        assert_eq!(cell_text(&Data::DateTimeIso("1901-04-02T00:00:00".into())), "1901-04-02");
    }

    #[test]
    fn test_missing_file() {
        let result = load_store(Path::new("/nonexistent/graves.csv"));
        assert!(matches!(result, Err(GraveFinderError::DatasetNotFound(_))));
    }
}
