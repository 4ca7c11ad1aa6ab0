//! データファイル読み込みテスト
//!
//! CSV・xlsxの両形式からヘッダー名で列を対応付けられることを検証

use grave_finder::dataset::load_store;
use grave_finder::error::GraveFinderError;
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook};
use tempfile::tempdir;

const GRAVES_CSV: &str = "\
First Name,Last Name,Section,Row/Area,Position,Image File
Mary,Jones,A,3,12,images/jones_mary.jpg
John,Smith,B,North,4,images/smith_john.jpg
Jane,Smithson,B,North,5,
";

/// CSVファイルの読み込み
#[test]
fn test_load_csv_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("graves.csv");
    std::fs::write(&path, GRAVES_CSV).unwrap();

    let store = load_store(&path).expect("CSV読み込み失敗");
    assert_eq!(store.len(), 3);
    assert_eq!(store.get(2).unwrap().image_file, None);
    assert_eq!(store.get(2).unwrap().birth_date, None);
}

/// xlsxファイルの読み込み（列順が異なり、数値セルを含む）
#[test]
fn test_load_xlsx_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("graves.xlsx");

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in ["Position", "Last Name", "First Name", "Death Date"].iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    worksheet.write_number(1, 0, 12).unwrap();
    worksheet.write_string(1, 1, "Jones").unwrap();
    worksheet.write_string(1, 2, "Mary").unwrap();
    worksheet.write_string(1, 3, "1980-11-30").unwrap();
    worksheet.write_string(2, 1, "Smith").unwrap();
    workbook.save(&path).unwrap();

    let store = load_store(&path).expect("xlsx読み込み失敗");
    assert_eq!(store.len(), 2);

    let mary = store.get(0).unwrap();
    assert_eq!(mary.display_name(), "Mary Jones");
    assert_eq!(mary.position.as_deref(), Some("12"));
    assert_eq!(mary.death_date.as_deref(), Some("1980-11-30"));

    let smith = store.get(1).unwrap();
    assert_eq!(smith.first_name, None);
    assert_eq!(smith.position, None);
}

/// 日付書式のセルはシリアル値ではなく日付文字列になる
#[test]
fn test_load_xlsx_date_cells() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("dates.xlsx");

    let date_format = Format::new().set_num_format("yyyy-mm-dd");
    let death = ExcelDateTime::from_ymd(1980, 11, 30).unwrap();
    let birth = ExcelDateTime::from_ymd(1901, 4, 2).unwrap();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "First Name").unwrap();
    worksheet.write_string(0, 1, "Birth Date").unwrap();
    worksheet.write_string(0, 2, "Death Date").unwrap();
    worksheet.write_string(1, 0, "Mary").unwrap();
    worksheet.write_datetime_with_format(1, 1, &birth, &date_format).unwrap();
    worksheet.write_datetime_with_format(1, 2, &death, &date_format).unwrap();
    workbook.save(&path).unwrap();

    let store = load_store(&path).expect("xlsx読み込み失敗");
    let mary = store.get(0).unwrap();
    assert_eq!(mary.birth_date.as_deref(), Some("1901-04-02"));
    assert_eq!(mary.death_date.as_deref(), Some("1980-11-30"));
}

/// ヘッダーに既知の列がない
#[test]
fn test_load_unrecognized_header() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("other.csv");
    std::fs::write(&path, "Name,Plot\nMary,7\n").unwrap();

    let result = load_store(&path);
    assert!(matches!(
        result,
        Err(GraveFinderError::Dataset(grave_finder_common::Error::UnrecognizedHeader(_)))
    ));
}

/// 空のCSVファイル
#[test]
fn test_load_empty_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("empty.csv");
    std::fs::write(&path, "").unwrap();

    let result = load_store(&path);
    assert!(matches!(
        result,
        Err(GraveFinderError::Dataset(grave_finder_common::Error::EmptySource))
    ));
}
