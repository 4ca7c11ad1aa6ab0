use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraveFinderError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データファイルが指定されていません。`grave-finder config --set-dataset PATH` または --dataset で指定してください")]
    DatasetNotConfigured,

    #[error("データファイルが見つかりません: {0}")]
    DatasetNotFound(String),

    #[error("ワークブック読み込みエラー: {0}")]
    Workbook(String),

    #[error("データ解析エラー: {0}")]
    Dataset(#[from] grave_finder_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, GraveFinderError>;
