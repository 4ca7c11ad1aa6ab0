//! 墓所データの取得と解析
//!
//! 起動時に1回だけfetchしてRecordStoreを作る。リトライはしない。

use grave_finder_common::RecordStore;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// データ読み込みエラー
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("parse failed: {0}")]
    Parse(#[from] grave_finder_common::Error),
}

impl From<JsValue> for LoadError {
    fn from(value: JsValue) -> Self {
        LoadError::Fetch(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// データを取得してRecordStoreを返す
pub async fn load_dataset(url: &str) -> Result<RecordStore, LoadError> {
    let text = fetch_text(url).await?;
    parse_dataset(&text)
}

/// 取得したCSV本文を解析
pub fn parse_dataset(text: &str) -> Result<RecordStore, LoadError> {
    Ok(RecordStore::from_csv_str(text)?)
}

async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| LoadError::Fetch("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(LoadError::Fetch(format!("HTTP {} for {}", resp.status(), url)));
    }

    let body = JsFuture::from(resp.text()?).await?;
    body.as_string()
        .ok_or_else(|| LoadError::Fetch("response body is not text".into()))
}
