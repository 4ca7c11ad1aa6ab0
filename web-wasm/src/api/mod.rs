//! 外部リソース取得

pub mod dataset;
