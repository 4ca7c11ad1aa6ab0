//! Gravestone Search CLI
//!
//! 墓所データをローカルで検索・点検するためのツール群

pub mod cli;
pub mod config;
pub mod error;
pub mod dataset;
pub mod report;
pub mod interactive;
pub mod check;
