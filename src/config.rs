use crate::error::{GraveFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// データファイルを指定する環境変数
pub const DATASET_ENV: &str = "GRAVE_FINDER_DATASET";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// 墓所データ（CSV / xlsx）
    pub dataset_path: Option<PathBuf>,
    /// 画像のベースURL（詳細表示の画像リンクに使用）
    pub image_base: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GraveFinderError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("grave-finder").join("config.json"))
    }

    /// データファイルのパスを決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_dataset(&self, flag: Option<&Path>) -> Result<PathBuf> {
        self.resolve_dataset_with(flag, std::env::var(DATASET_ENV).ok())
    }

    fn resolve_dataset_with(&self, flag: Option<&Path>, env: Option<String>) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path.to_path_buf());
        }

        if let Some(path) = env.filter(|p| !p.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }

        self.dataset_path
            .clone()
            .ok_or(GraveFinderError::DatasetNotConfigured)
    }

    pub fn set_dataset(&mut self, path: PathBuf) -> Result<()> {
        self.dataset_path = Some(path);
        self.save()
    }

    pub fn set_image_base(&mut self, base: String) -> Result<()> {
        self.image_base = base;
        self.save()
    }
}
