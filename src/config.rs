use crate::error::{LineReviewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// アップロード先URLを上書きする環境変数
pub const ENDPOINT_ENV: &str = "LINE_REVIEW_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
    pub stroke_width: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Some("http://localhost:8000/upload".into()),
            // 抽出はモデルの推論待ちで数分かかることがある
            timeout_seconds: 300,
            stroke_width: line_review_common::overlay::DEFAULT_STROKE_WIDTH,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LineReviewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("line-review").join("config.json"))
    }

    pub fn get_endpoint(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(url) = std::env::var(ENDPOINT_ENV) {
            if !url.is_empty() {
                return Ok(url);
            }
        }

        self.endpoint
            .clone()
            .filter(|url| !url.is_empty())
            .ok_or(LineReviewError::MissingEndpoint)
    }

    pub fn set_endpoint(&mut self, url: String) -> Result<()> {
        self.endpoint = Some(url);
        self.save()
    }
}
