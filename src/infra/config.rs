// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub downloads: DownloadsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Base URL of the REST API, including the /api prefix.
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".into(),
            timeout_seconds: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadsConfig {
    /// Where downloaded reports are written. Defaults to the platform
    /// downloads directory when unset.
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Load config.toml from the default location, falling back to defaults
    /// when the file doesn't exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn download_dir(&self) -> PathBuf {
        self.downloads
            .dir
            .clone()
            .unwrap_or_else(paths::downloads_dir)
    }
}
