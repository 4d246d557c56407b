use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;

pub const DEFAULT_API_URL: &str = "https://dummyjson.com/products";

const API_URL_ENV: &str = "PRODUCT_TABLE_API_URL";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

impl AppConfig {
    /// Reads the config file when present, otherwise starts from defaults.
    /// `PRODUCT_TABLE_API_URL` overrides the endpoint either way.
    pub fn load() -> Result<Self> {
        let config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file: {}", path.display()))?;
                serde_json::from_str(&content)
                    .with_context(|| format!("failed to parse config file: {}", path.display()))?
            }
            _ => Self::default(),
        };
        Ok(config.with_env_override(std::env::var(API_URL_ENV).ok()))
    }

    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "producttable", "product-table")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    pub fn with_env_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }
}
