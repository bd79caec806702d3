use std::path::{Path, PathBuf};

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the JSON collections live.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cities_file")]
    pub cities_file: String,
    #[serde(default = "default_entities_file")]
    pub entities_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities_file: default_cities_file(),
            entities_file: default_entities_file(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

fn default_data_dir() -> String { "data".into() }
fn default_cities_file() -> String { "cities.json".into() }
fn default_entities_file() -> String { "entities.json".into() }

/// Load from `CONFIG_PATH` (default `config.toml`). A missing file yields defaults.
pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if !Path::new(&path).exists() {
        tracing::debug!(%path, "config file not found; using defaults");
        return Ok(AppConfig::default());
    }
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.storage.normalize_from_env();
        self.storage.validate()?;
        Ok(())
    }
}

impl StorageConfig {
    /// `DATA_DIR` wins over the file; a blank directory falls back to `data`.
    pub fn normalize_from_env(&mut self) {
        if let Ok(dir) = std::env::var("DATA_DIR") {
            if !dir.trim().is_empty() {
                self.data_dir = dir;
            }
        }
        if self.data_dir.trim().is_empty() {
            self.data_dir = default_data_dir();
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (key, name) in [("storage.cities_file", &self.cities_file), ("storage.entities_file", &self.entities_file)] {
            if name.trim().is_empty() {
                return Err(anyhow!("{key} must not be empty"));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(anyhow!("{key} must be a bare file name, got {name:?}"));
            }
        }
        if self.cities_file == self.entities_file {
            return Err(anyhow!("storage.cities_file and storage.entities_file must differ"));
        }
        Ok(())
    }

    pub fn cities_path(&self) -> PathBuf { Path::new(&self.data_dir).join(&self.cities_file) }

    pub fn entities_path(&self) -> PathBuf { Path::new(&self.data_dir).join(&self.entities_file) }
}
