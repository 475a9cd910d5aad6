use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub omdb: OmdbConfig,
    pub kinopoisk: KinopoiskConfig,
    #[serde(default)]
    pub fetch: FetchOptions,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OmdbConfig {
    #[serde(default = "default_omdb_api_url")]
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct KinopoiskConfig {
    #[serde(default = "default_kinopoisk_api_url")]
    pub api_url: String,
    pub api_key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FetchOptions {
    /// Per-catalog deadline for one resolution, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Directory for the record store; platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_omdb_api_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_kinopoisk_api_url() -> String {
    "https://api.kinopoisk.dev/v1.4".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// API keys may come from the environment instead of the config file.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("KINOFUSE_OMDB_API_KEY") {
            self.omdb.api_key = key;
        }
        if let Ok(key) = std::env::var("KINOFUSE_KINOPOISK_API_KEY") {
            self.kinopoisk.api_key = key;
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.omdb.api_key.is_empty() || self.omdb.api_key == "YOUR_API_KEY" {
            return Err(anyhow::anyhow!("OMDb api_key is not configured"));
        }
        if self.kinopoisk.api_key.is_empty() || self.kinopoisk.api_key == "YOUR_API_KEY" {
            return Err(anyhow::anyhow!("Kinopoisk api_key is not configured"));
        }
        if self.omdb.api_url.is_empty() {
            return Err(anyhow::anyhow!("OMDb api_url cannot be empty"));
        }
        if self.kinopoisk.api_url.is_empty() {
            return Err(anyhow::anyhow!("Kinopoisk api_url cannot be empty"));
        }
        if self.fetch.timeout_secs == 0 {
            return Err(anyhow::anyhow!("fetch timeout_secs must be positive"));
        }
        Ok(())
    }
}
