use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

use super::mode::UiMode;

pub const DEFAULT_COINBASE_URL: &str = "https://api.coinbase.com";
pub const DEFAULT_USER_AGENT: &str = "coincards/0.1";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CoinbaseProviderConfig {
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvidersConfig {
    pub coinbase: Option<CoinbaseProviderConfig>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        ProvidersConfig {
            coinbase: Some(CoinbaseProviderConfig {
                base_url: DEFAULT_COINBASE_URL.to_string(),
                user_agent: default_user_agent(),
            }),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Selector value used when the interactive session starts.
    pub default_mode: Option<String>,
}

impl AppConfig {
    /// Loads the config from the default location, or defaults if there is none.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "coincards", "coincards")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    pub fn coinbase(&self) -> (&str, &str) {
        self.providers
            .coinbase
            .as_ref()
            .map_or((DEFAULT_COINBASE_URL, DEFAULT_USER_AGENT), |p| {
                (p.base_url.as_str(), p.user_agent.as_str())
            })
    }

    pub fn default_mode(&self) -> Result<UiMode> {
        match &self.default_mode {
            Some(value) => value
                .parse()
                .with_context(|| format!("Invalid default_mode in config: {value}")),
            None => Ok(UiMode::default()),
        }
    }
}
