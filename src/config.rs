//! Configuration Management
//!
//! Handles persistent defaults for the `pokeapi` command.

use anyhow::{Context, Result};
use pokeapi::api::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output format for fetched records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// API root, e.g. a local PokeAPI mirror
    #[serde(default)]
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
}

impl Config {
    /// `<config_dir>/pokeapi`, shared by the config file and the log file
    fn app_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pokeapi"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::app_dir().map(|dir| dir.join("config.json"))
    }

    /// Where `--log-level` writes. Falls back to `~/.pokeapi`, then the
    /// working directory, so logging works without a config directory.
    pub fn log_path() -> PathBuf {
        Self::app_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".pokeapi")))
            .unwrap_or_default()
            .join("pokeapi.log")
    }

    /// Load configuration from disk
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed config {:?}: {}", path, e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Overlay values given on the command line (CLI > config)
    pub fn merge(&mut self, overrides: Config) {
        if overrides.base_url.is_some() {
            self.base_url = overrides.base_url;
        }
        if overrides.timeout_secs.is_some() {
            self.timeout_secs = overrides.timeout_secs;
        }
        if overrides.user_agent.is_some() {
            self.user_agent = overrides.user_agent;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
    }

    /// Get effective base URL (CLI > config > library default)
    pub fn effective_base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get effective user agent (CLI > config > library default)
    pub fn effective_user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn effective_output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_base_url(), "https://pokeapi.co/api/v2");
        assert!(config.effective_user_agent().starts_with("pokeapi-rs/"));
        assert_eq!(config.effective_output(), OutputFormat::Json);
    }

    #[test]
    fn test_cli_overrides_config() {
        let mut config = Config {
            base_url: Some("http://localhost:8000/api/v2".to_string()),
            timeout_secs: Some(30),
            user_agent: None,
            output: Some(OutputFormat::Yaml),
        };

        config.merge(Config {
            timeout_secs: Some(5),
            ..Config::default()
        });

        assert_eq!(config.effective_base_url(), "http://localhost:8000/api/v2");
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.effective_output(), OutputFormat::Yaml);
    }

    #[test]
    fn test_log_file_next_to_config() {
        let log = Config::log_path();
        assert_eq!(log.file_name().and_then(|n| n.to_str()), Some("pokeapi.log"));
        if let Some(config) = Config::config_path() {
            assert_eq!(log.parent(), config.parent());
        }
    }

    #[test]
    fn test_partial_file_parses() {
        let config: Config = serde_json::from_str(r#"{"output": "yaml"}"#).unwrap();
        assert_eq!(config.output, Some(OutputFormat::Yaml));
        assert_eq!(config.base_url, None);
    }
}
