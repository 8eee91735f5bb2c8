// src/config.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Matches the backend's default bind address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    #[serde(default = "default_download_dir")]
    pub download_dir: PathBuf,
}

fn default_download_dir() -> PathBuf {
    PathBuf::from(".")
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: ClientConfig,
    production: ClientConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            download_dir: default_download_dir(),
        }
    }
}

impl ClientConfig {
    /// Load configuration based on environment. A missing config.yaml falls
    /// back to the defaults so the client works out of the box against a
    /// local backend.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("No config.yaml found, using defaults");
            return Ok(Self::default());
        }

        info!("Loading configuration for environment: {}", environment);
        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config.yaml")?;
        Self::from_yaml(&content, &environment)
    }

    fn get_environment() -> String {
        std::env::var("RETAILOR_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile =
            serde_yaml::from_str(content).context("Failed to parse config.yaml")?;

        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    /// CLI override wins over whatever the file or defaults said.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(base_url) = base_url {
            self.api_base_url = base_url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
local:
  api_base_url: "http://localhost:8000"
  download_dir: "downloads"
production:
  api_base_url: "https://tailor.example.com"
"#;

    #[test]
    fn selects_section_by_environment() {
        let local = ClientConfig::from_yaml(SAMPLE, "local").unwrap();
        assert_eq!(local.api_base_url, "http://localhost:8000");
        assert_eq!(local.download_dir, PathBuf::from("downloads"));

        let production = ClientConfig::from_yaml(SAMPLE, "production").unwrap();
        assert_eq!(production.api_base_url, "https://tailor.example.com");
        assert_eq!(production.download_dir, PathBuf::from("."));
    }

    #[test]
    fn unknown_environment_falls_back_to_local() {
        let config = ClientConfig::from_yaml(SAMPLE, "staging").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn cli_override_wins() {
        let config = ClientConfig::default().with_base_url(Some("http://other:9000".to_string()));
        assert_eq!(config.api_base_url, "http://other:9000");

        let config = ClientConfig::default().with_base_url(None);
        assert_eq!(config.api_base_url, DEFAULT_BASE_URL);
    }
}
