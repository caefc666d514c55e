//! Application configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const API_BASE_URL_ENV: &str = "HARBOR_API_BASE_URL";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Unset means requests never time out.
    pub request_timeout_secs: Option<u64>,
    /// How long the booking confirmation stays up before the form resets.
    pub success_popup_secs: u64,
    pub toast_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_secs: None,
            success_popup_secs: 4,
            toast_secs: 3,
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse configuration")
    }

    /// Read `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No configuration at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {:?}", path))?;
        Self::from_toml(&content).with_context(|| format!("Invalid configuration in {:?}", path))
    }

    /// Load from the platform config directory and apply environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = match Self::default_path() {
            Some(path) => Self::load_or_default(&path)?,
            None => {
                log::warn!("Unable to resolve project directory; using default configuration");
                Self::default()
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "SellHarborX", "HarborBooking")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                log::info!("Using API base URL from {}", API_BASE_URL_ENV);
                self.api_base_url = url.to_string();
            }
        }
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn success_popup_duration(&self) -> Duration {
        Duration::from_secs(self.success_popup_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_base_url = \"https://api.example.com\"").unwrap();
        writeln!(file, "request_timeout_secs = 10").unwrap();

        let config = AppConfig::load_or_default(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.success_popup_secs, 4);
        assert_eq!(config.toast_secs, 3);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "success_popup_secs = \"soon\"").unwrap();
        assert!(AppConfig::load_or_default(file.path()).is_err());
    }

    #[test]
    fn test_full_file_parses_every_key() {
        let parsed = AppConfig::from_toml(
            r#"
                api_base_url = "https://api.example.com"
                request_timeout_secs = 5
                success_popup_secs = 2
                toast_secs = 6
            "#,
        )
        .unwrap();
        assert_eq!(
            parsed,
            AppConfig {
                api_base_url: "https://api.example.com".to_string(),
                request_timeout_secs: Some(5),
                success_popup_secs: 2,
                toast_secs: 6,
            }
        );
    }

    #[test]
    #[serial]
    fn test_env_override_replaces_base_url() {
        std::env::set_var(API_BASE_URL_ENV, "https://staging.example.com");
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        std::env::remove_var(API_BASE_URL_ENV);

        assert_eq!(config.api_base_url, "https://staging.example.com");
    }

    #[test]
    #[serial]
    fn test_blank_env_override_is_ignored() {
        std::env::set_var(API_BASE_URL_ENV, "   ");
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        std::env::remove_var(API_BASE_URL_ENV);

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
