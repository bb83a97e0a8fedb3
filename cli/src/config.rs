use anyhow::Context;
use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::Path;
use std::path::PathBuf;

pub const BASE_URL_ENV: &str = "PATHLENS_BASE_URL";
pub const TOKEN_ENV: &str = "PATHLENS_TOKEN";

/// On-disk configuration, `~/.config/pathlens/config.toml`. Every field
/// is optional; flags and `PATHLENS_*` environment variables override it.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub base_url: Option<String>,
    pub token: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Resolution order: flag, then environment, then config file.
    pub fn base_url(&self, flag: Option<&str>) -> Result<String> {
        flag.map(str::to_string)
            .or_else(|| env::var(BASE_URL_ENV).ok())
            .or_else(|| self.base_url.clone())
            .context("no API base URL; pass --base-url, set PATHLENS_BASE_URL, or add base_url to the config file")
    }

    pub fn token(&self, flag: Option<&str>) -> Option<String> {
        flag.map(str::to_string)
            .or_else(|| env::var(TOKEN_ENV).ok())
            .or_else(|| self.token.clone())
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("pathlens").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_partial_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://bh.corp.local\"\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://bh.corp.local"));
        assert_eq!(config.token, None);
    }

    #[test]
    fn rejects_malformed_toml_with_the_path_in_the_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = [").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err}").contains("config.toml"));
    }

    #[test]
    fn flags_override_the_config_file() {
        let config = Config {
            base_url: Some("https://from-file.local".to_string()),
            token: Some("file-token".to_string()),
        };
        let resolved = config.base_url(Some("https://from-flag.local")).unwrap();
        assert_eq!(resolved, "https://from-flag.local");
        assert_eq!(config.token(Some("flag-token")).as_deref(), Some("flag-token"));
    }

    #[test]
    fn missing_base_url_is_an_error() {
        let config = Config::default();
        // The env var may not leak into tests for this assertion to hold.
        if env::var(BASE_URL_ENV).is_err() {
            assert!(config.base_url(None).is_err());
        }
    }
}
