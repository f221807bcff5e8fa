//! Site configuration.
//!
//! Read from ~/.config/countdowns/config.toml when present, with
//! `COUNTDOWNS_*` environment variables layered on top. Every field has a
//! default, so no file is needed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_LISTEN_ADDR, DEFAULT_TICK_INTERVAL, DEFAULT_TOP_COUNT,
};
use crate::error::{CountdownError, CountdownResult};

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_top_count() -> usize {
    DEFAULT_TOP_COUNT
}

fn default_tick_interval() -> String {
    DEFAULT_TICK_INTERVAL.to_string()
}

fn default_listen() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Public origin used for sitemap and structured-data URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Event data file. The bundled dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default = "default_top_count")]
    pub top_count: usize,

    /// How often live countdowns refresh, e.g. "1s" or "500ms".
    #[serde(default = "default_tick_interval")]
    pub tick_interval: String,

    /// Socket address the HTTP server binds to.
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: default_base_url(),
            data_file: None,
            top_count: default_top_count(),
            tick_interval: default_tick_interval(),
            listen: default_listen(),
        }
    }
}

impl SiteConfig {
    pub fn config_path() -> CountdownResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CountdownError::Config("Could not determine config directory".into()))?
            .join("countdowns");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location (or `path`, if given) plus the environment.
    pub fn load(path: Option<&Path>) -> CountdownResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        let config: SiteConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("COUNTDOWNS").try_parsing(true))
            .build()
            .map_err(|e| CountdownError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CountdownError::Config(e.to_string()))?;

        log::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// The data file with `~` expanded.
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }

    pub fn tick_period(&self) -> CountdownResult<Duration> {
        let period = humantime::parse_duration(&self.tick_interval).map_err(|e| {
            CountdownError::Config(format!("Invalid tick_interval '{}': {e}", self.tick_interval))
        })?;

        if period.is_zero() {
            return Err(CountdownError::Config(
                "tick_interval must be greater than zero".into(),
            ));
        }
        Ok(period)
    }

    pub fn to_toml(&self) -> CountdownResult<String> {
        toml::to_string_pretty(self).map_err(|e| CountdownError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.top_count, 10);
        assert_eq!(config.tick_period().unwrap(), Duration::from_secs(1));
        assert!(config.data_path().is_none());
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = write_config(
            r#"
base_url = "https://countdowns.example"
top_count = 4
tick_interval = "250ms"
data_file = "/srv/events.json"
"#,
        );
        let config = SiteConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.base_url, "https://countdowns.example");
        assert_eq!(config.top_count, 4);
        assert_eq!(config.tick_period().unwrap(), Duration::from_millis(250));
        assert_eq!(config.data_path(), Some(PathBuf::from("/srv/events.json")));
        assert_eq!(config.listen, DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let config = SiteConfig {
            data_file: Some(PathBuf::from("~/events.json")),
            ..Default::default()
        };
        let path = config.data_path().unwrap();
        assert!(path.ends_with("events.json"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("events.json"));
        }
    }

    #[test]
    fn test_invalid_tick_interval() {
        let config = SiteConfig {
            tick_interval: "soon".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.tick_period(), Err(CountdownError::Config(_))));

        let config = SiteConfig {
            tick_interval: "0s".to_string(),
            ..Default::default()
        };
        assert!(config.tick_period().is_err());
    }

    #[test]
    fn test_to_toml_omits_unset_data_file() {
        let rendered = SiteConfig::default().to_toml().unwrap();
        assert!(rendered.contains("base_url = \"https://yoursite.com\""));
        assert!(!rendered.contains("data_file"));
    }
}
