//! Application configuration management.

use serde::Deserialize;

/// Environment variable prefix, e.g. `CASCADE__SERVER__PORT`.
pub const ENV_PREFIX: &str = "CASCADE";

/// Record keys and measures; never offered as segments.
const DEFAULT_SKIP_FIELDS: [&str; 4] = ["month", "subscription_id", "value", "bucket"];

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Dataset source configuration.
    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` bind address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Dataset source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Bundled dataset file.
    #[serde(default = "default_dataset_path")]
    pub path: String,
    /// Remote dataset endpoint. Takes precedence over `path`.
    #[serde(default)]
    pub url: Option<String>,
    /// Fields never offered as segments.
    #[serde(default = "default_skip_fields")]
    pub skip_fields: Vec<String>,
    /// Timeout for the remote fetch.
    #[serde(default = "default_fetch_timeout")]
    pub fetch_timeout_secs: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            url: None,
            skip_fields: default_skip_fields(),
            fetch_timeout_secs: default_fetch_timeout(),
        }
    }
}

fn default_dataset_path() -> String {
    "data/mrr.json".to_string()
}

fn default_skip_fields() -> Vec<String> {
    DEFAULT_SKIP_FIELDS.iter().map(ToString::to_string).collect()
}

fn default_fetch_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("dataset.skip_fields")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.dataset.path, "data/mrr.json");
        assert_eq!(config.dataset.url, None);
        assert_eq!(
            config.dataset.skip_fields,
            vec!["month", "subscription_id", "value", "bucket"]
        );
        assert_eq!(config.dataset.fetch_timeout_secs, 30);
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars_unset(
            [
                "CASCADE__SERVER__PORT",
                "CASCADE__DATASET__URL",
                "CASCADE__DATASET__SKIP_FIELDS",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 8080);
                assert_eq!(config.dataset.url, None);
            },
        );
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("CASCADE__SERVER__PORT", Some("9090")),
                ("CASCADE__DATASET__URL", Some("http://localhost:3000/mrr.json")),
                ("CASCADE__DATASET__SKIP_FIELDS", Some("month,value,bucket")),
                ("CASCADE__DATASET__FETCH_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.server.port, 9090);
                assert_eq!(
                    config.dataset.url.as_deref(),
                    Some("http://localhost:3000/mrr.json")
                );
                assert_eq!(config.dataset.skip_fields, vec!["month", "value", "bucket"]);
                assert_eq!(config.dataset.fetch_timeout_secs, 5);
            },
        );
    }
}
