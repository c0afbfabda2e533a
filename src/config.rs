use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

/// Names the config file; not itself a setting.
const CONFIG_PATH_VAR: &str = "ALBUMS_CONFIG";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
}

impl AppConfig {
    /// Load configuration from disk and environment.
    ///
    /// The file is named by `ALBUMS_CONFIG` (default `config.toml`) and is
    /// skipped when absent. `ALBUMS_*` variables override it.
    pub fn load() -> Result<Self> {
        let config_path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from the given file (if it exists) and environment.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        Self::load_with_env(config_path, env::vars().collect())
    }

    /// Load configuration from the given file and an explicit set of
    /// environment variables.
    ///
    /// `ALBUMS_CONFIG` shares the settings prefix, so it is dropped here
    /// instead of surfacing as a top-level `config` key.
    pub fn load_with_env(
        config_path: &Path,
        mut vars: config::Map<String, String>,
    ) -> Result<Self> {
        vars.retain(|key, _| key != CONFIG_PATH_VAR);

        let mut builder = config::Config::builder();

        if config_path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(config_path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("ALBUMS")
                .separator("_")
                .try_parsing(true)
                .source(Some(vars)),
        );

        let settings = builder.build()?;
        let mut config: Self = settings.try_deserialize()?;

        if config.logging.level.trim().is_empty() {
            config.logging.level = "info".to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("server.host must be specified");
        }
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port` string suitable for binding a listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}
