use std::env;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Deserialize;

use crate::store::StorePolicy;

const ENV_PREFIX: &str = "MERGINGTON";

/// Top-level application configuration loaded from file + environment.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingSection,
    pub frontend: FrontendSection,
    pub store: StoreSection,
}

impl AppConfig {
    /// Load configuration from `MERGINGTON_CONFIG` (default `config.toml`) and environment.
    pub fn load() -> Result<Self> {
        let config_path =
            env::var("MERGINGTON_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::load_from(Path::new(&config_path))
    }

    /// Load configuration from `path` if it exists, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(PathBuf::from(path)));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
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
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        if self.frontend.enabled && self.frontend.static_dir.trim().is_empty() {
            bail!("frontend.static_dir must be specified when the frontend is enabled");
        }
        Ok(())
    }

    /// Directory to serve under `/static`, if the frontend is enabled.
    pub fn static_dir(&self) -> Option<PathBuf> {
        self.frontend
            .enabled
            .then(|| PathBuf::from(&self.frontend.static_dir))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
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
    Json,
    #[default]
    Text,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendSection {
    pub enabled: bool,
    pub static_dir: String,
}

impl Default for FrontendSection {
    fn default() -> Self {
        Self {
            enabled: true,
            static_dir: "static".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StoreSection {
    /// Reject signups once an activity reaches `max_participants`.
    pub enforce_capacity: bool,
}

impl StoreSection {
    pub fn policy(&self) -> StorePolicy {
        StorePolicy {
            enforce_capacity: self.enforce_capacity,
        }
    }
}
