use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use shelf_core::NOTIFICATION_TIMEOUT;
use shelf_engine::ClientSettings;
use shelf_logging::{shelf_info, shelf_warn};
use thiserror::Error;

use crate::cli::Cli;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub base_url: String,
    pub notification_timeout_ms: u64,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_body_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        let client = ClientSettings::default();
        Self {
            base_url: client.base_url,
            notification_timeout_ms: NOTIFICATION_TIMEOUT.as_millis() as u64,
            connect_timeout_secs: client.connect_timeout.as_secs(),
            request_timeout_secs: client.request_timeout.as_secs(),
            max_body_bytes: client.max_bytes,
        }
    }
}

impl AppConfig {
    /// Command-line flags win over the file.
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(base_url) = &cli.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(ms) = cli.notification_ms {
            self.notification_timeout_ms = ms;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "base_url",
                reason: "must not be empty".to_string(),
            });
        }
        for (field, value) in [
            ("notification_timeout_ms", self.notification_timeout_ms),
            ("request_timeout_secs", self.request_timeout_secs),
            ("max_body_bytes", self.max_body_bytes),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be greater than zero".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification_timeout_ms)
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            base_url: self.base_url.clone(),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_body_bytes,
        }
    }
}

/// Reads the RON config at `path`. A missing file yields defaults; a file that
/// does not parse is reported and also yields defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            shelf_info!("No config at {:?}; using defaults", path);
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    match ron::from_str::<AppConfig>(&raw) {
        Ok(config) => {
            shelf_info!("Loaded config from {:?}", path);
            Ok(config)
        }
        Err(err) => {
            shelf_warn!("Failed to parse {:?} ({}). Using defaults.", path, err);
            Ok(AppConfig::default())
        }
    }
}
