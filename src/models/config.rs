use serde::Deserialize;
use std::path::Path;

/// Published RAL classic table (columns: RAL, RGB, HEX, English, ...)
pub const DEFAULT_SOURCE: &str = "https://technochicken.github.io/ral_classic.csv";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Where the reference table comes from: an http(s) URL or a file path
    #[serde(default = "default_source")]
    pub source: String,

    /// Address the HTTP server listens on
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Without a path, or when the file cannot be read or parsed, the
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<Self>(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        source = %config.source,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(
                        %e,
                        path = %path.display(),
                        "Failed to parse config, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(
                    %e,
                    path = %path.display(),
                    "Failed to read config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Load from `CONFIG_FILE`, then apply `RAL_SOURCE` and `BIND_ADDR`.
    pub fn from_env() -> Self {
        let config_file = std::env::var("CONFIG_FILE").ok();
        Self::load(config_file.as_deref().map(Path::new)).with_overrides(
            std::env::var("RAL_SOURCE").ok(),
            std::env::var("BIND_ADDR").ok(),
        )
    }

    /// Replace fields for which an override is given.
    #[must_use]
    pub fn with_overrides(mut self, source: Option<String>, bind_addr: Option<String>) -> Self {
        if let Some(source) = source {
            self.source = source;
        }
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            bind_addr: default_bind_addr(),
        }
    }
}
