//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default import settings.
    pub import: ImportDefaults,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Default import parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportDefaults {
    /// Default scene scale unit ("m", "dm", or "cm").
    pub scale_unit: String,

    /// Expected target file extension (without the dot).
    pub target_extension: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "targetkit=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,

    /// Optional log file path.
    pub file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            import: ImportDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for ImportDefaults {
    fn default() -> Self {
        Self {
            scale_unit: "dm".to_string(),
            target_extension: "target".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Copy of this config with a different level filter.
    pub fn with_level(&self, level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            json: self.json,
            file: self.file.clone(),
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    ///
    /// Problems reading or parsing the file are returned as diagnostics
    /// rather than logged: config is typically loaded before the tracing
    /// subscriber exists, and the caller decides when to surface them.
    pub fn load_with_diagnostics() -> (Self, Vec<String>) {
        let config_path = config_file_path();
        let mut diagnostics = Vec::new();
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return (config, diagnostics),
                    Err(e) => {
                        diagnostics.push(format!("Failed to parse config at {config_path:?}: {e}"));
                    }
                },
                Err(e) => {
                    diagnostics.push(format!("Failed to read config at {config_path:?}: {e}"));
                }
            }
        }
        (Self::default(), diagnostics)
    }

    /// Load config, logging any problems at warn level.
    pub fn load() -> Self {
        let (config, diagnostics) = Self::load_with_diagnostics();
        for message in diagnostics {
            tracing::warn!("{message}");
        }
        config
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        let config_path = config_file_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("targetkit").join("config.json")
}
