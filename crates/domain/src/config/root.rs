use serde::{Deserialize, Serialize};
use std::path::Path;

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::sweeper::SweeperConfig;
use crate::{Schedule, MAX_RETENTION_DAYS};

const LOCAL_CONFIG_PATH: &str = "logsweep.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/logsweep/config.toml";

/// Main configuration structure for logsweep
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Retention window, schedule and fan-out limits
    pub sweeper: SweeperConfig,

    /// Database location and pool settings
    pub database: DatabaseConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. logsweep.toml in current directory
    /// 3. /etc/logsweep/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(days) = overrides.retention_days {
            self.sweeper.retention_days = days;
        }
        if let Some(schedule) = overrides.schedule {
            self.sweeper.schedule = schedule;
        }
        if overrides.dry_run {
            self.sweeper.dry_run = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sweeper.retention_days == 0 {
            return Err(ConfigError::Validation(
                "sweeper.retention_days must be at least 1".to_string(),
            ));
        }

        if self.sweeper.retention_days > MAX_RETENTION_DAYS {
            return Err(ConfigError::Validation(format!(
                "sweeper.retention_days must be at most {}",
                MAX_RETENTION_DAYS
            )));
        }

        if self.sweeper.max_concurrent_users == 0 {
            return Err(ConfigError::Validation(
                "sweeper.max_concurrent_users must be at least 1".to_string(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path cannot be empty".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "database.max_connections must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub retention_days: Option<u32>,
    pub schedule: Option<Schedule>,
    pub dry_run: bool,
}
