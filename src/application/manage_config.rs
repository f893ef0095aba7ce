//! Config management use case

use crate::error::{MoodlogError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "diary" => Ok(config.diary.clone()),
            "max_attempts" => Ok(format_max_attempts(config.max_attempts)),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodlogError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: diary, max_attempts, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "diary" => {
                if value.trim().is_empty() {
                    return Err(MoodlogError::Config(
                        "diary path cannot be empty".to_string(),
                    ));
                }
                config.diary = value.to_string();
            }
            "max_attempts" => {
                config.max_attempts = Config::parse_max_attempts(value)?;
            }
            "created" => {
                return Err(MoodlogError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodlogError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: diary, max_attempts",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        tracing::debug!(key, value, "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

/// `none` when unbounded
pub fn format_max_attempts(max_attempts: Option<u32>) -> String {
    max_attempts.map_or_else(|| "none".to_string(), |n| n.to_string())
}
