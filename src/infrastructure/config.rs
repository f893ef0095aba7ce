//! Configuration management

use crate::error::{MoodlogError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR: &str = ".moodlog";
pub const DEFAULT_DIARY: &str = "mood_diary.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Diary file, relative to the journal root
    #[serde(default = "default_diary")]
    pub diary: String,
    /// Cap on invalid mood answers before giving up; unbounded when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    pub created: DateTime<Utc>,
}

fn default_diary() -> String {
    DEFAULT_DIARY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            diary: default_diary(),
            max_attempts: None,
            created: Utc::now(),
        }
    }

    /// Load config from .moodlog/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(CONFIG_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::NotMoodlogDirectory(path.to_path_buf())
            } else {
                MoodlogError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodlog/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let config_dir = path.join(CONFIG_DIR);
        let config_path = config_dir.join("config.toml");

        if !config_dir.exists() {
            fs::create_dir(&config_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodlogError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Absolute path of the diary file under `root`
    pub fn diary_path(&self, root: &Path) -> PathBuf {
        root.join(&self.diary)
    }

    /// Parse a `max_attempts` value: a positive number, or `none` to clear it
    pub fn parse_max_attempts(value: &str) -> Result<Option<u32>> {
        if value.eq_ignore_ascii_case("none") {
            return Ok(None);
        }
        match value.parse::<u32>() {
            Ok(0) | Err(_) => Err(MoodlogError::Config(format!(
                "Invalid max_attempts: '{}'",
                value
            ))),
            Ok(n) => Ok(Some(n)),
        }
    }
}
