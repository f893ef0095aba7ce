//! Error types for moodlog

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodlog application
#[derive(Debug, Error)]
pub enum MoodlogError {
    #[error("Not a moodlog directory: {0}")]
    NotMoodlogDirectory(PathBuf),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid mood: {0}")]
    InvalidMood(String),

    #[error("Mood already recorded for {0}")]
    DuplicateEntry(NaiveDate),

    #[error("Malformed diary line {line}: '{content}' ({reason})")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Input closed before a valid mood was entered")]
    InputClosed,

    #[error("No valid mood entered after {0} attempts")]
    AttemptsExhausted(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MoodlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodlogError::NotMoodlogDirectory(_) => 2,
            MoodlogError::InvalidTimeReference(_) => 3,
            MoodlogError::Parse { .. } => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodlogError::NotMoodlogDirectory(path) => {
                format!(
                    "Not a moodlog directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodlog init' in this directory to start a diary\n\
                    • Navigate to an existing moodlog directory\n\
                    • Set MOODLOG_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            MoodlogError::InvalidTimeReference(ref_str) => {
                format!(
                    "Invalid time reference: '{}'\n\n\
                    Valid time references:\n\
                    • today, yesterday, tomorrow\n\
                    • N days ago (e.g., 3 days ago)\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)",
                    ref_str
                )
            }
            MoodlogError::InvalidMood(label) => {
                format!(
                    "Invalid mood: '{}'\n\n\
                    Valid moods: happy, relaxed, apathetic, sad, angry",
                    label
                )
            }
            MoodlogError::Parse { line, .. } => {
                format!(
                    "{}\n\n\
                    Each diary line must look like 'YYYY-MM-DD: <score>' with a score from -2 to 2.\n\
                    Fix or remove line {} of the diary file and try again.",
                    self, line
                )
            }
            MoodlogError::Config(msg) => {
                if msg.contains("max_attempts") {
                    format!(
                        "{}\n\n\
                        max_attempts takes a positive number or 'none'\n\
                        Example: moodlog config max_attempts 3",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodlogError
pub type Result<T> = std::result::Result<T, MoodlogError>;
