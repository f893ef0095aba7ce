//! Diary entries and their line format

use crate::domain::Mood;
use crate::error::{MoodlogError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn line_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{4}-\d{2}-\d{2}): (-?\d+)$").unwrap())
}

/// One recorded day: `YYYY-MM-DD: <score>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodEntry {
    pub date: NaiveDate,
    pub mood: Mood,
}

impl MoodEntry {
    pub fn new(date: NaiveDate, mood: Mood) -> Self {
        MoodEntry { date, mood }
    }

    pub fn score(&self) -> i8 {
        self.mood.score()
    }

    /// Parse one persisted diary line. `line_number` is 1-based and only used for errors.
    pub fn parse_line(line: &str, line_number: usize) -> Result<Self> {
        let trimmed = line.strip_suffix('\r').unwrap_or(line);
        let parse_error = |reason: &str| MoodlogError::Parse {
            line: line_number,
            content: trimmed.to_string(),
            reason: reason.to_string(),
        };

        let captures = line_regex()
            .captures(trimmed)
            .ok_or_else(|| parse_error("expected 'YYYY-MM-DD: <score>'"))?;

        let date = NaiveDate::parse_from_str(&captures[1], "%Y-%m-%d")
            .map_err(|_| parse_error("not a calendar date"))?;
        let mood = captures[2]
            .parse::<i64>()
            .ok()
            .and_then(Mood::from_score)
            .ok_or_else(|| parse_error("score must be between -2 and 2"))?;

        Ok(MoodEntry { date, mood })
    }

    /// Canonical persisted form, including the trailing newline
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for MoodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.date.format("%Y-%m-%d"), self.score())
    }
}

/// Parse a whole diary. Blank lines are skipped; anything else malformed fails.
pub fn parse_diary(contents: &str) -> Result<Vec<MoodEntry>> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| MoodEntry::parse_line(line, idx + 1))
        .collect()
}
