//! Time reference parsing and resolution

use crate::error::{MoodlogError, Result};
use chrono::{Duration, NaiveDate};

/// Which calendar day an entry is recorded for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    /// Current day
    Today,
    /// Previous day
    Yesterday,
    /// Next day
    Tomorrow,
    /// `N days ago`
    DaysAgo(u32),
    /// Specific date
    SpecificDate(NaiveDate),
}

impl TimeReference {
    /// Parse a time reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => Ok(TimeReference::Today),
            "yesterday" => Ok(TimeReference::Yesterday),
            "tomorrow" => Ok(TimeReference::Tomorrow),
            _ if normalized.ends_with(" ago") => Self::parse_days_ago(&normalized)
                .ok_or_else(|| MoodlogError::InvalidTimeReference(input.to_string())),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(TimeReference::SpecificDate)
                .map_err(|_| MoodlogError::InvalidTimeReference(input.to_string())),
        }
    }

    /// `3 days ago`, `1 day ago`
    fn parse_days_ago(normalized: &str) -> Option<Self> {
        let mut words = normalized.split_whitespace();
        let count: u32 = words.next()?.parse().ok()?;
        let unit = words.next()?;
        if !matches!(unit, "day" | "days") || words.next() != Some("ago") || words.next().is_some()
        {
            return None;
        }
        Some(TimeReference::DaysAgo(count))
    }

    /// Resolve this time reference to an actual date.
    /// Fails when the offset leaves chrono's representable date range.
    pub fn resolve(&self, base_date: NaiveDate) -> Result<NaiveDate> {
        let resolved = match self {
            TimeReference::Today => Some(base_date),
            TimeReference::Yesterday => base_date.checked_sub_signed(Duration::days(1)),
            TimeReference::Tomorrow => base_date.checked_add_signed(Duration::days(1)),
            TimeReference::DaysAgo(n) => {
                base_date.checked_sub_signed(Duration::days(i64::from(*n)))
            }
            TimeReference::SpecificDate(date) => Some(*date),
        };

        resolved.ok_or_else(|| {
            MoodlogError::InvalidTimeReference(format!(
                "{} is out of range from {}",
                self.describe(),
                base_date.format("%Y-%m-%d")
            ))
        })
    }

    fn describe(&self) -> String {
        match self {
            TimeReference::Today => "today".to_string(),
            TimeReference::Yesterday => "yesterday".to_string(),
            TimeReference::Tomorrow => "tomorrow".to_string(),
            TimeReference::DaysAgo(n) => format!("{} days ago", n),
            TimeReference::SpecificDate(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}
