//! Mood journal aggregate root

use crate::domain::diagnosis::{self, Diagnosis};
use crate::domain::MoodEntry;
use crate::error::{MoodlogError, Result};
use chrono::NaiveDate;
use std::collections::HashSet;

/// In-memory view of the diary: entries in append order plus a date index
/// used to guard against a second entry on the same day.
#[derive(Debug, Clone, Default)]
pub struct MoodJournal {
    entries: Vec<MoodEntry>,
    dates: HashSet<NaiveDate>,
}

impl MoodJournal {
    pub fn new() -> Self {
        MoodJournal::default()
    }

    /// Build from entries as loaded from storage, preserving their order.
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        let dates = entries.iter().map(|e| e.date).collect();
        MoodJournal { entries, dates }
    }

    /// True if any entry, however old, was recorded for `date`
    pub fn has_entry_for(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Add an entry, refusing a second entry for the same date.
    pub fn record(&mut self, entry: MoodEntry) -> Result<()> {
        if !self.dates.insert(entry.date) {
            return Err(MoodlogError::DuplicateEntry(entry.date));
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn window(&self) -> &[MoodEntry] {
        diagnosis::tail_window(&self.entries)
    }

    pub fn diagnosis(&self) -> Option<Diagnosis> {
        diagnosis::diagnose(self.window())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_record_and_guard() {
        let mut journal = MoodJournal::new();
        assert!(!journal.has_entry_for(date(2025, 1, 1)));

        journal
            .record(MoodEntry::new(date(2025, 1, 1), Mood::Happy))
            .unwrap();
        assert!(journal.has_entry_for(date(2025, 1, 1)));
        assert!(!journal.has_entry_for(date(2025, 1, 2)));
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let mut journal = MoodJournal::new();
        journal
            .record(MoodEntry::new(date(2025, 1, 1), Mood::Happy))
            .unwrap();

        let result = journal.record(MoodEntry::new(date(2025, 1, 1), Mood::Sad));
        match result.unwrap_err() {
            MoodlogError::DuplicateEntry(d) => assert_eq!(d, date(2025, 1, 1)),
            other => panic!("Expected DuplicateEntry error, got {:?}", other),
        }
        assert_eq!(journal.len(), 1);
        assert_eq!(journal.entries()[0].mood, Mood::Happy);
    }

    #[test]
    fn test_guard_scans_old_entries() {
        let mut entries = vec![MoodEntry::new(date(2024, 12, 1), Mood::Relaxed)];
        for day in 1..=10 {
            entries.push(MoodEntry::new(date(2025, 1, day), Mood::Sad));
        }
        let journal = MoodJournal::from_entries(entries);

        // Far outside the diagnosis window, still guarded.
        assert!(journal.has_entry_for(date(2024, 12, 1)));
        assert!(!journal.window().iter().any(|e| e.date == date(2024, 12, 1)));
    }

    #[test]
    fn test_guard_uses_exact_date_not_substring() {
        // "2025-01-1" is a prefix of this line but not the same day.
        let journal =
            MoodJournal::from_entries(vec![MoodEntry::new(date(2025, 1, 12), Mood::Sad)]);
        assert!(!journal.has_entry_for(date(2025, 1, 1)));
    }

    #[test]
    fn test_diagnosis_needs_seven_entries() {
        let mut journal = MoodJournal::new();
        for day in 1..=6 {
            journal
                .record(MoodEntry::new(date(2025, 1, day), Mood::Happy))
                .unwrap();
            assert_eq!(journal.diagnosis(), None);
        }
        journal
            .record(MoodEntry::new(date(2025, 1, 7), Mood::Happy))
            .unwrap();
        assert_eq!(journal.diagnosis(), Some(Diagnosis::Manic));
    }

    #[test]
    fn test_empty_journal() {
        let journal = MoodJournal::new();
        assert!(journal.is_empty());
        assert!(journal.window().is_empty());
        assert_eq!(journal.diagnosis(), None);
    }
}
