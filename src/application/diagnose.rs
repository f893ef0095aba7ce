//! Diagnose without recording use case

use crate::domain::{Diagnosis, MoodJournal};
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Service evaluating the current diary window
pub struct DiagnoseService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> DiagnoseService<S> {
    pub fn new(store: S) -> Self {
        DiagnoseService { store }
    }

    /// Diagnosis over the stored tail window, plus the number of stored entries.
    /// The diagnosis is None while fewer than a full window exists.
    pub fn execute(&self) -> Result<(Option<Diagnosis>, usize)> {
        let journal = MoodJournal::from_entries(self.store.load()?);
        let diagnosis = journal.diagnosis();
        tracing::debug!(entries = journal.len(), ?diagnosis, "diagnosed stored window");
        Ok((diagnosis, journal.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Mood, MoodEntry};
    use crate::infrastructure::MemoryEntryStore;
    use chrono::{Duration, NaiveDate};

    fn store_with(moods: &[Mood]) -> MemoryEntryStore {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        MemoryEntryStore::with_entries(
            moods
                .iter()
                .enumerate()
                .map(|(i, m)| MoodEntry::new(start + Duration::days(i as i64), *m))
                .collect(),
        )
    }

    #[test]
    fn test_not_enough_entries() {
        let service = DiagnoseService::new(store_with(&[Mood::Sad; 3]));
        assert_eq!(service.execute().unwrap(), (None, 3));
    }

    #[test]
    fn test_full_window() {
        let service = DiagnoseService::new(store_with(&[Mood::Sad; 9]));
        assert_eq!(service.execute().unwrap(), (Some(Diagnosis::Depressive), 9));
    }

    #[test]
    fn test_does_not_append() {
        let service = DiagnoseService::new(store_with(&[Mood::Happy; 7]));
        service.execute().unwrap();
        service.execute().unwrap();
        assert_eq!(service.store.load().unwrap().len(), 7);
    }
}
