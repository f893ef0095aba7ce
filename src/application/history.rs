//! List recorded entries use case

use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::EntryStore;

/// Service listing diary entries, most recently recorded first
pub struct HistoryService<S: EntryStore> {
    store: S,
}

impl<S: EntryStore> HistoryService<S> {
    pub fn new(store: S) -> Self {
        HistoryService { store }
    }

    /// Entries in reverse append order, truncated to `limit` when given
    pub fn execute(&self, limit: Option<usize>) -> Result<Vec<MoodEntry>> {
        let mut entries = self.store.load()?;
        entries.reverse();

        if let Some(n) = limit {
            entries.truncate(n);
        }

        Ok(entries)
    }
}
