//! Record today's mood use case

use crate::domain::{Mood, MoodEntry, MoodJournal, RecordOutcome, RecordPhase};
use crate::error::Result;
use crate::infrastructure::{acquire_mood, EntryStore, MoodSource};
use chrono::NaiveDate;

/// Where the mood for a new entry comes from
pub enum MoodInput<'a> {
    /// Already validated by the caller; no prompt is shown
    Given(Mood),
    /// Ask through the validation gate
    Ask(&'a mut dyn MoodSource),
}

/// Service running one check → ask → append → diagnose pass
pub struct RecordMoodService<S: EntryStore> {
    store: S,
    max_attempts: Option<u32>,
}

impl<S: EntryStore> RecordMoodService<S> {
    /// Create a new record service over `store`
    pub fn new(store: S) -> Self {
        RecordMoodService {
            store,
            max_attempts: None,
        }
    }

    /// Give up after this many unrecognised answers instead of asking forever
    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a mood for `date`, unless that date already has one.
    pub fn execute(&self, date: NaiveDate, input: MoodInput<'_>) -> Result<RecordOutcome> {
        let mut phase = RecordPhase::Checking;
        let mut journal = MoodJournal::from_entries(self.store.load()?);
        tracing::debug!(?phase, %date, entries = journal.len(), "checking diary");

        if journal.has_entry_for(date) {
            tracing::info!(%date, "mood already recorded");
            return Ok(RecordOutcome::AlreadyRecorded { date });
        }

        phase = RecordPhase::AwaitingInput;
        tracing::debug!(?phase, %date, "waiting for mood");
        let mood = match input {
            MoodInput::Given(mood) => mood,
            MoodInput::Ask(source) => acquire_mood(source, self.max_attempts)?,
        };

        let entry = MoodEntry::new(date, mood);
        journal.record(entry)?;
        self.store.append(&entry)?;
        phase = RecordPhase::Appended;
        tracing::info!(?phase, %entry, "mood recorded");

        match journal.diagnosis() {
            Some(diagnosis) => {
                phase = RecordPhase::Diagnosed;
                tracing::info!(
                    ?phase,
                    %diagnosis,
                    pattern = diagnosis.is_pattern(),
                    "diagnosis evaluated"
                );
                Ok(RecordOutcome::Diagnosed { entry, diagnosis })
            }
            None => Ok(RecordOutcome::Appended { entry }),
        }
    }
}
