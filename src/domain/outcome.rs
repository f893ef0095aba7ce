//! States and results of a single record invocation

use crate::domain::{Diagnosis, MoodEntry};
use chrono::NaiveDate;

/// Where a record invocation currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordPhase {
    /// Looking for an existing entry for the target date
    Checking,
    /// Date is free; waiting for a valid mood
    AwaitingInput,
    /// Entry written to the diary
    Appended,
    /// Entry written and a full window evaluated
    Diagnosed,
}

/// How a record invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    /// The date already had an entry; nothing was asked or written
    AlreadyRecorded { date: NaiveDate },
    /// Entry written, fewer than a full window stored
    Appended { entry: MoodEntry },
    /// Entry written and diagnosis computed
    Diagnosed {
        entry: MoodEntry,
        diagnosis: Diagnosis,
    },
}

impl RecordOutcome {
    /// The phase the invocation stopped in
    pub fn phase(&self) -> RecordPhase {
        match self {
            RecordOutcome::AlreadyRecorded { .. } => RecordPhase::Checking,
            RecordOutcome::Appended { .. } => RecordPhase::Appended,
            RecordOutcome::Diagnosed { .. } => RecordPhase::Diagnosed,
        }
    }

    pub fn entry(&self) -> Option<&MoodEntry> {
        match self {
            RecordOutcome::AlreadyRecorded { .. } => None,
            RecordOutcome::Appended { entry } | RecordOutcome::Diagnosed { entry, .. } => {
                Some(entry)
            }
        }
    }

    pub fn diagnosis(&self) -> Option<Diagnosis> {
        match self {
            RecordOutcome::Diagnosed { diagnosis, .. } => Some(*diagnosis),
            _ => None,
        }
    }
}
