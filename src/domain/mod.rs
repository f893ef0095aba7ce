//! Domain layer - Mood table, entries and diagnosis rules

pub mod diagnosis;
pub mod entry;
pub mod journal;
pub mod mood;
pub mod outcome;
pub mod time_ref;

pub use diagnosis::{Diagnosis, WINDOW_SIZE};
pub use entry::MoodEntry;
pub use journal::MoodJournal;
pub use mood::Mood;
pub use outcome::{RecordOutcome, RecordPhase};
pub use time_ref::TimeReference;
