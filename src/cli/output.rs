//! Output formatting utilities

use crate::domain::{Diagnosis, MoodEntry, RecordOutcome, WINDOW_SIZE};

pub const ALREADY_RECORDED: &str = "Sorry, you have already entered your mood today.";

/// Diagnosis line shown to the user
pub fn format_diagnosis(diagnosis: Diagnosis) -> String {
    format!("Your diagnosis: {}!", diagnosis)
}

/// Message for the end state of a record invocation
pub fn format_record_outcome(outcome: &RecordOutcome) -> String {
    match (outcome.entry(), outcome.diagnosis()) {
        (None, _) => ALREADY_RECORDED.to_string(),
        (Some(_), Some(diagnosis)) => format_diagnosis(diagnosis),
        (Some(entry), None) => {
            format!("Recorded {} for {}.", entry.mood, entry.date.format("%Y-%m-%d"))
        }
    }
}

/// Output of `moodlog diagnose`
pub fn format_diagnose_result(diagnosis: Option<Diagnosis>, entries: usize) -> String {
    match diagnosis {
        Some(d) => format_diagnosis(d),
        None => format!(
            "Not enough entries for a diagnosis yet ({} of {}).",
            entries, WINDOW_SIZE
        ),
    }
}

/// Format a list of diary entries for display
pub fn format_entry_list(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<9}  {:>2}\n",
            entry.date.format("%Y-%m-%d"),
            entry.mood,
            entry.score()
        ));
    }
    output
}
