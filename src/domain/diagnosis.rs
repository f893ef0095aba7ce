//! Rolling diagnosis over the most recent entries

use crate::domain::{Mood, MoodEntry};
use std::fmt;

/// Number of most recent entries (by append order) a diagnosis looks at
pub const WINDOW_SIZE: usize = 7;

const MANIC_HAPPY_DAYS: usize = 5;
const DEPRESSIVE_SAD_DAYS: usize = 4;
const SCHIZOID_APATHETIC_DAYS: usize = 6;

/// Result of evaluating a full window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Manic,
    Depressive,
    Schizoid,
    /// No pattern matched; the rounded average mood of the window
    Average(Mood),
}

impl Diagnosis {
    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::Manic => "manic",
            Diagnosis::Depressive => "depressive",
            Diagnosis::Schizoid => "schizoid",
            Diagnosis::Average(mood) => mood.label(),
        }
    }

    pub fn is_pattern(&self) -> bool {
        !matches!(self, Diagnosis::Average(_))
    }
}

impl fmt::Display for Diagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// The last `WINDOW_SIZE` entries of `entries`, or fewer if the diary is shorter.
pub fn tail_window(entries: &[MoodEntry]) -> &[MoodEntry] {
    &entries[entries.len().saturating_sub(WINDOW_SIZE)..]
}

/// Evaluate the diagnosis for a diary.
///
/// Returns None until at least `WINDOW_SIZE` entries exist. Only the most recent
/// `WINDOW_SIZE` entries by position are considered; calendar gaps are ignored.
pub fn diagnose(entries: &[MoodEntry]) -> Option<Diagnosis> {
    let window = tail_window(entries);
    if window.len() < WINDOW_SIZE {
        return None;
    }

    let count = |mood: Mood| window.iter().filter(|e| e.mood == mood).count();

    // Angry days only move the average; they never trigger a pattern.
    let diagnosis = if count(Mood::Happy) >= MANIC_HAPPY_DAYS {
        Diagnosis::Manic
    } else if count(Mood::Sad) >= DEPRESSIVE_SAD_DAYS {
        Diagnosis::Depressive
    } else if count(Mood::Apathetic) >= SCHIZOID_APATHETIC_DAYS {
        Diagnosis::Schizoid
    } else {
        Diagnosis::Average(average_mood(window))
    };

    Some(diagnosis)
}

/// Mean score rounded half-to-even, mapped back onto the mood table
fn average_mood(window: &[MoodEntry]) -> Mood {
    let sum: i64 = window.iter().map(|e| i64::from(e.score())).sum();
    let average = (sum as f64 / window.len() as f64).round_ties_even();
    // Mean of values in [-2, 2] stays in [-2, 2].
    Mood::from_score(average as i64).unwrap_or(Mood::Apathetic)
}
