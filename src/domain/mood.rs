//! Mood labels and their scores

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five moods a diary entry can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Relaxed,
    Apathetic,
    Sad,
    Angry,
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Relaxed,
        Mood::Apathetic,
        Mood::Sad,
        Mood::Angry,
    ];

    /// Integer score stored in the diary
    pub fn score(self) -> i8 {
        match self {
            Mood::Happy => 2,
            Mood::Relaxed => 1,
            Mood::Apathetic => 0,
            Mood::Sad => -1,
            Mood::Angry => -2,
        }
    }

    /// Inverse of [`Mood::score`]. Returns None outside [-2, 2].
    pub fn from_score(score: i64) -> Option<Self> {
        match score {
            2 => Some(Mood::Happy),
            1 => Some(Mood::Relaxed),
            0 => Some(Mood::Apathetic),
            -1 => Some(Mood::Sad),
            -2 => Some(Mood::Angry),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Relaxed => "relaxed",
            Mood::Apathetic => "apathetic",
            Mood::Sad => "sad",
            Mood::Angry => "angry",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    /// Labels are matched exactly (case-sensitive); surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Mood::ALL
            .into_iter()
            .find(|mood| mood.label() == label)
            .ok_or_else(|| {
                format!(
                    "Invalid mood: '{}'. Valid moods are: happy, relaxed, apathetic, sad, angry",
                    s
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_table() {
        assert_eq!(Mood::Happy.score(), 2);
        assert_eq!(Mood::Relaxed.score(), 1);
        assert_eq!(Mood::Apathetic.score(), 0);
        assert_eq!(Mood::Sad.score(), -1);
        assert_eq!(Mood::Angry.score(), -2);
    }

    #[test]
    fn test_from_score_inverts_score() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_score(mood.score() as i64), Some(mood));
        }
        assert_eq!(Mood::from_score(3), None);
        assert_eq!(Mood::from_score(-3), None);
    }

    #[test]
    fn test_from_str_valid_labels() {
        assert_eq!(Mood::from_str("happy").unwrap(), Mood::Happy);
        assert_eq!(Mood::from_str("relaxed").unwrap(), Mood::Relaxed);
        assert_eq!(Mood::from_str("apathetic").unwrap(), Mood::Apathetic);
        assert_eq!(Mood::from_str("sad").unwrap(), Mood::Sad);
        assert_eq!(Mood::from_str("angry").unwrap(), Mood::Angry);
    }

    #[test]
    fn test_from_str_trims_newline() {
        assert_eq!(Mood::from_str("sad\n").unwrap(), Mood::Sad);
        assert_eq!(Mood::from_str("  angry \r\n").unwrap(), Mood::Angry);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(Mood::from_str("grumpy").is_err());
        assert!(Mood::from_str("").is_err());
        assert!(Mood::from_str("Happy").is_err());
        assert!(Mood::from_str("2").is_err());
    }

    #[test]
    fn test_display_is_label() {
        assert_eq!(Mood::Apathetic.to_string(), "apathetic");
    }
}
