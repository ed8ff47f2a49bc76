//! Mood categories and classification results.

use serde::{Deserialize, Serialize};

/// The outcome of classifying a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// No text was given.
    Empty,
    /// The text contained an inappropriate word.
    Filtered,
    /// The text reads as positive.
    Happy,
    /// The text reads as negative.
    Sad,
    /// Neither happy nor sad.
    Neutral,
}

impl Mood {
    /// Returns all moods.
    pub fn all() -> &'static [Mood] {
        &[
            Mood::Empty,
            Mood::Filtered,
            Mood::Happy,
            Mood::Sad,
            Mood::Neutral,
        ]
    }

    /// Returns the emoji shown for this mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Empty => "🤔",
            Mood::Filtered => "🚫",
            Mood::Happy => "😀",
            Mood::Sad => "😞",
            Mood::Neutral => "😐",
        }
    }

    /// Returns the explanation shown next to the emoji.
    pub fn explanation(&self) -> &'static str {
        match self {
            Mood::Empty => "Please enter some text!",
            Mood::Filtered => "Let's keep it positive and kind!",
            Mood::Happy => "Sounds positive and happy!",
            Mood::Sad => "This sounds a bit sad.",
            Mood::Neutral => "This seems pretty neutral.",
        }
    }

    /// Returns a human-readable name for this mood.
    pub fn name(&self) -> &'static str {
        match self {
            Mood::Empty => "Empty",
            Mood::Filtered => "Filtered",
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
        }
    }

    /// Returns true for the two moods that stop before scoring.
    pub fn is_terminal_notice(&self) -> bool {
        matches!(self, Mood::Empty | Mood::Filtered)
    }
}

/// How the score was computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Keyword counts only.
    #[default]
    RuleOnly,
    /// External polarity plus a keyword adjustment.
    Blended,
}

impl ScoringMode {
    /// Returns a human-readable name for this mode.
    pub fn name(&self) -> &'static str {
        match self {
            ScoringMode::RuleOnly => "Rule-only",
            ScoringMode::Blended => "Blended",
        }
    }
}

/// Result of classifying one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodResult {
    /// The decided mood.
    pub mood: Mood,
    /// Emoji for the mood.
    pub emoji: String,
    /// Explanation for the mood.
    pub explanation: String,
    /// Final score. `0.0` for empty and filtered text.
    pub score: f64,
    /// Scoring mode used.
    pub mode: ScoringMode,
    /// Polarity fed into the blend (blended mode only).
    pub polarity: Option<f64>,
    /// Number of distinct happy keywords found.
    pub happy_count: usize,
    /// Number of distinct sad keywords found.
    pub sad_count: usize,
    /// Happy keywords found, in configured order.
    pub happy_matches: Vec<String>,
    /// Sad keywords found, in configured order.
    pub sad_matches: Vec<String>,
    /// The inappropriate word that triggered the filter, if any.
    pub filtered_by: Option<String>,
    /// Classification duration in microseconds.
    pub duration_us: u64,
}

impl MoodResult {
    fn notice(mood: Mood, mode: ScoringMode, duration_us: u64) -> Self {
        Self {
            mood,
            emoji: mood.emoji().to_string(),
            explanation: mood.explanation().to_string(),
            score: 0.0,
            mode,
            polarity: None,
            happy_count: 0,
            sad_count: 0,
            happy_matches: Vec::new(),
            sad_matches: Vec::new(),
            filtered_by: None,
            duration_us,
        }
    }

    /// Creates the result for empty or whitespace-only text.
    pub fn empty(mode: ScoringMode, duration_us: u64) -> Self {
        Self::notice(Mood::Empty, mode, duration_us)
    }

    /// Creates the result for text rejected by the safety filter.
    pub fn filtered(mode: ScoringMode, word: impl Into<String>, duration_us: u64) -> Self {
        Self {
            filtered_by: Some(word.into()),
            ..Self::notice(Mood::Filtered, mode, duration_us)
        }
    }

    /// Creates a scored result.
    pub fn scored(
        mood: Mood,
        mode: ScoringMode,
        score: f64,
        polarity: Option<f64>,
        happy_matches: Vec<String>,
        sad_matches: Vec<String>,
        duration_us: u64,
    ) -> Self {
        Self {
            mood,
            emoji: mood.emoji().to_string(),
            explanation: mood.explanation().to_string(),
            score,
            mode,
            polarity,
            happy_count: happy_matches.len(),
            sad_count: sad_matches.len(),
            happy_matches,
            sad_matches,
            filtered_by: None,
            duration_us,
        }
    }

    /// Returns `(emoji, explanation, score)`.
    pub fn as_tuple(&self) -> (&str, &str, f64) {
        (&self.emoji, &self.explanation, self.score)
    }

    /// Returns true if the text passed the safety filter.
    ///
    /// Empty text counts as passed; the filter accepts it.
    pub fn passed_safety(&self) -> bool {
        self.mood != Mood::Filtered
    }
}
