//! Teacher mode: static lesson content and per-result walkthroughs.

use serde::Serialize;

use crate::classifier::{Mood, MoodResult, ScoringMode};
use crate::config::BlendConfig;

/// Panel title.
pub const TITLE: &str = "🧠 Teacher Mode: How It Works";

/// The decision process, as shown to students.
pub const DECISION_FLOW: &str = "\
Input Text
    ↓
Safety Check → If inappropriate → 🚫 \"Let's keep it positive!\"
    ↓
Count Happy Words (good, great, love, etc.)
    ↓
Count Sad Words (sad, bad, terrible, etc.)
    ↓
Compare Counts:
    Happy > Sad → 😀 Happy
    Sad > Happy → 😞 Sad
    Equal      → 😐 Neutral";

/// What students learn from the tool.
pub const LEARNING_POINTS: &[(&str, &str)] = &[
    ("Text Classification", "Computers can categorize text"),
    ("Rule-based Systems", "Simple if-then logic"),
    ("Safety First", "Always filter content"),
    ("Problem Solving", "Breaking down complex tasks"),
];

/// Footer line shown under every page.
pub const FOOTER: &str = "Built for learning - Safe for ages 12-16 | Uses rule-based analysis";

/// Renders the full teacher-mode panel as plain text.
pub fn render_panel() -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\nDecision Process\n\n");
    out.push_str(DECISION_FLOW);
    out.push_str("\n\nWhat You're Learning\n\n");
    for (i, (topic, detail)) in LEARNING_POINTS.iter().enumerate() {
        out.push_str(&format!("{}. {}: {}\n", i + 1, topic, detail));
    }
    out
}

/// A step-by-step account of how one result was reached.
///
/// This backs the "See how I decided" panel. The safety outcome is always
/// present; the numeric score is only shown for blended results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Walkthrough {
    /// The text as the user typed it.
    pub text: String,
    /// Whether the safety check passed.
    pub safety_passed: bool,
    /// Numeric score, blended mode only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    /// Ordered narration steps.
    pub steps: Vec<String>,
}

impl Walkthrough {
    /// Builds the walkthrough for a result of classifying `text`.
    pub fn for_result(text: &str, result: &MoodResult, blend: &BlendConfig) -> Self {
        let mut steps = Vec::new();

        if result.mood == Mood::Empty {
            steps.push("There was no text to look at, so I asked for some.".to_string());
            return Self {
                text: text.to_string(),
                safety_passed: true,
                score: None,
                steps,
            };
        }

        match &result.filtered_by {
            Some(word) => {
                steps.push(format!(
                    "Safety check: ❌ Filtered (found \"{}\"). I stop here.",
                    word
                ));
                return Self {
                    text: text.to_string(),
                    safety_passed: false,
                    score: None,
                    steps,
                };
            }
            None => steps.push("Safety check: ✅ Passed".to_string()),
        }

        steps.push(format!(
            "Happy words found: {}{}",
            result.happy_count,
            list_suffix(&result.happy_matches)
        ));
        steps.push(format!(
            "Sad words found: {}{}",
            result.sad_count,
            list_suffix(&result.sad_matches)
        ));

        let score = match result.mode {
            ScoringMode::RuleOnly => {
                steps.push(match result.mood {
                    Mood::Happy => "More happy words than sad words → 😀 Happy".to_string(),
                    Mood::Sad => "More sad words than happy words → 😞 Sad".to_string(),
                    _ => "Same number of happy and sad words → 😐 Neutral".to_string(),
                });
                None
            }
            ScoringMode::Blended => {
                let polarity = result.polarity.unwrap_or(0.0);
                steps.push(format!(
                    "Score = polarity {:.2} + {:.2} × {} − {:.2} × {} = {:.2}",
                    polarity,
                    blend.keyword_weight,
                    result.happy_count,
                    blend.keyword_weight,
                    result.sad_count,
                    result.score
                ));
                steps.push(match result.mood {
                    Mood::Happy => format!(
                        "{:.2} is above {:.2} → 😀 Happy",
                        result.score, blend.happy_threshold
                    ),
                    Mood::Sad => format!(
                        "{:.2} is below {:.2} → 😞 Sad",
                        result.score, blend.sad_threshold
                    ),
                    _ => format!(
                        "{:.2} is between {:.2} and {:.2} → 😐 Neutral",
                        result.score, blend.sad_threshold, blend.happy_threshold
                    ),
                });
                Some(result.score)
            }
        };

        Self {
            text: text.to_string(),
            safety_passed: true,
            score,
            steps,
        }
    }

    /// Renders the walkthrough as plain text.
    pub fn render(&self) -> String {
        let mut out = format!("Your text: '{}'\n", self.text);
        for step in &self.steps {
            out.push_str("  • ");
            out.push_str(step);
            out.push('\n');
        }
        out
    }
}

fn list_suffix(words: &[String]) -> String {
    if words.is_empty() {
        String::new()
    } else {
        format!(" ({})", words.join(", "))
    }
}
