//! Mood classification pipeline.
//!
//! 1. Empty text short-circuits
//! 2. Safety filter short-circuits
//! 3. Keyword counts, optionally blended with an external polarity
//! 4. Threshold decision

use std::fmt;
use std::time::Instant;

use tracing::{debug, trace};

use super::{KeywordSet, Mood, MoodResult, PolarityProvider, ScoringMode};
use crate::config::{BlendConfig, MoodConfig};
use crate::safety::SafetyFilter;

/// Classifies text into a mood.
///
/// Holds only immutable data after construction, so a single instance can
/// be shared across threads. Rule-only and blended scoring are the same
/// component: blended mode is used whenever a polarity is available.
pub struct MoodClassifier {
    safety: SafetyFilter,
    happy: KeywordSet,
    sad: KeywordSet,
    blend: BlendConfig,
    provider: Option<Box<dyn PolarityProvider>>,
}

impl MoodClassifier {
    /// Creates a classifier without a polarity provider.
    pub fn new(config: &MoodConfig) -> Self {
        Self {
            safety: config.safety_words.build_filter(),
            happy: KeywordSet::new(&config.happy_words),
            sad: KeywordSet::new(&config.sad_words),
            blend: config.blend,
            provider: None,
        }
    }

    /// Creates a classifier that blends in polarity from `provider`.
    pub fn with_provider(config: &MoodConfig, provider: impl PolarityProvider + 'static) -> Self {
        Self {
            provider: Some(Box::new(provider)),
            ..Self::new(config)
        }
    }

    /// Creates a rule-only classifier with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(&MoodConfig::default())
    }

    /// Returns true if a polarity provider is attached.
    pub fn has_provider(&self) -> bool {
        self.provider.is_some()
    }

    /// Returns the attached provider's name, if any.
    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider.as_ref().map(|p| p.name())
    }

    /// Returns the safety filter.
    pub fn safety(&self) -> &SafetyFilter {
        &self.safety
    }

    /// Returns the happy keywords.
    pub fn happy_words(&self) -> &KeywordSet {
        &self.happy
    }

    /// Returns the sad keywords.
    pub fn sad_words(&self) -> &KeywordSet {
        &self.sad
    }

    /// Returns the blend parameters.
    pub fn blend(&self) -> &BlendConfig {
        &self.blend
    }

    /// Returns the scoring mode `analyze` will use.
    pub fn mode(&self) -> ScoringMode {
        if self.has_provider() {
            ScoringMode::Blended
        } else {
            ScoringMode::RuleOnly
        }
    }

    /// Classifies text using the attached provider when there is one.
    pub fn analyze(&self, text: &str) -> MoodResult {
        match self.provider.as_deref() {
            Some(provider) => self.classify_with(text, provider),
            None => self.classify(text, None),
        }
    }

    /// Classifies text with keyword counts only.
    pub fn classify_rules(&self, text: &str) -> MoodResult {
        self.classify(text, None)
    }

    /// Classifies text in blended mode using `provider` for the polarity.
    ///
    /// The provider is not consulted for empty or filtered text.
    pub fn classify_with(&self, text: &str, provider: &dyn PolarityProvider) -> MoodResult {
        let start = Instant::now();
        if let Some(result) = self.precheck(text, ScoringMode::Blended, start) {
            return result;
        }
        let polarity = provider.estimate(text);
        trace!(provider = provider.name(), polarity, "Estimated polarity");
        self.score(text, Some(polarity), start)
    }

    /// Classifies text, blending in `polarity` when given.
    ///
    /// Total over every input: no text or polarity value panics.
    pub fn classify(&self, text: &str, polarity: Option<f64>) -> MoodResult {
        let start = Instant::now();
        let mode = if polarity.is_some() {
            ScoringMode::Blended
        } else {
            ScoringMode::RuleOnly
        };
        if let Some(result) = self.precheck(text, mode, start) {
            return result;
        }
        self.score(text, polarity, start)
    }

    /// Handles the two terminal notices: empty and filtered text.
    fn precheck(&self, text: &str, mode: ScoringMode, start: Instant) -> Option<MoodResult> {
        if is_blank(text) {
            debug!("Empty text");
            return Some(MoodResult::empty(mode, elapsed_us(start)));
        }

        if let Some(word) = self.safety.first_match(text) {
            debug!(word, "Text filtered by safety check");
            return Some(MoodResult::filtered(mode, word, elapsed_us(start)));
        }

        None
    }

    fn score(&self, text: &str, polarity: Option<f64>, start: Instant) -> MoodResult {
        let text_lower = text.to_lowercase();
        let happy_matches = self.happy.matches_in(&text_lower);
        let sad_matches = self.sad.matches_in(&text_lower);
        let happy_count = happy_matches.len();
        let sad_count = sad_matches.len();

        trace!(?happy_matches, ?sad_matches, "Keyword matches");

        let (mode, score, mood) = match polarity {
            Some(polarity) => {
                let weight = self.blend.keyword_weight;
                let score = polarity + weight * happy_count as f64 - weight * sad_count as f64;
                // NaN fails both comparisons and lands on neutral
                let mood = if score > self.blend.happy_threshold {
                    Mood::Happy
                } else if score < self.blend.sad_threshold {
                    Mood::Sad
                } else {
                    Mood::Neutral
                };
                (ScoringMode::Blended, score, mood)
            }
            None => {
                let score = happy_count as f64 - sad_count as f64;
                let mood = if happy_count > sad_count {
                    Mood::Happy
                } else if sad_count > happy_count {
                    Mood::Sad
                } else {
                    Mood::Neutral
                };
                (ScoringMode::RuleOnly, score, mood)
            }
        };

        debug!(
            mood = mood.name(),
            mode = mode.name(),
            happy_count,
            sad_count,
            score,
            "Classified text"
        );

        MoodResult::scored(
            mood,
            mode,
            score,
            polarity,
            happy_matches,
            sad_matches,
            elapsed_us(start),
        )
    }
}

impl Default for MoodClassifier {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for MoodClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoodClassifier")
            .field("safety", &self.safety)
            .field("happy", &self.happy)
            .field("sad", &self.sad)
            .field("blend", &self.blend)
            .field("provider", &self.provider_name())
            .finish()
    }
}

/// True when `text` has nothing but whitespace, counting the ASCII
/// information separators (`\x1c`..=`\x1f`) as whitespace too.
fn is_blank(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

fn elapsed_us(start: Instant) -> u64 {
    start.elapsed().as_micros() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{FixedPolarity, LexiconPolarity};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn classifier() -> MoodClassifier {
        MoodClassifier::with_defaults()
    }

    fn tuple(result: &MoodResult) -> (&str, &str, f64) {
        result.as_tuple()
    }

    // === Empty Input Tests ===

    #[test]
    fn empty_text_asks_for_input() {
        for text in ["", " ", "\n\t  ", "\u{3000}", "\x1c\x1d", " \x1e\x1f\u{85}"] {
            let result = classifier().classify(text, None);
            assert_eq!(tuple(&result), ("🤔", "Please enter some text!", 0.0));
        }
    }

    #[test]
    fn empty_text_in_blended_mode() {
        let result = classifier().classify("   ", Some(0.9));
        assert_eq!(tuple(&result), ("🤔", "Please enter some text!", 0.0));
        assert_eq!(result.mode, ScoringMode::Blended);
    }

    // === Safety Tests ===

    #[test]
    fn unsafe_text_is_filtered() {
        let result = classifier().classify("I hate this", None);
        assert_eq!(
            tuple(&result),
            ("🚫", "Let's keep it positive and kind!", 0.0)
        );
        assert_eq!(result.filtered_by.as_deref(), Some("hate"));
    }

    #[test]
    fn unsafe_text_is_filtered_case_insensitively() {
        let result = classifier().classify("You are UGLY", Some(0.8));
        assert_eq!(result.mood, Mood::Filtered);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn safety_check_wins_over_happy_words() {
        let text = "great wonderful awesome fantastic day but I want to fight";
        assert_eq!(classifier().classify(text, None).mood, Mood::Filtered);
        assert_eq!(classifier().classify(text, Some(1.0)).mood, Mood::Filtered);
    }

    #[test]
    fn extended_safety_rejects_badge() {
        let classifier = MoodClassifier::new(&MoodConfig::extended_safety());
        assert_eq!(classifier.classify("I got a badge", None).mood, Mood::Filtered);
        // classic list lets it through, where "bad" counts as a sad word
        assert_eq!(
            MoodClassifier::with_defaults()
                .classify("I got a badge", None)
                .mood,
            Mood::Sad
        );
    }

    #[test]
    fn provider_not_consulted_for_notices() {
        struct Counting(AtomicUsize);
        impl PolarityProvider for Counting {
            fn estimate(&self, _text: &str) -> f64 {
                self.0.fetch_add(1, Ordering::SeqCst);
                0.5
            }
        }

        let provider = Counting(AtomicUsize::new(0));
        let classifier = classifier();

        assert_eq!(classifier.classify_with("", &provider).mood, Mood::Empty);
        let result = classifier.classify_with("kill it", &provider);
        assert_eq!(result.mood, Mood::Filtered);
        assert_eq!(result.polarity, None);
        assert_eq!(provider.0.load(Ordering::SeqCst), 0);

        classifier.classify_with("nice", &provider);
        assert_eq!(provider.0.load(Ordering::SeqCst), 1);
    }

    // === Rule-only Tests ===

    #[test]
    fn rule_only_happy() {
        let result = classifier().classify("I had a great and wonderful day!", None);
        assert!(result.happy_count >= 2);
        assert_eq!(result.sad_count, 0);
        assert_eq!(result.emoji, "😀");
        assert_eq!(result.explanation, "Sounds positive and happy!");
        assert_eq!(result.mode, ScoringMode::RuleOnly);
    }

    #[test]
    fn rule_only_sad() {
        let result = classifier().classify("This is terrible and I am so sad", None);
        assert!(result.sad_count >= 2);
        assert_eq!(result.happy_count, 0);
        assert_eq!(result.emoji, "😞");
        assert_eq!(result.explanation, "This sounds a bit sad.");
    }

    #[test]
    fn rule_only_neutral() {
        let result = classifier().classify("The weather is here", None);
        assert_eq!(result.happy_count, 0);
        assert_eq!(result.sad_count, 0);
        assert_eq!(result.emoji, "😐");
        assert_eq!(result.explanation, "This seems pretty neutral.");
    }

    #[test]
    fn rule_only_tie_is_neutral() {
        let result = classifier().classify("good but sad", None);
        assert_eq!(result.happy_count, 1);
        assert_eq!(result.sad_count, 1);
        assert_eq!(result.mood, Mood::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn rule_only_score_is_count_difference() {
        let result = classifier().classify("great fun, a little sorry", None);
        assert_eq!(result.score, 1.0);
        assert_eq!(result.mood, Mood::Happy);
    }

    #[test]
    fn substring_matches_count() {
        // "sadly" contains "sad"; "know" contains "no"
        let result = classifier().classify("sadly I know", None);
        assert_eq!(result.sad_matches, vec!["sad".to_string(), "no".to_string()]);
        assert_eq!(result.mood, Mood::Sad);
    }

    #[test]
    fn case_insensitive_keywords() {
        for text in ["GREAT", "great", "GrEaT"] {
            let result = classifier().classify(text, None);
            assert_eq!(result.happy_count, 1, "text: {}", text);
            assert_eq!(result.mood, Mood::Happy);
        }
    }

    #[test]
    fn classify_rules_matches_classify_without_polarity() {
        let a = classifier().classify_rules("so much fun");
        let b = classifier().classify("so much fun", None);
        assert_eq!(a.as_tuple(), b.as_tuple());
    }

    // === Blended Tests ===

    #[test]
    fn blended_zero_polarity_is_neutral() {
        let result = classifier().classify("okay I guess", Some(0.0));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.emoji, "😐");
        assert_eq!(result.mode, ScoringMode::Blended);
        assert_eq!(result.polarity, Some(0.0));
    }

    #[test]
    fn blended_positive_polarity_without_keywords_is_happy() {
        let result = classifier().classify("The weather is here", Some(0.3));
        assert_eq!(result.happy_count, 0);
        assert_eq!(result.sad_count, 0);
        assert_eq!(result.emoji, "😀");
    }

    #[test]
    fn blended_negative_polarity_is_sad() {
        let result = classifier().classify("The weather is here", Some(-0.3));
        assert_eq!(result.emoji, "😞");
    }

    #[test]
    fn blended_keywords_nudge_score() {
        // 0.05 alone is neutral; one happy keyword adds 0.1
        let neutral = classifier().classify("The weather is here", Some(0.05));
        assert_eq!(neutral.mood, Mood::Neutral);
        let happy = classifier().classify("The weather is nice", Some(0.05));
        assert_eq!(happy.mood, Mood::Happy);
        assert!((happy.score - 0.15).abs() < 1e-6);
    }

    #[test]
    fn blended_thresholds_are_strict() {
        let result = classifier().classify("The weather is here", Some(0.1));
        assert_eq!(result.mood, Mood::Neutral);
        let result = classifier().classify("The weather is here", Some(-0.1));
        assert_eq!(result.mood, Mood::Neutral);
    }

    #[test]
    fn keywords_landing_on_happy_threshold_are_neutral() {
        // 0.3 - 0.1 * 2
        let result = classifier().classify("sad and sorry", Some(0.3));
        assert_eq!(result.sad_count, 2);
        assert_eq!(result.happy_count, 0);
        assert!(result.score <= 0.1, "score: {}", result.score);
        assert_eq!(result.mood, Mood::Neutral);

        // 0.2 - 0.1 * 1
        let result = classifier().classify("The weather is sad", Some(0.2));
        assert_eq!(result.sad_count, 1);
        assert_eq!(result.mood, Mood::Neutral);
    }

    #[test]
    fn keywords_landing_on_sad_threshold_are_neutral() {
        // -0.3 + 0.1 * 2
        let result = classifier().classify("great and nice", Some(-0.3));
        assert_eq!(result.happy_count, 2);
        assert_eq!(result.sad_count, 0);
        assert!(result.score >= -0.1, "score: {}", result.score);
        assert_eq!(result.mood, Mood::Neutral);

        // -0.2 + 0.1 * 1
        let result = classifier().classify("The weather is nice", Some(-0.2));
        assert_eq!(result.happy_count, 1);
        assert_eq!(result.mood, Mood::Neutral);
    }

    #[test]
    fn keywords_just_past_threshold_decide_mood() {
        let result = classifier().classify("sad and sorry", Some(0.31));
        assert_eq!(result.mood, Mood::Happy);
        let result = classifier().classify("great and nice", Some(-0.31));
        assert_eq!(result.mood, Mood::Sad);
    }

    #[test]
    fn blended_score_is_not_clamped() {
        let text = "happy good great awesome love fun excited yay wonderful best nice cool";
        let result = classifier().classify(text, Some(1.0));
        assert!(result.score > 1.0);
        assert_eq!(result.mood, Mood::Happy);
    }

    #[test]
    fn nan_polarity_is_neutral() {
        let result = classifier().classify("The weather is here", Some(f64::NAN));
        assert_eq!(result.mood, Mood::Neutral);
    }

    #[test]
    fn custom_blend_weights() {
        let config = MoodConfig {
            blend: BlendConfig {
                keyword_weight: 0.5,
                happy_threshold: 0.4,
                sad_threshold: -0.4,
            },
            ..Default::default()
        };
        let classifier = MoodClassifier::new(&config);
        assert_eq!(classifier.classify("nice", Some(0.0)).mood, Mood::Happy);
        assert_eq!(classifier.classify("okay", Some(0.3)).mood, Mood::Neutral);
    }

    // === Provider Tests ===

    #[test]
    fn analyze_without_provider_is_rule_only() {
        let classifier = classifier();
        assert!(!classifier.has_provider());
        assert_eq!(classifier.mode(), ScoringMode::RuleOnly);
        assert_eq!(
            classifier.analyze("great day").mode,
            ScoringMode::RuleOnly
        );
    }

    #[test]
    fn analyze_with_provider_is_blended() {
        let classifier =
            MoodClassifier::with_provider(&MoodConfig::default(), FixedPolarity::new(0.3));
        assert_eq!(classifier.provider_name(), Some("fixed"));
        let result = classifier.analyze("The weather is here");
        assert_eq!(result.mode, ScoringMode::Blended);
        assert_eq!(result.polarity, Some(0.3));
        assert_eq!(result.mood, Mood::Happy);
    }

    #[test]
    fn analyze_with_lexicon_provider() {
        let classifier =
            MoodClassifier::with_provider(&MoodConfig::default(), LexiconPolarity::new());
        assert_eq!(classifier.analyze("What a wonderful day").mood, Mood::Happy);
        assert_eq!(classifier.analyze("I feel so lonely").mood, Mood::Sad);
    }

    #[test]
    fn closure_provider() {
        let classifier = classifier();
        let result = classifier.classify_with("okay", &|_: &str| -0.5f64);
        assert_eq!(result.mood, Mood::Sad);
    }

    // === Purity Tests ===

    #[test]
    fn identical_inputs_give_identical_results() {
        let classifier = classifier();
        for (text, polarity) in [
            ("I had a great and wonderful day!", None),
            ("okay I guess", Some(0.0)),
            ("I hate it", Some(0.4)),
            ("", None),
        ] {
            let a = classifier.classify(text, polarity);
            let b = classifier.classify(text, polarity);
            assert_eq!(a.as_tuple(), b.as_tuple());
            assert_eq!(a.mood, b.mood);
            assert_eq!(a.happy_matches, b.happy_matches);
        }
    }

    #[test]
    fn classifier_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MoodClassifier>();

        let classifier = std::sync::Arc::new(classifier());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let classifier = classifier.clone();
                std::thread::spawn(move || classifier.classify("great fun", None).mood)
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Mood::Happy);
        }
    }

    #[test]
    fn never_panics_on_odd_input() {
        let classifier = classifier();
        let long = "a".repeat(100_000);
        for text in [
            "\0",
            "🙂🙂🙂",
            "İSTANBUL",
            "ß",
            long.as_str(),
            "\u{200b}",
        ] {
            let _ = classifier.classify(text, None);
            let _ = classifier.classify(text, Some(f64::INFINITY));
            let _ = classifier.classify(text, Some(f64::NEG_INFINITY));
        }
    }
}
