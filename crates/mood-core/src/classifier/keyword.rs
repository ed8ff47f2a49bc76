//! Keyword containment counting.
//!
//! A keyword counts once if it appears anywhere in the lower-cased text,
//! including inside a longer word ("sadly" contains "sad"). No tokenizing,
//! no stemming.

use crate::safety::normalize_words;

/// An immutable set of lowercase keywords.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    words: Vec<String>,
}

impl KeywordSet {
    /// Creates a keyword set, normalizing each word.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize_words(words),
        }
    }

    /// Returns the keywords contained in already lower-cased text.
    pub fn matches_in(&self, text_lower: &str) -> Vec<String> {
        self.words
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .cloned()
            .collect()
    }

    /// Counts distinct keywords contained in the text (any casing).
    pub fn count(&self, text: &str) -> usize {
        let text_lower = text.to_lowercase();
        self.words
            .iter()
            .filter(|word| text_lower.contains(word.as_str()))
            .count()
    }

    /// Returns the keywords.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set has no keywords.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn happy() -> KeywordSet {
        KeywordSet::new(["happy", "good", "great", "wonderful"])
    }

    #[test]
    fn counts_distinct_words() {
        assert_eq!(happy().count("I had a great and wonderful day!"), 2);
    }

    #[test]
    fn repeated_word_counts_once() {
        assert_eq!(happy().count("great great great"), 1);
    }

    #[test]
    fn counts_case_insensitively() {
        let set = happy();
        assert_eq!(set.count("GREAT"), 1);
        assert_eq!(set.count("great"), 1);
        assert_eq!(set.count("GrEaT"), 1);
    }

    #[test]
    fn counts_substrings() {
        let sad = KeywordSet::new(["sad", "no"]);
        assert_eq!(sad.count("sadly I know"), 2);
    }

    #[test]
    fn matches_keep_configured_order() {
        assert_eq!(
            happy().matches_in("wonderful and good"),
            vec!["good".to_string(), "wonderful".to_string()]
        );
    }

    #[test]
    fn empty_set_never_matches() {
        let set = KeywordSet::new(Vec::<&str>::new());
        assert!(set.is_empty());
        assert_eq!(set.count("anything"), 0);
    }

    #[test]
    fn empty_words_are_dropped() {
        // an empty keyword would otherwise match every text
        let set = KeywordSet::new(["", "  ", "Yay"]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.count("nothing here"), 0);
        assert_eq!(set.count("YAY"), 1);
    }
}
