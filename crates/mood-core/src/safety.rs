//! Safety filter for inappropriate words.
//!
//! Matching is substring containment on the lower-cased text, not a
//! word-boundary match: with `bad` configured, "badge" is rejected too.

use serde::{Deserialize, Serialize};

/// Built-in inappropriate word lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyWordList {
    /// The original six-word list.
    #[default]
    Classic,
    /// Classic plus `bad` and `dumb`.
    Extended,
}

impl SafetyWordList {
    /// Returns the words in this list.
    pub fn words(&self) -> &'static [&'static str] {
        match self {
            SafetyWordList::Classic => &["hate", "stupid", "ugly", "kill", "hurt", "fight"],
            SafetyWordList::Extended => &[
                "hate", "stupid", "ugly", "kill", "hurt", "fight", "bad", "dumb",
            ],
        }
    }

    /// Returns a human-readable name for this list.
    pub fn name(&self) -> &'static str {
        match self {
            SafetyWordList::Classic => "Classic",
            SafetyWordList::Extended => "Extended",
        }
    }
}

/// Lower-cases, trims, drops empty entries, and dedupes while keeping order.
pub(crate) fn normalize_words<I, S>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for word in words {
        let word = word.as_ref().trim().to_lowercase();
        // An empty needle would match every text
        if word.is_empty() || out.contains(&word) {
            continue;
        }
        out.push(word);
    }
    out
}

/// Rejects text containing any configured inappropriate word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyFilter {
    words: Vec<String>,
}

impl SafetyFilter {
    /// Creates a filter from an arbitrary word list.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: normalize_words(words),
        }
    }

    /// Creates a filter from a built-in list.
    pub fn from_list(list: SafetyWordList) -> Self {
        Self::new(list.words().iter().copied())
    }

    /// Returns true if no configured word occurs anywhere in the text.
    ///
    /// Empty and whitespace-only text is safe.
    pub fn is_safe(&self, text: &str) -> bool {
        self.first_match(text).is_none()
    }

    /// Returns the first configured word (in list order) found in the text.
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let text_lower = text.to_lowercase();
        self.words
            .iter()
            .find(|word| text_lower.contains(word.as_str()))
            .map(String::as_str)
    }

    /// Returns the normalized word list.
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl Default for SafetyFilter {
    fn default() -> Self {
        Self::from_list(SafetyWordList::default())
    }
}
