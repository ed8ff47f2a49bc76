//! Sentiment polarity providers for blended scoring.
//!
//! The classifier only needs a single number in [-1, 1] per text. Any type
//! implementing [`PolarityProvider`] can supply it, including plain closures.

use std::collections::HashMap;

/// Supplies a sentiment polarity in [-1.0, 1.0] for a piece of text.
pub trait PolarityProvider: Send + Sync {
    /// Estimates the polarity of the text.
    fn estimate(&self, text: &str) -> f64;

    /// Returns the name of this provider for logging/debugging.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> PolarityProvider for F
where
    F: Fn(&str) -> f64 + Send + Sync,
{
    fn estimate(&self, text: &str) -> f64 {
        self(text)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}

/// Returns the same polarity for every text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPolarity(f64);

impl FixedPolarity {
    /// Creates a fixed provider, clamping the value to [-1, 1].
    pub fn new(polarity: f64) -> Self {
        Self(polarity.clamp(-1.0, 1.0))
    }

    /// Returns the fixed value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PolarityProvider for FixedPolarity {
    fn estimate(&self, _text: &str) -> f64 {
        self.0
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

/// Word entry in the polarity lexicon.
#[derive(Debug, Clone, Copy)]
struct LexiconEntry {
    /// Valence score (-1.0 to 1.0).
    valence: f64,
    /// Weight/importance of this word.
    weight: f64,
}

/// A non-sentiment word that changes how nearby sentiment words count.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Modifier {
    /// Scales the sentiment word right after it ("very", "so").
    Boost(f64),
    /// Flips sentiment words a few words later ("not", "never").
    Negate,
}

/// Lexicon-based polarity estimator.
///
/// Averages the valences of known mood words, weighted by importance. A
/// booster directly before a word scales it; a negation up to
/// `NEGATION_REACH` words before flips and dampens it, unless another mood
/// word sits in between.
pub struct LexiconPolarity {
    lexicon: HashMap<String, LexiconEntry>,
    modifiers: HashMap<String, Modifier>,
}

impl LexiconPolarity {
    const NEGATION_REACH: usize = 3;
    const NEGATION_DAMPING: f64 = 0.7;

    /// Creates an estimator with the built-in lexicon.
    pub fn new() -> Self {
        let mut estimator = Self {
            lexicon: HashMap::new(),
            modifiers: HashMap::new(),
        };
        estimator.load_default_lexicons();
        estimator
    }

    /// Adds or replaces a word in the lexicon.
    pub fn with_word(mut self, word: &str, valence: f64, weight: f64) -> Self {
        self.lexicon.insert(
            word.to_lowercase(),
            LexiconEntry {
                valence: valence.clamp(-1.0, 1.0),
                weight: weight.max(0.0),
            },
        );
        self
    }

    /// Returns the number of words in the lexicon.
    pub fn lexicon_size(&self) -> usize {
        self.lexicon.len()
    }

    fn tokenize(text: &str) -> Vec<String> {
        text.split_whitespace()
            .map(|w| {
                w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                    .to_string()
            })
            .filter(|w| !w.is_empty())
            .collect()
    }

    fn modifier(&self, token: &str) -> Option<Modifier> {
        self.modifiers.get(token).copied()
    }

    /// Weighted valence of the mood word at `tokens[i]`.
    fn valence_at(&self, tokens: &[String], i: usize, entry: &LexiconEntry) -> f64 {
        let mut valence = entry.valence * entry.weight;

        if let Some(Modifier::Boost(boost)) = i
            .checked_sub(1)
            .and_then(|prev| self.modifier(&tokens[prev]))
        {
            valence *= boost;
        }

        let negated = tokens[i.saturating_sub(Self::NEGATION_REACH)..i]
            .iter()
            .rev()
            .take_while(|token| !self.lexicon.contains_key(token.as_str()))
            .any(|token| self.modifier(token) == Some(Modifier::Negate));
        if negated {
            valence = -valence * Self::NEGATION_DAMPING;
        }

        valence
    }

    fn load_default_lexicons(&mut self) {
        let intensifiers = [
            ("very", 1.3),
            ("really", 1.3),
            ("extremely", 1.5),
            ("absolutely", 1.5),
            ("totally", 1.3),
            ("so", 1.2),
            ("super", 1.3),
            ("incredibly", 1.4),
            ("completely", 1.4),
        ];
        for (word, boost) in intensifiers {
            self.modifiers
                .insert(word.to_string(), Modifier::Boost(boost));
        }

        let negations = [
            "not", "never", "no", "nothing", "nobody", "cannot", "can't", "don't", "doesn't",
            "didn't", "won't", "isn't", "aren't", "wasn't", "weren't", "haven't", "hasn't",
        ];
        for word in negations {
            self.modifiers.insert(word.to_string(), Modifier::Negate);
        }

        let words: &[(&str, f64, f64)] = &[
            // positive
            ("happy", 0.8, 1.0),
            ("joy", 0.9, 1.1),
            ("love", 0.8, 1.0),
            ("loved", 0.8, 1.0),
            ("like", 0.4, 0.6),
            ("great", 0.7, 0.9),
            ("good", 0.6, 0.8),
            ("wonderful", 0.8, 1.0),
            ("amazing", 0.8, 1.0),
            ("awesome", 0.8, 1.0),
            ("excellent", 0.8, 1.0),
            ("fantastic", 0.8, 1.0),
            ("best", 0.7, 0.9),
            ("beautiful", 0.7, 0.9),
            ("nice", 0.5, 0.7),
            ("cool", 0.5, 0.7),
            ("fun", 0.6, 0.8),
            ("excited", 0.7, 0.9),
            ("proud", 0.7, 0.9),
            ("kind", 0.6, 0.8),
            ("friends", 0.5, 0.7),
            ("calm", 0.5, 0.7),
            ("grateful", 0.7, 0.9),
            ("yay", 0.7, 0.9),
            // negative
            ("sad", -0.7, 1.0),
            ("lonely", -0.8, 1.1),
            ("miserable", -0.8, 1.1),
            ("bad", -0.5, 0.7),
            ("terrible", -0.7, 0.9),
            ("awful", -0.7, 0.9),
            ("horrible", -0.8, 1.0),
            ("worst", -0.8, 1.0),
            ("angry", -0.7, 0.9),
            ("upset", -0.6, 0.8),
            ("mad", -0.6, 0.8),
            ("annoyed", -0.5, 0.7),
            ("frustrated", -0.6, 0.8),
            ("cry", -0.6, 1.0),
            ("crying", -0.6, 1.0),
            ("sorry", -0.3, 0.6),
            ("scared", -0.6, 0.9),
            ("worried", -0.5, 0.8),
            ("tired", -0.3, 0.5),
            ("bored", -0.4, 0.6),
            ("boring", -0.4, 0.6),
            ("miss", -0.3, 0.6),
        ];
        for &(word, valence, weight) in words {
            self.lexicon
                .insert(word.to_string(), LexiconEntry { valence, weight });
        }
    }
}

impl Default for LexiconPolarity {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityProvider for LexiconPolarity {
    fn estimate(&self, text: &str) -> f64 {
        let tokens = Self::tokenize(&text.to_lowercase());

        let (total, weight) = tokens
            .iter()
            .enumerate()
            .filter_map(|(i, token)| {
                let entry = self.lexicon.get(token)?;
                Some((self.valence_at(&tokens, i, entry), entry.weight))
            })
            .fold((0.0, 0.0), |(total, weight), (valence, w)| {
                (total + valence, weight + w)
            });

        if weight > 0.0 {
            (total / weight).clamp(-1.0, 1.0)
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}
