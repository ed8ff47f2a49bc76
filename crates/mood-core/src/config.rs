//! Keyword and scoring configuration.
//!
//! Configuration is plain JSON. Every field is optional; missing fields fall
//! back to the defaults below.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CoreError, Result};
use crate::safety::{SafetyFilter, SafetyWordList};

/// Environment variable that overrides the default config path.
pub const CONFIG_ENV_VAR: &str = "MOOD2EMOJI_CONFIG";

/// Config file name inside the project config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

const DEFAULT_HAPPY_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "awesome",
    "love",
    "like",
    "fun",
    "excited",
    "yay",
    "yes",
    "wonderful",
    "best",
    "nice",
    "cool",
    "fantastic",
];

const DEFAULT_SAD_WORDS: &[&str] = &[
    "sad", "bad", "terrible", "angry", "upset", "cry", "sorry", "no", "awful", "horrible",
    "worst", "hate", "miss",
];

/// Inappropriate words: a built-in list or a custom one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SafetyWords {
    /// One of the built-in lists, written as `"classic"` or `"extended"`.
    Builtin(SafetyWordList),
    /// A custom list of words.
    Custom(Vec<String>),
}

impl Default for SafetyWords {
    fn default() -> Self {
        SafetyWords::Builtin(SafetyWordList::default())
    }
}

impl SafetyWords {
    /// Builds the safety filter for these words.
    pub fn build_filter(&self) -> SafetyFilter {
        match self {
            SafetyWords::Builtin(list) => SafetyFilter::from_list(*list),
            SafetyWords::Custom(words) => SafetyFilter::new(words),
        }
    }
}

/// Parameters for blended (polarity + keywords) scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlendConfig {
    /// Score adjustment per matched keyword (added for happy, subtracted for sad).
    pub keyword_weight: f64,
    /// Scores strictly above this are happy.
    pub happy_threshold: f64,
    /// Scores strictly below this are sad.
    pub sad_threshold: f64,
}

impl Default for BlendConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 0.1,
            happy_threshold: 0.1,
            sad_threshold: -0.1,
        }
    }
}

/// Full classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoodConfig {
    /// Words that cause text to be filtered before scoring.
    pub safety_words: SafetyWords,
    /// Words counted towards a happy mood.
    pub happy_words: Vec<String>,
    /// Words counted towards a sad mood.
    pub sad_words: Vec<String>,
    /// Blended mode parameters.
    pub blend: BlendConfig,
}

impl Default for MoodConfig {
    fn default() -> Self {
        Self {
            safety_words: SafetyWords::default(),
            happy_words: DEFAULT_HAPPY_WORDS.iter().map(|w| w.to_string()).collect(),
            sad_words: DEFAULT_SAD_WORDS.iter().map(|w| w.to_string()).collect(),
            blend: BlendConfig::default(),
        }
    }
}

impl MoodConfig {
    /// Default config with the extended safety list (adds `bad` and `dumb`).
    pub fn extended_safety() -> Self {
        Self {
            safety_words: SafetyWords::Builtin(SafetyWordList::Extended),
            ..Default::default()
        }
    }

    /// Parses a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)
            .map_err(|e| CoreError::Config(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Loads from `path` if given, otherwise from the default location if a
    /// file exists there, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Checks the blend thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        let blend = &self.blend;
        if !blend.keyword_weight.is_finite()
            || !blend.happy_threshold.is_finite()
            || !blend.sad_threshold.is_finite()
        {
            return Err(CoreError::Config(
                "blend parameters must be finite numbers".to_string(),
            ));
        }
        if blend.sad_threshold > blend.happy_threshold {
            return Err(CoreError::Config(format!(
                "sad_threshold ({}) must not exceed happy_threshold ({})",
                blend.sad_threshold, blend.happy_threshold
            )));
        }
        Ok(())
    }

    /// Serializes the config as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Returns the config path: `$MOOD2EMOJI_CONFIG` or the platform config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    ProjectDirs::from("", "mood2emoji", "Mood2Emoji")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
