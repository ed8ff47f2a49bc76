//! Application state for the API server.

use std::sync::Arc;

use mood_core::classifier::{MoodClassifier, PolarityProvider};
use mood_core::config::MoodConfig;

/// Default maximum accepted text length, in characters.
pub const DEFAULT_MAX_TEXT_LEN: usize = 5000;

/// Shared application state.
///
/// The classifier is immutable, so it is shared without a lock.
#[derive(Clone)]
pub struct AppState {
    /// Mood classifier.
    pub classifier: Arc<MoodClassifier>,
    /// Longest text accepted by `/api/analyze`.
    pub max_text_len: usize,
}

impl AppState {
    /// Creates a rule-only state from a config.
    pub fn new(config: MoodConfig) -> Self {
        Self {
            classifier: Arc::new(MoodClassifier::new(&config)),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Creates a state whose classifier blends in `provider`.
    pub fn with_provider(config: MoodConfig, provider: impl PolarityProvider + 'static) -> Self {
        Self {
            classifier: Arc::new(MoodClassifier::with_provider(&config, provider)),
            max_text_len: DEFAULT_MAX_TEXT_LEN,
        }
    }

    /// Creates a rule-only state with the default config.
    pub fn with_defaults() -> Self {
        Self::new(MoodConfig::default())
    }

    /// Sets the maximum accepted text length.
    pub fn with_max_text_len(mut self, max_text_len: usize) -> Self {
        self.max_text_len = max_text_len;
        self
    }
}
