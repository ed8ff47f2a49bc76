//! Mood2Emoji Core - Safety filtering and mood classification.
//!
//! Classifies a short text as happy, sad, or neutral, after first rejecting
//! empty text and text containing inappropriate words.
//!
//! # Usage
//!
//! ```
//! use mood_core::classifier::{FixedPolarity, Mood, MoodClassifier};
//! use mood_core::config::MoodConfig;
//!
//! let classifier = MoodClassifier::new(&MoodConfig::default());
//!
//! // Rule-only: compare keyword counts
//! let result = classifier.classify("I had a great and wonderful day!", None);
//! assert_eq!(result.emoji, "😀");
//!
//! // Blended: external polarity nudged by keywords
//! let result = classifier.classify("okay I guess", Some(0.0));
//! assert_eq!(result.mood, Mood::Neutral);
//!
//! // Or attach a provider once
//! let blended = MoodClassifier::with_provider(&MoodConfig::default(), FixedPolarity::new(0.3));
//! assert_eq!(blended.analyze("The weather is here").mood, Mood::Happy);
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod safety;
pub mod teacher_mode;

pub use classifier::{Mood, MoodClassifier, MoodResult, PolarityProvider, ScoringMode};
pub use config::MoodConfig;
pub use error::{CoreError, Result};
pub use safety::{SafetyFilter, SafetyWordList};
