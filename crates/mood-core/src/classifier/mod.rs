//! Mood classification.
//!
//! This module turns a short text into one of a few moods, each with an
//! emoji and a one-line explanation.

mod keyword;
mod mood;
mod pipeline;
mod polarity;

pub use keyword::KeywordSet;
pub use mood::{Mood, MoodResult, ScoringMode};
pub use pipeline::MoodClassifier;
pub use polarity::{FixedPolarity, LexiconPolarity, PolarityProvider};
