//! API request and response models.

use chrono::{DateTime, Utc};
use mood_core::classifier::{Mood, ScoringMode};
use mood_core::config::BlendConfig;
use mood_core::teacher_mode::Walkthrough;
use serde::{Deserialize, Serialize};

/// Request body for POST /api/analyze.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// The text to classify.
    pub text: String,
    /// Optional polarity in [-1, 1]; switches to blended scoring.
    pub polarity: Option<f64>,
}

/// Keyword details in the response.
#[derive(Debug, Serialize)]
pub struct AnalyzeDetails {
    pub safety_passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filtered_by: Option<String>,
    pub happy_count: usize,
    pub sad_count: usize,
    pub happy_matches: Vec<String>,
    pub sad_matches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub polarity: Option<f64>,
    pub walkthrough: Walkthrough,
}

/// Response body for POST /api/analyze.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub mood: Mood,
    pub emoji: String,
    pub explanation: String,
    pub score: f64,
    pub mode: ScoringMode,
    pub details: AnalyzeDetails,
    pub analyzed_at: DateTime<Utc>,
    /// Classification latency in microseconds.
    pub latency_us: u64,
}

/// A numbered learning point.
#[derive(Debug, Serialize)]
pub struct LearningPoint {
    pub topic: String,
    pub detail: String,
}

/// Response body for GET /api/teacher.
#[derive(Debug, Serialize)]
pub struct TeacherResponse {
    pub title: String,
    pub decision_flow: String,
    pub learning_points: Vec<LearningPoint>,
    pub footer: String,
}

/// Response body for GET /api/config.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub safety_words: Vec<String>,
    pub happy_words: Vec<String>,
    pub sad_words: Vec<String>,
    pub blend: BlendConfig,
    /// Name of the server's polarity provider, if one is attached.
    pub provider: Option<String>,
}

/// Response body for GET /api/health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
