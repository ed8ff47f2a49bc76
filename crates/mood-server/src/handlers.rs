//! API route handlers.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use tracing::{debug, info};

use mood_core::teacher_mode::{self, Walkthrough};

use crate::error::{ApiError, Result};
use crate::models::{
    AnalyzeDetails, AnalyzeRequest, AnalyzeResponse, ConfigResponse, HealthResponse,
    LearningPoint, TeacherResponse,
};
use crate::state::AppState;

/// POST /api/analyze - Classify a text and return its mood.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    let text_len = req.text.chars().count();
    debug!(text_len, polarity = ?req.polarity, "Analyzing text");

    if text_len > state.max_text_len {
        return Err(ApiError::BadRequest(format!(
            "text is {} characters, limit is {}",
            text_len, state.max_text_len
        )));
    }

    // A polarity in the request overrides the server's provider
    let result = match req.polarity {
        Some(polarity) => state.classifier.classify(&req.text, Some(polarity)),
        None => state.classifier.analyze(&req.text),
    };

    let walkthrough = Walkthrough::for_result(&req.text, &result, state.classifier.blend());

    info!(
        mood = result.mood.name(),
        mode = result.mode.name(),
        latency_us = result.duration_us,
        "Analysis complete"
    );

    Ok(Json(AnalyzeResponse {
        mood: result.mood,
        emoji: result.emoji,
        explanation: result.explanation,
        score: result.score,
        mode: result.mode,
        details: AnalyzeDetails {
            safety_passed: walkthrough.safety_passed,
            filtered_by: result.filtered_by,
            happy_count: result.happy_count,
            sad_count: result.sad_count,
            happy_matches: result.happy_matches,
            sad_matches: result.sad_matches,
            polarity: result.polarity,
            walkthrough,
        },
        analyzed_at: Utc::now(),
        latency_us: result.duration_us,
    }))
}

/// GET /api/teacher - Static teacher-mode content.
pub async fn get_teacher() -> Json<TeacherResponse> {
    Json(TeacherResponse {
        title: teacher_mode::TITLE.to_string(),
        decision_flow: teacher_mode::DECISION_FLOW.to_string(),
        learning_points: teacher_mode::LEARNING_POINTS
            .iter()
            .map(|(topic, detail)| LearningPoint {
                topic: topic.to_string(),
                detail: detail.to_string(),
            })
            .collect(),
        footer: teacher_mode::FOOTER.to_string(),
    })
}

/// GET /api/config - Active keyword configuration.
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let classifier = &state.classifier;
    Json(ConfigResponse {
        safety_words: classifier.safety().words().to_vec(),
        happy_words: classifier.happy_words().words().to_vec(),
        sad_words: classifier.sad_words().words().to_vec(),
        blend: *classifier.blend(),
        provider: classifier.provider_name().map(String::from),
    })
}

/// GET /api/health - Liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
