//! Command handlers.
//!
//! Handlers return the text to print so they can be tested without a
//! terminal; `main` does the printing.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use mood_core::classifier::{LexiconPolarity, MoodClassifier, MoodResult, ScoringMode};
use mood_core::config::MoodConfig;
use mood_core::teacher_mode::{self, Walkthrough};
use mood_server::{AppState, Server, ServerConfig};
use serde::Serialize;

use crate::cli::{AnalyzeArgs, ServeArgs};

/// Loads the config from `path`, the default location, or the defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<MoodConfig> {
    MoodConfig::load_or_default(path).context("Failed to load configuration")
}

/// Returns the text argument, or all of stdin when it is missing.
pub fn read_input(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            Ok(buf)
        }
    }
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    #[serde(flatten)]
    result: &'a MoodResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    walkthrough: Option<Walkthrough>,
}

/// Classifies `text` and renders the output.
pub fn analyze(config: &MoodConfig, args: &AnalyzeArgs, text: &str) -> anyhow::Result<String> {
    let classifier = MoodClassifier::new(config);

    let result = match (args.polarity, args.lexicon) {
        (Some(polarity), _) => classifier.classify(text, Some(polarity)),
        (None, true) => classifier.classify_with(text, &LexiconPolarity::new()),
        (None, false) => classifier.classify_rules(text),
    };

    tracing::debug!(
        mood = result.mood.name(),
        duration_us = result.duration_us,
        "Analysis complete"
    );

    let walkthrough = args
        .details
        .then(|| Walkthrough::for_result(text, &result, classifier.blend()));

    if args.json {
        let output = AnalyzeOutput {
            result: &result,
            walkthrough,
        };
        return serde_json::to_string_pretty(&output).context("Failed to serialize result");
    }

    let mut out = format!("{}  {}\n", result.emoji, result.explanation);
    if result.mode == ScoringMode::Blended && !result.mood.is_terminal_notice() {
        out.push_str(&format!("Score: {:.2}\n", result.score));
    }

    if let Some(walkthrough) = walkthrough {
        out.push_str("\nHow I decided\n");
        out.push_str(&walkthrough.render());
    }

    if args.teacher {
        out.push('\n');
        out.push_str(&teacher());
    }

    Ok(out)
}

/// Renders the teacher-mode panel with the footer.
pub fn teacher() -> String {
    format!(
        "{}\n---\n{}\n",
        teacher_mode::render_panel(),
        teacher_mode::FOOTER
    )
}

/// Renders the effective configuration as pretty JSON.
pub fn show_config(config: &MoodConfig) -> anyhow::Result<String> {
    config
        .to_json_pretty()
        .context("Failed to serialize configuration")
}

/// Runs the API server until it stops.
pub async fn serve(config: MoodConfig, args: &ServeArgs) -> anyhow::Result<()> {
    let state = if args.lexicon {
        AppState::with_provider(config, LexiconPolarity::new())
    } else {
        AppState::new(config)
    };
    let state = state.with_max_text_len(args.max_text_len);

    let server_config = ServerConfig::default()
        .with_host(args.host.clone())
        .with_port(args.port);

    let server = Server::with_state(server_config, state).context("Failed to create API server")?;
    tracing::info!("API server listening on {}", server.addr());
    server.run().await.context("API server error")?;
    Ok(())
}
