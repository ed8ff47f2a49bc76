//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mood_server::state::DEFAULT_MAX_TEXT_LEN;
use mood_server::{DEFAULT_HOST, DEFAULT_PORT};

/// Mood2Emoji - detect the mood of a sentence and show it as an emoji
#[derive(Parser, Debug)]
#[command(name = "mood2emoji", version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a JSON config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect the mood of a text
    Analyze(AnalyzeArgs),
    /// Show how the mood detector works
    Teacher,
    /// Run the JSON API server
    Serve(ServeArgs),
    /// Print the effective configuration as JSON
    Config,
}

#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Text to analyze (reads stdin when omitted)
    pub text: Option<String>,

    /// Sentiment polarity in [-1, 1] to blend with the keyword counts
    #[arg(long, allow_hyphen_values = true, value_parser = parse_polarity, conflicts_with = "lexicon")]
    pub polarity: Option<f64>,

    /// Estimate polarity with the built-in word lexicon
    #[arg(long)]
    pub lexicon: bool,

    /// Show how the decision was made
    #[arg(long)]
    pub details: bool,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,

    /// Append the teacher-mode explanation
    #[arg(long)]
    pub teacher: bool,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Blend in polarity from the built-in word lexicon
    #[arg(long)]
    pub lexicon: bool,

    /// Longest text accepted, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_TEXT_LEN)]
    pub max_text_len: usize,
}

fn parse_polarity(value: &str) -> Result<f64, String> {
    let polarity: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(format!("polarity must be between -1 and 1, got {}", polarity));
    }
    Ok(polarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("mood2emoji").chain(args.iter().copied()))
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_analyze_with_text() {
        let cli = parse(&["analyze", "what a great day"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.text.as_deref(), Some("what a great day"));
                assert_eq!(args.polarity, None);
                assert!(!args.lexicon);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_negative_polarity() {
        let cli = parse(&["analyze", "meh", "--polarity", "-0.4"]).unwrap();
        match cli.command {
            Commands::Analyze(args) => assert_eq!(args.polarity, Some(-0.4)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_polarity() {
        assert!(parse(&["analyze", "meh", "--polarity", "1.5"]).is_err());
        assert!(parse(&["analyze", "meh", "--polarity", "abc"]).is_err());
    }

    #[test]
    fn polarity_conflicts_with_lexicon() {
        assert!(parse(&["analyze", "meh", "--polarity", "0.2", "--lexicon"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["teacher", "--debug", "--config", "/tmp/x.json"]).unwrap();
        assert!(cli.debug);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.json")));
    }

    #[test]
    fn serve_defaults() {
        let cli = parse(&["serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.host, DEFAULT_HOST);
                assert_eq!(args.port, DEFAULT_PORT);
                assert_eq!(args.max_text_len, DEFAULT_MAX_TEXT_LEN);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
