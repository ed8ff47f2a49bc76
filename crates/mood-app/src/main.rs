//! Mood2Emoji - detect the mood of a sentence and show it as an emoji.

use std::path::PathBuf;

use clap::Parser;
use directories::ProjectDirs;
use mood_app::{commands, Cli, Commands};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "mood2emoji", "Mood2Emoji").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging. Console output goes to stderr so stdout stays clean
/// for results; the server additionally logs to daily-rotated files.
fn init_logging(cli: &Cli) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if cli.debug { "debug" } else { cli.log_level.as_str() };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "mood2emoji={level},mood_app={level},mood_core={level},mood_server={level},warn",
            level = log_level
        ))
    });

    if matches!(cli.command, Commands::Serve(_)) {
        if let Some(log_dir) = logs_dir() {
            if std::fs::create_dir_all(&log_dir).is_ok() {
                let file_appender = RollingFileAppender::builder()
                    .rotation(Rotation::DAILY)
                    .max_log_files(5)
                    .filename_prefix("mood2emoji")
                    .filename_suffix("log")
                    .build(&log_dir)
                    .ok();

                if let Some(appender) = file_appender {
                    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(std::io::stderr))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();

                    tracing::info!("Logging to {:?}", log_dir);
                    return Some(guard);
                }
            }
        }

        // Fallback: console logging only
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
        tracing::warn!("File logging unavailable, using console only");
        return None;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&cli);

    tracing::debug!("Args: {:?}", cli);

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze(args) => {
            let text = commands::read_input(args.text.clone())?;
            print!("{}", commands::analyze(&config, &args, &text)?);
        }
        Commands::Teacher => print!("{}", commands::teacher()),
        Commands::Serve(args) => {
            tracing::info!("Starting Mood2Emoji server...");
            commands::serve(config, &args).await?;
            tracing::info!("Mood2Emoji server shutting down");
        }
        Commands::Config => println!("{}", commands::show_config(&config)?),
    }

    Ok(())
}
