//! Mood2Emoji - command-line front end.
//!
//! This crate provides the `mood2emoji` binary:
//!
//! - `analyze` - print the mood emoji and explanation for a text
//! - `teacher` - print the teacher-mode lesson
//! - `serve` - run the JSON API
//! - `config` - print the effective configuration

pub mod cli;
pub mod commands;

pub use cli::{AnalyzeArgs, Cli, Commands, ServeArgs};
