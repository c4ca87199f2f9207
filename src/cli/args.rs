//! Command-line argument definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::prompt::{AnswerSet, FinalizePolicy, PromptError, QuestionId};

/// Veo3 Prompt Optimizer - transform basic prompts into optimized JSON for Veo3
#[derive(Parser, Debug)]
#[command(name = "veo-prompt")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Basic prompt to start from (skips typing it in the wizard)
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Ask the questions as plain terminal prompts instead of the full-screen wizard
    #[arg(long, default_value = "false")]
    pub plain: bool,

    /// Write the generated JSON document to this file
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Copy the generated JSON document to the clipboard
    #[arg(long, global = true, default_value = "false")]
    pub copy: bool,

    /// Only generate the document once every question has been answered,
    /// in any order. By default answering the last question (resolution)
    /// finishes the wizard.
    #[arg(long, default_value = "false")]
    pub require_all: bool,

    /// Directory for the log file.
    /// Defaults to the platform data directory (e.g. ~/.local/share/veo-prompt/logs).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a document non-interactively from flags
    Generate(GenerateArgs),

    /// List the questions and their options
    Questions,
}

/// Answers for non-interactive generation. Unset flags fall back to the
/// document defaults; values are matched case-insensitively.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Basic prompt describing the video
    pub prompt: String,

    /// Video duration (e.g. "10 seconds")
    #[arg(long, value_parser = parse_duration)]
    pub duration: Option<&'static str>,

    /// Visual style (e.g. "Cinematic")
    #[arg(long, value_parser = parse_style)]
    pub style: Option<&'static str>,

    /// Camera movement (e.g. "Dolly in", "No preference")
    #[arg(long, value_parser = parse_camera)]
    pub camera: Option<&'static str>,

    /// Lighting mood (e.g. "Golden hour", "No preference")
    #[arg(long, value_parser = parse_lighting)]
    pub lighting: Option<&'static str>,

    /// Video pace (e.g. "Medium pace")
    #[arg(long, value_parser = parse_pace)]
    pub pace: Option<&'static str>,

    /// Output resolution (720p, 1080p or 4K)
    #[arg(long, value_parser = parse_resolution)]
    pub resolution: Option<&'static str>,

    /// Print only the JSON document (no banner or summary)
    #[arg(long, default_value = "false")]
    pub json_only: bool,
}

impl GenerateArgs {
    /// The answer set described by the flags
    pub fn answers(&self) -> AnswerSet {
        let pairs = [
            (QuestionId::Duration, self.duration),
            (QuestionId::Style, self.style),
            (QuestionId::Camera, self.camera),
            (QuestionId::Lighting, self.lighting),
            (QuestionId::Pace, self.pace),
            (QuestionId::Resolution, self.resolution),
        ];

        let mut answers = AnswerSet::new();
        for (id, value) in pairs {
            if let Some(value) = value {
                answers.record(id, value);
            }
        }
        answers
    }
}

impl Cli {
    pub fn finalize_policy(&self) -> FinalizePolicy {
        if self.require_all {
            FinalizePolicy::RequireAll
        } else {
            FinalizePolicy::OnLastQuestion
        }
    }
}

fn parse_answer(id: QuestionId, s: &str) -> Result<&'static str, PromptError> {
    id.question().parse_option(s)
}

fn parse_duration(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Duration, s)
}

fn parse_style(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Style, s)
}

fn parse_camera(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Camera, s)
}

fn parse_lighting(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Lighting, s)
}

fn parse_pace(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Pace, s)
}

fn parse_resolution(s: &str) -> Result<&'static str, PromptError> {
    parse_answer(QuestionId::Resolution, s)
}
