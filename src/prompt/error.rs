//! Error types for questionnaire parsing and document rendering.
//!
//! The wizard controller itself treats bad input as a no-op. These errors
//! surface only where strings from the outside world (command-line flags,
//! scripted answers) are mapped onto the fixed questionnaire.

use thiserror::Error;

use super::questions::QuestionId;

/// Errors raised when mapping external input onto the questionnaire.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The basic prompt was empty after trimming whitespace.
    #[error("prompt must not be empty")]
    EmptyPrompt,

    /// No question is registered under the given key.
    #[error("unknown question '{0}' (expected one of: duration, style, camera, lighting, pace, resolution)")]
    UnknownQuestion(String),

    /// The value is not one of the question's declared options.
    #[error("'{value}' is not a valid {question} option (expected one of: {})", .options.join(", "))]
    InvalidOption {
        question: QuestionId,
        value: String,
        options: Vec<&'static str>,
    },

    /// The generated document could not be serialized.
    #[error("failed to render document: {0}")]
    Render(#[from] serde_json::Error),
}
