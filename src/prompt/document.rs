//! Veo3 configuration document
//!
//! The document is built by inserting only the parameters that have a value;
//! `camera_movement` and `lighting` are left out entirely (not emitted as
//! null) when unanswered or "No preference".

use serde::{Deserialize, Serialize};

use super::answers::AnswerSet;
use super::enhance::enhance_prompt;
use super::error::PromptError;
use super::questions::{QuestionId, NO_PREFERENCE};

/// Identifier of the target generative model
pub const MODEL: &str = "veo3";

pub const DEFAULT_DURATION: &str = "10 seconds";
pub const DEFAULT_RESOLUTION: &str = "1080p";
pub const DEFAULT_STYLE: &str = "Cinematic";
pub const DEFAULT_PACE: &str = "Medium pace";

/// The option matching the parameter default for `id`, used to preselect
/// a choice in the interactive modes
pub fn default_option(id: QuestionId) -> &'static str {
    match id {
        QuestionId::Duration => DEFAULT_DURATION,
        QuestionId::Resolution => DEFAULT_RESOLUTION,
        QuestionId::Style => DEFAULT_STYLE,
        QuestionId::Pace => DEFAULT_PACE,
        QuestionId::Camera | QuestionId::Lighting => NO_PREFERENCE,
    }
}

/// Generation parameters derived from the answers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameters {
    pub duration: String,
    pub resolution: String,
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_movement: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting: Option<String>,
    pub pace: String,
}

impl Parameters {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let or_default = |id: QuestionId, default: &str| {
            answers.get(id).unwrap_or(default).to_string()
        };

        Self {
            duration: or_default(QuestionId::Duration, DEFAULT_DURATION),
            resolution: or_default(QuestionId::Resolution, DEFAULT_RESOLUTION),
            style: or_default(QuestionId::Style, DEFAULT_STYLE),
            camera_movement: answers.preferred(QuestionId::Camera).map(str::to_string),
            lighting: answers.preferred(QuestionId::Lighting).map(str::to_string),
            pace: or_default(QuestionId::Pace, DEFAULT_PACE),
        }
    }
}

/// Fixed quality hints for the downstream model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Optimization {
    pub quality: String,
    pub consistency: bool,
    pub motion_smoothness: String,
}

impl Default for Optimization {
    fn default() -> Self {
        Self {
            quality: "high".to_string(),
            consistency: true,
            motion_smoothness: "enhanced".to_string(),
        }
    }
}

/// Complete document handed to Veo3
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDocument {
    pub model: String,
    pub prompt: String,
    pub parameters: Parameters,
    pub optimization: Optimization,
}

impl PromptDocument {
    /// Build the document for a raw prompt and an answer set
    pub fn build(raw_prompt: &str, answers: &AnswerSet) -> Self {
        Self {
            model: MODEL.to_string(),
            prompt: enhance_prompt(raw_prompt, answers),
            parameters: Parameters::from_answers(answers),
            optimization: Optimization::default(),
        }
    }

    /// Render as JSON with 2-space indentation
    pub fn to_json(&self) -> Result<String, PromptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of finalizing a session: the document and its rendered text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finalized {
    pub document: PromptDocument,
    pub json: String,
}

/// Build and render the document. Pure: identical inputs give identical text.
pub fn finalize(raw_prompt: &str, answers: &AnswerSet) -> Result<Finalized, PromptError> {
    let document = PromptDocument::build(raw_prompt, answers);
    let json = document.to_json()?;
    Ok(Finalized { document, json })
}
