//! The fixed Veo3 questionnaire
//!
//! Six compiled-in questions, asked in declaration order. Each question
//! knows its options and the parameter field its answer is emitted under.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::PromptError;

/// Option that opts out of a descriptive clause and parameter
pub const NO_PREFERENCE: &str = "No preference";

/// Symbolic key of a question, ordered like the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    Duration,
    Style,
    Camera,
    Lighting,
    Pace,
    Resolution,
}

impl QuestionId {
    /// Every question id in display order
    pub const ALL: [QuestionId; 6] = [
        QuestionId::Duration,
        QuestionId::Style,
        QuestionId::Camera,
        QuestionId::Lighting,
        QuestionId::Pace,
        QuestionId::Resolution,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionId::Duration => "duration",
            QuestionId::Style => "style",
            QuestionId::Camera => "camera",
            QuestionId::Lighting => "lighting",
            QuestionId::Pace => "pace",
            QuestionId::Resolution => "resolution",
        }
    }

    /// Position in the questionnaire (0-based)
    pub fn index(self) -> usize {
        self as usize
    }

    /// The static question definition for this id
    pub fn question(self) -> &'static Question {
        &QUESTIONS[self.index()]
    }

    /// Whether answering this question finalizes the session
    pub fn is_last(self) -> bool {
        self == last_question().id
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionId {
    type Err = PromptError;

    /// Accepts the question id or its parameter field name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        QUESTIONS
            .iter()
            .find(|q| q.id.as_str() == key || q.field == key)
            .map(|q| q.id)
            .ok_or_else(|| PromptError::UnknownQuestion(s.to_string()))
    }
}

/// A single multiple-choice question
#[derive(Debug, Serialize)]
pub struct Question {
    pub id: QuestionId,
    /// Text shown to the user
    pub text: &'static str,
    /// Selectable options, in display order
    pub options: &'static [&'static str],
    /// Parameter key the answer is emitted under
    pub field: &'static str,
}

impl Question {
    /// Canonical option matching `value` exactly
    pub fn option(&self, value: &str) -> Option<&'static str> {
        self.options.iter().copied().find(|opt| *opt == value)
    }

    /// Position of an option in the option list
    pub fn position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|opt| *opt == value)
    }

    /// Resolve user-supplied text to a canonical option, ignoring case and
    /// surrounding whitespace
    pub fn parse_option(&self, value: &str) -> Result<&'static str, PromptError> {
        let needle = value.trim();
        self.options
            .iter()
            .copied()
            .find(|opt| opt.eq_ignore_ascii_case(needle))
            .ok_or_else(|| PromptError::InvalidOption {
                question: self.id,
                value: value.to_string(),
                options: self.options.to_vec(),
            })
    }

    /// Whether the question offers a "No preference" escape
    pub fn allows_no_preference(&self) -> bool {
        self.option(NO_PREFERENCE).is_some()
    }
}

pub static QUESTIONS: [Question; 6] = [
    Question {
        id: QuestionId::Duration,
        text: "What duration do you need?",
        options: &[
            "5 seconds",
            "10 seconds",
            "15 seconds",
            "20 seconds",
            "30 seconds",
        ],
        field: "duration",
    },
    Question {
        id: QuestionId::Style,
        text: "What visual style are you aiming for?",
        options: &[
            "Cinematic",
            "Documentary",
            "Animated",
            "Realistic",
            "Artistic",
            "Commercial",
        ],
        field: "style",
    },
    Question {
        id: QuestionId::Camera,
        text: "What camera movement would work best?",
        options: &[
            "Static shot",
            "Pan",
            "Dolly in",
            "Dolly out",
            "Tracking shot",
            "Aerial view",
            NO_PREFERENCE,
        ],
        field: "camera_movement",
    },
    Question {
        id: QuestionId::Lighting,
        text: "What lighting mood do you prefer?",
        options: &[
            "Natural daylight",
            "Golden hour",
            "Blue hour",
            "Studio lighting",
            "Low-key dramatic",
            "High-key bright",
            "Moody",
            NO_PREFERENCE,
        ],
        field: "lighting",
    },
    Question {
        id: QuestionId::Pace,
        text: "What pace should the video have?",
        options: &[
            "Slow and contemplative",
            "Medium pace",
            "Fast and energetic",
            "Variable pace",
        ],
        field: "pace",
    },
    Question {
        id: QuestionId::Resolution,
        text: "What resolution do you need?",
        options: &["720p", "1080p", "4K"],
        field: "resolution",
    },
];

/// The questionnaire in display order
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// The question whose answer triggers finalization
pub fn last_question() -> &'static Question {
    &QUESTIONS[QUESTIONS.len() - 1]
}
