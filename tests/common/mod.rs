//! Shared test utilities: clipboard fakes and session builders

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use veo_prompt::prompt::{AnswerSet, Clipboard, QuestionId, Session};

/// Clipboard that records every write
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always fails, like a headless session without a display
#[derive(Default)]
pub struct FailingClipboard {
    pub attempts: usize,
}

impl Clipboard for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        self.attempts += 1;
        Err(anyhow!("no clipboard available"))
    }
}

/// The answers of the reference example ("A cat")
pub fn reference_answers() -> Vec<(QuestionId, &'static str)> {
    vec![
        (QuestionId::Style, "Cinematic"),
        (QuestionId::Camera, "No preference"),
        (QuestionId::Lighting, "Golden hour"),
        (QuestionId::Pace, "Slow and contemplative"),
        (QuestionId::Duration, "10 seconds"),
        (QuestionId::Resolution, "1080p"),
    ]
}

pub fn answer_set(pairs: &[(QuestionId, &str)]) -> AnswerSet {
    AnswerSet::try_from_pairs(pairs.iter().copied()).unwrap()
}

/// A session that has begun with `prompt`
pub fn started_session(prompt: &str) -> Session {
    let mut session = Session::new();
    session.begin(prompt);
    session
}

/// A session that has answered every question in order
pub fn finished_session(prompt: &str) -> Session {
    let mut session = started_session(prompt);
    for id in QuestionId::ALL {
        let value = id.question().options[0];
        session.answer(id, value).unwrap();
    }
    session
}
