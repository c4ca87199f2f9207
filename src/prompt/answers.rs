//! Answer tracking for the questionnaire

use std::collections::BTreeMap;

use super::error::PromptError;
use super::questions::{QuestionId, NO_PREFERENCE};

/// Chosen option per question id
///
/// Values are always canonical options of their question, so they borrow
/// from the compiled-in questionnaire. Iteration follows question order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionId, &'static str>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an answer set from external (id, text) pairs, resolving each text
    /// to its canonical option
    pub fn try_from_pairs<'a, I>(pairs: I) -> Result<Self, PromptError>
    where
        I: IntoIterator<Item = (QuestionId, &'a str)>,
    {
        let mut set = Self::new();
        for (id, text) in pairs {
            let value = id.question().parse_option(text)?;
            set.answers.insert(id, value);
        }
        Ok(set)
    }

    /// Record `value` for `id` if it is one of the question's options.
    ///
    /// Returns the stored canonical value, or `None` when the value was
    /// rejected and the set left untouched.
    pub fn record(&mut self, id: QuestionId, value: &str) -> Option<&'static str> {
        let canonical = id.question().option(value)?;
        self.answers.insert(id, canonical);
        Some(canonical)
    }

    pub fn get(&self, id: QuestionId) -> Option<&'static str> {
        self.answers.get(&id).copied()
    }

    /// The answer for `id`, unless it is missing or "No preference"
    pub fn preferred(&self, id: QuestionId) -> Option<&'static str> {
        self.get(id).filter(|value| *value != NO_PREFERENCE)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn clear(&mut self) {
        self.answers.clear();
    }

    /// Whether every question has an answer
    pub fn is_complete(&self) -> bool {
        QuestionId::ALL.iter().all(|id| self.contains(*id))
    }

    /// Unanswered questions, in question order
    pub fn missing(&self) -> Vec<QuestionId> {
        QuestionId::ALL
            .iter()
            .copied()
            .filter(|id| !self.contains(*id))
            .collect()
    }
}
