//! Wizard controller: the session state machine
//!
//! A session moves strictly `Input -> Questions -> Result` and only goes back
//! to `Input` through [`Session::reset`]. Every operation is total: input that
//! fails a precondition is ignored and reported through the returned outcome.
//!
//! # Finalization
//!
//! Under the default [`FinalizePolicy::OnLastQuestion`], answering the last
//! question finalizes the session using the answer set as it stands after
//! that answer, even if earlier questions were skipped.
//! [`FinalizePolicy::RequireAll`] ignores question identity and finalizes on
//! whichever answer completes the set.
//!
//! # Copy feedback
//!
//! A successful copy raises the clipboard flag until a deadline
//! [`COPY_FEEDBACK`] in the future. Copying again replaces the deadline, and
//! the owner clears an expired flag by calling [`Session::tick`].

use std::fmt;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::answers::AnswerSet;
use super::clipboard::Clipboard;
use super::document::{finalize, PromptDocument};
use super::error::PromptError;
use super::questions::QuestionId;

/// How long the "copied" indicator stays up
pub const COPY_FEEDBACK: Duration = Duration::from_secs(2);

/// Wizard phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Input,
    Questions,
    Result,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Input => "input",
            Stage::Questions => "questions",
            Stage::Result => "result",
        };
        write!(f, "{}", name)
    }
}

/// Which answer produces the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinalizePolicy {
    /// Finalize as soon as the last question is answered
    #[default]
    OnLastQuestion,
    /// Finalize on whichever answer completes the set
    RequireAll,
}

/// Outcome of [`Session::begin`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeginOutcome {
    Started,
    Ignored,
}

/// Outcome of [`Session::answer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Answer stored, still asking questions
    Recorded,
    /// Answer stored and the document generated
    Finalized,
    /// Wrong stage or undeclared option; nothing changed
    Ignored,
}

/// Deadline-based "copied" indicator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    expires_at: Option<Instant>,
}

impl CopyIndicator {
    /// Raise the indicator, replacing any pending expiry
    pub fn arm(&mut self, now: Instant) {
        self.expires_at = Some(now + COPY_FEEDBACK);
    }

    /// Whether the indicator is raised
    pub fn is_set(&self) -> bool {
        self.expires_at.is_some()
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.expires_at
    }

    /// Lower the indicator once its deadline has passed. Returns true if it
    /// was lowered by this call.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.expires_at {
            Some(deadline) if now >= deadline => {
                self.expires_at = None;
                true
            }
            _ => false,
        }
    }
}

/// Exclusively-owned wizard state
#[derive(Debug, Clone, Default)]
pub struct Session {
    stage: Stage,
    raw_prompt: String,
    answers: AnswerSet,
    document: Option<PromptDocument>,
    generated: String,
    copied: CopyIndicator,
    policy: FinalizePolicy,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: FinalizePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn raw_prompt(&self) -> &str {
        &self.raw_prompt
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn policy(&self) -> FinalizePolicy {
        self.policy
    }

    /// The generated document, once finalized
    pub fn document(&self) -> Option<&PromptDocument> {
        self.document.as_ref()
    }

    /// Rendered JSON text; empty until finalized
    pub fn generated_document(&self) -> &str {
        &self.generated
    }

    /// Whether the "copied" indicator is showing
    pub fn clipboard_flag(&self) -> bool {
        self.copied.is_set()
    }

    pub fn copy_indicator(&self) -> &CopyIndicator {
        &self.copied
    }

    /// Editable raw prompt, available only while in `Input`
    pub fn prompt_mut(&mut self) -> Option<&mut String> {
        match self.stage {
            Stage::Input => Some(&mut self.raw_prompt),
            _ => None,
        }
    }

    /// Start the questionnaire with `raw_prompt`.
    ///
    /// Ignored unless the session is in `Input` and the prompt is non-empty
    /// after trimming.
    pub fn begin(&mut self, raw_prompt: &str) -> BeginOutcome {
        if self.stage != Stage::Input || raw_prompt.trim().is_empty() {
            debug!(stage = %self.stage, "begin ignored");
            return BeginOutcome::Ignored;
        }

        self.raw_prompt = raw_prompt.to_string();
        self.answers.clear();
        self.stage = Stage::Questions;
        info!(prompt_len = self.raw_prompt.len(), "questionnaire started");
        BeginOutcome::Started
    }

    /// Record an answer, finalizing when the policy is satisfied.
    ///
    /// Errors only if the document cannot be rendered.
    pub fn answer(&mut self, id: QuestionId, value: &str) -> Result<AnswerOutcome, PromptError> {
        if self.stage != Stage::Questions {
            debug!(stage = %self.stage, question = %id, "answer ignored");
            return Ok(AnswerOutcome::Ignored);
        }

        let Some(stored) = self.answers.record(id, value) else {
            warn!(question = %id, value, "answer is not a declared option");
            return Ok(AnswerOutcome::Ignored);
        };
        debug!(question = %id, value = stored, "answer recorded");

        let ready = match self.policy {
            FinalizePolicy::OnLastQuestion => id.is_last(),
            FinalizePolicy::RequireAll => self.answers.is_complete(),
        };
        if !ready {
            if self.policy == FinalizePolicy::RequireAll && id.is_last() {
                debug!(missing = ?self.answers.missing(), "finalization deferred");
            }
            return Ok(AnswerOutcome::Recorded);
        }

        let finalized = finalize(&self.raw_prompt, &self.answers)?;
        self.document = Some(finalized.document);
        self.generated = finalized.json;
        self.stage = Stage::Result;
        info!(answered = self.answers.len(), "document generated");
        Ok(AnswerOutcome::Finalized)
    }

    /// Return every field to its initial value. The policy is kept.
    pub fn reset(&mut self) {
        *self = Self::with_policy(self.policy);
        debug!("session reset");
    }

    /// Copy the generated document to `clipboard`.
    ///
    /// Raises the clipboard flag on success and re-arms its deadline if it is
    /// already raised. A failed write leaves the flag untouched. Returns
    /// whether the copy happened.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        if self.generated.is_empty() {
            return false;
        }

        match clipboard.set_text(&self.generated) {
            Ok(()) => {
                self.copied.arm(now);
                info!("document copied to clipboard");
                true
            }
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                false
            }
        }
    }

    /// Advance time: clears an expired clipboard flag. Returns true if the
    /// flag was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.copied.tick(now)
    }
}
