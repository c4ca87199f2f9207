//! Prompt module - questionnaire, answers and Veo3 document generation

pub mod answers;
pub mod clipboard;
pub mod document;
pub mod enhance;
pub mod error;
pub mod questions;
pub mod session;

pub use answers::AnswerSet;
pub use clipboard::{Clipboard, SystemClipboard, CLIPBOARD_HOLD};
pub use document::{default_option, finalize, Finalized, Optimization, Parameters, PromptDocument};
pub use enhance::enhance_prompt;
pub use error::PromptError;
pub use questions::{last_question, questions, Question, QuestionId, NO_PREFERENCE, QUESTIONS};
pub use session::{
    AnswerOutcome, BeginOutcome, CopyIndicator, FinalizePolicy, Session, Stage, COPY_FEEDBACK,
};
