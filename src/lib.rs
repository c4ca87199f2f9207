//! veo-prompt: Veo3 Prompt Optimizer Library
//!
//! A small wizard that turns a basic video prompt and six multiple-choice
//! answers into an optimized JSON configuration for the Veo3 model.

pub mod cli;
pub mod prompt;
pub mod report;
pub mod utils;
