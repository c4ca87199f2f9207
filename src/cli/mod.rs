//! CLI module - argument parsing, interactive prompts and the TUI wizard

mod args;
pub mod generate;
mod prompts;
pub mod wizard;

pub use args::{Cli, Commands, GenerateArgs};
pub use generate::{generate_document, run_generate};
pub use prompts::*;
pub use wizard::{run_wizard, WizardResult, WizardState};
