//! Interactive prompts using dialoguer
//!
//! Line-oriented rendering of the wizard: one text prompt, then one select
//! per question in order, then the generated document.

use std::time::Instant;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};

use crate::prompt::{
    default_option, questions, BeginOutcome, Clipboard, Session, Stage,
};
use crate::report::display_parameters;
use crate::utils::{
    print_banner, print_copied, print_document, print_step_header, print_tip, print_warning,
};

/// Prompt user to confirm an action
pub fn confirm_step(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Ask for the basic prompt until a non-blank one is entered
fn ask_prompt(session: &mut Session) -> Result<()> {
    loop {
        let text: String = Input::new()
            .with_prompt("Enter your basic prompt")
            .allow_empty(true)
            .interact_text()?;

        if session.begin(&text) == BeginOutcome::Started {
            return Ok(());
        }
        print_warning("The prompt cannot be empty");
    }
}

/// Run the plain questionnaire on `session`
///
/// # Arguments
/// * `session` - Session in the `Input` stage
/// * `initial_prompt` - Prompt given on the command line, if any
/// * `copy` - Copy without asking once the document is generated
/// * `clipboard` - Clipboard collaborator for the copy action
///
/// # Returns
/// The generated JSON document
pub fn run_plain(
    session: &mut Session,
    initial_prompt: Option<&str>,
    copy: bool,
    clipboard: &mut dyn Clipboard,
) -> Result<String> {
    print_banner(env!("CARGO_PKG_VERSION"));

    let started = initial_prompt
        .map(|text| session.begin(text) == BeginOutcome::Started)
        .unwrap_or(false);
    if !started {
        ask_prompt(session)?;
    }

    let total = questions().len();
    for (i, q) in questions().iter().enumerate() {
        if session.stage() != Stage::Questions {
            break;
        }

        print_step_header(i + 1, total, q.text);
        let default = q.position(default_option(q.id)).unwrap_or(0);
        let choice = Select::new()
            .items(q.options)
            .default(default)
            .interact()?;
        session.answer(q.id, q.options[choice])?;
    }

    if session.stage() != Stage::Result {
        bail!("Questionnaire ended without generating a document");
    }

    if let Some(document) = session.document() {
        display_parameters(document);
    }
    print_document(session.generated_document());

    if copy || confirm_step("Copy to clipboard?", false)? {
        if session.copy(clipboard, Instant::now()) {
            print_copied();
        } else {
            print_warning("Could not copy to the clipboard");
        }
    }
    print_tip();

    Ok(session.generated_document().to_string())
}
