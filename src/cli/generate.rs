//! Non-interactive document generation from command-line flags

use std::path::Path;

use anyhow::Result;
use tracing::warn;

use super::args::GenerateArgs;
use crate::prompt::{finalize, Clipboard, Finalized, PromptError};
use crate::report::{display_parameters, export_document};
use crate::utils::{
    print_banner, print_copied, print_document, print_saved, print_tip, print_warning,
};

/// Build the document described by `args`
///
/// The prompt must be non-empty after trimming; it is used untrimmed
/// otherwise, matching the interactive modes.
pub fn generate_document(args: &GenerateArgs) -> Result<Finalized, PromptError> {
    if args.prompt.trim().is_empty() {
        return Err(PromptError::EmptyPrompt);
    }
    finalize(&args.prompt, &args.answers())
}

/// Run the `generate` subcommand
///
/// # Arguments
/// * `args` - Prompt and answer flags
/// * `output` - Optional file to write the document to
/// * `copy` - Copy the document to `clipboard` as well
pub fn run_generate(
    args: &GenerateArgs,
    output: Option<&Path>,
    copy: bool,
    clipboard: &mut dyn Clipboard,
) -> Result<()> {
    let finalized = generate_document(args)?;

    if args.json_only {
        println!("{}", finalized.json);
    } else {
        print_banner(env!("CARGO_PKG_VERSION"));
        display_parameters(&finalized.document);
        print_document(&finalized.json);
    }

    if let Some(path) = output {
        export_document(&finalized.json, path)?;
        if !args.json_only {
            print_saved(path);
        }
    }

    if copy {
        match clipboard.set_text(&finalized.json) {
            Ok(()) if !args.json_only => print_copied(),
            Ok(()) => {}
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                if !args.json_only {
                    print_warning("Could not copy to the clipboard");
                }
            }
        }
    }

    if !args.json_only {
        print_tip();
    }

    Ok(())
}
