//! veo-prompt: Veo3 Prompt Optimizer CLI
//!
//! Turns a basic video prompt into an optimized Veo3 JSON document, either
//! through the full-screen wizard, plain terminal prompts, or flags.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use veo_prompt::cli::{run_generate, run_plain, run_wizard, Cli, Commands, WizardResult, WizardState};
use veo_prompt::prompt::{Clipboard, Session, SystemClipboard, CLIPBOARD_HOLD};
use veo_prompt::report::{display_questions, export_document};
use veo_prompt::utils::{init_logging, print_copied, print_document, print_saved, print_warning};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.log_dir.as_deref());
    info!(version = env!("CARGO_PKG_VERSION"), "veo-prompt starting");

    let mut clipboard = SystemClipboard::new();

    // Handle subcommands
    if let Some(command) = &cli.command {
        clipboard.hold_for(CLIPBOARD_HOLD);

        return match command {
            Commands::Generate(args) => {
                run_generate(args, cli.output.as_deref(), cli.copy, &mut clipboard)
            }
            Commands::Questions => {
                display_questions();
                Ok(())
            }
        };
    }

    let mut session = Session::with_policy(cli.finalize_policy());

    let generated = if cli.plain {
        clipboard.hold_for(CLIPBOARD_HOLD);
        Some(run_plain(
            &mut session,
            cli.prompt.as_deref(),
            cli.copy,
            &mut clipboard,
        )?)
    } else {
        // A blank --prompt leaves the wizard on the input screen
        if let Some(prompt) = &cli.prompt {
            session.begin(prompt);
        }

        let mut wizard = WizardState::new(session);
        wizard.output = cli.output.clone();

        match run_wizard(&mut wizard, &mut clipboard)? {
            WizardResult::Generated(json) => {
                print_document(&json);
                if cli.copy {
                    clipboard.hold_for(CLIPBOARD_HOLD);
                    match clipboard.set_text(&json) {
                        Ok(()) => print_copied(),
                        Err(e) => {
                            warn!(error = %e, "clipboard write failed");
                            print_warning("Could not copy to the clipboard");
                        }
                    }
                }
                Some(json)
            }
            WizardResult::Quit => {
                println!("Cancelled by user.");
                None
            }
        }
    };

    if let (Some(json), Some(path)) = (generated, &cli.output) {
        export_document(&json, path)?;
        print_saved(path);
    }

    Ok(())
}
