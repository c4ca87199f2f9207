//! Terminal styling utilities for the line-oriented modes

use console::{style, Emoji};
use std::path::Path;

// Emoji icons with fallbacks for terminals that don't support them
pub static SPARKLES: Emoji<'_, '_> = Emoji("✨ ", ">> ");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static CLIPBOARD: Emoji<'_, '_> = Emoji("📋 ", "");
pub static TIP: Emoji<'_, '_> = Emoji("💡 ", "Tip: ");

/// Print the application banner
pub fn print_banner(version: &str) {
    println!();
    println!(
        "    {}{}",
        SPARKLES,
        style("Veo3 Prompt Optimizer").magenta().bold()
    );
    println!(
        "    {}",
        style("Transform basic prompts into optimized JSON for Veo3").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: usize, total: usize, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("QUESTION {}/{}", step_num, total)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", style("⚠").yellow().bold(), style(message).yellow());
}

/// Print where a document was saved
pub fn print_saved(path: &Path) {
    println!(
        "    {}Saved to {}",
        SAVE,
        style(path.display()).cyan()
    );
}

/// Print the copy confirmation
pub fn print_copied() {
    println!("    {}{}", CLIPBOARD, style("Copied!").green().bold());
}

/// Print the generated JSON document
pub fn print_document(json: &str) {
    println!();
    println!("{}", style(json).green());
    println!();
}

/// Print the closing tip about the document
pub fn print_tip() {
    println!(
        "    {}{}",
        TIP,
        style("This JSON is optimized for Veo3 with enhanced parameters for quality, consistency, and motion smoothness.").dim()
    );
    println!();
}
