//! Table summaries of the questionnaire and of generated parameters

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::prompt::{questions, PromptDocument};

/// Table listing every question with its options
pub fn question_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Question").add_attribute(Attribute::Bold),
        Cell::new("Flag").add_attribute(Attribute::Bold),
        Cell::new("Options").add_attribute(Attribute::Bold),
    ]);

    for (i, q) in questions().iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(q.text),
            Cell::new(format!("--{}", q.id)).fg(Color::Cyan),
            Cell::new(q.options.join(", ")),
        ]);
    }

    table
}

/// Print the questionnaire table
pub fn display_questions() {
    println!();
    println!(
        "    {} {}",
        style("❓").cyan(),
        style("QUESTIONS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    println!("{}", question_table());
    println!();
}

/// Table of the parameters that ended up in a document
pub fn parameter_table(document: &PromptDocument) -> Table {
    let params = &document.parameters;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Parameter").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);

    table.add_row(vec![Cell::new("⏱️  Duration"), Cell::new(&params.duration)]);
    table.add_row(vec![Cell::new("🖥️  Resolution"), Cell::new(&params.resolution)]);
    table.add_row(vec![Cell::new("🎨 Style"), Cell::new(&params.style)]);
    table.add_row(vec![
        Cell::new("🎥 Camera"),
        optional_cell(params.camera_movement.as_deref()),
    ]);
    table.add_row(vec![
        Cell::new("💡 Lighting"),
        optional_cell(params.lighting.as_deref()),
    ]);
    table.add_row(vec![Cell::new("🏃 Pace"), Cell::new(&params.pace)]);

    table
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(v) => Cell::new(v),
        None => Cell::new("(omitted)").fg(Color::DarkGrey),
    }
}

/// Print the parameter summary for a generated document
pub fn display_parameters(document: &PromptDocument) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("PARAMETERS").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    println!("{}", parameter_table(document));
    println!();
}
