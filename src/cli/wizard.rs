//! Interactive TUI wizard for the Veo3 prompt optimizer
//!
//! Full-screen rendering of a [`Session`]. The wizard owns the session and
//! forwards key presses to it as `begin`, `answer`, `copy` and `reset`
//! intents; everything shown on screen is read back from the session.
//!
//! # Screens
//!
//! 1. Input: type the basic prompt, Enter to start
//! 2. Questions: all six questions with the focused one expanded;
//!    Up/Down picks an option, Enter answers, Tab/Shift-Tab moves focus
//! 3. Result: the generated JSON with copy, save and new-prompt actions
//!
//! Q/Esc opens a quit confirmation on every screen (Esc only while typing).
//! The terminal is restored on exit and on panic.

use std::io::{stdout, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Terminal,
};
use tracing::{info, warn};

use crate::prompt::{
    default_option, questions, AnswerOutcome, BeginOutcome, Clipboard, QuestionId, Session,
    Stage,
};
use crate::report::{default_export_path, export_document};

// ============================================================================
// Core Result Types
// ============================================================================

/// Result of wizard execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    /// User quit while a document was on screen
    Generated(String),
    /// User quit before generating a document
    Quit,
}

// ============================================================================
// Action Types
// ============================================================================

/// Action to take after handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    /// Stay in the event loop
    Stay,
    /// Show the quit confirmation
    Quit,
}

// ============================================================================
// Wizard State
// ============================================================================

/// Main wizard state: the session plus screen-only navigation state
pub struct WizardState {
    /// The wizard controller
    pub session: Session,
    /// Index of the focused question
    pub focus: usize,
    /// Highlighted option per question
    pub cursors: Vec<usize>,
    /// Vertical scroll of the result screen
    pub result_scroll: u16,
    /// Transient status line (validation hints, save results)
    pub status: Option<String>,
    /// Where `s` saves the document; a timestamped file in the current
    /// directory when unset
    pub output: Option<PathBuf>,
    /// Show quit confirmation dialog
    pub show_quit_confirm: bool,
}

impl WizardState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            focus: 0,
            cursors: default_cursors(),
            result_scroll: 0,
            status: None,
            output: None,
            show_quit_confirm: false,
        }
    }

    /// The focused question id
    pub fn focused_question(&self) -> QuestionId {
        QuestionId::ALL[self.focus]
    }

    /// Highlighted option of the focused question
    pub fn highlighted_option(&self) -> &'static str {
        let q = self.focused_question().question();
        q.options[self.cursors[self.focus].min(q.options.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % QuestionId::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        let len = QuestionId::ALL.len();
        self.focus = (self.focus + len - 1) % len;
    }

    pub fn cursor_up(&mut self) {
        let cursor = &mut self.cursors[self.focus];
        *cursor = cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let last = self.focused_question().question().options.len() - 1;
        let cursor = &mut self.cursors[self.focus];
        if *cursor < last {
            *cursor += 1;
        }
    }

    /// First unanswered question after `from`, wrapping around
    pub fn next_unanswered(&self, from: usize) -> Option<usize> {
        let len = QuestionId::ALL.len();
        (1..=len)
            .map(|offset| (from + offset) % len)
            .find(|&i| !self.session.answers().contains(QuestionId::ALL[i]))
    }

    /// Answer the focused question with the highlighted option
    pub fn answer_focused(&mut self) -> Result<AnswerOutcome> {
        let id = self.focused_question();
        let value = self.highlighted_option();
        let outcome = self.session.answer(id, value)?;

        match outcome {
            AnswerOutcome::Recorded => {
                if let Some(next) = self.next_unanswered(self.focus) {
                    self.focus = next;
                }
                self.status = None;
            }
            AnswerOutcome::Finalized => {
                self.result_scroll = 0;
                self.status = None;
            }
            AnswerOutcome::Ignored => {}
        }

        Ok(outcome)
    }

    /// Start over with a fresh session and cursors
    pub fn reset(&mut self) {
        self.session.reset();
        self.focus = 0;
        self.cursors = default_cursors();
        self.result_scroll = 0;
        self.status = None;
    }

    /// Save the generated document to the output path
    pub fn save(&self) -> Result<PathBuf> {
        let path = match &self.output {
            Some(path) => path.clone(),
            None => default_export_path(&std::env::current_dir()?),
        };
        export_document(self.session.generated_document(), &path)?;
        Ok(path)
    }
}

/// Cursor positions preselecting each question's default option
fn default_cursors() -> Vec<usize> {
    questions()
        .iter()
        .map(|q| q.position(default_option(q.id)).unwrap_or(0))
        .collect()
}

// ============================================================================
// Terminal Setup/Teardown
// ============================================================================

/// Setup terminal for TUI rendering with panic-safe cleanup
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    // Install panic hook for clean terminal restoration
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        teardown_terminal();
        original_hook(panic_info);
    }));

    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = stdout().execute(LeaveAlternateScreen);
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the wizard interface
///
/// # Arguments
/// * `wizard` - Wizard state; a session already in `Questions` skips the
///   input screen
/// * `clipboard` - Clipboard collaborator for the copy action
pub fn run_wizard(wizard: &mut WizardState, clipboard: &mut dyn Clipboard) -> Result<WizardResult> {
    let mut terminal = setup_terminal()?;
    let result = run_wizard_loop(&mut terminal, wizard, clipboard);
    teardown_terminal();
    result
}

// ============================================================================
// Event Loop
// ============================================================================

/// Main wizard event loop
fn run_wizard_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    wizard: &mut WizardState,
    clipboard: &mut dyn Clipboard,
) -> Result<WizardResult> {
    loop {
        wizard.session.tick(Instant::now());

        terminal.draw(|f| render_wizard(f, wizard))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not release
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if wizard.show_quit_confirm {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            return Ok(finish(wizard));
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                            wizard.show_quit_confirm = false;
                        }
                        _ => {}
                    }
                    continue;
                }

                if handle_key(wizard, key, clipboard, Instant::now())? == StepAction::Quit {
                    wizard.show_quit_confirm = true;
                }
            }
        }
    }
}

fn finish(wizard: &WizardState) -> WizardResult {
    match wizard.session.stage() {
        Stage::Result => WizardResult::Generated(wizard.session.generated_document().to_string()),
        _ => WizardResult::Quit,
    }
}

/// Dispatch a key press to the handler of the current stage
pub fn handle_key(
    wizard: &mut WizardState,
    key: KeyEvent,
    clipboard: &mut dyn Clipboard,
    now: Instant,
) -> Result<StepAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(StepAction::Quit);
    }

    match wizard.session.stage() {
        Stage::Input => handle_input(wizard, key),
        Stage::Questions => handle_questions(wizard, key),
        Stage::Result => handle_result(wizard, key, clipboard, now),
    }
}

// ============================================================================
// Stage Handlers
// ============================================================================

fn handle_input(wizard: &mut WizardState, key: KeyEvent) -> Result<StepAction> {
    match key.code {
        KeyCode::Esc => Ok(StepAction::Quit),
        KeyCode::Enter => {
            let text = wizard.session.raw_prompt().to_string();
            match wizard.session.begin(&text) {
                BeginOutcome::Started => {
                    wizard.focus = 0;
                    wizard.status = None;
                }
                BeginOutcome::Ignored => {
                    wizard.status = Some("Enter a prompt to continue".to_string());
                }
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Backspace => {
            if let Some(prompt) = wizard.session.prompt_mut() {
                prompt.pop();
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Char(c) => {
            if let Some(prompt) = wizard.session.prompt_mut() {
                prompt.push(c);
            }
            wizard.status = None;
            Ok(StepAction::Stay)
        }
        _ => Ok(StepAction::Stay),
    }
}

fn handle_questions(wizard: &mut WizardState, key: KeyEvent) -> Result<StepAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            wizard.cursor_up();
            Ok(StepAction::Stay)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            wizard.cursor_down();
            Ok(StepAction::Stay)
        }
        KeyCode::Tab | KeyCode::Right => {
            wizard.focus_next();
            Ok(StepAction::Stay)
        }
        KeyCode::BackTab | KeyCode::Left => {
            wizard.focus_prev();
            Ok(StepAction::Stay)
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let id = wizard.focused_question();
            let outcome = wizard.answer_focused()?;
            if outcome == AnswerOutcome::Recorded && id.is_last() {
                let missing = wizard.session.answers().missing();
                if !missing.is_empty() {
                    wizard.status = Some(format!("{} question(s) left", missing.len()));
                }
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(StepAction::Quit),
        _ => Ok(StepAction::Stay),
    }
}

fn handle_result(
    wizard: &mut WizardState,
    key: KeyEvent,
    clipboard: &mut dyn Clipboard,
    now: Instant,
) -> Result<StepAction> {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => {
            if !wizard.session.copy(clipboard, now) {
                wizard.status = Some("Could not copy to the clipboard".to_string());
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            wizard.reset();
            Ok(StepAction::Stay)
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            match wizard.save() {
                Ok(path) => {
                    info!(path = %path.display(), "document saved from wizard");
                    wizard.status = Some(format!("Saved to {}", path.display()));
                }
                Err(e) => {
                    warn!(error = %e, "save failed");
                    wizard.status = Some(format!("Save failed: {}", e));
                }
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Up | KeyCode::Char('k') => {
            wizard.result_scroll = wizard.result_scroll.saturating_sub(1);
            Ok(StepAction::Stay)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let lines = wizard.session.generated_document().lines().count() as u16;
            if wizard.result_scroll + 1 < lines {
                wizard.result_scroll += 1;
            }
            Ok(StepAction::Stay)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(StepAction::Quit),
        _ => Ok(StepAction::Stay),
    }
}

// ============================================================================
// Rendering Helpers
// ============================================================================

/// Create a centered rectangle with fixed dimensions
fn centered_fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.width.saturating_sub(width) / 2;
    let y = area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Semantic color for a stage
fn stage_color(stage: Stage) -> Color {
    match stage {
        Stage::Input => Color::Magenta,
        Stage::Questions => Color::Cyan,
        Stage::Result => Color::Green,
    }
}

fn stage_title(stage: Stage) -> &'static str {
    match stage {
        Stage::Input => "Basic Prompt",
        Stage::Questions => "Refine",
        Stage::Result => "Optimized JSON Prompt",
    }
}

// ============================================================================
// Main Rendering Functions
// ============================================================================

/// Render the complete wizard UI with persistent shell layout
fn render_wizard(f: &mut Frame, wizard: &WizardState) {
    let area = f.area();

    let logo_height = 4u16;
    let hint_height = 2u16;

    let box_width = 72u16;
    let ideal_box_height = 24u16;
    let box_height =
        ideal_box_height.min(area.height.saturating_sub(logo_height + hint_height + 2));

    // Center the whole unit vertically
    let total_height = logo_height + box_height + hint_height;
    let x = area.width.saturating_sub(box_width) / 2;
    let y = area.height.saturating_sub(total_height) / 2;

    let logo_area = Rect::new(x, y, box_width.min(area.width), logo_height).intersection(area);
    render_logo(f, logo_area);

    let box_y = y + logo_height;
    let box_area =
        Rect::new(x, box_y, box_width.min(area.width), box_height.max(10)).intersection(area);
    f.render_widget(Clear, box_area);

    let stage = wizard.session.stage();
    let color = stage_color(stage);
    let step = match stage {
        Stage::Input => 1,
        Stage::Questions => 2,
        Stage::Result => 3,
    };
    let title_text = format!(" Step {}/3 \u{00b7} {} ", step, stage_title(stage));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title_text)
        .title_style(Style::default().fg(color).bold())
        .title_alignment(Alignment::Center);

    let inner = block.inner(box_area);
    f.render_widget(block, box_area);

    match stage {
        Stage::Input => render_input(f, inner, wizard),
        Stage::Questions => render_questions(f, inner, wizard),
        Stage::Result => render_result(f, inner, wizard),
    }

    // Answered count on the bottom border while asking questions
    if stage == Stage::Questions {
        let ct = format!(
            " {}/{} answered ",
            wizard.session.answers().len(),
            QuestionId::ALL.len()
        );
        let ct_len = ct.len() as u16;
        let ct_area = Rect::new(
            box_area.x + box_area.width.saturating_sub(ct_len + 1),
            (box_area.y + box_area.height).saturating_sub(1),
            ct_len.min(box_area.width),
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(ct, Style::default().fg(Color::DarkGray))),
            ct_area,
        );
    }

    let hint_y = box_area.y + box_area.height;
    let hint_area =
        Rect::new(x, hint_y, box_width.min(area.width), hint_height).intersection(area);
    render_help_bar(f, hint_area, wizard);

    if wizard.show_quit_confirm {
        render_quit_confirm_overlay(f);
    }
}

/// Render the title block
fn render_logo(f: &mut Frame, area: Rect) {
    let logo_lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("✨ ", Style::default().fg(Color::Magenta).bold()),
            Span::styled(
                "Veo3 Prompt Optimizer",
                Style::default().fg(Color::White).bold(),
            ),
        ]),
        Line::from(Span::styled(
            "Transform basic prompts into optimized JSON for Veo3",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let logo_paragraph = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_paragraph, area);
}

/// Render help bar with stage-appropriate shortcuts, plus the status line
fn render_help_bar(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let desc = |d: &'static str| Span::styled(d, Style::default().fg(Color::DarkGray));

    let spans = match wizard.session.stage() {
        Stage::Input => vec![
            key("  Type"),
            desc(" prompt  "),
            key("Enter"),
            desc(" optimize  "),
            key("Esc"),
            desc(" quit"),
        ],
        Stage::Questions => vec![
            key("  ↑↓"),
            desc(" option  "),
            key("Enter"),
            desc(" answer  "),
            key("Tab"),
            desc(" question  "),
            key("Q/Esc"),
            desc(" quit"),
        ],
        Stage::Result => vec![
            key("  C"),
            desc(" copy  "),
            key("S"),
            desc(" save  "),
            key("N"),
            desc(" new prompt  "),
            key("↑↓"),
            desc(" scroll  "),
            key("Q/Esc"),
            desc(" quit"),
        ],
    };

    let status = wizard
        .status
        .as_deref()
        .map(|s| Line::from(Span::styled(s.to_string(), Style::default().fg(Color::Yellow))))
        .unwrap_or_default();

    let paragraph = Paragraph::new(vec![Line::from(spans), status]).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Render quit confirmation overlay
fn render_quit_confirm_overlay(f: &mut Frame) {
    let popup = centered_fixed_rect(40, 8, f.area());
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Quit? ")
        .title_style(Style::default().fg(Color::Red).bold())
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Are you sure you want to quit?",
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("      ", Style::default()),
            Span::styled("Y", Style::default().fg(Color::Cyan)),
            Span::styled(" yes  ", Style::default().fg(Color::DarkGray)),
            Span::styled("N", Style::default().fg(Color::Cyan)),
            Span::styled(" no", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    f.render_widget(Paragraph::new(content), inner);
}

// ============================================================================
// Stage Renderers
// ============================================================================

fn render_input(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let color = stage_color(Stage::Input);
    let prompt = wizard.session.raw_prompt();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let desc = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Enter your basic prompt",
            Style::default().fg(Color::DarkGray).bold(),
        )),
    ]);
    f.render_widget(desc, chunks[0]);

    let text = if prompt.is_empty() {
        Line::from(vec![
            Span::styled("  █", Style::default().fg(color)),
            Span::styled(
                " e.g., A majestic eagle soaring over snow-capped mountains at sunset",
                Style::default().fg(Color::DarkGray).italic(),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(format!("  {}", prompt), Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(color)),
        ])
    };
    let input = Paragraph::new(text).wrap(Wrap { trim: false });
    f.render_widget(input, chunks[1]);
}

fn render_questions(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let color = stage_color(Stage::Questions);
    let answers = wizard.session.answers();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(QuestionId::ALL.len() as u16 + 1),
            Constraint::Length(2),
            Constraint::Min(2),
        ])
        .split(area);

    let prompt = Paragraph::new(Line::from(vec![
        Span::styled("  Prompt: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            wizard.session.raw_prompt().to_string(),
            Style::default().fg(Color::White),
        ),
    ]));
    f.render_widget(prompt, chunks[0]);

    // Overview of every question, answered ones dimmed with their choice
    let overview: Vec<Line> = questions()
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let focused = i == wizard.focus;
            let marker = if focused { "▸" } else { " " };
            let (check, text_style) = match answers.get(q.id) {
                Some(_) if !focused => ("✓", Style::default().fg(Color::DarkGray)),
                Some(_) => ("✓", Style::default().fg(color).bold()),
                None if focused => (" ", Style::default().fg(color).bold()),
                None => (" ", Style::default().fg(Color::White)),
            };
            let mut spans = vec![
                Span::styled(format!(" {} ", marker), Style::default().fg(color)),
                Span::styled(format!("{} ", i + 1), Style::default().fg(Color::Magenta)),
                Span::styled(format!("{} ", check), Style::default().fg(Color::Green)),
                Span::styled(q.text, text_style),
            ];
            if let Some(value) = answers.get(q.id) {
                spans.push(Span::styled(
                    format!("  {}", value),
                    Style::default().fg(Color::Green),
                ));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(overview), chunks[1]);

    let q = wizard.focused_question().question();
    let header = Paragraph::new(Line::from(Span::styled(
        format!("  {}", q.text),
        Style::default().fg(Color::White).bold(),
    )));
    f.render_widget(header, chunks[2]);

    let selected = wizard.cursors[wizard.focus];
    let chosen = answers.get(q.id);
    let items: Vec<ListItem> = q
        .options
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == selected {
                Style::default().fg(Color::Black).bg(color).bold()
            } else if chosen == Some(*opt) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::White)
            };
            let mark = if chosen == Some(*opt) { "●" } else { "○" };
            ListItem::new(format!("  {} {}", mark, opt)).style(style)
        })
        .collect();
    let list = List::new(items);
    let mut list_state = ListState::default();
    list_state.select(Some(selected));
    f.render_stateful_widget(list, chunks[3], &mut list_state);
}

fn render_result(f: &mut Frame, area: Rect, wizard: &WizardState) {
    let color = stage_color(Stage::Result);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(area);

    let copy_label = if wizard.session.clipboard_flag() {
        Span::styled("  ✓ Copied!", Style::default().fg(Color::Green).bold())
    } else {
        Span::styled("  Press C to copy", Style::default().fg(Color::DarkGray))
    };
    f.render_widget(Paragraph::new(Line::from(copy_label)), chunks[0]);

    let json_lines: Vec<Line> = wizard
        .session
        .generated_document()
        .lines()
        .map(|l| Line::from(Span::styled(format!("  {}", l), Style::default().fg(color))))
        .collect();
    let json = Paragraph::new(json_lines).scroll((wizard.result_scroll, 0));
    f.render_widget(json, chunks[1]);

    let tip = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  💡 Tip: ", Style::default().fg(Color::Blue).bold()),
            Span::styled(
                "This JSON is optimized for Veo3 with enhanced parameters for quality, consistency, and motion smoothness.",
                Style::default().fg(Color::Blue),
            ),
        ]),
    ])
    .wrap(Wrap { trim: false });
    f.render_widget(tip, chunks[2]);
}
