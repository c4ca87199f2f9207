//! Tests for the wizard controller state machine
//!
//! Covers stage transitions, the begin gate, finalization on the last
//! question, reset, and the copy indicator timing.

mod common;

use std::time::{Duration, Instant};

use common::{
    finished_session, reference_answers, started_session, FailingClipboard, RecordingClipboard,
};
use veo_prompt::prompt::{
    AnswerOutcome, BeginOutcome, FinalizePolicy, QuestionId, Session, Stage, COPY_FEEDBACK,
};

// ============================================================================
// begin
// ============================================================================

#[test]
fn test_new_session_starts_empty_at_input() {
    let session = Session::new();

    assert_eq!(session.stage(), Stage::Input);
    assert_eq!(session.raw_prompt(), "");
    assert!(session.answers().is_empty());
    assert_eq!(session.generated_document(), "");
    assert!(session.document().is_none());
    assert!(!session.clipboard_flag());
}

#[test]
fn test_begin_with_text_moves_to_questions() {
    for prompt in ["A cat", "  padded  ", "x", "Ünïcödé 🎬"] {
        let mut session = Session::new();
        assert_eq!(session.begin(prompt), BeginOutcome::Started, "{:?}", prompt);
        assert_eq!(session.stage(), Stage::Questions);
        assert_eq!(session.raw_prompt(), prompt);
        assert!(session.answers().is_empty());
    }
}

#[test]
fn test_begin_with_blank_prompt_is_noop() {
    for prompt in ["", " ", "\t\n  ", "\r\n"] {
        let mut session = Session::new();
        assert_eq!(session.begin(prompt), BeginOutcome::Ignored, "{:?}", prompt);
        assert_eq!(session.stage(), Stage::Input);
    }
}

#[test]
fn test_begin_outside_input_is_ignored() {
    let mut session = started_session("First");
    session.answer(QuestionId::Style, "Animated").unwrap();

    assert_eq!(session.begin("Second"), BeginOutcome::Ignored);
    assert_eq!(session.raw_prompt(), "First");
    assert_eq!(session.answers().len(), 1);
}

// ============================================================================
// answer / finalize
// ============================================================================

#[test]
fn test_non_final_answers_stay_in_questions() {
    let mut session = started_session("A cat");

    for id in &QuestionId::ALL[..5] {
        let value = id.question().options[1];
        let outcome = session.answer(*id, value).unwrap();
        assert_eq!(outcome, AnswerOutcome::Recorded);
        assert_eq!(session.stage(), Stage::Questions);
    }
    assert_eq!(session.answers().len(), 5);
}

#[test]
fn test_last_answer_finalizes_with_updated_answers() {
    let mut session = started_session("A cat");
    for (id, value) in reference_answers() {
        session.answer(id, value).unwrap();
    }

    assert_eq!(session.stage(), Stage::Result);
    let document = session.document().unwrap();
    assert_eq!(
        document.prompt,
        "A cat. Shot in cinematic style. Lighting: golden hour. Pacing: slow and contemplative"
    );
    // The resolution answer given last is part of the document
    assert_eq!(document.parameters.resolution, "1080p");
    assert!(session.generated_document().starts_with("{\n  \"model\": \"veo3\""));
}

#[test]
fn test_last_question_finalizes_even_with_gaps() {
    let mut session = started_session("Skyline");
    let outcome = session.answer(QuestionId::Resolution, "4K").unwrap();

    assert_eq!(outcome, AnswerOutcome::Finalized);
    assert_eq!(session.stage(), Stage::Result);

    let params = &session.document().unwrap().parameters;
    assert_eq!(params.resolution, "4K");
    assert_eq!(params.duration, "10 seconds");
    assert_eq!(params.style, "Cinematic");
    assert_eq!(params.pace, "Medium pace");
    assert!(params.camera_movement.is_none());
    assert!(params.lighting.is_none());
}

#[test]
fn test_require_all_policy_defers_finalization() {
    let mut session = Session::with_policy(FinalizePolicy::RequireAll);
    session.begin("Skyline");

    let outcome = session.answer(QuestionId::Resolution, "4K").unwrap();
    assert_eq!(outcome, AnswerOutcome::Recorded);
    assert_eq!(session.stage(), Stage::Questions);

    for id in &QuestionId::ALL[..4] {
        let outcome = session.answer(*id, id.question().options[0]).unwrap();
        assert_eq!(outcome, AnswerOutcome::Recorded);
    }
    assert_eq!(session.stage(), Stage::Questions);
}

#[test]
fn test_require_all_finalizes_on_the_completing_answer() {
    let mut session = Session::with_policy(FinalizePolicy::RequireAll);
    session.begin("Skyline");
    session.answer(QuestionId::Resolution, "4K").unwrap();
    for id in &QuestionId::ALL[..4] {
        session.answer(*id, id.question().options[0]).unwrap();
    }

    // Pace is the only gap left and is not the last question
    let outcome = session.answer(QuestionId::Pace, "Fast and energetic").unwrap();
    assert_eq!(outcome, AnswerOutcome::Finalized);
    assert_eq!(session.stage(), Stage::Result);

    let params = &session.document().unwrap().parameters;
    assert_eq!(params.resolution, "4K");
    assert_eq!(params.pace, "Fast and energetic");
}

#[test]
fn test_undeclared_option_is_ignored() {
    let mut session = started_session("Forest");

    let outcome = session.answer(QuestionId::Resolution, "8K").unwrap();
    assert_eq!(outcome, AnswerOutcome::Ignored);
    assert_eq!(session.stage(), Stage::Questions);
    assert!(session.answers().is_empty());
}

#[test]
fn test_answer_before_begin_is_ignored() {
    let mut session = Session::new();
    let outcome = session.answer(QuestionId::Style, "Artistic").unwrap();

    assert_eq!(outcome, AnswerOutcome::Ignored);
    assert!(session.answers().is_empty());
}

#[test]
fn test_answer_after_result_is_ignored() {
    let mut session = finished_session("Forest");
    let before = session.generated_document().to_string();

    let outcome = session.answer(QuestionId::Style, "Artistic").unwrap();
    assert_eq!(outcome, AnswerOutcome::Ignored);
    assert_eq!(session.generated_document(), before);
}

// ============================================================================
// reset
// ============================================================================

#[test]
fn test_reset_restores_initial_state_from_every_stage() {
    let mut clipboard = RecordingClipboard::default();

    let mut sessions = vec![Session::new(), started_session("Mid"), finished_session("Done")];
    sessions[2].copy(&mut clipboard, Instant::now());
    assert!(sessions[2].clipboard_flag());

    for mut session in sessions {
        session.reset();
        assert_eq!(session.stage(), Stage::Input);
        assert_eq!(session.raw_prompt(), "");
        assert!(session.answers().is_empty());
        assert_eq!(session.generated_document(), "");
        assert!(!session.clipboard_flag());

        // Idempotent
        session.reset();
        assert_eq!(session.stage(), Stage::Input);
    }
}

#[test]
fn test_reset_keeps_finalize_policy() {
    let mut session = Session::with_policy(FinalizePolicy::RequireAll);
    session.begin("Anything");
    session.reset();
    assert_eq!(session.policy(), FinalizePolicy::RequireAll);
}

// ============================================================================
// copy
// ============================================================================

#[test]
fn test_copy_writes_document_and_raises_flag() {
    let mut session = finished_session("Harbor");
    let mut clipboard = RecordingClipboard::default();

    assert!(session.copy(&mut clipboard, Instant::now()));
    assert!(session.clipboard_flag());
    assert_eq!(clipboard.writes, vec![session.generated_document().to_string()]);
}

#[test]
fn test_copy_flag_clears_after_two_seconds() {
    let mut session = finished_session("Harbor");
    let mut clipboard = RecordingClipboard::default();
    let start = Instant::now();

    session.copy(&mut clipboard, start);
    assert!(!session.tick(start + Duration::from_millis(1999)));
    assert!(session.clipboard_flag());

    assert!(session.tick(start + COPY_FEEDBACK));
    assert!(!session.clipboard_flag());
}

#[test]
fn test_second_copy_rearms_deadline() {
    let mut session = finished_session("Harbor");
    let mut clipboard = RecordingClipboard::default();
    let start = Instant::now();

    session.copy(&mut clipboard, start);
    let second = start + Duration::from_millis(1500);
    session.copy(&mut clipboard, second);

    // Flag stays up continuously past the first deadline
    for ms in [1600, 2000, 2500, 3400] {
        session.tick(start + Duration::from_millis(ms));
        assert!(session.clipboard_flag(), "flag dropped at {} ms", ms);
    }

    assert_eq!(
        session.copy_indicator().expires_at(),
        Some(second + COPY_FEEDBACK)
    );
    session.tick(second + COPY_FEEDBACK);
    assert!(!session.clipboard_flag());
    assert_eq!(clipboard.writes.len(), 2);
}

#[test]
fn test_failed_copy_does_not_raise_flag() {
    let mut session = finished_session("Harbor");
    let mut clipboard = FailingClipboard::default();

    assert!(!session.copy(&mut clipboard, Instant::now()));
    assert!(!session.clipboard_flag());
    assert_eq!(clipboard.attempts, 1);
}

#[test]
fn test_copy_without_document_does_nothing() {
    let mut session = started_session("Harbor");
    let mut clipboard = RecordingClipboard::default();

    assert!(!session.copy(&mut clipboard, Instant::now()));
    assert!(clipboard.writes.is_empty());
    assert!(!session.clipboard_flag());
}
