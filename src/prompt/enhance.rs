//! Enhanced prompt composition
//!
//! Appends descriptive clauses derived from the answers to the user's raw
//! prompt, in a fixed order: style, camera movement, lighting, pacing.

use super::answers::AnswerSet;
use super::questions::QuestionId;

/// Compose the enhanced prompt from the raw prompt and the answers.
///
/// Style, camera and lighting clauses are skipped when unanswered or
/// "No preference". The pacing clause is added whenever pace is answered.
/// The camera clause extends the style sentence (" with ...") instead of
/// starting a new one.
pub fn enhance_prompt(raw_prompt: &str, answers: &AnswerSet) -> String {
    let mut enhanced = raw_prompt.to_string();

    if let Some(style) = answers.preferred(QuestionId::Style) {
        enhanced.push_str(&format!(". Shot in {} style", style.to_lowercase()));
    }

    if let Some(camera) = answers.preferred(QuestionId::Camera) {
        enhanced.push_str(&format!(" with {}", camera.to_lowercase()));
    }

    if let Some(lighting) = answers.preferred(QuestionId::Lighting) {
        enhanced.push_str(&format!(". Lighting: {}", lighting.to_lowercase()));
    }

    if let Some(pace) = answers.get(QuestionId::Pace) {
        enhanced.push_str(&format!(". Pacing: {}", pace.to_lowercase()));
    }

    enhanced
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(QuestionId, &str)]) -> AnswerSet {
        AnswerSet::try_from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn test_no_answers_returns_raw_prompt() {
        assert_eq!(enhance_prompt("A cat", &AnswerSet::new()), "A cat");
    }

    #[test]
    fn test_reference_example() {
        let set = answers(&[
            (QuestionId::Style, "Cinematic"),
            (QuestionId::Camera, "No preference"),
            (QuestionId::Lighting, "Golden hour"),
            (QuestionId::Pace, "Slow and contemplative"),
            (QuestionId::Duration, "10 seconds"),
            (QuestionId::Resolution, "1080p"),
        ]);
        assert_eq!(
            enhance_prompt("A cat", &set),
            "A cat. Shot in cinematic style. Lighting: golden hour. Pacing: slow and contemplative"
        );
    }

    #[test]
    fn test_camera_clause_joins_style_sentence() {
        let set = answers(&[
            (QuestionId::Style, "Documentary"),
            (QuestionId::Camera, "Aerial view"),
        ]);
        assert_eq!(
            enhance_prompt("Surfers at dawn", &set),
            "Surfers at dawn. Shot in documentary style with aerial view"
        );
    }

    #[test]
    fn test_duration_and_resolution_do_not_change_prompt() {
        let set = answers(&[
            (QuestionId::Duration, "30 seconds"),
            (QuestionId::Resolution, "4K"),
        ]);
        assert_eq!(enhance_prompt("Rain", &set), "Rain");
    }

    #[test]
    fn test_raw_prompt_is_not_trimmed() {
        let set = answers(&[(QuestionId::Pace, "Fast and energetic")]);
        assert_eq!(
            enhance_prompt("  City lights ", &set),
            "  City lights . Pacing: fast and energetic"
        );
    }
}
