//! Audio checker: dialogue lines and sound effects.
//!
//! Dialogue is spoken inside the clip, so each line is also checked against the
//! clip length using a fixed speaking rate.

use std::sync::OnceLock;

use regex::Regex;

use super::rules::WORDS_PER_SECOND;
use super::{caps_lock_words, one_decimal, ValidationFinding};
use crate::prompt::model::{is_blank, DialogueLine, PromptContent};

/// Whitespace-separated word count, counting the empty edges a leading or
/// trailing run of whitespace produces.
fn word_count(speech: &str) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace regex should compile"));
    re.split(speech).count()
}

fn check_dialogue_line(
    line: &DialogueLine,
    index: usize,
    video_length: Option<f64>,
) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();
    let n = index + 1;
    let speech_field = format!("prompt.audio.dialogue[{index}].speech");

    if is_blank(line.character.as_deref()) {
        findings.push(ValidationFinding::error(
            format!("prompt.audio.dialogue[{index}].character"),
            format!("Dialogue line {n}: Character name is required"),
        ));
    }

    let speech = match line.speech.as_deref() {
        Some(speech) if !speech.trim().is_empty() => speech,
        _ => {
            findings.push(ValidationFinding::error(
                speech_field,
                format!("Dialogue line {n}: Speech text is required"),
            ));
            return findings;
        }
    };

    if speech.contains('"') || speech.contains('\'') {
        findings.push(ValidationFinding::warning(
            speech_field.clone(),
            format!(
                "Dialogue line {n}: Don't include quotation marks - Veo will format them automatically"
            ),
        ));
    }

    let caps = caps_lock_words(speech);
    if !caps.is_empty() {
        findings.push(ValidationFinding::warning(
            speech_field.clone(),
            format!(
                "Dialogue line {n}: Avoid caps lock words ({}) - may cause spelling issues",
                caps.join(", ")
            ),
        ));
    }

    if let Some(length) = video_length {
        let words = word_count(speech);
        let estimated = words as f64 / WORDS_PER_SECOND;
        if estimated > length {
            findings.push(ValidationFinding::warning(
                speech_field,
                format!(
                    "Dialogue line {n}: Speech may be too long ({words} words ≈ {}s) for {length}s video",
                    one_decimal(estimated)
                ),
            ));
        }
    }

    findings
}

/// Checks the audio block against the document's raw video length.
pub fn check(content: &PromptContent, video_length: Option<f64>) -> Vec<ValidationFinding> {
    let Some(audio) = &content.audio else {
        return Vec::new();
    };

    let mut findings: Vec<ValidationFinding> = audio
        .dialogue
        .iter()
        .enumerate()
        .flat_map(|(i, line)| check_dialogue_line(line, i, video_length))
        .collect();

    for (i, sfx) in audio.sound_effects.iter().enumerate() {
        if sfx.trim().is_empty() {
            findings.push(ValidationFinding::warning(
                format!("prompt.audio.sound_effects[{i}]"),
                format!("Sound effect {} is empty", i + 1),
            ));
        }
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::model::Audio;
    use crate::validation::Severity;

    fn with_audio(audio: Audio) -> PromptContent {
        PromptContent::new().with_audio(audio)
    }

    #[test]
    fn test_absent_audio_is_silent() {
        assert!(check(&PromptContent::new(), Some(8.0)).is_empty());
    }

    #[test]
    fn test_missing_character_and_speech() {
        let content = with_audio(Audio::new().with_dialogue(DialogueLine::blank()));
        let findings = check(&content, Some(8.0));
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].field, "prompt.audio.dialogue[0].character");
        assert_eq!(findings[1].field, "prompt.audio.dialogue[0].speech");
        assert!(findings.iter().all(|f| f.severity == Severity::Error));
    }

    #[test]
    fn test_caps_lock_speech_is_warning() {
        let content = with_audio(
            Audio::new().with_dialogue(DialogueLine::new("Guard", "STOP RIGHT THERE")),
        );
        let findings = check(&content, Some(8.0));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Warning);
        assert_eq!(
            findings[0].message,
            "Dialogue line 1: Avoid caps lock words (STOP, RIGHT, THERE) - may cause spelling issues"
        );
    }

    #[test]
    fn test_quotes_are_flagged() {
        let content = with_audio(
            Audio::new()
                .with_dialogue(DialogueLine::new("Ana", "\"Hello\""))
                .with_dialogue(DialogueLine::new("Ben", "it's late")),
        );
        let findings = check(&content, Some(8.0));
        assert_eq!(findings.len(), 2);
        assert!(findings[1]
            .message
            .starts_with("Dialogue line 2: Don't include quotation marks"));
    }

    #[test]
    fn test_speech_too_long_for_clip() {
        // 11 words / 2.5 = 4.4s > 4s
        let speech = "we have to leave this place before the tide comes back";
        let content = with_audio(Audio::new().with_dialogue(DialogueLine::new("Ana", speech)));

        let findings = check(&content, Some(4.0));
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].message,
            "Dialogue line 1: Speech may be too long (11 words ≈ 4.4s) for 4s video"
        );

        assert!(check(&content, Some(6.0)).is_empty());
        assert!(check(&content, None).is_empty());
    }

    #[test]
    fn test_word_count_edges() {
        assert_eq!(word_count("one two  three"), 3);
        assert_eq!(word_count(" padded"), 2);
        assert_eq!(word_count("single"), 1);
    }

    #[test]
    fn test_blank_sound_effects() {
        let content = with_audio(
            Audio::new()
                .with_sound_effect("Thunder rolling")
                .with_sound_effect("   ")
                .with_ambient_noise(""),
        );
        let findings = check(&content, Some(8.0));
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].field, "prompt.audio.sound_effects[1]");
        assert_eq!(findings[0].message, "Sound effect 2 is empty");
    }
}
