//! Prompt validation engine.
//!
//! [`validate`] runs every field-group checker over a document and collects
//! their findings in a fixed order: video settings, core formula,
//! cinematography, audio, sequence, then the negative-prompt hint. A result is
//! valid iff no finding has [`Severity::Error`].
//!
//! The engine is pure: no I/O, no shared state, and it never fails on malformed
//! values. Documents whose top-level shape is not recognized produce a single
//! `general` error instead.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use veoprompt::validation::validate_value;
//!
//! let result = validate_value(&json!({ "video_length": 8 }));
//! assert!(!result.is_valid);
//! assert_eq!(result.findings.len(), 1);
//! assert_eq!(result.findings[0].field, "general");
//! ```

pub mod audio;
pub mod cinematography;
pub mod core_formula;
pub mod rules;
pub mod sequence;
pub mod settings;
pub mod tabs;
pub mod timestamp;

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::PromptResult;
use crate::prompt::model::{is_blank, PromptContent, PromptDocument};

pub use tabs::{tab_status, Section, TabStatus, TabStatuses};
pub use timestamp::{parse_range, parse_timestamp, TimeRange, TimestampForm};

// =============================================================================
// FINDINGS
// =============================================================================

/// How much a finding matters to the downstream generation API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violates a hard requirement; blocks submission.
    Error,
    /// Usable, but likely to produce a poor result.
    Warning,
    /// Advisory only.
    Info,
}

impl Severity {
    /// Errors and warnings count as signal; infos do not.
    pub fn is_signal(self) -> bool {
        matches!(self, Severity::Error | Severity::Warning)
    }
}

/// One reported issue or note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationFinding {
    /// Dotted/bracketed path into the document, e.g. `prompt.sequence[2].timestamp`.
    pub field: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationFinding {
    pub fn new(field: impl Into<String>, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            severity,
        }
    }

    pub fn error(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, Severity::Error)
    }

    pub fn warning(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, Severity::Warning)
    }

    pub fn info(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, message, Severity::Info)
    }

    /// Builder section owning this finding's field; `None` for `general` and `prompt`.
    pub fn section(&self) -> Option<Section> {
        Section::for_field(&self.field)
    }
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no finding is an error.
    pub is_valid: bool,
    /// Findings of every severity, in checker order.
    pub findings: Vec<ValidationFinding>,
}

impl ValidationResult {
    /// Builds a result, deriving `is_valid` from the findings.
    pub fn from_findings(findings: Vec<ValidationFinding>) -> Self {
        let is_valid = !findings.iter().any(|f| f.severity == Severity::Error);
        Self { is_valid, findings }
    }

    fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    pub fn has_errors(&self) -> bool {
        !self.is_valid
    }

    /// Findings attached to fields under `prefix`.
    pub fn findings_for<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a ValidationFinding> + 'a {
        self.findings
            .iter()
            .filter(move |f| f.field.starts_with(prefix))
    }

    /// Short badge text: "Ready", "2 errors, 1 warning", "3 info".
    pub fn summary(&self) -> String {
        let errors = self.error_count();
        let warnings = self.warning_count();
        let infos = self.info_count();

        if errors == 0 && warnings == 0 && infos <= 1 {
            return "Ready".to_string();
        }

        let plural = |n: usize| if n > 1 { "s" } else { "" };
        let mut parts = Vec::new();
        if errors > 0 {
            parts.push(format!("{} error{}", errors, plural(errors)));
        }
        if warnings > 0 {
            parts.push(format!("{} warning{}", warnings, plural(warnings)));
        }

        if parts.is_empty() {
            format!("{} info", infos)
        } else {
            parts.join(", ")
        }
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

const UNRECOGNIZED_MESSAGE: &str = "Unrecognized prompt structure. Please use the Veo 3.1 format with video_length, aspect_ratio, and prompt fields.";

const READY_MESSAGE: &str = "Prompt structure looks good! Ready for Veo 3.1 generation.";

const NO_PHRASES_MESSAGE: &str = "Consider using descriptive language instead of multiple \"no X\" phrases (e.g., \"desolate landscape\" instead of \"no buildings\")";

fn unrecognized() -> ValidationResult {
    ValidationResult::from_findings(vec![ValidationFinding::error(
        "general",
        UNRECOGNIZED_MESSAGE,
    )])
}

/// Validates an untyped candidate document.
///
/// The object must carry the `video_length`, `aspect_ratio` and `prompt` keys
/// (their values are not checked here). Anything else yields exactly one
/// `general` error and no other checks run. Wrongly typed settings and `null`
/// lists load and reach the checkers; a wrongly typed content field (for
/// instance a numeric `subject`) still degrades to the `general` error.
pub fn validate_value(candidate: &Value) -> ValidationResult {
    let recognized = candidate.as_object().is_some_and(|object| {
        rules::REQUIRED_TOP_LEVEL_KEYS
            .iter()
            .all(|key| object.contains_key(*key))
    });
    if !recognized {
        debug!("unrecognized prompt structure: missing top-level keys");
        return unrecognized();
    }

    match PromptDocument::deserialize(candidate) {
        Ok(document) => validate(&document),
        Err(err) => {
            debug!(error = %err, "unrecognized prompt structure: schema mismatch");
            unrecognized()
        }
    }
}

/// Parses JSON text and validates it.
///
/// Malformed JSON is a caller-side failure and comes back as
/// [`PromptError::Serialization`](crate::PromptError::Serialization), never as a finding.
pub fn validate_json_str(json: &str) -> PromptResult<ValidationResult> {
    let candidate: Value = serde_json::from_str(json)?;
    Ok(validate_value(&candidate))
}

/// Validates a typed document.
pub fn validate(document: &PromptDocument) -> ValidationResult {
    let mut findings = settings::check(document);

    let Some(content) = &document.prompt else {
        findings.push(ValidationFinding::error("prompt", "Prompt object is required"));
        debug!("prompt content missing");
        return ValidationResult::from_findings(findings);
    };

    let video_length = document.video_length;
    let stages: [(&str, Vec<ValidationFinding>); 5] = [
        ("core_formula", core_formula::check(content)),
        ("cinematography", cinematography::check(content)),
        ("audio", audio::check(content, video_length)),
        ("sequence", sequence::check(content, video_length)),
        ("negative_prompt", check_negative_prompt(content)),
    ];
    for (stage, stage_findings) in stages {
        trace!(stage, count = stage_findings.len(), "checker finished");
        findings.extend(stage_findings);
    }

    if !findings.iter().any(|f| f.severity.is_signal()) {
        findings.push(ValidationFinding::info("general", READY_MESSAGE));
    }

    let result = ValidationResult::from_findings(findings);
    debug!(
        is_valid = result.is_valid,
        errors = result.error_count(),
        warnings = result.warning_count(),
        infos = result.info_count(),
        "validated prompt document"
    );
    result
}

// =============================================================================
// SHARED HEURISTICS
// =============================================================================

/// Formats seconds with one decimal, rounding ties away from zero (`0.25` is `0.3`).
pub(crate) fn one_decimal(seconds: f64) -> String {
    format!("{:.1}", (seconds * 10.0).round() / 10.0)
}

/// Words written entirely in capitals (two letters or more), in order of appearance.
///
/// Word boundaries are ASCII: an accented letter ends a word.
pub(crate) fn caps_lock_words(text: &str) -> Vec<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?-u:\b)[A-Z]{2,}(?-u:\b)").expect("caps lock regex should compile")
    });
    re.find_iter(text).map(|m| m.as_str()).collect()
}

fn no_phrase_count(text: &str) -> usize {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)(?-u:\b)no\s+(?-u:\w)+").expect("no-phrase regex should compile")
    });
    re.find_iter(text).count()
}

/// Hints at descriptive phrasing when the negative prompt leans on "no X" lists.
fn check_negative_prompt(content: &PromptContent) -> Vec<ValidationFinding> {
    let negative = content.negative_prompt.as_deref();
    match negative {
        Some(text) if !is_blank(negative) && no_phrase_count(text) > rules::MAX_NO_PHRASES => {
            vec![ValidationFinding::info("prompt.negative_prompt", NO_PHRASES_MESSAGE)]
        }
        _ => Vec::new(),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn minimal() -> Value {
        json!({
            "video_length": 8,
            "resolution": "1080p",
            "aspect_ratio": "16:9",
            "prompt": {
                "subject": "A lone lighthouse keeper",
                "action": "climbs the spiral stairs",
                "context": "storm-battered coastal lighthouse at night",
                "style_and_ambiance": "moody, cinematic, lantern light",
                "sequence": [{
                    "timestamp": "[00:00-00:02]",
                    "shot_description": "Low angle shot of the keeper climbing worn iron stairs, lantern swinging."
                }]
            }
        })
    }

    #[test]
    fn test_minimal_document_is_ready() {
        let result = validate_value(&minimal());
        assert!(result.is_valid);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].field, "general");
        assert_eq!(result.findings[0].severity, Severity::Info);
        assert_eq!(result.findings[0].message, READY_MESSAGE);
        assert_eq!(result.summary(), "Ready");
    }

    #[test]
    fn test_shape_short_circuit() {
        for key in rules::REQUIRED_TOP_LEVEL_KEYS {
            let mut candidate = minimal();
            candidate.as_object_mut().unwrap().remove(key);
            // Garbage elsewhere must not leak extra findings.
            candidate["resolution"] = json!("8k");

            let result = validate_value(&candidate);
            assert!(!result.is_valid);
            assert_eq!(result.findings.len(), 1, "missing {key}");
            assert_eq!(result.findings[0].field, "general");
            assert_eq!(result.findings[0].severity, Severity::Error);
        }
    }

    #[test]
    fn test_non_object_candidates() {
        for candidate in [json!(null), json!([]), json!("prompt"), json!(8)] {
            let result = validate_value(&candidate);
            assert_eq!(result.findings.len(), 1);
            assert_eq!(result.findings[0].field, "general");
        }
    }

    #[test]
    fn test_wrong_content_types_degrade_to_general() {
        let mut candidate = minimal();
        candidate["prompt"]["subject"] = json!(42);
        let result = validate_value(&candidate);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].message, UNRECOGNIZED_MESSAGE);

        let mut candidate = minimal();
        candidate["prompt"]["sequence"][0]["timestamp"] = json!(["[00:00-00:02]"]);
        let result = validate_value(&candidate);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].field, "general");
    }

    #[test]
    fn test_wrong_setting_types_reach_settings_checker() {
        let mut candidate = minimal();
        candidate["video_length"] = json!("8");
        let result = validate_value(&candidate);
        let fields: Vec<_> = result.findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["video_length"]);
        assert!(!result.is_valid);

        let mut candidate = minimal();
        candidate["resolution"] = json!(1080);
        candidate["prompt"]["action"] = json!("");
        let result = validate_value(&candidate);
        let fields: Vec<_> = result.findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["resolution", "prompt.action"]);
        assert_eq!(result.findings[0].message, "Resolution must be 720p or 1080p");
    }

    #[test]
    fn test_null_lists_count_as_empty() {
        let mut candidate = minimal();
        candidate["prompt"]["audio"] = json!({ "sound_effects": ["rain", null] });
        let result = validate_value(&candidate);
        let found: Vec<_> = result
            .findings
            .iter()
            .map(|f| (f.field.as_str(), f.severity))
            .collect();
        assert_eq!(found, [("prompt.audio.sound_effects[1]", Severity::Warning)]);
        assert_eq!(result.findings[0].message, "Sound effect 2 is empty");

        let mut candidate = minimal();
        candidate["prompt"]["audio"] = json!({ "dialogue": null });
        let result = validate_value(&candidate);
        assert_eq!(result.findings.len(), 1);
        assert_eq!(result.findings[0].message, READY_MESSAGE);
    }

    #[test]
    fn test_null_prompt_reports_settings_then_prompt() {
        let result = validate_value(&json!({
            "video_length": 5,
            "resolution": "1080p",
            "aspect_ratio": "16:9",
            "prompt": null
        }));

        assert!(!result.is_valid);
        let fields: Vec<_> = result.findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, ["video_length", "prompt"]);
        assert_eq!(result.findings[1].message, "Prompt object is required");
    }

    #[test]
    fn test_checker_order() {
        let result = validate_value(&json!({
            "video_length": 8,
            "resolution": "480p",
            "aspect_ratio": "16:9",
            "prompt": {
                "cinematography": {},
                "subject": "",
                "action": "runs",
                "context": "beach",
                "style_and_ambiance": "warm",
                "audio": { "sound_effects": [" "] },
                "negative_prompt": "no cars, no people, no signs, no modern buildings",
                "sequence": []
            }
        }));

        let fields: Vec<_> = result.findings.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "resolution",
                "prompt.subject",
                "prompt.cinematography",
                "prompt.audio.sound_effects[0]",
                "prompt.sequence",
                "prompt.negative_prompt",
            ]
        );
        assert_eq!(result.summary(), "3 errors, 2 warnings");
    }

    #[test]
    fn test_negative_prompt_threshold() {
        let mut candidate = minimal();
        candidate["prompt"]["negative_prompt"] =
            json!("no cars, no people, no signs, no modern buildings");
        let result = validate_value(&candidate);
        let hint = result
            .findings
            .iter()
            .find(|f| f.field == "prompt.negative_prompt")
            .expect("hint expected");
        assert_eq!(hint.severity, Severity::Info);
        assert!(result.is_valid);
        // Infos alone do not suppress the ready message.
        assert!(result.findings.iter().any(|f| f.message == READY_MESSAGE));

        candidate["prompt"]["negative_prompt"] = json!("No cars, no people, no signs");
        let result = validate_value(&candidate);
        assert!(result.findings_for("prompt.negative_prompt").next().is_none());
    }

    #[test]
    fn test_no_phrase_count_is_case_insensitive() {
        assert_eq!(no_phrase_count("NO cars, No people, no  signs"), 3);
        assert_eq!(no_phrase_count("nothing notable, piano"), 0);
    }

    #[test]
    fn test_word_boundaries_are_ascii() {
        assert_eq!(caps_lock_words("CAFÉ ÉCOLE"), ["CAF", "COLE"]);
        assert_eq!(caps_lock_words("STOP_NOW, GO2 OK"), ["OK"]);
        assert_eq!(no_phrase_count("no ñu, no élan"), 0);
        assert_eq!(no_phrase_count("no cafés"), 1);
    }

    #[test]
    fn test_one_decimal_rounds_ties_up() {
        assert_eq!(one_decimal(0.25), "0.3");
        assert_eq!(one_decimal(1.25), "1.3");
        assert_eq!(one_decimal(0.4), "0.4");
        assert_eq!(one_decimal(12.0), "12.0");
    }

    #[test]
    fn test_determinism() {
        let candidate = minimal();
        assert_eq!(validate_value(&candidate), validate_value(&candidate));
    }

    #[test]
    fn test_is_valid_matches_error_presence() {
        let mut candidate = minimal();
        candidate["prompt"]["sequence"][0]["timestamp"] = json!("[00:00-00:09]");
        let result = validate_value(&candidate);
        assert!(result.is_valid);
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 1);
        assert!(!result.findings.iter().any(|f| f.message == READY_MESSAGE));

        candidate["prompt"]["action"] = json!("   ");
        let result = validate_value(&candidate);
        assert!(!result.is_valid);
        assert!(result.has_errors());
    }

    #[test]
    fn test_validate_json_str() {
        let result = validate_json_str(&minimal().to_string()).unwrap();
        assert!(result.is_valid);

        let err = validate_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::PromptError::Serialization(_)));
    }

    #[test]
    fn test_summary_variants() {
        let result = ValidationResult::from_findings(vec![
            ValidationFinding::info("a", "x"),
            ValidationFinding::info("b", "y"),
        ]);
        assert_eq!(result.summary(), "2 info");

        let result = ValidationResult::from_findings(vec![ValidationFinding::warning("a", "x")]);
        assert_eq!(result.summary(), "1 warning");
        assert!(result.is_valid);
    }

    #[test]
    fn test_result_serializes_lowercase_severity() {
        let result = ValidationResult::from_findings(vec![ValidationFinding::error("prompt", "x")]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["findings"][0]["severity"], "error");
    }
}
