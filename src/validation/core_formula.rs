//! Core formula checker: subject, action, context and style must all be filled.

use super::ValidationFinding;
use crate::prompt::model::{is_blank, PromptContent};

fn required_message(field: &str) -> &'static str {
    match field {
        "prompt.subject" => "Subject is required (main character or focal point)",
        "prompt.action" => "Action is required (what the subject is doing)",
        "prompt.context" => "Context is required (environment and background)",
        _ => "Style & Ambiance is required (aesthetic, mood, lighting)",
    }
}

pub fn check(content: &PromptContent) -> Vec<ValidationFinding> {
    content
        .core_fields()
        .into_iter()
        .filter(|(_, value)| is_blank(*value))
        .map(|(field, _)| ValidationFinding::error(field, required_message(field)))
        .collect()
}
